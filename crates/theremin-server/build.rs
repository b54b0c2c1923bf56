//! Generates the `eyetracker.EyeTracker` client/server glue.
//!
//! Messages are hand-written prost structs in `src/proto.rs`, so no
//! `protoc` is needed at build time.

fn main() {
    let stream_coordinates = tonic_build::manual::Method::builder()
        .name("stream_coordinates")
        .route_name("StreamCoordinates")
        .input_type("crate::proto::GazePoint")
        .output_type("crate::proto::StreamStatus")
        .codec_path("tonic::codec::ProstCodec")
        .client_streaming()
        .build();

    let eye_tracker = tonic_build::manual::Service::builder()
        .name("EyeTracker")
        .package("eyetracker")
        .method(stream_coordinates)
        .build();

    tonic_build::manual::Builder::new().compile(&[eye_tracker]);
}
