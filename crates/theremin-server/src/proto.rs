//! Wire messages and generated glue for the `eyetracker.EyeTracker` service.
//!
//! ```text
//! service EyeTracker {
//!   rpc StreamCoordinates(stream GazePoint) returns (StreamStatus);
//! }
//! ```

use theremin_models::SessionResult;

/// One gaze sample as sent by the vision sensor.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct GazePoint {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
    #[prost(float, tag = "3")]
    pub confidence: f32,
    /// Milliseconds since the Unix epoch
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
}

/// Final status returned when the sensor closes its stream.
#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamStatus {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: String,
}

include!(concat!(env!("OUT_DIR"), "/eyetracker.EyeTracker.rs"));

impl From<GazePoint> for theremin_models::GazePoint {
    fn from(point: GazePoint) -> Self {
        Self::new(
            f64::from(point.x),
            f64::from(point.y),
            f64::from(point.confidence),
            point.timestamp,
        )
    }
}

impl From<theremin_models::GazePoint> for GazePoint {
    fn from(point: theremin_models::GazePoint) -> Self {
        Self {
            x: point.x as f32,
            y: point.y as f32,
            confidence: point.confidence as f32,
            timestamp: point.timestamp_ms,
        }
    }
}

impl From<SessionResult> for StreamStatus {
    fn from(result: SessionResult) -> Self {
        Self {
            success: result.success,
            message: result.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_wire_point_converts_to_model() {
        let wire = GazePoint {
            x: 0.5,
            y: 0.25,
            confidence: 0.75,
            timestamp: 1_700_000_000_000,
        };
        let model: theremin_models::GazePoint = wire.into();
        assert_eq!(model.x, 0.5);
        assert_eq!(model.y, 0.25);
        assert_eq!(model.confidence, 0.75);
        assert_eq!(model.timestamp_ms, 1_700_000_000_000);
    }

    #[test]
    fn test_point_decodes_from_known_bytes() {
        // x=1.0 (tag 1, fixed32), timestamp=5 (tag 4, varint)
        let bytes = [0x0d, 0x00, 0x00, 0x80, 0x3f, 0x20, 0x05];
        let point = GazePoint::decode(&bytes[..]).unwrap();
        assert_eq!(point.x, 1.0);
        assert_eq!(point.y, 0.0);
        assert_eq!(point.timestamp, 5);
    }

    #[test]
    fn test_status_from_result() {
        let status: StreamStatus = SessionResult::ended_normally().into();
        assert!(status.success);
        assert_eq!(status.message, "Stream ended normally");
    }
}
