//! `eyetracker.EyeTracker` gRPC service.

use std::sync::Arc;

use theremin_action::CursorActionDispatcher;
use tonic::{Request, Response, Status, Streaming};

use crate::config::PipelineConfig;
use crate::proto::eye_tracker_server::{EyeTracker, EyeTrackerServer};
use crate::proto::{GazePoint, StreamStatus};
use crate::session::GazeStreamSession;

/// Accepts sensor streams; every call gets its own [`GazeStreamSession`].
///
/// Only the pipeline parameters and the driver handle are shared.
#[derive(Debug, Clone)]
pub struct EyeTrackerService {
    pipeline: Arc<PipelineConfig>,
    dispatcher: CursorActionDispatcher,
}

impl EyeTrackerService {
    pub fn new(pipeline: PipelineConfig, dispatcher: CursorActionDispatcher) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            dispatcher,
        }
    }

    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Wrap the service for `tonic::transport::Server::add_service`.
    pub fn into_server(self) -> EyeTrackerServer<Self> {
        EyeTrackerServer::new(self)
    }
}

#[tonic::async_trait]
impl EyeTracker for EyeTrackerService {
    async fn stream_coordinates(
        &self,
        request: Request<Streaming<GazePoint>>,
    ) -> Result<Response<StreamStatus>, Status> {
        let session = GazeStreamSession::new(&self.pipeline, self.dispatcher.clone())
            .with_peer(request.remote_addr());

        let result = session.run(request.into_inner()).await?;
        Ok(Response::new(result.into()))
    }
}
