//! One connected sensor stream.
//!
//! A session owns its smoothing state and pulls points strictly in
//! arrival order: each point is smoothed, mapped, dispatched and
//! latency-observed before the next one is read.
//!
//! ```text
//! Idle --point--> Streaming --end of input--> ClosedSuccess
//!   |                 |
//!   +----error--------+-----------error-----> ClosedFailure
//! ```

use futures_util::{pin_mut, Stream, StreamExt};
use theremin_action::{CursorActionDispatcher, DisplayMapper, LatencyMonitor, SmoothingFilter};
use theremin_models::{now_millis, GazePoint, PixelPoint, SessionId, SessionResult, SessionState};
use tonic::Status;
use tracing::{debug, warn, Instrument};

use crate::config::PipelineConfig;
use crate::error::{SessionError, SessionOutcome};
use crate::logging::SessionLogger;
use crate::metrics;

/// Epoch-millisecond clock used to stamp point arrival.
pub type Clock = fn() -> i64;

/// State for one `StreamCoordinates` call.
pub struct GazeStreamSession {
    id: SessionId,
    state: SessionState,
    filter: SmoothingFilter,
    mapper: DisplayMapper,
    dispatcher: CursorActionDispatcher,
    latency: LatencyMonitor,
    clock: Clock,
    points: u64,
    logger: SessionLogger,
}

impl GazeStreamSession {
    /// Create a session with fresh smoothing state.
    pub fn new(pipeline: &PipelineConfig, dispatcher: CursorActionDispatcher) -> Self {
        let id = SessionId::new();
        let logger = SessionLogger::new(&id, None);
        Self {
            id,
            state: SessionState::Idle,
            filter: SmoothingFilter::new(pipeline.smoothing),
            mapper: DisplayMapper::new(pipeline.geometry),
            dispatcher,
            latency: LatencyMonitor::new(),
            clock: now_millis,
            points: 0,
            logger,
        }
    }

    /// Tag the session's logs with the sensor's address.
    pub fn with_peer(mut self, peer: Option<std::net::SocketAddr>) -> Self {
        self.logger = SessionLogger::new(&self.id, peer);
        self
    }

    /// Replace the arrival clock, for deterministic latency in tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the filter, e.g. to start from an explicit state.
    pub fn with_filter(mut self, filter: SmoothingFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of samples received so far, dispatched or skipped.
    pub fn points_processed(&self) -> u64 {
        self.points
    }

    /// Run one point through smoothing, mapping, dispatch and latency accounting.
    ///
    /// A sample with a NaN or infinite coordinate is observed for latency but
    /// not dispatched, and leaves the smoothing state untouched. It returns `None`.
    pub fn process_point(&mut self, point: GazePoint) -> SessionOutcome<Option<PixelPoint>> {
        let arrival_ms = (self.clock)();
        self.state = SessionState::Streaming;

        let raw = point.position();
        if !raw.is_finite() {
            let latency_ms = self.latency.observe(&point, arrival_ms);
            self.points += 1;
            metrics::record_point_skipped("non_finite");
            warn!(x = point.x, y = point.y, latency_ms, "Skipping non-finite gaze point");
            return Ok(None);
        }

        let smoothed = self.filter.apply(raw);
        let target = self.mapper.to_pixels(smoothed);
        self.dispatcher.move_to_point(target)?;

        let latency_ms = self.latency.observe(&point, arrival_ms);
        self.points += 1;
        metrics::record_point(latency_ms);

        debug!(
            x = point.x,
            y = point.y,
            confidence = point.confidence,
            pixel_x = target.x,
            pixel_y = target.y,
            latency_ms,
            "gaze point dispatched"
        );
        Ok(Some(target))
    }

    /// Drive the session until the stream ends or fails.
    ///
    /// Clean end of input yields the result for the caller; a read error
    /// is returned as-is and no result is produced.
    pub async fn run<S, P>(mut self, stream: S) -> SessionOutcome<SessionResult>
    where
        S: Stream<Item = Result<P, Status>>,
        P: Into<GazePoint>,
    {
        let span = self.logger.create_span();
        async move {
            metrics::record_session_started();
            let _active = scopeguard::guard((), |_| metrics::record_session_ended());
            self.logger.log_connected(self.dispatcher.driver_name());

            pin_mut!(stream);
            let outcome = loop {
                match stream.next().await {
                    None => break Ok(()),
                    Some(Err(status)) => break Err(SessionError::Transport(status)),
                    Some(Ok(message)) => {
                        if let Err(e) = self.process_point(message.into()) {
                            break Err(e);
                        }
                    }
                }
            };

            self.finish(outcome)
        }
        .instrument(span)
        .await
    }

    fn finish(&mut self, outcome: SessionOutcome<()>) -> SessionOutcome<SessionResult> {
        match outcome {
            Ok(()) => {
                self.state = SessionState::ClosedSuccess;
                let stats = self.latency.stats();
                self.logger.log_closed(self.points, stats.mean_ms(), stats.max_ms);
                metrics::record_session_closed("success");
                Ok(SessionResult::ended_normally())
            }
            Err(e) => {
                self.state = SessionState::ClosedFailure;
                if let SessionError::Dispatch(action) = &e {
                    metrics::record_dispatch_failure(action.kind());
                }
                self.logger.log_failed(self.points, e.kind(), &e.to_string());
                metrics::record_session_closed(e.kind());
                Err(e)
            }
        }
    }
}
