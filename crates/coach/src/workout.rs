use {
    crate::{
        CoachError, ExerciseKind, Landmarks, RenderHints, SessionHandle, SessionSummary, Tracker,
        TrackerConfig, create_tracker_with_config,
    },
    base::Clock,
    std::sync::Arc,
};

struct ActiveSession {
    tracker: Box<dyn Tracker>,
    handle: SessionHandle,
}

/// Owns the one live tracker between start and stop.
///
/// Frames and the stop request go through the same owner, so stopping always
/// finalizes the tracker that actually counted the session.
pub struct Workout {
    clock: Arc<dyn Clock>,
    active: Option<ActiveSession>,
}

impl Workout {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            active: None,
        }
    }

    /// Start a session with the default calibration for `kind`.
    pub fn start(&mut self, kind: ExerciseKind) -> SessionHandle {
        self.start_with_config(TrackerConfig::for_kind(kind))
    }

    /// Start a session. A session that is still running is finalized and discarded first.
    pub fn start_with_config(&mut self, config: TrackerConfig) -> SessionHandle {
        if let Some(previous) = self.active.take() {
            log::warn!(
                "{} session still running when a new one was started, finalizing it",
                previous.tracker.kind()
            );
            previous.tracker.finalize_session();
        }
        let tracker = create_tracker_with_config(config, Arc::clone(&self.clock));
        let handle = tracker.session();
        self.active = Some(ActiveSession {
            tracker,
            handle: handle.clone(),
        });
        handle
    }

    /// Feed a frame to the running session. `None` if nothing is running.
    pub fn process_frame(&mut self, frame: Option<&Landmarks>) -> Option<RenderHints> {
        match self.active.as_mut() {
            Some(active) => Some(active.tracker.process_frame(frame)),
            None => {
                log::debug!("frame received with no active session");
                None
            }
        }
    }

    /// Stop the running session and score it.
    pub fn stop(&mut self) -> Result<SessionSummary, CoachError> {
        let Some(active) = self.active.take() else {
            log::warn!("stop requested but no session is running, nothing to finalize");
            return Err(CoachError::NoActiveSession);
        };
        let summary = active.tracker.finalize_session();
        log::info!(
            "{} session stopped after {:.1}s, rating {:.1}",
            summary.kind,
            summary.session_seconds,
            summary.rating
        );
        Ok(summary)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_kind(&self) -> Option<ExerciseKind> {
        self.active.as_ref().map(|active| active.tracker.kind())
    }

    /// Handle of the running session.
    pub fn session(&self) -> Option<&SessionHandle> {
        self.active.as_ref().map(|active| &active.handle)
    }
}
