//! Per-frame exercise trackers.
//!
//! Every tracker runs the same frame pipeline (`ExerciseTracker`): measure
//! the primary metric, check form, advance the exercise state machine. The
//! exercise-specific parts sit behind the `Exercise` trait, implemented by
//! `RepCounter` (push-up, squat) and `HoldTimer` (plank).

mod framerate;
mod hold;
mod threshold;

pub use framerate::FrameRate;
pub use hold::{HoldState, HoldTimer};
pub use threshold::{RepCounter, RepMessages, RepProfile, RepState};

use {
    crate::{
        CoachError, Counter, ExerciseKind, Landmarks, SessionHandle, SessionRecorder,
        SessionSummary, TrackerConfig, summarize,
    },
    base::Clock,
    std::{sync::Arc, time::Duration},
};

pub const WAITING_MESSAGE: &str = "Waiting to start...";
pub const NO_BODY_MESSAGE: &str = "No body detected";
pub const LANDMARKS_MISSING_MESSAGE: &str = "Landmarks missing or error in calculation.";

/// What an overlay needs to draw after a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderHints {
    pub kind: ExerciseKind,
    pub counter: Counter,
    pub state: &'static str,
    pub form_ok: bool,
    pub message: String,
    /// Primary angle of this frame, if the exercise has one and it was measured.
    pub angle: Option<f32>,
    pub fps: f32,
}

/// The contract the orchestration layer drives, one instance per session.
pub trait Tracker: Send {
    fn kind(&self) -> ExerciseKind;

    /// Feed one frame. `None` means the estimator saw no body.
    fn process_frame(&mut self, frame: Option<&Landmarks>) -> RenderHints;

    /// Freeze the session and score it. Safe to call more than once.
    fn finalize_session(&self) -> SessionSummary;

    /// Handle to this tracker's session, usable from other threads.
    fn session(&self) -> SessionHandle;
}

/// Timestamps of the current and the previously processed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub now: Duration,
    pub previous: Duration,
}

/// Exercise-specific capabilities plugged into `ExerciseTracker`.
pub trait Exercise: Send {
    type Metric: Copy;

    fn compute_metric(&self, landmarks: &Landmarks) -> Result<Self::Metric, CoachError>;

    fn check_form(&self, landmarks: &Landmarks) -> Result<bool, CoachError>;

    /// Advance the state machine with a fully measured frame. Returns a new
    /// display message, or `None` to keep the current one.
    fn advance_state(
        &mut self,
        metric: Self::Metric,
        form_ok: bool,
        time: FrameTime,
        recorder: &SessionRecorder,
    ) -> Option<String>;

    fn state_label(&self) -> &'static str;

    fn angle(metric: Self::Metric) -> Option<f32>;
}

/// Frame pipeline shared by all exercises.
pub struct ExerciseTracker<E: Exercise> {
    exercise: E,
    recorder: SessionRecorder,
    clock: Arc<dyn Clock>,
    frame_rate: FrameRate,
    last_frame_at: Duration,
    form_ok: bool,
    message: String,
    angle: Option<f32>,
}

impl<E: Exercise> ExerciseTracker<E> {
    pub fn new(exercise: E, kind: ExerciseKind, clock: Arc<dyn Clock>) -> Self {
        let recorder = SessionRecorder::new(kind, Arc::clone(&clock));
        let last_frame_at = clock.now();
        Self {
            exercise,
            recorder,
            clock,
            frame_rate: FrameRate::new(),
            last_frame_at,
            form_ok: false,
            message: WAITING_MESSAGE.to_string(),
            angle: None,
        }
    }

    fn measure(&self, landmarks: &Landmarks) -> Result<(E::Metric, bool), CoachError> {
        let metric = self.exercise.compute_metric(landmarks)?;
        let form_ok = self.exercise.check_form(landmarks)?;
        Ok((metric, form_ok))
    }
}

impl<E: Exercise> Tracker for ExerciseTracker<E> {
    fn kind(&self) -> ExerciseKind {
        self.recorder.kind()
    }

    fn process_frame(&mut self, frame: Option<&Landmarks>) -> RenderHints {
        let now = self.clock.now();
        let fps = self.frame_rate.tick(now);
        let time = FrameTime {
            now,
            previous: self.last_frame_at,
        };
        self.last_frame_at = now;

        match frame.map(|landmarks| self.measure(landmarks)) {
            Some(Ok((metric, form_ok))) => {
                self.form_ok = form_ok;
                self.angle = E::angle(metric);
                if let Some(message) =
                    self.exercise
                        .advance_state(metric, form_ok, time, &self.recorder)
                {
                    self.message = message;
                }
            }
            Some(Err(error)) => {
                log::debug!("{} frame skipped: {}", self.kind(), error);
                self.form_ok = false;
                self.angle = None;
                self.message = LANDMARKS_MISSING_MESSAGE.to_string();
            }
            None => {
                self.form_ok = false;
                self.angle = None;
                self.message = NO_BODY_MESSAGE.to_string();
            }
        }

        RenderHints {
            kind: self.kind(),
            counter: self.recorder.counter(),
            state: self.exercise.state_label(),
            form_ok: self.form_ok,
            message: self.message.clone(),
            angle: self.angle,
            fps,
        }
    }

    fn finalize_session(&self) -> SessionSummary {
        summarize(&self.recorder.finalize())
    }

    fn session(&self) -> SessionHandle {
        self.recorder.handle()
    }
}

/// Tracker for `kind` with its default calibration.
pub fn create_tracker(kind: ExerciseKind, clock: Arc<dyn Clock>) -> Box<dyn Tracker> {
    create_tracker_with_config(TrackerConfig::for_kind(kind), clock)
}

/// Tracker for `config.kind()` with a custom calibration.
pub fn create_tracker_with_config(config: TrackerConfig, clock: Arc<dyn Clock>) -> Box<dyn Tracker> {
    let kind = config.kind();
    log::info!("starting {} session ({})", kind, config.calibration());
    match kind {
        ExerciseKind::PushUp => Box::new(ExerciseTracker::new(
            RepCounter::new(RepProfile::push_up(&config)),
            kind,
            clock,
        )),
        ExerciseKind::Squat => Box::new(ExerciseTracker::new(
            RepCounter::new(RepProfile::squat(&config)),
            kind,
            clock,
        )),
        ExerciseKind::Plank => Box::new(ExerciseTracker::new(HoldTimer::new(&config), kind, clock)),
    }
}
