use {
    super::{Exercise, FrameTime},
    crate::{CoachError, Counter, FormCheck, HoldBreakEvent, Landmarks, SessionRecorder, TrackerConfig},
    std::time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    Idle,
    Holding,
}

impl HoldState {
    pub fn label(self) -> &'static str {
        match self {
            HoldState::Idle => "NOT_HOLDING",
            HoldState::Holding => "HOLDING",
        }
    }
}

/// Accumulates time spent in a valid position across any number of holds.
///
/// The interval leading up to a frame is credited when that frame has good
/// form: a hold resumed at a frame is anchored at the previous frame's time,
/// minus everything held before. When form breaks the total freezes at the
/// value of the last good frame.
#[derive(Debug, Clone)]
pub struct HoldTimer {
    form: FormCheck,
    state: HoldState,
    anchor: Duration,
    held: Duration,
}

impl HoldTimer {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            form: FormCheck::StraightLine {
                tolerance: config.form_tolerance(),
            },
            state: HoldState::Idle,
            anchor: Duration::ZERO,
            held: Duration::ZERO,
        }
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    /// Total time held so far.
    pub fn held(&self) -> Duration {
        self.held
    }
}

impl Exercise for HoldTimer {
    type Metric = ();

    fn compute_metric(&self, _landmarks: &Landmarks) -> Result<(), CoachError> {
        Ok(())
    }

    fn check_form(&self, landmarks: &Landmarks) -> Result<bool, CoachError> {
        self.form.evaluate(landmarks)
    }

    fn advance_state(
        &mut self,
        _metric: (),
        form_ok: bool,
        time: FrameTime,
        recorder: &SessionRecorder,
    ) -> Option<String> {
        if form_ok {
            let resumed = self.state == HoldState::Idle;
            if resumed {
                self.state = HoldState::Holding;
                self.anchor = time.previous.saturating_sub(self.held);
                log::debug!("hold resumed at {:.1}s", self.held.as_secs_f64());
            }
            self.held = time.now.saturating_sub(self.anchor);
            recorder.set_counter(Counter::HeldSeconds(self.held.as_secs_f64()));
            Some(if resumed {
                "Form OK! HOLD".to_string()
            } else {
                format!("HOLDING: {}s", self.held.as_secs())
            })
        } else {
            if self.state == HoldState::Holding {
                let time_held = self.held.as_secs_f64();
                log::info!("hold broken after {:.1}s in total", time_held);
                recorder.record(HoldBreakEvent::new(time_held));
            }
            self.state = HoldState::Idle;
            Some("BAD FORM! Adjust Hips/Back".to_string())
        }
    }

    fn state_label(&self) -> &'static str {
        self.state.label()
    }

    fn angle(_metric: ()) -> Option<f32> {
        None
    }
}
