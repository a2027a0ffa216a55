use {
    super::{Exercise, FrameTime},
    crate::{
        CoachError, Counter, FormCheck, KeypointIndex, Landmarks, RepEvent, SessionRecorder,
        TrackerConfig, angle_at, geometry::NEUTRAL_ANGLE,
    },
    std::time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepState {
    /// Extended, waiting for the angle to drop below the down threshold.
    WaitingDown,
    /// At or past the bottom, waiting for the angle to rise above the up threshold.
    WaitingUp,
}

impl RepState {
    pub fn label(self) -> &'static str {
        match self {
            RepState::WaitingDown => "WAITING_DOWN",
            RepState::WaitingUp => "WAITING_UP",
        }
    }
}

/// Coaching messages of one repetition exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct RepMessages {
    pub reached_bottom: &'static str,
    pub go_lower: Option<&'static str>,
    pub completed: &'static str,
    pub go_higher: &'static str,
    pub bad_form: Option<&'static str>,
}

/// Everything that distinguishes one threshold exercise from another.
#[derive(Debug, Clone, PartialEq)]
pub struct RepProfile {
    /// Joints of the primary angle, vertex in the middle.
    pub joints: [KeypointIndex; 3],
    pub form: FormCheck,
    pub down_threshold: f32,
    pub up_threshold: f32,
    /// Whether a frame with bad form may move the state machine.
    pub gate_on_form: bool,
    pub messages: RepMessages,
}

impl RepProfile {
    /// Elbow angle (shoulder-elbow-wrist); transitions need a straight body.
    pub fn push_up(config: &TrackerConfig) -> Self {
        Self {
            joints: [
                KeypointIndex::LeftShoulder,
                KeypointIndex::LeftElbow,
                KeypointIndex::LeftWrist,
            ],
            form: FormCheck::StraightLine {
                tolerance: config.form_tolerance(),
            },
            down_threshold: config.down_threshold(),
            up_threshold: config.up_threshold(),
            gate_on_form: true,
            messages: RepMessages {
                reached_bottom: "Down! Now Push Up",
                go_lower: None,
                completed: "Nice Rep!",
                go_higher: "Extend Arms Fully",
                bad_form: Some("Adjust Form! (Hips/Back)"),
            },
        }
    }

    /// Knee angle (hip-knee-ankle); form is recorded but never blocks a transition.
    pub fn squat(config: &TrackerConfig) -> Self {
        Self {
            joints: [
                KeypointIndex::LeftHip,
                KeypointIndex::LeftKnee,
                KeypointIndex::LeftAnkle,
            ],
            form: FormCheck::HipAboveKnee,
            down_threshold: config.down_threshold(),
            up_threshold: config.up_threshold(),
            gate_on_form: false,
            messages: RepMessages {
                reached_bottom: "Deep Squat! Push Up",
                go_lower: Some("Squat Deeper (Knee Angle)"),
                completed: "Nice Rep!",
                go_higher: "Stand Up Fully",
                bad_form: None,
            },
        }
    }
}

/// Two-state repetition counter driven by a joint angle.
#[derive(Debug, Clone)]
pub struct RepCounter {
    profile: RepProfile,
    state: RepState,
    reps: u32,
    phase_started_at: Duration,
    min_angle: f32,
}

impl RepCounter {
    pub fn new(profile: RepProfile) -> Self {
        Self {
            profile,
            state: RepState::WaitingDown,
            reps: 0,
            phase_started_at: Duration::ZERO,
            min_angle: NEUTRAL_ANGLE,
        }
    }

    pub fn state(&self) -> RepState {
        self.state
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn profile(&self) -> &RepProfile {
        &self.profile
    }
}

impl Exercise for RepCounter {
    type Metric = f32;

    fn compute_metric(&self, landmarks: &Landmarks) -> Result<f32, CoachError> {
        let [a, b, c] = self.profile.joints;
        Ok(angle_at(
            landmarks.joint(a)?,
            landmarks.joint(b)?,
            landmarks.joint(c)?,
        ))
    }

    fn check_form(&self, landmarks: &Landmarks) -> Result<bool, CoachError> {
        self.profile.form.evaluate(landmarks)
    }

    fn advance_state(
        &mut self,
        angle: f32,
        form_ok: bool,
        time: FrameTime,
        recorder: &SessionRecorder,
    ) -> Option<String> {
        if self.state == RepState::WaitingUp {
            self.min_angle = self.min_angle.min(angle);
        }

        // bad form pauses the machine without losing the current phase
        if self.profile.gate_on_form && !form_ok {
            return self.profile.messages.bad_form.map(str::to_string);
        }

        let messages = &self.profile.messages;
        match self.state {
            RepState::WaitingDown => {
                if angle < self.profile.down_threshold {
                    self.state = RepState::WaitingUp;
                    self.phase_started_at = time.now;
                    self.min_angle = NEUTRAL_ANGLE.min(angle);
                    Some(messages.reached_bottom.to_string())
                } else {
                    messages.go_lower.map(str::to_string)
                }
            }
            RepState::WaitingUp => {
                if angle > self.profile.up_threshold {
                    self.reps += 1;
                    let event = RepEvent {
                        rep: self.reps,
                        form_ok,
                        min_angle: self.min_angle,
                        duration: time.now.saturating_sub(self.phase_started_at).as_secs_f64(),
                    };
                    log::info!(
                        "rep {} completed: form {}, min angle {:.1}°, {:.2}s",
                        event.rep,
                        if event.form_ok { "ok" } else { "bad" },
                        event.min_angle,
                        event.duration
                    );
                    recorder.record(event);
                    recorder.set_counter(Counter::Reps(self.reps));
                    self.state = RepState::WaitingDown;
                    self.min_angle = NEUTRAL_ANGLE;
                    Some(messages.completed.to_string())
                } else {
                    Some(messages.go_higher.to_string())
                }
            }
        }
    }

    fn state_label(&self) -> &'static str {
        self.state.label()
    }

    fn angle(metric: f32) -> Option<f32> {
        Some(metric)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::ExerciseKind, base::ManualClock, std::sync::Arc};

    fn frame(now: u64, previous: u64) -> FrameTime {
        FrameTime {
            now: Duration::from_secs(now),
            previous: Duration::from_secs(previous),
        }
    }

    fn recorder(kind: ExerciseKind) -> SessionRecorder {
        SessionRecorder::new(kind, Arc::new(ManualClock::new()))
    }

    #[test]
    fn test_push_up_bad_form_holds_phase() {
        let recorder = recorder(ExerciseKind::PushUp);
        let mut counter = RepCounter::new(RepProfile::push_up(&TrackerConfig::for_kind(ExerciseKind::PushUp)));

        counter.advance_state(60.0, true, frame(1, 0), &recorder);
        assert_eq!(counter.state(), RepState::WaitingUp);

        let message = counter.advance_state(175.0, false, frame(2, 1), &recorder);
        assert_eq!(message.as_deref(), Some("Adjust Form! (Hips/Back)"));
        assert_eq!(counter.state(), RepState::WaitingUp);
        assert_eq!(counter.reps(), 0);

        counter.advance_state(175.0, true, frame(3, 2), &recorder);
        assert_eq!(counter.reps(), 1);
        assert_eq!(recorder.counter(), Counter::Reps(1));
    }

    #[test]
    fn test_squat_counts_with_bad_form_and_records_it() {
        let recorder = recorder(ExerciseKind::Squat);
        let mut counter = RepCounter::new(RepProfile::squat(&TrackerConfig::for_kind(ExerciseKind::Squat)));

        counter.advance_state(80.0, false, frame(1, 0), &recorder);
        assert_eq!(counter.state(), RepState::WaitingUp);
        counter.advance_state(175.0, false, frame(2, 1), &recorder);

        let finalized = recorder.finalize();
        assert_eq!(finalized.counter, Counter::Reps(1));
        assert!(!finalized.events[0].form_ok());
    }

    #[test]
    fn test_min_angle_includes_bottom_frame() {
        let recorder = recorder(ExerciseKind::Squat);
        let mut counter = RepCounter::new(RepProfile::squat(&TrackerConfig::for_kind(ExerciseKind::Squat)));

        counter.advance_state(50.0, true, frame(1, 0), &recorder);
        counter.advance_state(65.0, true, frame(2, 1), &recorder);
        counter.advance_state(178.0, true, frame(3, 2), &recorder);

        let event = recorder.finalize().events[0];
        assert_eq!(event.as_rep().map(|rep| rep.min_angle), Some(50.0));
    }
}
