use crate::ExerciseKind;

// minimum keypoint confidence for a joint to count as present
const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Thresholds and tolerances for one exercise tracker.
///
/// Angles are in degrees, tolerances in normalized image units. Fields an
/// exercise does not use are ignored: the plank has no angle thresholds and
/// the squat form check has no tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    kind: ExerciseKind,
    down_threshold: f32,
    up_threshold: f32,
    form_tolerance: f32,
    min_confidence: f32,
}

impl TrackerConfig {
    /// Default calibration for `kind`.
    pub fn for_kind(kind: ExerciseKind) -> Self {
        let (down_threshold, up_threshold, form_tolerance) = match kind {
            ExerciseKind::PushUp => (70.0, 160.0, 0.15),
            ExerciseKind::Squat => (90.0, 170.0, 0.0),
            ExerciseKind::Plank => (10.0, 10.0, 0.05),
        };
        Self {
            kind,
            down_threshold,
            up_threshold,
            form_tolerance,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Angle below which the bottom of a repetition is reached.
    pub fn with_down_threshold(mut self, degrees: f32) -> Self {
        self.down_threshold = degrees;
        self
    }

    /// Angle above which a repetition is completed.
    pub fn with_up_threshold(mut self, degrees: f32) -> Self {
        self.up_threshold = degrees;
        self
    }

    /// Maximum hip offset from the shoulder-ankle midline.
    pub fn with_form_tolerance(mut self, tolerance: f32) -> Self {
        self.form_tolerance = tolerance;
        self
    }

    /// Minimum keypoint confidence when building landmarks from detections.
    pub fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_confidence = confidence;
        self
    }

    // Getters
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn down_threshold(&self) -> f32 {
        self.down_threshold
    }

    pub fn up_threshold(&self) -> f32 {
        self.up_threshold
    }

    pub fn form_tolerance(&self) -> f32 {
        self.form_tolerance
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    /// Human readable calibration line shown before a session starts.
    pub fn calibration(&self) -> String {
        if self.kind.is_hold() {
            format!(
                "{}: held while hips stay within {:.2} of the shoulder-ankle line",
                self.kind.metric_description(),
                self.form_tolerance
            )
        } else {
            format!(
                "{} angle for Down/Bottom = {}°, Up/Top = {}°",
                self.kind.metric_description(),
                self.down_threshold,
                self.up_threshold
            )
        }
    }
}
