use {
    crate::CoachError,
    serde::Serialize,
    std::{fmt, str::FromStr},
};

/// The exercises a tracker can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    PushUp,
    Squat,
    Plank,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [ExerciseKind::PushUp, ExerciseKind::Squat, ExerciseKind::Plank];

    /// Hold exercises count seconds in position instead of repetitions.
    pub fn is_hold(self) -> bool {
        matches!(self, ExerciseKind::Plank)
    }

    /// Label of the session counter ("Reps" or "Time").
    pub fn metric_label(self) -> &'static str {
        if self.is_hold() { "Time" } else { "Reps" }
    }

    /// What the primary metric measures.
    pub fn metric_description(self) -> &'static str {
        match self {
            ExerciseKind::PushUp => "Elbows",
            ExerciseKind::Squat => "Knees",
            ExerciseKind::Plank => "Time",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseKind::PushUp => write!(f, "Push-up"),
            ExerciseKind::Squat => write!(f, "Squat"),
            ExerciseKind::Plank => write!(f, "Plank"),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "pushup" => Ok(ExerciseKind::PushUp),
            "squat" => Ok(ExerciseKind::Squat),
            "plank" => Ok(ExerciseKind::Plank),
            _ => Err(CoachError::UnknownExercise(s.to_string())),
        }
    }
}
