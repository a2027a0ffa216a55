use {crate::KeypointIndex, std::fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum CoachError {
    MissingJoint(KeypointIndex),
    UnknownExercise(String),
    UnknownJoint(String),
    NoActiveSession,
}

impl fmt::Display for CoachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoachError::MissingJoint(index) => write!(f, "missing joint: {}", index.name()),
            CoachError::UnknownExercise(name) => write!(f, "unknown exercise: {name}"),
            CoachError::UnknownJoint(name) => write!(f, "unknown joint: {name}"),
            CoachError::NoActiveSession => write!(f, "no active session to finalize"),
        }
    }
}

impl std::error::Error for CoachError {}
