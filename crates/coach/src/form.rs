use crate::{CoachError, KeypointIndex, Landmarks};

/// Per-frame body alignment check, independent of the counting angle.
///
/// Both checks only look at vertical image positions (left side), so they
/// assume a side view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormCheck {
    /// The hip stays within `tolerance` of the midpoint between shoulder and
    /// ankle heights.
    StraightLine { tolerance: f32 },
    /// The hip stays above the knee (smaller `y`).
    HipAboveKnee,
}

impl FormCheck {
    pub fn evaluate(&self, landmarks: &Landmarks) -> Result<bool, CoachError> {
        match *self {
            FormCheck::StraightLine { tolerance } => {
                let shoulder = landmarks.joint(KeypointIndex::LeftShoulder)?;
                let hip = landmarks.joint(KeypointIndex::LeftHip)?;
                let ankle = landmarks.joint(KeypointIndex::LeftAnkle)?;
                let mid_y = (shoulder.y + ankle.y) / 2.0;
                Ok((hip.y - mid_y).abs() < tolerance)
            }
            FormCheck::HipAboveKnee => {
                let hip = landmarks.joint(KeypointIndex::LeftHip)?;
                let knee = landmarks.joint(KeypointIndex::LeftKnee)?;
                Ok(hip.y < knee.y)
            }
        }
    }
}
