use {
    crate::CoachError,
    base::Vec2,
    std::str::FromStr,
};

/// Number of keypoints in COCO pose format
pub const COCO_KEYPOINT_COUNT: usize = 17;

/// A single keypoint as produced by a pose estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub position: Vec2<f32>,
    /// Confidence/visibility score in [0.0, 1.0].
    pub confidence: f32,
}

/// COCO keypoint indices for human pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypointIndex {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointIndex {
    pub const ALL: [KeypointIndex; COCO_KEYPOINT_COUNT] = [
        KeypointIndex::Nose,
        KeypointIndex::LeftEye,
        KeypointIndex::RightEye,
        KeypointIndex::LeftEar,
        KeypointIndex::RightEar,
        KeypointIndex::LeftShoulder,
        KeypointIndex::RightShoulder,
        KeypointIndex::LeftElbow,
        KeypointIndex::RightElbow,
        KeypointIndex::LeftWrist,
        KeypointIndex::RightWrist,
        KeypointIndex::LeftHip,
        KeypointIndex::RightHip,
        KeypointIndex::LeftKnee,
        KeypointIndex::RightKnee,
        KeypointIndex::LeftAnkle,
        KeypointIndex::RightAnkle,
    ];

    /// snake_case joint name, as used in recordings.
    pub fn name(self) -> &'static str {
        match self {
            KeypointIndex::Nose => "nose",
            KeypointIndex::LeftEye => "left_eye",
            KeypointIndex::RightEye => "right_eye",
            KeypointIndex::LeftEar => "left_ear",
            KeypointIndex::RightEar => "right_ear",
            KeypointIndex::LeftShoulder => "left_shoulder",
            KeypointIndex::RightShoulder => "right_shoulder",
            KeypointIndex::LeftElbow => "left_elbow",
            KeypointIndex::RightElbow => "right_elbow",
            KeypointIndex::LeftWrist => "left_wrist",
            KeypointIndex::RightWrist => "right_wrist",
            KeypointIndex::LeftHip => "left_hip",
            KeypointIndex::RightHip => "right_hip",
            KeypointIndex::LeftKnee => "left_knee",
            KeypointIndex::RightKnee => "right_knee",
            KeypointIndex::LeftAnkle => "left_ankle",
            KeypointIndex::RightAnkle => "right_ankle",
        }
    }
}

impl From<KeypointIndex> for usize {
    fn from(index: KeypointIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for KeypointIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        KeypointIndex::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid keypoint index: {}. Must be in range 0-{}.",
                value,
                COCO_KEYPOINT_COUNT - 1
            )
        })
    }
}

impl FromStr for KeypointIndex {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        KeypointIndex::ALL
            .into_iter()
            .find(|index| index.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoachError::UnknownJoint(s.to_string()))
    }
}

/// Read-only view of the joints detected in one frame.
///
/// A joint is either present with a finite position or missing. Missing
/// joints make any metric that needs them fail with
/// `CoachError::MissingJoint`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Landmarks {
    joints: [Option<Vec2<f32>>; COCO_KEYPOINT_COUNT],
}

impl Landmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with_joint(mut self, index: KeypointIndex, position: Vec2<f32>) -> Self {
        self.set_joint(index, position);
        self
    }

    /// Set a joint position. Non-finite positions are treated as missing.
    pub fn set_joint(&mut self, index: KeypointIndex, position: Vec2<f32>) {
        self.joints[usize::from(index)] = position.is_finite().then_some(position);
    }

    pub fn clear_joint(&mut self, index: KeypointIndex) {
        self.joints[usize::from(index)] = None;
    }

    /// Landmarks from a full estimator output, dropping keypoints whose
    /// confidence is below `min_confidence`.
    pub fn from_keypoints(keypoints: &[Keypoint; COCO_KEYPOINT_COUNT], min_confidence: f32) -> Self {
        let mut landmarks = Self::new();
        for (index, keypoint) in KeypointIndex::ALL.into_iter().zip(keypoints) {
            if keypoint.confidence >= min_confidence {
                landmarks.set_joint(index, keypoint.position);
            }
        }
        landmarks
    }

    pub fn joint(&self, index: KeypointIndex) -> Result<Vec2<f32>, CoachError> {
        self.joints[usize::from(index)].ok_or(CoachError::MissingJoint(index))
    }

    pub fn has_joint(&self, index: KeypointIndex) -> bool {
        self.joints[usize::from(index)].is_some()
    }

    /// Number of joints present.
    pub fn len(&self) -> usize {
        self.joints.iter().filter(|joint| joint.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
