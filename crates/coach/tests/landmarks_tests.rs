use base::Vec2;
use coach::{
    COCO_KEYPOINT_COUNT, CoachError, ExerciseKind, FormCheck, Keypoint, KeypointIndex, Landmarks,
    TrackerConfig, angle_at,
};

#[test]
fn test_keypoint_index_conversions() {
    assert_eq!(usize::from(KeypointIndex::Nose), 0);
    assert_eq!(usize::from(KeypointIndex::RightAnkle), 16);
    assert_eq!(KeypointIndex::try_from(7), Ok(KeypointIndex::LeftElbow));
    assert!(KeypointIndex::try_from(COCO_KEYPOINT_COUNT).is_err());

    for index in KeypointIndex::ALL {
        assert_eq!(index.name().parse::<KeypointIndex>(), Ok(index));
    }
    assert_eq!(
        "tail".parse::<KeypointIndex>(),
        Err(CoachError::UnknownJoint("tail".to_string()))
    );
}

#[test]
fn test_missing_and_non_finite_joints() {
    let mut landmarks = Landmarks::new().with_joint(KeypointIndex::LeftHip, Vec2::new(0.1, 0.2));
    landmarks.set_joint(KeypointIndex::LeftKnee, Vec2::new(f32::NAN, 0.5));

    assert!(landmarks.has_joint(KeypointIndex::LeftHip));
    assert_eq!(landmarks.len(), 1);
    assert_eq!(
        landmarks.joint(KeypointIndex::LeftKnee),
        Err(CoachError::MissingJoint(KeypointIndex::LeftKnee))
    );

    landmarks.clear_joint(KeypointIndex::LeftHip);
    assert!(landmarks.is_empty());
}

#[test]
fn test_low_confidence_keypoints_are_dropped() {
    let mut keypoints = [Keypoint {
        position: Vec2::new(0.5, 0.5),
        confidence: 0.9,
    }; COCO_KEYPOINT_COUNT];
    keypoints[usize::from(KeypointIndex::LeftWrist)].confidence = 0.2;

    let landmarks = Landmarks::from_keypoints(&keypoints, 0.5);
    assert_eq!(landmarks.len(), COCO_KEYPOINT_COUNT - 1);
    assert!(!landmarks.has_joint(KeypointIndex::LeftWrist));
}

#[test]
fn test_angle_properties() {
    let a = Vec2::new(0.2, 0.1);
    let b = Vec2::new(0.5, 0.5);
    let c = Vec2::new(0.9, 0.3);

    let angle = angle_at(a, b, c);
    assert!((0.0..=180.0).contains(&angle));
    assert!((angle - angle_at(c, b, a)).abs() < 1e-4);

    let offset = Vec2::new(3.0, -2.0);
    assert!((angle - angle_at(a + offset, b + offset, c + offset)).abs() < 1e-3);

    assert_eq!(angle_at(b, b, c), 180.0);
    assert!((angle_at(Vec2::new(1.0, 0.0), Vec2::zero(), Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-3);
}

#[test]
fn test_form_checks() {
    let body = Landmarks::new()
        .with_joint(KeypointIndex::LeftShoulder, Vec2::new(0.2, 0.4))
        .with_joint(KeypointIndex::LeftHip, Vec2::new(0.5, 0.5))
        .with_joint(KeypointIndex::LeftKnee, Vec2::new(0.6, 0.45))
        .with_joint(KeypointIndex::LeftAnkle, Vec2::new(0.8, 0.6));

    assert_eq!(FormCheck::StraightLine { tolerance: 0.05 }.evaluate(&body), Ok(true));
    assert_eq!(FormCheck::StraightLine { tolerance: 0.0 }.evaluate(&body), Ok(false));
    assert_eq!(FormCheck::HipAboveKnee.evaluate(&body), Ok(false));
    assert_eq!(
        FormCheck::HipAboveKnee.evaluate(&Landmarks::new()),
        Err(CoachError::MissingJoint(KeypointIndex::LeftHip))
    );
}

#[test]
fn test_exercise_names_and_defaults() {
    assert_eq!("push-up".parse::<ExerciseKind>(), Ok(ExerciseKind::PushUp));
    assert_eq!("Push Up".parse::<ExerciseKind>(), Ok(ExerciseKind::PushUp));
    assert_eq!("SQUAT".parse::<ExerciseKind>(), Ok(ExerciseKind::Squat));
    assert!(matches!(
        "lunge".parse::<ExerciseKind>(),
        Err(CoachError::UnknownExercise(_))
    ));
    assert_eq!(ExerciseKind::Plank.metric_label(), "Time");
    assert_eq!(ExerciseKind::Squat.to_string(), "Squat");

    let push_up = TrackerConfig::for_kind(ExerciseKind::PushUp);
    assert_eq!(push_up.down_threshold(), 70.0);
    assert_eq!(push_up.up_threshold(), 160.0);
    assert_eq!(
        push_up.calibration(),
        "Elbows angle for Down/Bottom = 70°, Up/Top = 160°"
    );
    let squat = TrackerConfig::for_kind(ExerciseKind::Squat);
    assert_eq!(squat.down_threshold(), 90.0);
    assert_eq!(squat.up_threshold(), 170.0);
}
