use coach::{
    Counter, ExerciseKind, FinalizedSession, HoldBreakEvent, Metrics, RepEvent, SessionEvent,
    summarize,
};

fn rep(n: u32, form_ok: bool) -> SessionEvent {
    SessionEvent::Rep(RepEvent {
        rep: n,
        form_ok,
        min_angle: 65.0,
        duration: 1.5,
    })
}

fn rep_session(kind: ExerciseKind, forms: &[bool]) -> FinalizedSession {
    FinalizedSession {
        kind,
        events: forms
            .iter()
            .enumerate()
            .map(|(i, &form_ok)| rep(i as u32 + 1, form_ok))
            .collect(),
        counter: Counter::Reps(forms.len() as u32),
        session_seconds: 42.0,
    }
}

#[test]
fn test_perfect_form_scores_ten() {
    let summary = summarize(&rep_session(ExerciseKind::PushUp, &[true; 10]));
    assert_eq!(summary.rating, 10.0);
    assert_eq!(
        summary.metrics,
        Metrics::Reps {
            total: 10,
            valid: 10,
            form_percentage: 100.0,
        }
    );
}

#[test]
fn test_all_bad_form_scores_base_rating() {
    let summary = summarize(&rep_session(ExerciseKind::Squat, &[false; 10]));
    assert_eq!(summary.rating, 4.0);
    assert_eq!(summary.total_attempted(), 10);
}

#[test]
fn test_mixed_form() {
    let summary = summarize(&rep_session(ExerciseKind::Squat, &[true, false, true, true]));
    assert_eq!(
        summary.metrics,
        Metrics::Reps {
            total: 4,
            valid: 3,
            form_percentage: 75.0,
        }
    );
    assert!((summary.rating - 8.5).abs() < 1e-9);
    assert_eq!(summary.session_seconds, 42.0);
    assert_eq!(summary.events.len(), 4);
}

#[test]
fn test_empty_session_scores_zero() {
    let summary = summarize(&rep_session(ExerciseKind::PushUp, &[]));
    assert_eq!(summary.rating, 0.0);
    assert_eq!(
        summary.metrics,
        Metrics::Reps {
            total: 0,
            valid: 0,
            form_percentage: 0.0,
        }
    );
}

#[test]
fn test_hold_session_counts_breaks() {
    let session = FinalizedSession {
        kind: ExerciseKind::Plank,
        events: vec![
            HoldBreakEvent::new(10.0).into(),
            HoldBreakEvent::new(25.0).into(),
        ],
        counter: Counter::HeldSeconds(30.0),
        session_seconds: 50.0,
    };
    let summary = summarize(&session);
    assert_eq!(
        summary.metrics,
        Metrics::Hold {
            held_seconds: 30.0,
            breaks: 2,
        }
    );
    assert!((summary.rating - 5.5).abs() < 1e-9);
    assert_eq!(summary.total_attempted(), 0);
}

#[test]
fn test_rating_stays_in_range() {
    for valid in 0..=7 {
        let forms: Vec<bool> = (0..7).map(|i| i < valid).collect();
        let rating = summarize(&rep_session(ExerciseKind::PushUp, &forms)).rating;
        assert!((4.0..=10.0).contains(&rating), "rating {rating} out of range");
    }
    for held in [0.5, 1.0, 60.0, 119.9, 120.0, 1e6] {
        let session = FinalizedSession {
            kind: ExerciseKind::Plank,
            events: Vec::new(),
            counter: Counter::HeldSeconds(held),
            session_seconds: held,
        };
        let rating = summarize(&session).rating;
        assert!((4.0..=10.0).contains(&rating), "rating {rating} out of range");
    }
}
