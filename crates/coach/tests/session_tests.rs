use base::ManualClock;
use coach::{
    Counter, ExerciseKind, HoldBreakEvent, RepEvent, SessionEvent, SessionRecorder,
};
use std::{sync::Arc, time::Duration};

fn rep(n: u32) -> RepEvent {
    RepEvent {
        rep: n,
        form_ok: n % 2 == 1,
        min_angle: 80.0,
        duration: 2.0,
    }
}

#[test]
fn test_recorder_appends_in_order() {
    let clock = ManualClock::new();
    let recorder = SessionRecorder::new(ExerciseKind::Squat, Arc::new(clock.clone()));
    for n in 1..=3 {
        recorder.record(rep(n));
        recorder.set_counter(Counter::Reps(n));
    }

    let snapshot = recorder.handle().snapshot();
    assert_eq!(snapshot.events.len(), 3);
    assert_eq!(snapshot.events[2], SessionEvent::Rep(rep(3)));
    assert_eq!(snapshot.counter, Counter::Reps(3));
    assert!(!snapshot.is_frozen());
}

#[test]
fn test_unfinalized_snapshot_is_not_frozen_by_reads() {
    let clock = ManualClock::new();
    let recorder = SessionRecorder::new(ExerciseKind::Plank, Arc::new(clock.clone()));
    let handle = recorder.handle();
    assert_eq!(handle.counter(), Counter::HeldSeconds(0.0));
    assert_eq!(handle.kind(), ExerciseKind::Plank);

    recorder.record(HoldBreakEvent::new(1.5));
    assert!(!handle.is_finalized());
    assert_eq!(recorder.event_count(), 1);
}

#[test]
fn test_handles_share_one_session() {
    let clock = ManualClock::new();
    let recorder = SessionRecorder::new(ExerciseKind::PushUp, Arc::new(clock.clone()));
    let other = SessionRecorder::new(ExerciseKind::PushUp, Arc::new(clock.clone()));

    let handle = recorder.handle();
    assert!(handle.same_session(&recorder.handle()));
    assert!(handle.same_session(&handle.clone()));
    assert!(!handle.same_session(&other.handle()));
}

#[test]
fn test_concurrent_finalize_sees_one_snapshot() {
    let clock = ManualClock::new();
    let recorder = SessionRecorder::new(ExerciseKind::PushUp, Arc::new(clock.clone()));
    recorder.record(rep(1));
    recorder.set_counter(Counter::Reps(1));
    clock.set(Duration::from_secs(4));

    let snapshots: Vec<_> = (0..4)
        .map(|_| {
            let handle = recorder.handle();
            std::thread::spawn(move || handle.finalize())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|thread| thread.join().unwrap())
        .collect();

    assert!(snapshots.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(snapshots[0].session_seconds, 4.0);
    assert_eq!(recorder.finalize(), snapshots[0]);
}

#[tokio::test]
async fn test_subscriber_sees_updates_and_freeze() {
    let clock = ManualClock::new();
    let recorder = SessionRecorder::new(ExerciseKind::Squat, Arc::new(clock.clone()));
    let mut updates = recorder.handle().subscribe();

    let watcher = tokio::spawn(async move {
        let mut seen = Vec::new();
        while updates.changed().await.is_ok() {
            let record = updates.borrow_and_update().clone();
            seen.push(record.counter);
            if record.is_frozen() {
                break;
            }
        }
        seen
    });

    recorder.record(rep(1));
    recorder.set_counter(Counter::Reps(1));
    clock.set(Duration::from_secs(2));
    recorder.finalize();

    let seen = watcher.await.unwrap();
    assert_eq!(seen.last(), Some(&Counter::Reps(1)));
}
