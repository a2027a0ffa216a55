use {
    crate::recording::{ReplayFrame, parse_frame},
    anyhow::{Context, Result},
    base::{Clock, ManualClock},
    coach::{Counter, SessionHandle, SessionRecord, SessionSummary, TrackerConfig, Workout},
    std::{path::PathBuf, sync::Arc},
    tokio::{
        fs::File,
        io::{AsyncBufReadExt, BufReader},
        sync::{mpsc, watch},
    },
};

/// Result of driving one recording through a workout.
#[derive(Debug)]
pub struct ReplayOutcome {
    pub summary: SessionSummary,
    pub processed: usize,
    /// Last counter the session monitor saw before the session froze.
    pub monitored: Counter,
}

/// Read the recording line by line and forward parsed frames.
pub async fn read_frames(
    path: PathBuf,
    min_confidence: f32,
    frame_tx: mpsc::Sender<ReplayFrame>,
) -> Result<usize> {
    let file = File::open(&path)
        .await
        .with_context(|| format!("failed to open recording {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut line_number = 0;
    let mut sent = 0;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }
        let frame = parse_frame(&line, min_confidence)
            .with_context(|| format!("{}:{}", path.display(), line_number))?;
        if frame_tx.send(frame).await.is_err() {
            break;
        }
        sent += 1;
    }
    Ok(sent)
}

/// Log every counter change until the session is finalized. Returns the last counter seen.
async fn monitor(session: SessionHandle, mut updates: watch::Receiver<SessionRecord>) -> Counter {
    let mut last = session.counter();
    while updates.changed().await.is_ok() {
        let record = updates.borrow_and_update().clone();
        if record.counter != last {
            last = record.counter;
            match last {
                Counter::Reps(reps) => log::info!("{} reps: {}", record.kind, reps),
                Counter::HeldSeconds(_) => log::debug!("{} held: {}", record.kind, last),
            }
        }
        if record.is_frozen() {
            break;
        }
    }
    last
}

/// Drive every received frame through one workout session and stop it once
/// the sender side closes. The session starts at the first frame's time.
pub async fn replay(
    config: TrackerConfig,
    mut frame_rx: mpsc::Receiver<ReplayFrame>,
) -> Result<ReplayOutcome> {
    let clock = ManualClock::new();
    let mut workout = Workout::new(Arc::new(clock.clone()));
    let mut watcher = None;
    let mut processed = 0;

    while let Some(frame) = frame_rx.recv().await {
        clock.set_secs(frame.t);
        if !workout.is_active() {
            let session = workout.start_with_config(config.clone());
            // subscribe before spawning so no change is missed
            let updates = session.subscribe();
            watcher = Some(tokio::spawn(monitor(session, updates)));
        }
        if let Some(hints) = workout.process_frame(frame.landmarks.as_ref()) {
            processed += 1;
            log::debug!(
                "{:8.3}s {:>12} {} {}",
                clock.now().as_secs_f64(),
                hints.state,
                hints.counter,
                hints.message
            );
        }
    }

    let summary = workout.stop().context("recording contained no frames")?;
    let monitored = match watcher {
        Some(watcher) => watcher.await?,
        None => Counter::zero(summary.kind),
    };
    Ok(ReplayOutcome {
        summary,
        processed,
        monitored,
    })
}
