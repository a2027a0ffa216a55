mod recording;
mod replay;

use {
    anyhow::{Context, Result},
    coach::{ExerciseKind, TrackerConfig},
    recording::ReplayFrame,
    replay::{read_frames, replay},
    std::{env, path::PathBuf},
    tokio::sync::mpsc,
};

const REPLAY_PATH_ENV: &str = "COACH_REPLAY_PATH";
const EXERCISE_ENV: &str = "COACH_EXERCISE";
const LOG_DIR_ENV: &str = "COACH_LOG_DIR";

struct ReplayConfig {
    path: PathBuf,
    exercise: ExerciseKind,
    json: bool,
    log_dir: Option<PathBuf>,
}

impl ReplayConfig {
    fn from_env() -> Result<Self> {
        let mut json = false;
        let mut positional = Vec::new();
        for arg in env::args().skip(1) {
            if arg == "--json" {
                json = true;
            } else {
                positional.push(arg);
            }
        }
        let mut positional = positional.into_iter();

        let path = positional
            .next()
            .or_else(|| env::var(REPLAY_PATH_ENV).ok())
            .with_context(|| {
                format!(
                    "usage: workout_replay <recording.jsonl> [exercise] [--json] (or set {})",
                    REPLAY_PATH_ENV
                )
            })?
            .into();
        let exercise = match positional.next().or_else(|| env::var(EXERCISE_ENV).ok()) {
            Some(name) => name.parse()?,
            None => ExerciseKind::PushUp,
        };
        let log_dir = env::var_os(LOG_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        Ok(Self {
            path,
            exercise,
            json,
            log_dir,
        })
    }
}

/// Daily log files under `log_dir` if given, stdout otherwise.
fn init_logging(log_dir: Option<PathBuf>) -> Result<()> {
    match log_dir {
        Some(dir) => base::init_file_logger(dir),
        None => {
            base::init_stdout_logger();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ReplayConfig::from_env()?;
    init_logging(config.log_dir.clone())?;

    let tracker_config = TrackerConfig::for_kind(config.exercise);
    log::info!(
        "replaying {} as {}",
        config.path.display(),
        config.exercise
    );

    let (frame_tx, frame_rx) = mpsc::channel::<ReplayFrame>(64);
    let reader = tokio::spawn(read_frames(
        config.path.clone(),
        tracker_config.min_confidence(),
        frame_tx,
    ));

    let outcome = replay(tracker_config, frame_rx).await;
    let frames = reader.await??;
    let outcome = outcome?;
    log::info!(
        "{} frames read, {} processed, final counter {}",
        frames,
        outcome.processed,
        outcome.monitored
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    } else {
        println!("{}", outcome.summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs};

    #[test]
    fn test_log_dir_installs_file_logger() {
        let dir = env::temp_dir().join(format!("workout-replay-logs-{}", std::process::id()));
        init_logging(Some(dir.clone())).unwrap();
        log::warn!("file logger installed");
        log::logger().flush();

        let files: Vec<_> = fs::read_dir(&dir).unwrap().flatten().collect();
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(files[0].path()).unwrap();
        assert!(content.contains("file logger installed"));
        fs::remove_dir_all(&dir).ok();
    }
}
