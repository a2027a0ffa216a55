use {
    crate::{ExerciseKind, SessionEvent},
    serde::Serialize,
    std::{fmt, time::Duration},
};

/// The running primary counter of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    Reps(u32),
    HeldSeconds(f64),
}

impl Counter {
    /// Zero counter of the right flavor for `kind`.
    pub fn zero(kind: ExerciseKind) -> Self {
        if kind.is_hold() {
            Counter::HeldSeconds(0.0)
        } else {
            Counter::Reps(0)
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Counter::Reps(reps) => reps as f64,
            Counter::HeldSeconds(seconds) => seconds,
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Counter::Reps(reps) => write!(f, "{reps}"),
            Counter::HeldSeconds(seconds) => write!(f, "{seconds:.1}s"),
        }
    }
}

/// Everything one session produced so far.
///
/// Events are append-only. Once `ended_at` is set the record is frozen and
/// further writes are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub kind: ExerciseKind,
    pub events: Vec<SessionEvent>,
    pub counter: Counter,
    pub started_at: Duration,
    pub ended_at: Option<Duration>,
}

impl SessionRecord {
    pub fn new(kind: ExerciseKind, started_at: Duration) -> Self {
        Self {
            kind,
            events: Vec::new(),
            counter: Counter::zero(kind),
            started_at,
            ended_at: None,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.ended_at.is_some()
    }
}

/// Snapshot taken when a session stops; input of the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedSession {
    pub kind: ExerciseKind,
    pub events: Vec<SessionEvent>,
    pub counter: Counter,
    pub session_seconds: f64,
}

impl FinalizedSession {
    /// Snapshot of a frozen record. An unfrozen record is measured up to `now`.
    pub fn from_record(record: &SessionRecord, now: Duration) -> Self {
        let ended_at = record.ended_at.unwrap_or(now);
        Self {
            kind: record.kind,
            events: record.events.clone(),
            counter: record.counter,
            session_seconds: ended_at.saturating_sub(record.started_at).as_secs_f64(),
        }
    }
}
