use {
    crate::{Counter, ExerciseKind, FinalizedSession, SessionEvent},
    serde::Serialize,
};

// rating for a session with any activity before form is considered
const BASE_RATING: f64 = 4.0;

// rating points earned by perfect form (or a full hold)
const FORM_RATING_SPAN: f64 = 6.0;

pub const MAX_RATING: f64 = 10.0;

/// Hold time that earns the full rating.
pub const FULL_HOLD_SECONDS: f64 = 120.0;

/// Per-exercise-family statistics of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Metrics {
    Reps {
        total: u32,
        valid: u32,
        form_percentage: f64,
    },
    Hold {
        held_seconds: f64,
        breaks: usize,
    },
}

/// Scored result of one session, always recomputed from a `FinalizedSession`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub kind: ExerciseKind,
    pub metrics: Metrics,
    /// 0 to 10.
    pub rating: f64,
    pub session_seconds: f64,
    pub events: Vec<SessionEvent>,
}

impl SessionSummary {
    /// Repetitions attempted, or 0 for hold exercises.
    pub fn total_attempted(&self) -> u32 {
        match self.metrics {
            Metrics::Reps { total, .. } => total,
            Metrics::Hold { .. } => 0,
        }
    }
}

/// Share of repetitions completed with good form, in percent. 0 when nothing was done.
pub fn form_percentage(valid: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * valid as f64 / total as f64
    }
}

/// Rating of a repetition session.
pub fn rep_rating(valid: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rating = BASE_RATING + FORM_RATING_SPAN * form_percentage(valid, total) / 100.0;
    rating.clamp(0.0, MAX_RATING)
}

/// Rating of a hold session. Time beyond `FULL_HOLD_SECONDS` earns nothing extra.
pub fn hold_rating(held_seconds: f64) -> f64 {
    if held_seconds.is_nan() || held_seconds <= 0.0 {
        return 0.0;
    }
    let rating = BASE_RATING + FORM_RATING_SPAN * held_seconds.min(FULL_HOLD_SECONDS) / FULL_HOLD_SECONDS;
    rating.clamp(0.0, MAX_RATING)
}

/// Score a finalized session.
pub fn summarize(session: &FinalizedSession) -> SessionSummary {
    let metrics = match session.counter {
        Counter::Reps(total) => {
            let valid = session
                .events
                .iter()
                .filter_map(SessionEvent::as_rep)
                .filter(|rep| rep.form_ok)
                .count() as u32;
            Metrics::Reps {
                total,
                valid,
                form_percentage: form_percentage(valid, total),
            }
        }
        Counter::HeldSeconds(held_seconds) => Metrics::Hold {
            held_seconds,
            breaks: session
                .events
                .iter()
                .filter(|event| matches!(event, SessionEvent::HoldBreak(_)))
                .count(),
        },
    };
    let rating = match metrics {
        Metrics::Reps { total, valid, .. } => rep_rating(valid, total),
        Metrics::Hold { held_seconds, .. } => hold_rating(held_seconds),
    };
    SessionSummary {
        kind: session.kind,
        metrics,
        rating,
        session_seconds: session.session_seconds,
        events: session.events.clone(),
    }
}
