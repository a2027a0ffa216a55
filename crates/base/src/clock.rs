use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

/// Monotonic time source shared by everything that timestamps frames.
///
/// `now()` is the time elapsed since the clock's own origin. Only differences
/// between two readings of the same clock are meaningful.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Wall-clock time source backed by `Instant`.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// All clones share the same counter, so a test (or a replay driver) can hold
/// one clone and advance the time seen by trackers holding another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    micros: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest time the clock can show.
    pub const MAX: Duration = Duration::from_micros(u64::MAX);

    /// Jump to an absolute time since the clock origin. Times past `MAX` saturate.
    pub fn set(&self, time: Duration) {
        let micros = u64::try_from(time.as_micros()).unwrap_or(u64::MAX);
        self.micros.store(micros, Ordering::Relaxed);
    }

    /// Jump to an absolute time given in seconds. Negative values and NaN
    /// clamp to 0, values too large for a `Duration` saturate at `MAX`.
    pub fn set_secs(&self, secs: f64) {
        self.set(Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Self::MAX));
    }

    /// Move forward by `delta`, saturating at `MAX`. Returns the new time.
    pub fn advance(&self, delta: Duration) -> Duration {
        let delta = u64::try_from(delta.as_micros()).unwrap_or(u64::MAX);
        let previous = self
            .micros
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |micros| {
                Some(micros.saturating_add(delta))
            })
            .unwrap_or_else(|micros| micros);
        Duration::from_micros(previous.saturating_add(delta))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.load(Ordering::Relaxed))
    }
}
