use {
    crate::{Counter, ExerciseKind, FinalizedSession, SessionEvent, SessionRecord},
    base::Clock,
    std::sync::Arc,
    tokio::sync::watch,
};

struct Shared {
    record: watch::Sender<SessionRecord>,
    clock: Arc<dyn Clock>,
}

impl Shared {
    fn finalize(&self) -> FinalizedSession {
        let now = self.clock.now();
        let frozen_now = self.record.send_if_modified(|record| {
            if record.is_frozen() {
                false
            } else {
                record.ended_at = Some(now);
                true
            }
        });
        let record = self.record.borrow();
        if frozen_now {
            log::info!(
                "{} session finalized: counter {}, {} events",
                record.kind,
                record.counter,
                record.events.len()
            );
        }
        FinalizedSession::from_record(&record, now)
    }
}

/// Writer side of a session: the only place events and the counter change.
///
/// The record lives in a watch channel so readers on other threads get a
/// consistent snapshot without locking tracker state.
pub struct SessionRecorder {
    shared: Arc<Shared>,
}

impl SessionRecorder {
    /// Start a session of `kind` now.
    pub fn new(kind: ExerciseKind, clock: Arc<dyn Clock>) -> Self {
        let (record, _) = watch::channel(SessionRecord::new(kind, clock.now()));
        Self {
            shared: Arc::new(Shared { record, clock }),
        }
    }

    /// Append an event. Dropped if the session was already finalized.
    pub fn record(&self, event: impl Into<SessionEvent>) {
        let event = event.into();
        let accepted = self.shared.record.send_if_modified(|record| {
            if record.is_frozen() {
                false
            } else {
                record.events.push(event);
                true
            }
        });
        if !accepted {
            log::debug!("session already finalized, dropping {:?}", event);
        }
    }

    /// Replace the running counter. Ignored once finalized.
    pub fn set_counter(&self, counter: Counter) {
        self.shared.record.send_if_modified(|record| {
            if record.is_frozen() || record.counter == counter {
                false
            } else {
                record.counter = counter;
                true
            }
        });
    }

    pub fn counter(&self) -> Counter {
        self.shared.record.borrow().counter
    }

    pub fn kind(&self) -> ExerciseKind {
        self.shared.record.borrow().kind
    }

    pub fn event_count(&self) -> usize {
        self.shared.record.borrow().events.len()
    }

    pub fn is_finalized(&self) -> bool {
        self.shared.record.borrow().is_frozen()
    }

    /// Freeze the session and snapshot it. Repeated calls return the same snapshot.
    pub fn finalize(&self) -> FinalizedSession {
        self.shared.finalize()
    }

    /// A cloneable handle for readers and for finalizing from another thread.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Shared read/finalize access to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    shared: Arc<Shared>,
}

impl SessionHandle {
    /// Freeze the session and snapshot it. Repeated calls return the same snapshot.
    pub fn finalize(&self) -> FinalizedSession {
        self.shared.finalize()
    }

    pub fn is_finalized(&self) -> bool {
        self.shared.record.borrow().is_frozen()
    }

    pub fn kind(&self) -> ExerciseKind {
        self.shared.record.borrow().kind
    }

    pub fn counter(&self) -> Counter {
        self.shared.record.borrow().counter
    }

    /// Copy of the record as it is right now.
    pub fn snapshot(&self) -> SessionRecord {
        self.shared.record.borrow().clone()
    }

    /// Receiver that wakes on every change to the record.
    pub fn subscribe(&self) -> watch::Receiver<SessionRecord> {
        self.shared.record.subscribe()
    }

    /// Whether `other` refers to the same session.
    pub fn same_session(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let record = self.shared.record.borrow();
        f.debug_struct("SessionHandle")
            .field("kind", &record.kind)
            .field("counter", &record.counter)
            .field("events", &record.events.len())
            .field("finalized", &record.is_frozen())
            .finish()
    }
}
