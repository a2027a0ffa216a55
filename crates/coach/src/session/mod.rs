//! Session data: the events a tracker emits and the recorder that collects them.
//!
//! # Components
//! - `event.rs`: `RepEvent`, `HoldBreakEvent` and the `SessionEvent` union
//! - `record.rs`: `SessionRecord`, its `Counter` and the `FinalizedSession` snapshot
//! - `recorder.rs`: `SessionRecorder` (writer side) and `SessionHandle` (finalize from anywhere)

mod event;
mod record;
mod recorder;

pub use event::{HoldBreakEvent, RepEvent, SessionEvent};
pub use record::{Counter, FinalizedSession, SessionRecord};
pub use recorder::{SessionHandle, SessionRecorder};
