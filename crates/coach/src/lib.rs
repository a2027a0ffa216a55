//! Exercise tracking on top of a per-frame stream of body landmarks.
//!
//! Landmarks go in through `Tracker::process_frame`, repetitions and holds
//! come out as `SessionEvent`s collected by the session recorder, and a
//! finished session is scored into a `SessionSummary`.

pub mod config;
pub mod error;
pub mod exercise;
pub mod form;
pub mod geometry;
pub mod landmarks;
pub mod report;
pub mod scorer;
pub mod session;
pub mod tracker;
pub mod workout;

pub use config::TrackerConfig;
pub use error::CoachError;
pub use exercise::ExerciseKind;
pub use form::FormCheck;
pub use geometry::angle_at;
pub use landmarks::{COCO_KEYPOINT_COUNT, Keypoint, KeypointIndex, Landmarks};
pub use report::format_time;
pub use scorer::{Metrics, SessionSummary, summarize};
pub use session::{
    Counter, FinalizedSession, HoldBreakEvent, RepEvent, SessionEvent, SessionHandle,
    SessionRecord, SessionRecorder,
};
pub use tracker::{RenderHints, Tracker, create_tracker, create_tracker_with_config};
pub use workout::Workout;
