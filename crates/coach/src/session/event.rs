use serde::Serialize;

/// One completed repetition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepEvent {
    /// 1-based sequence number within the session.
    pub rep: u32,
    /// Form flag of the frame that completed the repetition.
    pub form_ok: bool,
    /// Smallest angle seen while going down and back up, in degrees.
    pub min_angle: f32,
    /// Seconds from the down-crossing to the up-crossing.
    pub duration: f64,
}

/// Form broke while a hold was running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoldBreakEvent {
    /// Total seconds held in the session when form broke.
    pub time_held: f64,
    /// Always false: this event only exists for broken form.
    pub form_ok: bool,
}

impl HoldBreakEvent {
    pub fn new(time_held: f64) -> Self {
        Self {
            time_held,
            form_ok: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Rep(RepEvent),
    HoldBreak(HoldBreakEvent),
}

impl SessionEvent {
    pub fn form_ok(&self) -> bool {
        match self {
            SessionEvent::Rep(rep) => rep.form_ok,
            SessionEvent::HoldBreak(hold_break) => hold_break.form_ok,
        }
    }

    pub fn as_rep(&self) -> Option<&RepEvent> {
        match self {
            SessionEvent::Rep(rep) => Some(rep),
            SessionEvent::HoldBreak(_) => None,
        }
    }
}

impl From<RepEvent> for SessionEvent {
    fn from(event: RepEvent) -> Self {
        SessionEvent::Rep(event)
    }
}

impl From<HoldBreakEvent> for SessionEvent {
    fn from(event: HoldBreakEvent) -> Self {
        SessionEvent::HoldBreak(event)
    }
}
