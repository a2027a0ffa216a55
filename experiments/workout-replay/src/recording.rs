use {
    anyhow::{Context, Result, bail},
    base::{ManualClock, Vec2},
    coach::{KeypointIndex, Landmarks},
    serde::Deserialize,
    std::{collections::HashMap, time::Duration},
};

/// One line of a landmark recording.
#[derive(Debug, Deserialize)]
struct RawFrame {
    t: f64,
    joints: Option<HashMap<String, Vec<f32>>>,
}

/// A recorded frame: capture time and the detected body, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayFrame {
    pub t: f64,
    pub landmarks: Option<Landmarks>,
}

/// Parse one JSON line.
///
/// Joints are `[x, y]` or `[x, y, confidence]`; joints below
/// `min_confidence` are left out.
pub fn parse_frame(line: &str, min_confidence: f32) -> Result<ReplayFrame> {
    let raw: RawFrame = serde_json::from_str(line).context("malformed frame")?;
    let representable = Duration::try_from_secs_f64(raw.t)
        .is_ok_and(|time| time <= ManualClock::MAX);
    if !representable {
        bail!("invalid frame time {}", raw.t);
    }
    let landmarks = match raw.joints {
        Some(joints) => {
            let mut landmarks = Landmarks::new();
            for (name, values) in joints {
                let index: KeypointIndex = name.parse()?;
                let (position, confidence) = match values[..] {
                    [x, y] => (Vec2::new(x, y), 1.0),
                    [x, y, confidence] => (Vec2::new(x, y), confidence),
                    _ => bail!("joint {} needs [x, y] or [x, y, confidence]", name),
                };
                if confidence >= min_confidence {
                    landmarks.set_joint(index, position);
                }
            }
            Some(landmarks)
        }
        None => None,
    };
    Ok(ReplayFrame { t: raw.t, landmarks })
}
