use serde::{Deserialize, Serialize};

/// Which host workflow asked for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Join,
    Rename,
}

/// A vetoed join or rename.
///
/// Carries everything the host needs to build its reply: the numeric, the
/// offending channel and the human-readable reason with both thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denial {
    pub trigger: Trigger,
    pub channel: String,
    pub nick: String,
    pub numeric: u16,
    pub min_len: u32,
    pub max_caps: u32,
    /// Truncated share of capital-equivalent bytes in `nick`.
    pub caps_percent: u32,
    pub reason: String,
}

/// Outcome of one join or rename attempt. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum Decision {
    Pass,
    Deny(Denial),
}

impl Decision {
    pub fn is_pass(&self) -> bool {
        matches!(self, Decision::Pass)
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Decision::Pass => None,
            Decision::Deny(d) => Some(d),
        }
    }
}
