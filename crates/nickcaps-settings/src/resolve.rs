use crate::issue::ConfigIssue;
use crate::model::{ConfigInt, NickcapsConfigV1};
use nickcaps_domain::policy::{
    DEFAULT_CAPS_MAP, DEFAULT_MAX_CAPS, DEFAULT_MIN_LEN, MAX_MIN_LEN,
};
use nickcaps_domain::{CapsMap, NickcapsPolicy};

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub policy: NickcapsPolicy,
    /// Values that were replaced with defaults, in key order.
    pub issues: Vec<ConfigIssue>,
}

impl ResolvedConfig {
    /// Default policy after a failed load.
    pub fn unreadable(reason: impl Into<String>) -> Self {
        Self {
            policy: NickcapsPolicy::default(),
            issues: vec![ConfigIssue::Unreadable {
                reason: reason.into(),
            }],
        }
    }
}

pub fn resolve_config(cfg: NickcapsConfigV1) -> ResolvedConfig {
    let mut issues = Vec::new();

    let max_caps = match cfg.maxcaps {
        None => DEFAULT_MAX_CAPS,
        Some(ConfigInt::Int(v)) if (1..=100).contains(&v) => v as u32,
        Some(value) => {
            issues.push(ConfigIssue::MaxCapsOutOfRange {
                value,
                default: DEFAULT_MAX_CAPS,
            });
            DEFAULT_MAX_CAPS
        }
    };

    let min_len = match cfg.minlen {
        None => DEFAULT_MIN_LEN,
        Some(ConfigInt::Int(v)) if (1..=i64::from(MAX_MIN_LEN)).contains(&v) => v as u32,
        Some(value) => {
            issues.push(ConfigIssue::MinLenOutOfRange {
                value,
                default: DEFAULT_MIN_LEN,
            });
            DEFAULT_MIN_LEN
        }
    };

    // An explicitly empty map is honoured: nothing counts as capital.
    let caps_map = CapsMap::new(cfg.capsmap.as_deref().unwrap_or(DEFAULT_CAPS_MAP));

    ResolvedConfig {
        policy: NickcapsPolicy {
            min_len,
            max_caps,
            caps_map,
        },
        issues,
    }
}
