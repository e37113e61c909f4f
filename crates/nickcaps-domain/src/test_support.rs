use crate::classifier::CapsMap;
use crate::model::ChannelState;
use crate::policy::{DEFAULT_CAPS_MAP, NickcapsPolicy};

pub fn policy(min_len: u32, max_caps: u32, caps_map: &str) -> NickcapsPolicy {
    NickcapsPolicy {
        min_len,
        max_caps,
        caps_map: CapsMap::new(caps_map),
    }
}

/// `minlen = 4`, `maxcaps = 50`, ASCII capitals.
pub fn half_caps_policy() -> NickcapsPolicy {
    policy(4, 50, DEFAULT_CAPS_MAP)
}

pub fn channel(name: &str, nickcaps: bool) -> ChannelState {
    ChannelState::new(name, nickcaps)
}
