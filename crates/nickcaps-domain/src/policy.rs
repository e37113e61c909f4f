use crate::classifier::CapsMap;
use serde::Serialize;

pub const DEFAULT_MIN_LEN: u32 = 4;
pub const DEFAULT_MAX_CAPS: u32 = 100;
pub const DEFAULT_CAPS_MAP: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Upper bound for `min_len`: the host's line buffer (514) less one.
pub const MAX_MIN_LEN: u32 = 513;

/// The `(min_len, max_caps, caps_map)` triple governing rejection.
///
/// Values are expected to be range-checked by the settings layer
/// (`1..=MAX_MIN_LEN` and `1..=100`); this type does not re-validate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NickcapsPolicy {
    /// Nicks of this many bytes or fewer are never rejected.
    pub min_len: u32,
    /// Rejection threshold, in whole percent.
    pub max_caps: u32,
    pub caps_map: CapsMap,
}

impl Default for NickcapsPolicy {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_caps: DEFAULT_MAX_CAPS,
            caps_map: CapsMap::default(),
        }
    }
}

impl NickcapsPolicy {
    /// Share of capital-equivalent bytes in `nick`, truncated to a whole percent.
    pub fn caps_percent(&self, nick: &str) -> u32 {
        let len = nick.len() as u64;
        if len == 0 {
            return 0;
        }
        let count = self.caps_map.count(nick) as u64;
        // Truncating division: 2 of 3 is 66, not 67.
        ((count * 100) / len) as u32
    }

    /// Whether `nick` carries too many capitals to be accepted.
    ///
    /// Length is measured in bytes, matching the classifier granularity.
    pub fn should_reject(&self, nick: &str) -> bool {
        if nick.len() <= self.min_len as usize {
            return false;
        }
        self.caps_percent(nick) >= self.max_caps
    }
}
