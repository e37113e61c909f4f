//! Byte classification for the capital-letter tally.

use serde::{Serialize, Serializer};
use std::fmt;

/// Set of bytes that count as capital letters.
///
/// Backed by a table indexed by byte value, so every `u8` has a defined
/// answer and lookups never allocate.
#[derive(Clone, PartialEq, Eq)]
pub struct CapsMap {
    table: [bool; 256],
}

impl CapsMap {
    /// A map with no members. Nothing is ever counted as capital.
    pub fn empty() -> Self {
        Self {
            table: [false; 256],
        }
    }

    /// Build a map from the bytes of `chars`.
    ///
    /// Characters outside ASCII contribute every byte of their UTF-8 encoding.
    pub fn new(chars: &str) -> Self {
        Self::from_bytes(chars.as_bytes())
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        let mut map = Self::empty();
        for &b in bytes {
            map.table[usize::from(b)] = true;
        }
        map
    }

    pub fn is_capital(&self, byte: u8) -> bool {
        self.table[usize::from(byte)]
    }

    /// Number of bytes in `s` that are members.
    pub fn count(&self, s: &str) -> usize {
        s.bytes().filter(|&b| self.is_capital(b)).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.table.iter().any(|&m| m)
    }

    /// Members in ascending byte order.
    pub fn members(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.is_capital(b))
    }
}

impl Default for CapsMap {
    fn default() -> Self {
        Self::new(crate::policy::DEFAULT_CAPS_MAP)
    }
}

impl fmt::Debug for CapsMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<u8> = self.members().collect();
        f.debug_tuple("CapsMap")
            .field(&String::from_utf8_lossy(&members))
            .finish()
    }
}

impl Serialize for CapsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let members: Vec<u8> = self.members().collect();
        serializer.serialize_str(&String::from_utf8_lossy(&members))
    }
}
