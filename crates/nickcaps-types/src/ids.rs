//! Stable identifiers shared with the host server.
//!
//! The mode name and letter must match on every linked server.

// Channel mode
pub const MODE_NAME: &str = "nickcaps";
pub const MODE_LETTER: char = 'U';

// Numerics sent with a denial. 609 is shared with the join-flood module.
pub const ERR_NICKCAPS_JOIN: u16 = 609;
pub const ERR_CANTCHANGENICK: u16 = 437;

pub const MODULE_DESCRIPTION: &str =
    "Provides channel mode +U to prevent nicks with too many capital letters.";
