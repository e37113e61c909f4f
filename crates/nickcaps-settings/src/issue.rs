use crate::model::ConfigInt;
use thiserror::Error;

/// A configuration problem that was repaired during resolution.
///
/// None of these abort a load; each one means a default was substituted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("<nickcaps:maxcaps> out of range ({value}), setting to default of {default}.")]
    MaxCapsOutOfRange { value: ConfigInt, default: u32 },

    #[error("<nickcaps:minlen> out of range ({value}), setting to default of {default}.")]
    MinLenOutOfRange { value: ConfigInt, default: u32 },

    #[error("<nickcaps> could not be loaded ({reason}), using defaults.")]
    Unreadable { reason: String },
}
