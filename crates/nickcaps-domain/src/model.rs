/// Host-side view of one channel at decision time.
///
/// The host owns the channel and its modes; this is a read-only copy of the
/// two facts the policy needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelState {
    pub name: String,
    /// Whether the `nickcaps` mode is set on the channel.
    pub nickcaps: bool,
}

impl ChannelState {
    pub fn new(name: impl Into<String>, nickcaps: bool) -> Self {
        Self {
            name: name.into(),
            nickcaps,
        }
    }
}
