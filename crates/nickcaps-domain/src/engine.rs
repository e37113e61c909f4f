use crate::model::ChannelState;
use crate::policy::NickcapsPolicy;
use nickcaps_types::{Decision, Denial, Trigger, ids};

/// Decide a join attempt.
///
/// `channel` is `None` when the join creates the channel: there is no mode
/// set yet, so nothing to enforce.
pub fn evaluate_join(
    policy: &NickcapsPolicy,
    channel: Option<&ChannelState>,
    nick: &str,
) -> Decision {
    let Some(channel) = channel else {
        return Decision::Pass;
    };
    if !channel.nickcaps || !policy.should_reject(nick) {
        return Decision::Pass;
    }
    Decision::Deny(denial(policy, Trigger::Join, &channel.name, nick))
}

/// Decide a rename attempt for a user currently on `channels`.
///
/// Channels are visited in the order given and the first one with the mode
/// set decides. The verdict itself does not depend on the channel, so later
/// channels are never queried.
pub fn evaluate_rename<I>(
    policy: &NickcapsPolicy,
    privileged: bool,
    channels: I,
    nick: &str,
) -> Decision
where
    I: IntoIterator<Item = ChannelState>,
{
    if privileged {
        return Decision::Pass;
    }
    let Some(channel) = channels.into_iter().find(|c| c.nickcaps) else {
        return Decision::Pass;
    };
    if !policy.should_reject(nick) {
        return Decision::Pass;
    }
    Decision::Deny(denial(policy, Trigger::Rename, &channel.name, nick))
}

pub fn join_reason(channel: &str, policy: &NickcapsPolicy) -> String {
    format!(
        "Cannot join channel {channel} because nickname is invalid (+{}). {}",
        ids::MODE_LETTER,
        limits_sentence(policy)
    )
}

pub fn rename_reason(channel: &str, policy: &NickcapsPolicy) -> String {
    format!(
        "Can't change nickname as nickname is invalid while on channel {channel} (+{}). {}",
        ids::MODE_LETTER,
        limits_sentence(policy)
    )
}

fn limits_sentence(policy: &NickcapsPolicy) -> String {
    format!(
        "Nicknames longer than {} characters cannot contain {}% capital letters or more.",
        policy.min_len, policy.max_caps
    )
}

fn denial(policy: &NickcapsPolicy, trigger: Trigger, channel: &str, nick: &str) -> Denial {
    let (numeric, reason) = match trigger {
        Trigger::Join => (ids::ERR_NICKCAPS_JOIN, join_reason(channel, policy)),
        Trigger::Rename => (ids::ERR_CANTCHANGENICK, rename_reason(channel, policy)),
    };
    Denial {
        trigger,
        channel: channel.to_string(),
        nick: nick.to_string(),
        numeric,
        min_len: policy.min_len,
        max_caps: policy.max_caps,
        caps_percent: policy.caps_percent(nick),
        reason,
    }
}
