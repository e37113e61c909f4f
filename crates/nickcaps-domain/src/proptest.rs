//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - minimum-length gating
//! - the inclusive, truncating percentage threshold
//! - rename ordering and the privileged exemption

use crate::engine::{evaluate_join, evaluate_rename};
use crate::model::ChannelState;
use crate::policy::{DEFAULT_CAPS_MAP, MAX_MIN_LEN};
use crate::test_support::policy;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Nicks made only of bytes the default map ignores.
fn arb_lowercase_nick() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_\\-\\[\\]{}|^`]{0,40}").unwrap()
}

/// Nicks mixing capitals and lowercase.
fn arb_mixed_nick() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_\\-]{0,40}").unwrap()
}

fn arb_max_caps() -> impl Strategy<Value = u32> {
    1u32..=100
}

fn arb_min_len() -> impl Strategy<Value = u32> {
    1u32..=32
}

// ============================================================================
// Property tests: policy evaluator
// ============================================================================

proptest! {
    /// Nicks no longer than `min_len` are never rejected.
    #[test]
    fn short_nicks_never_rejected(
        min_len in 1u32..=MAX_MIN_LEN,
        max_caps in arb_max_caps(),
        nick in arb_mixed_nick(),
    ) {
        let p = policy(min_len, max_caps, DEFAULT_CAPS_MAP);
        if nick.len() <= min_len as usize {
            prop_assert!(!p.should_reject(&nick), "rejected short nick {nick:?}");
        }
    }

    /// Nicks without any classified byte are never rejected.
    #[test]
    fn unclassified_nicks_never_rejected(
        min_len in arb_min_len(),
        max_caps in arb_max_caps(),
        nick in arb_lowercase_nick(),
    ) {
        let p = policy(min_len, max_caps, DEFAULT_CAPS_MAP);
        prop_assert_eq!(p.caps_percent(&nick), 0);
        prop_assert!(!p.should_reject(&nick));
    }

    /// A nick with exactly `max_caps` percent capitals is rejected.
    #[test]
    fn exact_threshold_is_inclusive(max_caps in arb_max_caps(), min_len in arb_min_len()) {
        // Scale a 100-byte nick so the percentage divides evenly.
        let scale = (min_len as usize / 100) + 1;
        let len = 100 * scale;
        let caps = max_caps as usize * scale;
        let nick = format!("{}{}", "A".repeat(caps), "a".repeat(len - caps));

        let p = policy(min_len, max_caps, DEFAULT_CAPS_MAP);
        prop_assert_eq!(p.caps_percent(&nick), max_caps);
        prop_assert!(p.should_reject(&nick));
    }

    /// With `max_caps = 100` only fully capitalised nicks are rejected.
    #[test]
    fn full_threshold_needs_every_byte(nick in arb_mixed_nick(), min_len in arb_min_len()) {
        let p = policy(min_len, 100, DEFAULT_CAPS_MAP);
        let all_caps = !nick.is_empty() && nick.bytes().all(|b| b.is_ascii_uppercase());
        if !all_caps {
            prop_assert!(!p.should_reject(&nick), "rejected {nick:?}");
        }
    }

    /// The percentage never exceeds 100 and matches truncating division.
    #[test]
    fn percent_is_truncated_ratio(nick in arb_mixed_nick()) {
        let p = policy(1, 100, DEFAULT_CAPS_MAP);
        let percent = p.caps_percent(&nick);
        prop_assert!(percent <= 100);
        if !nick.is_empty() {
            let count = nick.bytes().filter(|b| b.is_ascii_uppercase()).count();
            prop_assert_eq!(percent as usize, count * 100 / nick.len());
        }
    }

    /// Raising the threshold never turns an accept into a reject.
    #[test]
    fn threshold_is_monotonic(
        nick in arb_mixed_nick(),
        lo in arb_max_caps(),
        hi in arb_max_caps(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let strict = policy(4, lo, DEFAULT_CAPS_MAP);
        let lax = policy(4, hi, DEFAULT_CAPS_MAP);
        if lax.should_reject(&nick) {
            prop_assert!(strict.should_reject(&nick));
        }
    }
}

// ============================================================================
// Property tests: decisions
// ============================================================================

proptest! {
    /// Privileged users always pass renames.
    #[test]
    fn privileged_rename_always_passes(
        nick in arb_mixed_nick(),
        flags in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let p = policy(1, 1, DEFAULT_CAPS_MAP);
        let chans: Vec<ChannelState> = flags
            .iter()
            .enumerate()
            .map(|(i, &on)| ChannelState::new(format!("#c{i}"), on))
            .collect();
        prop_assert!(evaluate_rename(&p, true, chans, &nick).is_pass());
    }

    /// A rename denial always names the first channel with the mode set.
    #[test]
    fn rename_denial_names_first_enabled_channel(
        flags in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let p = policy(1, 1, DEFAULT_CAPS_MAP);
        let chans: Vec<ChannelState> = flags
            .iter()
            .enumerate()
            .map(|(i, &on)| ChannelState::new(format!("#c{i}"), on))
            .collect();
        let expected = flags.iter().position(|&on| on).map(|i| format!("#c{i}"));

        let decision = evaluate_rename(&p, false, chans, "SHOUT");
        prop_assert_eq!(decision.denial().map(|d| d.channel.clone()), expected);
    }

    /// Join denials agree with the evaluator on enabled channels.
    #[test]
    fn join_matches_evaluator(
        nick in arb_mixed_nick(),
        max_caps in arb_max_caps(),
        enabled in any::<bool>(),
    ) {
        let p = policy(4, max_caps, DEFAULT_CAPS_MAP);
        let chan = ChannelState::new("#lobby", enabled);
        let denied = !evaluate_join(&p, Some(&chan), &nick).is_pass();
        prop_assert_eq!(denied, enabled && p.should_reject(&nick));
    }
}
