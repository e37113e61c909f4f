//! The rule controller: wires policy evaluation into the host's join and rename hooks.

use crate::host::{ChannelModeSpec, ConfigSource, HostState, ModeRegistry};
use anyhow::Context;
use nickcaps_domain::model::ChannelState;
use nickcaps_domain::{NickcapsPolicy, evaluate_join, evaluate_rename};
use nickcaps_settings::{ConfigIssue, ResolvedConfig};
use nickcaps_types::{Decision, ids};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the host shows when listing modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleInfo {
    pub description: &'static str,
    /// The mode must be loaded on every linked server.
    pub common: bool,
}

/// Result of one configuration reload.
#[derive(Clone, Debug)]
pub struct ReloadOutcome {
    /// The policy now in effect.
    pub policy: Arc<NickcapsPolicy>,
    /// Values that were replaced with defaults. Each one was logged as a warning.
    pub issues: Vec<ConfigIssue>,
}

/// Owns the current policy and answers the host's join/rename hooks.
///
/// The policy is swapped as a whole on reload. Each decision clones the `Arc` once and
/// evaluates against that snapshot, so it never sees a mix of old and new values.
pub struct RuleController<S> {
    source: S,
    policy: RwLock<Arc<NickcapsPolicy>>,
}

impl<S: ConfigSource> RuleController<S> {
    /// Create a controller with the default policy. Call `init` or
    /// `on_config_reload` to read `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: RwLock::new(Arc::new(NickcapsPolicy::default())),
        }
    }

    /// Load configuration, then register the channel mode with the host.
    pub fn init<R: ModeRegistry + ?Sized>(&self, registry: &mut R) -> anyhow::Result<ReloadOutcome> {
        let outcome = self.on_config_reload();
        registry
            .register_channel_mode(Self::channel_mode())
            .with_context(|| format!("register channel mode +{}", ids::MODE_LETTER))?;
        Ok(outcome)
    }

    pub fn channel_mode() -> ChannelModeSpec {
        ChannelModeSpec {
            name: ids::MODE_NAME,
            letter: ids::MODE_LETTER,
            takes_param: false,
        }
    }

    pub fn module_info() -> ModuleInfo {
        ModuleInfo {
            description: ids::MODULE_DESCRIPTION,
            common: true,
        }
    }

    /// Snapshot of the policy currently in effect.
    pub fn policy(&self) -> Arc<NickcapsPolicy> {
        Arc::clone(&*self.policy.read())
    }

    /// Hook for a join attempt. `channel` is `None` when the join would create it.
    pub fn on_join_attempt<H: HostState + ?Sized>(
        &self,
        host: &H,
        user: &str,
        channel: Option<&str>,
        nick: &str,
    ) -> Decision {
        let policy = self.policy();
        let state = channel.map(|name| ChannelState::new(name, host.channel_enabled(name)));
        let decision = evaluate_join(&policy, state.as_ref(), nick);

        debug!(
            trigger = "join",
            user,
            channel = channel.unwrap_or("-"),
            nick,
            caps_percent = policy.caps_percent(nick),
            pass = decision.is_pass(),
            "nickcaps decision"
        );
        decision
    }

    /// Hook for a rename attempt. Operators are exempt.
    pub fn on_rename_attempt<H: HostState + ?Sized>(
        &self,
        host: &H,
        user: &str,
        nick: &str,
    ) -> Decision {
        if host.is_privileged(user) {
            debug!(trigger = "rename", user, nick, "privileged user exempt");
            return Decision::Pass;
        }

        let policy = self.policy();
        let channels = host
            .user_channels(user)
            .into_iter()
            .map(|name| {
                let enabled = host.channel_enabled(&name);
                ChannelState::new(name, enabled)
            });
        let decision = evaluate_rename(&policy, false, channels, nick);

        debug!(
            trigger = "rename",
            user,
            nick,
            caps_percent = policy.caps_percent(nick),
            pass = decision.is_pass(),
            "nickcaps decision"
        );
        decision
    }

    /// Re-read configuration and install the resulting policy.
    ///
    /// Never fails: unreadable or out-of-range values fall back to defaults with a warning.
    pub fn on_config_reload(&self) -> ReloadOutcome {
        let resolved = match self.source.load() {
            Ok(cfg) => nickcaps_settings::resolve_config(cfg),
            Err(err) => ResolvedConfig::unreadable(format!("{err:#}")),
        };

        for issue in &resolved.issues {
            warn!(target: "nickcaps::config", "{issue}");
        }

        let policy = Arc::new(resolved.policy);
        *self.policy.write() = Arc::clone(&policy);

        info!(
            min_len = policy.min_len,
            max_caps = policy.max_caps,
            "nickcaps policy installed"
        );

        ReloadOutcome {
            policy,
            issues: resolved.issues,
        }
    }
}
