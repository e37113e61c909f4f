//! CLI entry point for nickcaps.
//!
//! This module is intentionally thin: it handles argument parsing, output, and exit codes.
//! All policy logic lives in the `nickcaps-app` and `nickcaps-domain` crates.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use nickcaps_app::{HostState, RuleController, TomlFile};
use nickcaps_types::Decision;
use serde_json::json;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Name of the simulated user in `join` and `rename`.
const SIM_USER: &str = "cli";

#[derive(Parser, Debug)]
#[command(
    name = "nickcaps",
    version,
    about = "Check nicknames against the channel +U capital-letter policy"
)]
struct Cli {
    /// Path to the nickcaps config TOML (missing file means defaults).
    #[arg(long, default_value = "nickcaps.toml")]
    config: Utf8PathBuf,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one nickname against the policy.
    Check {
        nick: String,
    },

    /// Simulate joining a channel with the given nickname.
    Join {
        /// Channel being joined.
        #[arg(long)]
        channel: String,

        /// The channel has +U set.
        #[arg(long)]
        enabled: bool,

        /// The join creates the channel.
        #[arg(long, conflicts_with = "enabled")]
        new_channel: bool,

        nick: String,
    },

    /// Simulate changing nickname while on the given channels.
    Rename {
        /// A channel the user is on, in membership order. Append `:on` when +U is set.
        #[arg(long = "channel", value_parser = parse_channel_arg)]
        channels: Vec<(String, bool)>,

        /// The user is an operator.
        #[arg(long)]
        privileged: bool,

        nick: String,
    },

    /// Print the effective policy after defaults and range checks.
    Config,

    /// Print the JSON schema of the config file.
    Schema,
}

/// Host state for a single simulated user.
struct SimHost {
    channels: Vec<(String, bool)>,
    privileged: bool,
}

impl HostState for SimHost {
    fn channel_enabled(&self, channel: &str) -> bool {
        self.channels
            .iter()
            .any(|(name, on)| *on && name == channel)
    }

    fn user_channels(&self, _user: &str) -> Vec<String> {
        self.channels.iter().map(|(name, _)| name.clone()).collect()
    }

    fn is_privileged(&self, _user: &str) -> bool {
        self.privileged
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Commands::Schema = cli.cmd {
        let schema = nickcaps_settings::config_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    tracing::debug!(config = %cli.config, "loading nickcaps config");
    let controller = RuleController::new(TomlFile::new(cli.config.clone()));
    let outcome = controller.on_config_reload();

    let code = match cli.cmd {
        Commands::Check { ref nick } => cmd_check(&controller, nick, cli.json)?,
        Commands::Join {
            ref channel,
            enabled,
            new_channel,
            ref nick,
        } => {
            let host = SimHost {
                channels: vec![(channel.clone(), enabled)],
                privileged: false,
            };
            let target = (!new_channel).then_some(channel.as_str());
            let decision = controller.on_join_attempt(&host, SIM_USER, target, nick);
            print_decision(&decision, cli.json)?
        }
        Commands::Rename {
            ref channels,
            privileged,
            ref nick,
        } => {
            let host = SimHost {
                channels: channels.clone(),
                privileged,
            };
            let decision = controller.on_rename_attempt(&host, SIM_USER, nick);
            print_decision(&decision, cli.json)?
        }
        Commands::Config => {
            let issues: Vec<String> = outcome.issues.iter().map(|i| i.to_string()).collect();
            let out = json!({
                "config": cli.config.as_str(),
                "policy": &*outcome.policy,
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&out).context("serialize policy")?);
            0
        }
        Commands::Schema => 0,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn cmd_check<S: nickcaps_app::ConfigSource>(
    controller: &RuleController<S>,
    nick: &str,
    as_json: bool,
) -> anyhow::Result<i32> {
    let policy = controller.policy();
    let reject = policy.should_reject(nick);
    let percent = policy.caps_percent(nick);

    if as_json {
        let out = json!({
            "nick": nick,
            "caps_percent": percent,
            "min_len": policy.min_len,
            "max_caps": policy.max_caps,
            "reject": reject,
        });
        println!("{}", serde_json::to_string(&out).context("serialize result")?);
    } else {
        println!(
            "{nick}: {percent}% capitals (minlen={}, maxcaps={}) -> {}",
            policy.min_len,
            policy.max_caps,
            if reject { "reject" } else { "accept" }
        );
    }

    Ok(if reject { 2 } else { 0 })
}

/// Print a decision; exit code 0 = pass, 2 = deny.
fn print_decision(decision: &Decision, as_json: bool) -> anyhow::Result<i32> {
    if as_json {
        println!("{}", serde_json::to_string(decision).context("serialize decision")?);
    } else {
        match decision {
            Decision::Pass => println!("pass"),
            Decision::Deny(d) => println!("deny {} {}", d.numeric, d.reason),
        }
    }
    Ok(if decision.is_pass() { 0 } else { 2 })
}

fn parse_channel_arg(v: &str) -> Result<(String, bool), String> {
    let (name, enabled) = match v.rsplit_once(':') {
        Some((name, "on")) => (name, true),
        Some((name, "off")) => (name, false),
        Some((_, other)) => return Err(format!("unknown channel flag: {other} (expected on|off)")),
        None => (v, false),
    };
    if name.is_empty() {
        return Err("channel name must not be empty".to_string());
    }
    Ok((name.to_string(), enabled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_arg_flags() {
        assert_eq!(parse_channel_arg("#a"), Ok(("#a".to_string(), false)));
        assert_eq!(parse_channel_arg("#a:on"), Ok(("#a".to_string(), true)));
        assert_eq!(parse_channel_arg("#a:off"), Ok(("#a".to_string(), false)));
        assert!(parse_channel_arg("#a:maybe").is_err());
        assert!(parse_channel_arg(":on").is_err());
    }

    #[test]
    fn sim_host_answers_from_arguments() {
        let host = SimHost {
            channels: vec![("#a".to_string(), false), ("#b".to_string(), true)],
            privileged: false,
        };
        assert!(!host.channel_enabled("#a"));
        assert!(host.channel_enabled("#b"));
        assert!(!host.channel_enabled("#c"));
        assert_eq!(host.user_channels(SIM_USER), vec!["#a", "#b"]);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
