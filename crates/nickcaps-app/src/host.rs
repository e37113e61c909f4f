//! Seams between the controller and the host server.

use anyhow::Context;
use camino::Utf8PathBuf;
use nickcaps_settings::NickcapsConfigV1;

/// Read-only queries against the host's channel and user registry.
pub trait HostState {
    /// Whether the `nickcaps` mode is set on `channel`.
    fn channel_enabled(&self, channel: &str) -> bool;

    /// Channels `user` is currently on, in membership order.
    fn user_channels(&self, user: &str) -> Vec<String>;

    /// Whether `user` is an operator and exempt from rename checks.
    fn is_privileged(&self, user: &str) -> bool;
}

/// Where the `[nickcaps]` table comes from on each reload.
pub trait ConfigSource {
    fn load(&self) -> anyhow::Result<NickcapsConfigV1>;
}

impl<F> ConfigSource for F
where
    F: Fn() -> anyhow::Result<NickcapsConfigV1>,
{
    fn load(&self) -> anyhow::Result<NickcapsConfigV1> {
        self()
    }
}

/// Config held in memory as TOML text.
#[derive(Clone, Debug, Default)]
pub struct TomlText(pub String);

impl ConfigSource for TomlText {
    fn load(&self) -> anyhow::Result<NickcapsConfigV1> {
        nickcaps_settings::parse_config_toml(&self.0).context("parse config")
    }
}

/// Config read from a TOML file on every reload. A missing file means defaults.
#[derive(Clone, Debug)]
pub struct TomlFile {
    path: Utf8PathBuf,
}

impl TomlFile {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for TomlFile {
    fn load(&self) -> anyhow::Result<NickcapsConfigV1> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("read config: {}", self.path));
            }
        };
        nickcaps_settings::parse_config_toml(&text)
            .with_context(|| format!("parse config: {}", self.path))
    }
}

/// Description of the per-channel flag the host must register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelModeSpec {
    pub name: &'static str,
    pub letter: char,
    /// Simple on/off mode: never carries a parameter.
    pub takes_param: bool,
}

/// The host's mode framework.
pub trait ModeRegistry {
    fn register_channel_mode(&mut self, spec: ChannelModeSpec) -> anyhow::Result<()>;
}
