use std::time::Duration;

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_monitor")]
    pub default_monitor: i64,
    #[serde(default = "default_terminate_grace_ms")]
    pub terminate_grace_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Spawn this binary with a positional index instead of re-running ourselves.
    pub display_bin: Option<String>,
}

fn default_monitor() -> i64 {
    1
}

fn default_terminate_grace_ms() -> u64 {
    1000
}

fn default_poll_interval_ms() -> u64 {
    500
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("BLACKOUT_").from_env::<Config>()
    }

    pub fn terminate_grace(&self) -> Duration {
        Duration::from_millis(self.terminate_grace_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::from_env()
        .unwrap_or_else(|err| panic!("Failed to load configuration from env: {:#?}", err))
});
