use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Monitor covered when no index is given. 1 targets a second screen and
    /// falls back to the primary when there is none.
    #[serde(default = "default_monitor")]
    pub default_monitor: i64,
}

fn default_monitor() -> i64 {
    1
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("BLACKOUT_").from_env::<Config>()
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::from_env()
        .unwrap_or_else(|err| panic!("Failed to load configuration from env: {:#?}", err))
});

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::prefixed("BLACKOUT_").from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn defaults_to_second_monitor() {
        assert_eq!(parse(&[]).unwrap().default_monitor, 1);
    }

    #[test]
    fn reads_prefixed_variable() {
        let config = parse(&[("BLACKOUT_DEFAULT_MONITOR", "0")]).unwrap();
        assert_eq!(config.default_monitor, 0);
    }

    #[test]
    fn rejects_non_numeric_index() {
        assert!(parse(&[("BLACKOUT_DEFAULT_MONITOR", "left")]).is_err());
    }
}
