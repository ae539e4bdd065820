//! Layered configuration: built-in defaults, then a TOML file named by
//! `JACKS_CONFIG`, then `JACKS_*` environment variables. Command-line flags
//! are applied on top by each command.

use jacks_ai::STRATEGY_NAMES;
use jacks_engine::rules::{DEFAULT_STARTING_CREDITS, MAX_BET, MIN_BET};
use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "JACKS_CONFIG";
pub const ENV_STARTING_CREDITS: &str = "JACKS_STARTING_CREDITS";
pub const ENV_BET: &str = "JACKS_BET";
pub const ENV_SEED: &str = "JACKS_SEED";
pub const ENV_STRATEGY: &str = "JACKS_STRATEGY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_credits: u32,
    pub bet: u8,
    pub seed: Option<u64>,
    pub strategy: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_credits: ValueSource,
    pub bet: ValueSource,
    pub seed: ValueSource,
    pub strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_credits: ValueSource::Default,
            bet: ValueSource::Default,
            seed: ValueSource::Default,
            strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_STARTING_CREDITS,
            bet: MIN_BET,
            seed: None,
            strategy: "baseline".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_credits {
            cfg.starting_credits = v;
            sources.starting_credits = ValueSource::File;
        }
        if let Some(v) = f.bet {
            cfg.bet = v;
            sources.bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
    }

    if let Ok(credits) = std::env::var(ENV_STARTING_CREDITS)
        && !credits.is_empty()
    {
        cfg.starting_credits = credits
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_credits".into()))?;
        sources.starting_credits = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var(ENV_BET)
        && !bet.is_empty()
    {
        cfg.bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet".into()))?;
        sources.bet = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var(ENV_STRATEGY)
        && !strategy.is_empty()
    {
        cfg.strategy = strategy;
        sources.strategy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_credits: Option<u32>,
    #[serde(default)]
    bet: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    strategy: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_credits == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_credits must be >0".into(),
        ));
    }
    if !(MIN_BET..=MAX_BET).contains(&cfg.bet) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: bet must be between {} and {}",
            MIN_BET, MAX_BET
        )));
    }
    if !STRATEGY_NAMES.contains(&cfg.strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy {:?}",
            cfg.strategy
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [
            ENV_CONFIG,
            ENV_STARTING_CREDITS,
            ENV_BET,
            ENV_SEED,
            ENV_STRATEGY,
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.bet, ValueSource::Default);
        assert_eq!(resolved.config.starting_credits, 100);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_credits = 250\nbet = 3\nseed = 9").unwrap();
        unsafe {
            std::env::set_var(ENV_CONFIG, file.path());
            std::env::set_var(ENV_SEED, "77");
        }

        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.starting_credits, 250);
        assert_eq!(resolved.sources.starting_credits, ValueSource::File);
        assert_eq!(resolved.config.bet, 3);
        assert_eq!(resolved.config.seed, Some(77));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        clear_env();
    }

    #[test]
    #[serial]
    fn out_of_range_bet_is_rejected() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_BET, "9");
        }
        let err = load().unwrap_err();
        assert!(err.to_string().contains("bet must be between 1 and 5"));
        clear_env();
    }

    #[test]
    #[serial]
    fn unknown_strategy_is_rejected() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_STRATEGY, "psychic");
        }
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn unknown_file_keys_are_rejected() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = 3").unwrap();
        unsafe {
            std::env::set_var(ENV_CONFIG, file.path());
        }
        assert!(matches!(load(), Err(ConfigError::Parse(_))));
        clear_env();
    }
}
