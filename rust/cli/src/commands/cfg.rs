//! `cfg`: print the resolved configuration and where each value came from.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_credits": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_credits": {
            "value": config.starting_credits,
            "source": sources.starting_credits,
        },
        "bet": {
            "value": config.bet,
            "source": sources.bet,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ENV_BET, ENV_CONFIG, ENV_SEED, ENV_STARTING_CREDITS, ENV_STRATEGY};
    use serial_test::serial;

    fn clear_env() {
        for key in [ENV_CONFIG, ENV_STARTING_CREDITS, ENV_BET, ENV_SEED, ENV_STRATEGY] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn prints_values_with_sources() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_BET, "4");
        }
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();
        clear_env();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["bet"]["value"], 4);
        assert_eq!(json["bet"]["source"], "env");
        assert_eq!(json["starting_credits"]["value"], 100);
        assert_eq!(json["starting_credits"]["source"], "default");
        assert!(json["seed"]["value"].is_null());
        assert_eq!(json["strategy"]["value"], "baseline");
    }

    #[test]
    #[serial]
    fn invalid_configuration_is_reported() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_STARTING_CREDITS, "0");
        }
        let mut out = Vec::new();
        let result = handle_cfg_command(&mut out);
        clear_env();

        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("starting_credits must be >0")),
            other => panic!("unexpected {:?}", other),
        }
        assert!(out.is_empty());
    }
}
