//! Configuration management for the PE ID validator server.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured when present.
//! Nothing here writes to stdout, which the MCP transport owns.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Upper bound accepted for `PE_ID_MAX_BATCH_SIZE`.
pub const MAX_BATCH_SIZE_LIMIT: usize = 10_000;

/// Configuration for the validator server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of identifiers accepted in one batch call (default: 100)
    pub max_batch_size: usize,

    /// Whether tool replies carry a human-readable message (default: true)
    pub include_messages: bool,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PE_ID_MAX_BATCH_SIZE`: Max items per batch, 1-10000 (default: 100)
    /// - `PE_ID_INCLUDE_MESSAGES`: true/false, yes/no or 1/0 (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let max_batch_size = Self::parse_env_usize("PE_ID_MAX_BATCH_SIZE", 100)?;
        if max_batch_size == 0 || max_batch_size > MAX_BATCH_SIZE_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "PE_ID_MAX_BATCH_SIZE".to_string(),
                reason: format!("Must be between 1 and {}", MAX_BATCH_SIZE_LIMIT),
            });
        }

        let include_messages = Self::parse_env_bool("PE_ID_INCLUDE_MESSAGES", true)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            max_batch_size,
            include_messages,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_batch_size: 100,
            include_messages: true,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["PE_ID_MAX_BATCH_SIZE", "PE_ID_INCLUDE_MESSAGES", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_batch_size, 100);
        assert!(config.include_messages);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_batch_size, 100);
        assert!(config.include_messages);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("PE_ID_MAX_BATCH_SIZE", "250");
        guard.set("PE_ID_INCLUDE_MESSAGES", "no");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_batch_size, 250);
        assert!(!config.include_messages);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_batch_size_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.set("PE_ID_MAX_BATCH_SIZE", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "PE_ID_MAX_BATCH_SIZE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }

        guard.set("PE_ID_MAX_BATCH_SIZE", "10001");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_batch_size_not_a_number() {
        let mut guard = EnvGuard::new();
        guard.set("PE_ID_MAX_BATCH_SIZE", "lots");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    #[serial]
    fn test_config_invalid_bool() {
        let mut guard = EnvGuard::new();
        guard.set("PE_ID_INCLUDE_MESSAGES", "maybe");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "PE_ID_INCLUDE_MESSAGES");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "  ");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_TRUE", "TRUE");
        guard.set("TEST_BOOL_ZERO", "0");

        assert!(Config::parse_env_bool("TEST_BOOL_TRUE", false).unwrap());
        assert!(!Config::parse_env_bool("TEST_BOOL_ZERO", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }
}
