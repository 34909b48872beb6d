//! Runtime settings for the `subnet-math` binary.
//!
//! Values come from the process environment; call `dotenv::dotenv()` first to
//! pick up a local `.env` file.

use std::path::PathBuf;

pub const ENV_LOG_CONFIG: &str = "SUBNET_MATH_LOG_CONFIG";
pub const ENV_SIBLING_LIMIT: &str = "SUBNET_MATH_SIBLING_LIMIT";
pub const ENV_SUBNET: &str = "SUBNET_MATH_SUBNET";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_SIBLING_LIMIT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Max number of sibling subnets printed.
    pub sibling_limit: usize,
    /// Subnet used when no arguments are given.
    pub default_subnet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            sibling_limit: DEFAULT_SIBLING_LIMIT,
            default_subnet: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }

        if let Some(limit) = lookup(ENV_SIBLING_LIMIT) {
            match limit.trim().parse::<usize>() {
                Ok(limit) => config.sibling_limit = limit,
                Err(e) => log::warn!(
                    "{ENV_SIBLING_LIMIT}={limit:?} is not a number ({e}), using {DEFAULT_SIBLING_LIMIT}"
                ),
            }
        }

        config.default_subnet = lookup(ENV_SUBNET)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        config
    }
}
