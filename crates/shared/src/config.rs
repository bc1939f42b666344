//! Application configuration management.
//!
//! Configuration is layered, lowest priority first:
//! 1. Per-environment defaults (see [`RunEnvironment`])
//! 2. `config/default.toml` (optional)
//! 3. `config/{environment}.toml` (optional)
//! 4. Unprefixed `EXCHANGE_RATE_HOST` / `EXCHANGE_RATE_DECIMAL_PLACES`
//! 5. `FXGATE__*` environment variables, e.g. `FXGATE__EXCHANGE_RATE__HOST`
//!
//! The result is built once at startup and handed to whoever needs it.

use std::fmt;

use serde::Deserialize;

/// Environment variable selecting the run environment.
pub const RUN_MODE_VAR: &str = "RUN_MODE";

/// Older name for [`RUN_MODE_VAR`], read when it is unset.
pub const ENV_VAR: &str = "ENV";

/// Unprefixed variables accepted below their `FXGATE__` equivalents,
/// paired with the nested key they set.
const UNPREFIXED_VARS: [(&str, &str); 2] = [
    ("EXCHANGE_RATE_HOST", "EXCHANGE_RATE__HOST"),
    ("EXCHANGE_RATE_DECIMAL_PLACES", "EXCHANGE_RATE__DECIMAL_PLACES"),
];

/// Largest precision a `rust_decimal::Decimal` can carry.
const MAX_DECIMAL_PLACES: u32 = 28;

/// Deployment environment the process runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunEnvironment {
    /// Local development.
    #[default]
    Dev,
    /// Staging.
    Staging,
    /// Production.
    Prod,
}

impl RunEnvironment {
    /// Parses an environment name. Unknown names select `Dev`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "stg" | "staging" => Self::Staging,
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    /// Reads the environment from `RUN_MODE`, then `ENV`.
    #[must_use]
    pub fn current() -> Self {
        std::env::var(RUN_MODE_VAR)
            .or_else(|_| std::env::var(ENV_VAR))
            .map(|name| Self::from_name(&name))
            .unwrap_or_default()
    }

    /// Short name, used for config file lookup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "stg",
            Self::Prod => "prod",
        }
    }

    /// Default log level for this environment.
    #[must_use]
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Dev => "debug",
            Self::Staging | Self::Prod => "info",
        }
    }

    /// Name of the dotenv file holding this environment's variables.
    #[must_use]
    pub const fn env_file(self) -> &'static str {
        match self {
            Self::Dev => ".dev.env",
            Self::Staging => ".stg.env",
            Self::Prod => ".prod.env",
        }
    }
}

impl fmt::Display for RunEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment this configuration was resolved for.
    #[serde(skip)]
    pub environment: RunEnvironment,
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream exchange rate provider configuration.
    pub exchange_rate: ExchangeRateConfig,
    /// Logging configuration.
    pub log: LogConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Upstream exchange rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateConfig {
    /// Base URL of the provider, e.g. `https://api.exchangerate.host`.
    pub host: String,
    /// Decimal places requested from the provider and used for rounding.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Level directive applied to fxgate crates (`debug`, `info`, ...).
    pub level: String,
}

impl AppConfig {
    /// Loads configuration for the environment named by `RUN_MODE`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_for(RunEnvironment::current())
    }

    /// Loads configuration for the given environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed, the upstream host is
    /// missing, or the decimal places are out of range.
    pub fn load_for(environment: RunEnvironment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("log.level", environment.default_log_level())?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::File::with_name(&format!("config/{}", environment.name())).required(false),
            )
            .add_source(unprefixed_environment())
            .add_source(config::Environment::with_prefix("FXGATE").separator("__"))
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.environment = environment;

        if app_config.exchange_rate.decimal_places > MAX_DECIMAL_PLACES {
            return Err(config::ConfigError::Message(format!(
                "exchange_rate.decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                app_config.exchange_rate.decimal_places
            )));
        }

        Ok(app_config)
    }
}

fn unprefixed_environment() -> config::Environment {
    let vars = UNPREFIXED_VARS
        .iter()
        .filter_map(|(name, key)| Some(((*key).to_string(), std::env::var(name).ok()?)))
        .collect::<config::Map<String, String>>();

    config::Environment::default()
        .separator("__")
        .source(Some(vars))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST_VAR: &str = "FXGATE__EXCHANGE_RATE__HOST";
    const PLACES_VAR: &str = "FXGATE__EXCHANGE_RATE__DECIMAL_PLACES";
    const LEVEL_VAR: &str = "FXGATE__LOG__LEVEL";
    const PLAIN_HOST_VAR: &str = "EXCHANGE_RATE_HOST";
    const PLAIN_PLACES_VAR: &str = "EXCHANGE_RATE_DECIMAL_PLACES";

    #[test]
    fn test_environment_from_name() {
        assert_eq!(RunEnvironment::from_name("dev"), RunEnvironment::Dev);
        assert_eq!(RunEnvironment::from_name("STG"), RunEnvironment::Staging);
        assert_eq!(RunEnvironment::from_name("staging"), RunEnvironment::Staging);
        assert_eq!(RunEnvironment::from_name("Prod"), RunEnvironment::Prod);
        assert_eq!(RunEnvironment::from_name("production"), RunEnvironment::Prod);
        assert_eq!(RunEnvironment::from_name("qa"), RunEnvironment::Dev);
        assert_eq!(RunEnvironment::from_name(""), RunEnvironment::Dev);
    }

    #[test]
    fn test_environment_defaults_table() {
        assert_eq!(RunEnvironment::Dev.default_log_level(), "debug");
        assert_eq!(RunEnvironment::Staging.default_log_level(), "info");
        assert_eq!(RunEnvironment::Prod.default_log_level(), "info");
        assert_eq!(RunEnvironment::Staging.env_file(), ".stg.env");
        assert_eq!(RunEnvironment::Prod.to_string(), "prod");
    }

    #[test]
    fn test_current_reads_run_mode() {
        temp_env::with_var(RUN_MODE_VAR, Some("prod"), || {
            assert_eq!(RunEnvironment::current(), RunEnvironment::Prod);
        });
        temp_env::with_vars_unset([RUN_MODE_VAR, ENV_VAR], || {
            assert_eq!(RunEnvironment::current(), RunEnvironment::Dev);
        });
    }

    #[test]
    fn test_current_falls_back_to_env() {
        temp_env::with_vars([(RUN_MODE_VAR, None), (ENV_VAR, Some("stg"))], || {
            assert_eq!(RunEnvironment::current(), RunEnvironment::Staging);
        });
        temp_env::with_vars([(RUN_MODE_VAR, Some("prod")), (ENV_VAR, Some("stg"))], || {
            assert_eq!(RunEnvironment::current(), RunEnvironment::Prod);
        });
    }

    #[test]
    fn test_load_unprefixed_settings() {
        temp_env::with_vars(
            [
                (HOST_VAR, None),
                (PLACES_VAR, None),
                (PLAIN_HOST_VAR, Some("https://plain.example.com")),
                (PLAIN_PLACES_VAR, Some("5")),
            ],
            || {
                let config = AppConfig::load_for(RunEnvironment::Dev).unwrap();
                assert_eq!(config.exchange_rate.host, "https://plain.example.com");
                assert_eq!(config.exchange_rate.decimal_places, 5);
            },
        );
    }

    #[test]
    fn test_prefixed_settings_win() {
        temp_env::with_vars(
            [
                (HOST_VAR, Some("https://rates.example.com")),
                (PLACES_VAR, Some("3")),
                (PLAIN_HOST_VAR, Some("https://plain.example.com")),
                (PLAIN_PLACES_VAR, Some("5")),
            ],
            || {
                let config = AppConfig::load_for(RunEnvironment::Dev).unwrap();
                assert_eq!(config.exchange_rate.host, "https://rates.example.com");
                assert_eq!(config.exchange_rate.decimal_places, 3);
            },
        );
    }

    #[test]
    fn test_load_with_defaults() {
        temp_env::with_vars(
            [
                (HOST_VAR, Some("https://rates.example.com")),
                (PLACES_VAR, None),
                (PLAIN_PLACES_VAR, None),
                (LEVEL_VAR, None),
            ],
            || {
                let config = AppConfig::load_for(RunEnvironment::Dev).unwrap();
                assert_eq!(config.environment, RunEnvironment::Dev);
                assert_eq!(config.exchange_rate.host, "https://rates.example.com");
                assert_eq!(config.exchange_rate.decimal_places, 2);
                assert_eq!(config.log.level, "debug");
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_load_env_overrides() {
        temp_env::with_vars(
            [
                (HOST_VAR, Some("https://rates.example.com")),
                (PLACES_VAR, Some("4")),
                (LEVEL_VAR, Some("warn")),
            ],
            || {
                let config = AppConfig::load_for(RunEnvironment::Prod).unwrap();
                assert_eq!(config.exchange_rate.decimal_places, 4);
                assert_eq!(config.log.level, "warn");
            },
        );
    }

    #[test]
    fn test_prod_defaults_to_info() {
        temp_env::with_vars(
            [
                (HOST_VAR, Some("https://rates.example.com")),
                (LEVEL_VAR, None),
            ],
            || {
                let config = AppConfig::load_for(RunEnvironment::Prod).unwrap();
                assert_eq!(config.log.level, "info");
            },
        );
    }

    #[test]
    fn test_load_requires_host() {
        temp_env::with_vars_unset([HOST_VAR, PLAIN_HOST_VAR], || {
            assert!(AppConfig::load_for(RunEnvironment::Dev).is_err());
        });
    }

    #[test]
    fn test_load_rejects_excessive_places() {
        temp_env::with_vars(
            [
                (HOST_VAR, Some("https://rates.example.com")),
                (PLACES_VAR, Some("29")),
            ],
            || {
                assert!(AppConfig::load_for(RunEnvironment::Dev).is_err());
            },
        );
    }
}
