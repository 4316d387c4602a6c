//! Deployment environment and the logger settings derived from it

use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};

/// Deployment stage the server runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Reads `ENVIRONMENT`, then `ENV`, then `RUST_ENV`
    ///
    /// Unset or unrecognised values fall back to development.
    pub fn from_env() -> Self {
        ["ENVIRONMENT", "ENV", "RUST_ENV"]
            .iter()
            .find_map(|name| env::var(name).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

/// Logger settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive (e.g. `info`, `ts_api=debug`)
    pub level: String,

    /// Prefix records with a timestamp
    #[serde(default = "default_true")]
    pub timestamps: bool,

    /// Print the module path of each record
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Defaults for `environment`: verbose in development, quiet in production
    pub fn for_environment(environment: Environment) -> Self {
        let level = match environment {
            Environment::Development => "debug",
            Environment::Staging => "info",
            Environment::Production => "warn,ts_api=info",
        };

        Self {
            level: level.to_string(),
            timestamps: true,
            show_target: environment.is_development(),
        }
    }

    /// Effective filter directive; `LOG_LEVEL` takes precedence over `level`
    pub fn filter(&self) -> String {
        env::var("LOG_LEVEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.level.clone())
    }
}

fn default_true() -> bool {
    true
}
