// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_vars};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or comma-separated origins
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Progress synthesis settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Fixed seed, entropy when `None`
    pub seed: Option<u64>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Progress synthesis settings
    pub progress: ProgressConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            cors: CorsConfig::default(),
            progress: ProgressConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HTTP_HOST, defaults::HTTP_HOST)
                .parse()
                .with_context(|| format!("Invalid {} value", env_vars::HTTP_HOST))?,
            http_port: env_var_or(env_vars::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .with_context(|| format!("Invalid {} value", env_vars::HTTP_PORT))?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            progress: ProgressConfig {
                seed: env::var(env_vars::PROGRESS_SEED)
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| value.trim().parse::<u64>())
                    .transpose()
                    .with_context(|| format!("Invalid {} value", env_vars::PROGRESS_SEED))?,
            },
        };

        Ok(config)
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrilog Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Progress Seed: {}",
            self.bind_address(),
            self.environment,
            self.cors.allowed_origins,
            self.progress
                .seed
                .map_or_else(|| "entropy".to_owned(), |seed| seed.to_string()),
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [
        env_vars::HTTP_HOST,
        env_vars::HTTP_PORT,
        env_vars::CORS_ALLOWED_ORIGINS,
        env_vars::PROGRESS_SEED,
        env_vars::ENVIRONMENT,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_environment_is_empty() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:5000");
    }

    #[test]
    #[serial]
    fn test_reads_overrides() {
        clear_env();
        env::set_var(env_vars::HTTP_HOST, "127.0.0.1");
        env::set_var(env_vars::HTTP_PORT, "8088");
        env::set_var(env_vars::CORS_ALLOWED_ORIGINS, "https://app.example.com");
        env::set_var(env_vars::PROGRESS_SEED, "42");
        env::set_var(env_vars::ENVIRONMENT, "prod");

        let config = ServerConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.bind_address().to_string(), "127.0.0.1:8088");
        assert_eq!(config.cors.allowed_origins, "https://app.example.com");
        assert_eq!(config.progress.seed, Some(42));
        assert!(config.environment.is_production());
    }

    #[test]
    #[serial]
    fn test_invalid_port_names_variable() {
        clear_env();
        env::set_var(env_vars::HTTP_PORT, "not-a-port");

        let error = ServerConfig::from_env().unwrap_err();
        clear_env();

        assert!(error.to_string().contains("HTTP_PORT"));
    }

    #[test]
    #[serial]
    fn test_invalid_seed_is_rejected() {
        clear_env();
        env::set_var(env_vars::PROGRESS_SEED, "-1");

        let result = ServerConfig::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_summary_mentions_seed_source() {
        let config = ServerConfig::default();
        assert!(config.summary().contains("Progress Seed: entropy"));
    }
}
