// src/config.rs
use std::env;

use crate::error::ConfigError;
use crate::shared::serializer::SerializationGroups;

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseConfig {
    /// Groups used when a caller does not pass any.
    pub default_groups: SerializationGroups,
    pub pretty_json: bool,
}

impl ResponseConfig {
    /// Load response settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_files();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_groups = lookup("RESPONSE_DEFAULT_GROUPS")
            .map(|raw| raw.parse::<SerializationGroups>().unwrap_or_default())
            .unwrap_or_default();

        let pretty_json = match lookup("RESPONSE_PRETTY_JSON") {
            Some(raw) => parse_bool("RESPONSE_PRETTY_JSON", &raw)?,
            None => false,
        };

        Ok(Self {
            default_groups,
            pretty_json,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_files();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT".to_string(),
                value: raw.clone(),
            })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
