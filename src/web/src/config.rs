use roster::RosterSettings;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 18000;

const PORT_KEY: &str = "ROSTER_PORT";
const ALLOW_DUPLICATE_NAMES_KEY: &str = "ROSTER_ALLOW_DUPLICATE_NAMES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a port number, got '{value}'")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} must be true/false, got '{value}'")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub roster: RosterSettings,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(PORT_KEY) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                key: PORT_KEY,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let allow_duplicates = match lookup(ALLOW_DUPLICATE_NAMES_KEY) {
            Some(value) => parse_flag(ALLOW_DUPLICATE_NAMES_KEY, value)?,
            None => false,
        };

        let roster = if allow_duplicates {
            RosterSettings::allow_duplicate_names()
        } else {
            RosterSettings::default()
        };

        Ok(ServerConfig { port, roster })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            roster: RosterSettings::default(),
        }
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}
