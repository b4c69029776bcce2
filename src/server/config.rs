//! Environment-based server configuration.

use std::{
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::server::error::config::ConfigError;

/// Address the server binds to when `HOST` is not set.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration read from environment variables.
///
/// # Variables
/// - `DATABASE_URL` - Connection string of the relational store (required)
/// - `HOST` - IP address to bind, defaults to `0.0.0.0`
/// - `PORT` - Port to listen on, defaults to `3000`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection string passed to SeaORM
    pub database_url: String,
    /// IP address to bind
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            host: parse_or(&lookup, "HOST", DEFAULT_HOST)?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
        })
    }

    /// Socket address the HTTP listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
