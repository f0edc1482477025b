//! Process Configuration
//!
//! Read once at startup from the environment:
//! - `DATA_DIR` (default `./data`): directory of the store document.
//! - `PUBLIC_DIR` (default `./public`): static front-end assets.
//! - `PORT` (default `10000`): listens on `0.0.0.0:<PORT>`.
//! - `BIND_ADDR`: full socket address, overrides `PORT`.

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = match var("BIND_ADDR") {
            Some(addr) => addr
                .trim()
                .parse()
                .with_context(|| format!("BIND_ADDR is not a socket address: {}", addr))?,
            None => {
                let port = match var("PORT") {
                    Some(port) => port
                        .trim()
                        .parse()
                        .with_context(|| format!("PORT is not a valid port: {}", port))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)
            }
        };

        Ok(Self {
            bind_addr,
            data_dir: var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            public_dir: var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:10000".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.public_dir, PathBuf::from("./public"));
    }

    #[test]
    fn test_port_and_dirs_from_env() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("DATA_DIR", "/var/lib/companion"),
            ("PUBLIC_DIR", "/srv/www"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8081);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/companion"));
        assert_eq!(config.public_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_bind_addr_overrides_port() {
        let config = config_from(&[("PORT", "8081"), ("BIND_ADDR", "127.0.0.1:9000")]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "ten-thousand")]).unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "  "), ("DATA_DIR", "")]).unwrap();

        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
