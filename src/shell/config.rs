use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Start with the sample record `{id: "1", name: "Sam"}` in the store.
    pub seed_sample_person: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_sample_person: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or empty variables fall back to their defaults. Unparsable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match read("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("HOST must be an IP address, got {value:?}"))?,
            None => defaults.host,
        };
        let port = match read("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {value:?}"))?,
            None => defaults.port,
        };
        let seed_sample_person = match read("SEED_SAMPLE_PERSON") {
            Some(value) => parse_flag(&value).with_context(|| {
                format!("SEED_SAMPLE_PERSON must be true or false, got {value:?}")
            })?,
            None => defaults.seed_sample_person,
        };

        Ok(Self {
            host,
            port,
            seed_sample_person,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value {other:?}"),
    }
}
