use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Base path of the Lyf public kitty API; the kitty identifier is appended to it.
pub const LYF_API_BASE_URL: &str = "https://api.lyf.eu/public/api/kitties/";

pub const DEFAULT_DELAY: Duration = Duration::from_secs(60);
pub const DEFAULT_PORT: u16 = 8080;

const KITTY_UUID_VAR: &str = "LYF_KITTY_UUID";
const DELAY_VAR: &str = "LYF_DELAY";
const PORT_VAR: &str = "LYF_PORT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("error parsing LYF_DELAY {value:?}: {reason}")]
    InvalidDelay { value: String, reason: String },
    #[error("error parsing LYF_PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Environment configuration
/// Resolved once at startup and never changed afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub delay: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary key lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let url = format!("{}{}", LYF_API_BASE_URL, lookup(KITTY_UUID_VAR).unwrap_or_default());

        let delay = match setting(DELAY_VAR) {
            Some(value) => parse_duration(&value)
                .map_err(|reason| ConfigError::InvalidDelay { value, reason })?,
            None => DEFAULT_DELAY,
        };

        let port = match setting(PORT_VAR) {
            Some(value) => parse_port(&value)
                .map_err(|reason| ConfigError::InvalidPort { value, reason })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { url, delay, port })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(value: &str) -> Result<u16, String> {
    match value.parse::<u16>() {
        Ok(0) => Err("port must be positive".to_string()),
        Ok(port) => Ok(port),
        Err(e) => Err(e.to_string()),
    }
}

/// Parse a duration such as `66s`, `1m30s`, `1.5h` or `250ms`.
/// Every number needs a unit, and the total must be positive.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    if input.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut rest = input;
    let mut total_nanos = 0f64;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number = &rest[..number_len];
        if !number.chars().any(|c| c.is_ascii_digit()) || number.matches('.').count() > 1 {
            return Err(format!("invalid number in duration {:?}", input));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| format!("invalid number in duration {:?}", input))?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        if unit.is_empty() {
            return Err(format!("missing unit in duration {:?}", input));
        }
        let unit_nanos = unit_in_nanos(unit)
            .ok_or_else(|| format!("unknown unit {:?} in duration {:?}", unit, input))?;
        rest = &rest[unit_len..];

        total_nanos += value * unit_nanos;
    }

    if total_nanos > u64::MAX as f64 {
        return Err(format!("duration {:?} is out of range", input));
    }
    let nanos = total_nanos.round() as u64;
    if nanos == 0 {
        return Err("duration must be positive".to_string());
    }

    Ok(Duration::from_nanos(nanos))
}

fn unit_in_nanos(unit: &str) -> Option<f64> {
    let nanos = match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        _ => return None,
    };
    Some(nanos)
}
