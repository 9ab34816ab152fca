use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_SENDY_SUBSCRIBE_URL: &str = "https://emails.lla.in/subscribe";
pub const DEFAULT_SENDY_LIST_ID: &str = "Swp1LXRsIYwvp9JJTjvysw";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub sendy: SendyConfig,
}

#[derive(Debug, Clone)]
pub struct SendyConfig {
    pub subscribe_url: String,
    pub list_id: String,
    /// `None` leaves the request timeout to the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for SendyConfig {
    fn default() -> Self {
        SendyConfig {
            subscribe_url: DEFAULT_SENDY_SUBSCRIBE_URL.to_string(),
            list_id: DEFAULT_SENDY_LIST_ID.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. `from_env` is the
    /// process-environment flavour of this.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("Missing required environment variable: {key}"))
        };
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = required("DATABASE_URL")?;

        let host: IpAddr = or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = or("INTAKE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let max_body_size: usize = or("INTAKE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let log_level = or("INTAKE_LOG_LEVEL", "info");

        let timeout = match lookup("INTAKE_SENDY_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(
                secs.parse()
                    .map_err(|e| format!("Invalid INTAKE_SENDY_TIMEOUT_SECS: {e}"))?,
            )),
            None => None,
        };

        let sendy = SendyConfig {
            subscribe_url: or("SENDY_SUBSCRIBE_URL", DEFAULT_SENDY_SUBSCRIBE_URL),
            list_id: or("SENDY_LIST_ID", DEFAULT_SENDY_LIST_ID),
            timeout,
        };

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            log_level,
            sendy,
        })
    }
}
