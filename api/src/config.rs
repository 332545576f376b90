//! Service configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Listener port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment name reported when `APP_ENV` is unset.
pub const DEFAULT_APP_ENV: &str = "local";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

/// Service configuration.
///
/// Field names map to upper-cased environment variables (`port` <- `PORT`).
/// Values are read once at startup and shared with handlers through
/// [`AppState`](crate::states::AppState).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Listener port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment, reported verbatim by `GET /`.
    #[serde(default = "default_app_env")]
    pub app_env: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_app_env() -> String {
    DEFAULT_APP_ENV.to_string()
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `PORT` that is not a valid u16 is an error rather than falling back
    /// to the default.
    pub fn load() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Load configuration from explicit key/value pairs.
    #[cfg(test)]
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
    }

    /// Address the listener binds to: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            app_env: default_app_env(),
        }
    }
}
