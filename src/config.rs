//! Process configuration sourced from the environment.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tracing::warn;

/// Runtime settings for the service process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// Location of the single-file SQLite database.
    pub database_path: PathBuf,
}

impl AppConfig {
    /// Port used when `PORT` is unset or unparsable.
    pub const DEFAULT_PORT: u16 = 3000;
    /// Database file used when `DATABASE_PATH` is unset.
    pub const DEFAULT_DATABASE_PATH: &'static str = "database.sqlite";

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary lookup function.
    ///
    /// An unparsable `PORT` logs a warning and falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    warn!(%raw, "ignoring unparsable PORT override");
                    None
                }
            })
            .unwrap_or(Self::DEFAULT_PORT);
        let database_path = lookup("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATABASE_PATH));
        Self { port, database_path }
    }

    /// Socket address the server binds to (all interfaces).
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
