//! Command line / environment options common to every app

use clap::Args;
use std::net::SocketAddr;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

/// HTTP listener and logging options, flattened into each app's `Args`
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, env = "APP_PORT")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Seconds a session may sit unused before it is dropped
    #[arg(long, env = "SESSION_IDLE_SECS", default_value_t = 1800)]
    pub session_idle_secs: u64,
}

impl ServerArgs {
    /// Resolve the listen address, using the app's default port when none was given
    pub fn socket_addr(&self, default_port: u16) -> SharedResult<SocketAddr> {
        let port = self.port.unwrap_or(default_port);
        format!("{}:{}", self.host, port)
            .parse()
            .map_err(|_| SharedError::config("host", format!("{}:{}", self.host, port)))
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs.max(1))
    }
}
