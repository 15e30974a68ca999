//! Configuration and constants for the service and CLI.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port (overridden by `PORT`)
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address (overridden by `HOST`)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default cap on request body size (2 MiB)
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// The single statistics endpoint
pub const STATISTICS_ROUTE: &str = "/users/statistics";

/// Maximum number of states reported per distribution
pub const MAX_STATES: usize = 10;

/// Indent width for XML responses
pub const XML_INDENT: usize = 4;

/// Body sent with a 406 response
pub const NOT_ACCEPTABLE_MESSAGE: &str =
    "Please modify accept header to \"application/json\", \"text/plain\", or \"application/xml\".";

/// Group label for records without a location.state
pub const UNKNOWN_STATE: &str = "unknown";

/// Runtime settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind_addr: SocketAddr,

    /// Largest accepted request body, in bytes
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            bind_addr: SocketAddr::new(host, port),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
    }
}
