use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use stampr_config::network::NetworkConfig;

/// Synchronous "is the network usable right now" check. May block the
/// calling thread for the length of a probe.
pub trait ConnectivityGate: Send + Sync {
    fn is_available(&self) -> bool;
}

/// Reports available when a TCP connection to the probe address opens
/// within the timeout.
pub struct TcpProbeGate {
    addr: String,
    timeout: Duration,
}

impl TcpProbeGate {
    pub fn new(addr: String, timeout: Duration) -> Self {
        Self { addr, timeout }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.probe_addr.clone(), config.probe_timeout())
    }
}

impl ConnectivityGate for TcpProbeGate {
    fn is_available(&self) -> bool {
        let addrs = match self.addr.to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                tracing::debug!("Connectivity probe could not resolve {}: {}", self.addr, e);
                return false;
            }
        };

        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => return true,
                Err(e) => tracing::debug!("Connectivity probe to {} failed: {}", addr, e),
            }
        }
        false
    }
}

/// Fixed answer. Used for offline backends and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticGate(pub bool);

impl ConnectivityGate for StaticGate {
    fn is_available(&self) -> bool {
        self.0
    }
}
