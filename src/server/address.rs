use crate::error::{DocsError, Result};
use std::io;
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

/// Network address of the server, resolved once after binding.
///
/// `display_host` is what visit URLs show: `localhost` when the bind host is
/// the all-interfaces wildcard, the bound host otherwise. The substitution is
/// cosmetic only and never affects the actual bind address.
#[derive(Clone, Debug)]
pub struct ResolvedAddress {
    pub bound_host: String,
    pub bound_port: u16,
    pub display_host: String,
}

/// A bound listener together with its resolved address.
///
/// Binding happens before anything else is started so address errors abort
/// startup, and so a port-0 request resolves to the real ephemeral port
/// before any visit URL is built.
#[derive(Debug)]
pub struct BoundAddress {
    listener: TcpListener,
    local: SocketAddr,
    resolved: ResolvedAddress,
}

impl BoundAddress {
    pub fn resolved(&self) -> &ResolvedAddress {
        &self.resolved
    }

    /// Release the probe socket and hand over the concrete bound address.
    ///
    /// The coroutine transport binds its own listener, so the socket held
    /// here is dropped immediately before the server starts on the same
    /// address.
    pub fn release(self) -> SocketAddr {
        drop(self.listener);
        self.local
    }
}

/// Bind a TCP listener on `host:port`, preferring IPv4.
///
/// Port 0 asks the OS for any free port; the returned address reflects the
/// actual bound port, not the requested one. Fails when the address is in
/// use, the host cannot be resolved, or binding requires privileges the
/// process lacks.
pub fn bind(host: &str, port: u16) -> Result<BoundAddress> {
    let requested = format!("{host}:{port}");

    let candidates: Vec<SocketAddr> = requested
        .to_socket_addrs()
        .map_err(|source| DocsError::Bind {
            addr: requested.clone(),
            source,
        })?
        .collect();
    let addr = candidates
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| DocsError::Bind {
            addr: requested.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "host resolved to no addresses"),
        })?;

    let listener = TcpListener::bind(addr).map_err(|source| DocsError::Bind {
        addr: requested.clone(),
        source,
    })?;
    let local = listener.local_addr().map_err(|source| DocsError::Bind {
        addr: requested,
        source,
    })?;

    let bound_host = local.ip().to_string();
    let display_host = if local.ip().is_unspecified() {
        "localhost".to_string()
    } else {
        bound_host.clone()
    };

    Ok(BoundAddress {
        listener,
        local,
        resolved: ResolvedAddress {
            bound_host,
            bound_port: local.port(),
            display_host,
        },
    })
}
