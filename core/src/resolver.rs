//! Forward DNS lookup for domain targets.
//!
//! Lookups go through the operating system resolver and block until it
//! answers. There is no timeout override, so a misbehaving resolver stalls the
//! session until it gives up on its own.

use std::io;
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

use contextlens_common::network::resolution::Resolution;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("lookup for '{domain}' failed: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: io::Error,
    },
    #[error("'{domain}' has no IPv4 address")]
    NoIpv4 { domain: String },
}

/// Source of forward lookups.
pub trait HostResolver {
    /// Returns the first IPv4 address the name resolves to.
    fn resolve_ipv4(&self, domain: &str) -> Result<Ipv4Addr, ResolveError>;
}

impl<T: HostResolver + ?Sized> HostResolver for &T {
    fn resolve_ipv4(&self, domain: &str) -> Result<Ipv4Addr, ResolveError> {
        (**self).resolve_ipv4(domain)
    }
}

/// Resolves through the platform's `getaddrinfo`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve_ipv4(&self, domain: &str) -> Result<Ipv4Addr, ResolveError> {
        let addrs = (domain, 0u16)
            .to_socket_addrs()
            .map_err(|source| ResolveError::Lookup {
                domain: domain.to_string(),
                source,
            })?;

        addrs
            .filter_map(|addr| match addr.ip() {
                IpAddr::V4(ipv4_addr) => Some(ipv4_addr),
                IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| ResolveError::NoIpv4 {
                domain: domain.to_string(),
            })
    }
}

/// Makes exactly one lookup attempt and folds any failure into `Unresolved`.
pub fn resolve<R: HostResolver + ?Sized>(resolver: &R, domain: &str) -> Resolution {
    match resolver.resolve_ipv4(domain) {
        Ok(addr) => {
            debug!("{domain} resolved to {addr}");
            Resolution::Resolved(addr)
        }
        Err(e) => {
            debug!("{e}");
            Resolution::Unresolved
        }
    }
}
