// DNS resolution seam
//
// Reconciliation compares stored interface addresses against a fresh
// forward resolution. The trait exists so the batch driver can be tested
// without touching the network; production uses the OS resolver.

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use thiserror::Error;

/// Errors from forward DNS resolution.
///
/// Always a per-member failure, never fatal to a batch.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("lookup failed for {name}: {source}")]
    Lookup {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no IPv4 address found for {name}")]
    NoIpv4 { name: String },

    #[error("lookup timed out for {name} after {seconds}s")]
    Timeout { name: String, seconds: u64 },
}

/// Forward DNS resolution to a single IPv4 address.
pub trait Resolver {
    fn resolve_ipv4(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Ipv4Addr, ResolveError>> + Send;
}

/// Resolver backed by the operating system (`getaddrinfo` via tokio).
///
/// Returns the first IPv4 address; v6-only names are an error because
/// the inventory interfaces store dotted-quad addresses.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Resolver for SystemResolver {
    async fn resolve_ipv4(&self, name: &str) -> Result<Ipv4Addr, ResolveError> {
        let lookup = tokio::net::lookup_host((name, 0u16));

        let addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| ResolveError::Timeout {
                name: name.to_owned(),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|source| ResolveError::Lookup {
                name: name.to_owned(),
                source,
            })?;

        addrs
            .filter_map(|addr| match addr.ip() {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| ResolveError::NoIpv4 {
                name: name.to_owned(),
            })
    }
}
