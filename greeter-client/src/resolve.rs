//! Endpoint lookup: turning the target hostname into the set of socket
//! addresses that back the greeter service.

use crate::ServiceTarget;
use anyhow::Context;
use hickory_resolver::{system_conf, TokioAsyncResolver};
use std::collections::HashSet;
use std::net::SocketAddr;

/// Interface the connector uses to acquire the addresses backing a
/// [`ServiceTarget`].
///
/// An empty set means the name resolved to nothing.
#[async_trait::async_trait]
pub trait LookupService {
    /// Return the unique [`SocketAddr`]s serving the target, combining
    /// [`ServiceTarget::hostname`] resolution results with
    /// [`ServiceTarget::port`].
    async fn resolve_endpoints(
        &self,
        target: &ServiceTarget,
    ) -> Result<HashSet<SocketAddr>, anyhow::Error>;
}

/// Implements [`LookupService`] with DNS queries against the resolvers in
/// the system configuration.
pub struct DnsResolver {
    /// Contacts the dns service directly so os level caches are bypassed.
    dns: TokioAsyncResolver,
}

impl DnsResolver {
    /// Construct a [`DnsResolver`] from env and system configuration,
    /// e.g. `resolv.conf`.
    pub fn from_system_config() -> Result<Self, anyhow::Error> {
        let (config, mut opts) = system_conf::read_system_conf()
            .context("failed to read dns services from system configuration")?;

        // No caching on our side either.
        opts.cache_size = 0;

        Ok(Self {
            dns: TokioAsyncResolver::tokio(config, opts),
        })
    }
}

#[async_trait::async_trait]
impl LookupService for DnsResolver {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn resolve_endpoints(
        &self,
        target: &ServiceTarget,
    ) -> Result<HashSet<SocketAddr>, anyhow::Error> {
        let lookup = self
            .dns
            .lookup_ip(target.hostname())
            .await
            .with_context(|| format!("dns lookup for '{}' failed", target.hostname()))?;

        tracing::debug!("dns answer expires at {:?}", lookup.valid_until());

        Ok(lookup
            .iter()
            .map(|ip| SocketAddr::from((ip, target.port())))
            .collect())
    }
}
