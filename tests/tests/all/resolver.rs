use async_trait::async_trait;
use greeter_client::{LookupService, ServiceTarget};
use std::collections::HashSet;
use std::net::SocketAddr;

/// Resolves every hostname to a fixed set of local addresses, so the tests
/// never depend on the DNS configuration of the machine they run on.
pub struct StaticResolver {
    addresses: HashSet<SocketAddr>,
}

impl StaticResolver {
    /// A resolver pointing at a single local server.
    pub fn serving(port: u16) -> Self {
        Self {
            addresses: [SocketAddr::from(([127, 0, 0, 1], port))]
                .into_iter()
                .collect(),
        }
    }

    /// A resolver that finds no addresses at all.
    pub fn empty() -> Self {
        Self {
            addresses: HashSet::new(),
        }
    }
}

#[async_trait]
impl LookupService for StaticResolver {
    async fn resolve_endpoints(
        &self,
        _target: &ServiceTarget,
    ) -> Result<HashSet<SocketAddr>, anyhow::Error> {
        Ok(self.addresses.clone())
    }
}
