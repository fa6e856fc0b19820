//! The validated client target, split out of the `host:port` address string.

use anyhow::Context;

/// The greeter service to dial, as a `hostname` and a `port`.
///
/// The hostname is resolved to the concrete addresses of the servers backing
/// the service; the port applies to every resolved address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTarget {
    hostname: String,
    port: u16,
}

impl ServiceTarget {
    /// Parse an `address` of the form `host:port`.
    ///
    /// Fails if the port is missing or out of range, or if the host is not
    /// a valid ASCII domain name.
    pub fn parse(address: &str) -> Result<Self, anyhow::Error> {
        let (hostname, port) = address
            .rsplit_once(':')
            .with_context(|| format!("address '{address}' is not of the form host:port"))?;

        if hostname.is_empty() {
            anyhow::bail!("address '{address}' has an empty host");
        }

        let port: u16 = port
            .parse()
            .with_context(|| format!("address '{address}' has an invalid port"))?;

        hickory_resolver::Name::from_ascii(hostname)
            .map_err(anyhow::Error::from)
            .with_context(|| format!("address '{address}' has an invalid hostname"))?;

        Ok(Self {
            hostname: hostname.to_string(),
            port,
        })
    }

    /// Get the `hostname` part of the target.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Get the `port` part of the target.
    pub fn port(&self) -> u16 {
        self.port
    }
}
