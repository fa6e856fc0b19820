//! Builds the channel the caller loop issues greetings over.

use crate::{ClientError, Config, DnsResolver, LookupService, ServiceTarget};
use http::Request;
use std::task::{Context, Poll};
use tonic::body::BoxBody;
use tonic::client::GrpcService;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tower_service::Service;

/// Channel to the greeter service, balanced over every resolved backend.
///
/// Exactly one of these exists per client run; it outlives all the calls
/// made through it and is released when the run finishes.
#[derive(Debug, Clone)]
pub struct GreeterChannel(Channel);

impl From<GreeterChannel> for Channel {
    fn from(channel: GreeterChannel) -> Self {
        channel.0
    }
}

impl Service<Request<BoxBody>> for GreeterChannel {
    type Response = http::Response<<Channel as GrpcService<BoxBody>>::ResponseBody>;
    type Error = <Channel as GrpcService<BoxBody>>::Error;
    type Future = <Channel as GrpcService<BoxBody>>::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        GrpcService::poll_ready(&mut self.0, cx)
    }

    fn call(&mut self, request: Request<BoxBody>) -> Self::Future {
        GrpcService::call(&mut self.0, request)
    }
}

/// Connect to the service named by [`Config::address`], resolving endpoints
/// through the system DNS configuration.
pub async fn connect(config: &Config) -> Result<GreeterChannel, ClientError> {
    let resolver = DnsResolver::from_system_config().map_err(|source| ClientError::Connect {
        address: config.address.clone(),
        source,
    })?;

    connect_with(config, &resolver).await
}

/// Connect like [`connect`], resolving endpoints through `lookup`.
///
/// Name resolution and credential loading happen eagerly; the network
/// connections themselves are only established once the first call needs
/// them, so a dead backend surfaces as a [`ClientError::Call`].
pub async fn connect_with<L>(config: &Config, lookup: &L) -> Result<GreeterChannel, ClientError>
where
    L: LookupService,
{
    let connect_err = |source: anyhow::Error| ClientError::Connect {
        address: config.address.clone(),
        source,
    };

    let target = ServiceTarget::parse(&config.address).map_err(connect_err)?;

    let tls_config = if config.insecure {
        None
    } else {
        Some(load_tls_config(config, &target)?)
    };

    let addresses = lookup
        .resolve_endpoints(&target)
        .await
        .map_err(connect_err)?;

    if addresses.is_empty() {
        return Err(connect_err(anyhow::anyhow!(
            "'{}' resolved to no addresses",
            target.hostname()
        )));
    }

    tracing::debug!(
        "balancing greetings over {} endpoint(s) for '{}'",
        addresses.len(),
        target.hostname()
    );

    let scheme = if tls_config.is_some() { "https" } else { "http" };
    let mut endpoints = Vec::with_capacity(addresses.len());
    for address in addresses {
        let mut endpoint = Endpoint::from_shared(format!("{scheme}://{address}"))
            .map_err(|err| connect_err(err.into()))?;
        if let Some(tls) = &tls_config {
            endpoint = endpoint
                .tls_config(tls.clone())
                .map_err(|err| connect_err(err.into()))?;
        }
        endpoints.push(endpoint);
    }

    Ok(GreeterChannel(Channel::balance_list(endpoints.into_iter())))
}

/// Load the CA certificate from [`Config::cert`] and pin the TLS server
/// name to the target hostname.
///
/// Endpoints are dialed by resolved IP, which is not a valid DNS name, so
/// the hostname has to be set on the tls config explicitly or the handshake
/// would fail.
fn load_tls_config(
    config: &Config,
    target: &ServiceTarget,
) -> Result<ClientTlsConfig, ClientError> {
    let pem = std::fs::read(&config.cert).map_err(|source| ClientError::Credential {
        path: config.cert.clone(),
        source: anyhow::Error::from(source),
    })?;

    Ok(ClientTlsConfig::new()
        .ca_certificate(Certificate::from_pem(pem))
        .domain_name(target.hostname()))
}

const _: () = {
    const fn assert_is_send<T: Send>() {}
    assert_is_send::<GreeterChannel>();
};
