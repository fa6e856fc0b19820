//! The request loop: a bounded sequence of `SayHello` exchanges.

use crate::{ClientError, GreeterChannel};
use shared_proto::pb::greeter_client::GreeterClient;
use shared_proto::pb::HelloRequest;
use std::time::Duration;
use tonic::metadata::MetadataMap;

/// Response header under which a serving backend reports its identity.
const HOSTNAME_HEADER: &str = "hostname";

/// Fallback when the server does not report a hostname header.
const UNKNOWN_HOSTNAME: &str = "unknown";

/// Outcome of one successful greeting exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Message returned by the server.
    pub message: String,
    /// Backend identity from the response `hostname` header.
    pub hostname: String,
}

/// Issue `repeat` sequential greetings for `name` over `channel`.
///
/// Every successful exchange is logged as `<message> from <hostname>` and
/// the loop pauses for `pause` after each exchange, the last one included.
/// The first failed call aborts the whole run: remaining iterations never
/// happen and already collected greetings are dropped with the error.
pub async fn run(
    channel: GreeterChannel,
    name: &str,
    repeat: u32,
    pause: Duration,
) -> Result<Vec<Greeting>, ClientError> {
    let mut client = GreeterClient::new(channel);
    let mut greetings = Vec::with_capacity(repeat as usize);

    for _ in 0..repeat {
        let request = tonic::Request::new(HelloRequest {
            name: name.to_owned(),
        });
        let response = client.say_hello(request).await?;

        let hostname = reported_hostname(response.metadata());
        let message = response.into_inner().message;
        tracing::info!("{message} from {hostname}");

        greetings.push(Greeting { message, hostname });

        tokio::time::sleep(pause).await;
    }

    Ok(greetings)
}

/// The first `hostname` header value, or [`UNKNOWN_HOSTNAME`] when the
/// header is missing or not ASCII.
fn reported_hostname(metadata: &MetadataMap) -> String {
    metadata
        .get_all(HOSTNAME_HEADER)
        .iter()
        .next()
        .and_then(|value| value.to_str().ok())
        .unwrap_or(UNKNOWN_HOSTNAME)
        .to_string()
}
