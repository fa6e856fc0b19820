//! `greeter-client` dials a `helloworld.Greeter` gRPC server and issues a
//! bounded sequence of `SayHello` calls, logging every reply message
//! together with the `hostname` response header reported by the serving
//! backend.
//!
//! The channel is balanced client side: the target hostname is resolved to
//! the full set of backend addresses up front and calls are spread across
//! them. TLS is optional and controlled by [`Config::insecure`].
//!
//! ```rust,no_run
//! use greeter_client::{connect, run, Config};
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::parse_from(["greeter-client", "--repeat", "2", "Ada"]);
//!
//!     let channel = connect(&config).await.expect("failed to connect");
//!     run(channel, config.name(), config.repeat, std::time::Duration::from_secs(1))
//!         .await
//!         .expect("greeting failed");
//! }
//! ```

mod caller;
mod client_channel;
mod config;
mod error;
mod resolve;
mod service_target;

pub use caller::*;
pub use client_channel::*;
pub use config::*;
pub use error::*;
pub use resolve::*;
pub use service_target::*;
