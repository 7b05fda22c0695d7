//! Live adapters for real external interactions.

pub mod clock;
pub mod distro_info;
pub mod launchpad;
pub mod tracker;

use std::time::Duration;

use reqwest::Client;

use crate::ports::PortError;

/// Builds the HTTP client shared by the network adapters.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn http_client(timeout: Duration) -> Result<Client, PortError> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;
    Ok(client)
}
