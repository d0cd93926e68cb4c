use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build the HTTP client.
///
/// Without a timeout, requests wait indefinitely.
pub fn try_new(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!("voltwise/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("failed to build the HTTP client")
}
