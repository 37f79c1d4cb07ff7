// src/core/net.rs
//
// One blocking GET at a time against the portal. The handlers serve XML
// or JSON depending on endpoint; callers pass the Accept they want.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::core::error::ScrapeError;
use crate::params::{REQUEST_TIMEOUT_SECS, USER_AGENT};

pub fn build_client() -> Result<Client, ScrapeError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body as text.
///
/// Errors on non-200 status and on a 200 with an empty body; the portal
/// intermittently serves blank responses, and those must go through the
/// retry controller rather than being read as "no data".
pub fn http_get(client: &Client, url: &str, accept: &str) -> Result<String, ScrapeError> {
    let resp = client.get(url).header("Accept", accept).send()?;

    let status = resp.status();
    if status.as_u16() != 200 {
        return Err(ScrapeError::Http { status: status.as_u16(), url: url.to_string() });
    }

    let body = resp.text()?;
    if body.trim().is_empty() {
        return Err(ScrapeError::EmptyBody { url: url.to_string() });
    }
    Ok(body)
}
