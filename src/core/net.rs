// src/core/net.rs
// One blocking form POST per query. The session (cookies, user agent) lives in
// an explicit client value instead of a process-wide global.

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Anything that can answer a form POST with a markup body.
pub trait Portal {
    fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<String, TransportError>;
}

pub struct PortalClient {
    client: Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(None) // an unresponsive portal blocks; no deadline is imposed
            .build()?;
        Ok(Self { client, base_url: base_url.into() })
    }
}

impl Portal for PortalClient {
    fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<String, TransportError> {
        let url = join!(self.base_url.as_str(), path);
        info!(url = %url, "POST");

        let resp = self.client.post(&url).form(form).send()?;
        let status = resp.status();
        if !status.is_success() {
            // Parsed anyway; a login or error page just extracts as empty.
            warn!(%status, url = %url, "portal returned non-success status");
        }

        let body = resp.text()?;
        debug!(bytes = body.len(), "response body");
        Ok(body)
    }
}
