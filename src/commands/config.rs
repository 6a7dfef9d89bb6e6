use anyhow::Result;
use log::debug;

use crate::{
    http::HttpClient,
    website::{API_ROOT, WebsiteClient},
};

/// Settings resolved from flags and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub account_id: String,
    pub api_key: String,
    pub api_url: String,
}

impl Config {
    /// Missing credentials become empty strings; the client reports them when built.
    pub fn new(
        account_id: Option<String>,
        api_key: Option<String>,
        api_url: Option<String>,
    ) -> Self {
        Self {
            account_id: account_id.unwrap_or_default(),
            api_key: api_key.unwrap_or_default(),
            api_url: api_url.unwrap_or_else(|| API_ROOT.to_string()),
        }
    }

    pub fn build_client(&self) -> Result<WebsiteClient<HttpClient>> {
        debug!("Using API root {}", self.api_url);
        WebsiteClient::with_api_root(&self.account_id, &self.api_key, &self.api_url)
    }
}
