//! Redirect-following [`LinkCanonicalizer`].
//!
//! Only links that [`needs_resolution`] flags are fetched. Any status code is
//! accepted; the final URL comes from the redirect chain, then from a
//! `Location` header on an unfollowed redirect, then from the input itself.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::{Client, StatusCode, redirect::Policy};
use routexplore_core::link::{LinkCanonicalizer, needs_resolution};
use url::Url;

use crate::transport::{
    DEFAULT_USER_AGENT, ProviderBuildError, TransportError, convert_reqwest_error,
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for [`HttpLinkCanonicalizer`].
#[derive(Debug, Clone)]
pub struct LinkCanonicalizerConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for LinkCanonicalizerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl LinkCanonicalizerConfig {
    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the redirect limit.
    #[must_use]
    pub const fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Follows shortener redirects over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLinkCanonicalizer {
    client: Client,
    config: LinkCanonicalizerConfig,
}

impl HttpLinkCanonicalizer {
    /// Create a canonicaliser with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new() -> Result<Self, ProviderBuildError> {
        Self::with_config(LinkCanonicalizerConfig::default())
    }

    /// Create a canonicaliser with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: LinkCanonicalizerConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(Policy::limited(config.max_redirects))
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self { client, config })
    }

    async fn follow(&self, link: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(link)
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, link, self.config.timeout))?;
        Ok(final_url(response.url(), response.status(), response.headers()))
    }
}

#[async_trait]
impl LinkCanonicalizer for HttpLinkCanonicalizer {
    async fn canonicalize(&self, link: &str) -> String {
        if !needs_resolution(link) {
            return link.to_owned();
        }
        match self.follow(link).await {
            Ok(resolved) => {
                log::debug!("resolved {link} to {resolved}");
                resolved
            }
            Err(err) => {
                log::warn!("could not resolve {link}; using it unchanged: {err}");
                link.to_owned()
            }
        }
    }
}

/// Final URL of a fetched link.
///
/// A redirect status that was not followed contributes its `Location`,
/// resolved against the response URL.
fn final_url(response_url: &Url, status: StatusCode, headers: &HeaderMap) -> String {
    if status.is_redirection()
        && let Some(location) = headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| response_url.join(location).ok())
    {
        return location.into();
    }
    response_url.as_str().to_owned()
}
