//! GitHub REST client for README contents.
//!
//! Thin HTTP wrapper around `GET /repos/{owner}/{repo}/readme`, asking for
//! the raw media type so the body is the README text itself.

use std::time::Duration;

use crate::config::SiteConfig;

const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("vibesite/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Error bodies kept in [`GithubError::ApiResponse`], in characters.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Errors produced by GitHub API calls.
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request failed before a response arrived.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// GitHub returned a non-success HTTP status.
    #[error("API response error: status {status}: {body}")]
    ApiResponse { status: u16, body: String },
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client for `config.github_user`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &SiteConfig) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.github_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GithubError::HttpClientBuild(e.to_string()))?;
        if config.github_token.is_none() {
            tracing::warn!("GITHUB_TOKEN not set; using unauthenticated GitHub client");
        }
        Ok(Self {
            http,
            base_url: config.github_api_base_url.clone(),
            user: config.github_user.clone(),
            token: config.github_token.clone(),
        })
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Public page of one of the user's repositories.
    #[must_use]
    pub fn repo_url(&self, repo: &str) -> String {
        format!("https://github.com/{}/{repo}", self.user)
    }

    /// Fetch the README text of `{user}/{repo}`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors and any non-200 status (missing repo, no
    /// README, rate limiting).
    pub async fn readme(&self, repo: &str) -> Result<String, GithubError> {
        let url = format!("{}/repos/{}/{repo}/readme", self.base_url, self.user);
        let mut request = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, RAW_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GithubError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GithubError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(GithubError::ApiResponse { status, body: truncate_body(&text) });
        }
        Ok(text)
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
#[path = "github_test.rs"]
mod tests;
