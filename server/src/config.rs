//! Site configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_PROJECTS_FILE: &str = "projects.txt";
pub const DEFAULT_STATIC_DIR: &str = "ui/static";
pub const DEFAULT_TEMPLATE_DIR: &str = "ui/html";
pub const DEFAULT_ABOUT_SECTION: &str = "Hi there 👋";
pub const DEFAULT_GITHUB_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// A variable is set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub github_user: String,
    pub github_token: Option<String>,
    pub github_api_base_url: String,
    pub github_timeout_secs: u64,
    pub projects_file: PathBuf,
    pub static_dir: PathBuf,
    pub template_dir: PathBuf,
    pub about_section: String,
    pub refresh_token: Option<String>,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Required:
    /// - `GITHUB_USERNAME`
    ///
    /// Optional:
    /// - `PORT`: default 8080
    /// - `GITHUB_TOKEN`: unauthenticated requests when absent or empty
    /// - `GITHUB_API_BASE_URL`: default `https://api.github.com`
    /// - `GITHUB_REQUEST_TIMEOUT_SECS`: default 20
    /// - `PROJECTS_FILE`: default `projects.txt`
    /// - `STATIC_DIR`: default `ui/static`
    /// - `TEMPLATE_DIR`: default `ui/html`
    /// - `ABOUT_SECTION`: heading of the profile README section shown as "about"
    /// - `REFRESH_TOKEN`: bearer token for `POST /api/refresh`; route disabled when absent
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let github_user = lookup("GITHUB_USERNAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("GITHUB_USERNAME"))?;
        let github_token = lookup("GITHUB_TOKEN").filter(|v| !v.trim().is_empty());
        let github_api_base_url = lookup("GITHUB_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let github_timeout_secs = parse_or(
            "GITHUB_REQUEST_TIMEOUT_SECS",
            lookup("GITHUB_REQUEST_TIMEOUT_SECS"),
            DEFAULT_GITHUB_REQUEST_TIMEOUT_SECS,
        )?;
        let path_or = |key: &str, default: &str| PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()));

        Ok(Self {
            port,
            github_user,
            github_token,
            github_api_base_url,
            github_timeout_secs,
            projects_file: path_or("PROJECTS_FILE", DEFAULT_PROJECTS_FILE),
            static_dir: path_or("STATIC_DIR", DEFAULT_STATIC_DIR),
            template_dir: path_or("TEMPLATE_DIR", DEFAULT_TEMPLATE_DIR),
            about_section: lookup("ABOUT_SECTION").unwrap_or_else(|| DEFAULT_ABOUT_SECTION.to_string()),
            refresh_token: lookup("REFRESH_TOKEN").filter(|v| !v.trim().is_empty()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
