//! GitHub username lookup via the user search API

use super::git::IdentityCache;
use crate::error::{CogeError, CogeResult};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    login: String,
}

/// Resolves a GitHub login from a git email
#[derive(Clone)]
pub struct GithubLookup {
    api_url: String,
    agent: ureq::Agent,
}

impl GithubLookup {
    /// Lookup against api.github.com
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Lookup against a different API root (GitHub Enterprise, tests)
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();

        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            agent: config.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Login of the first user whose public profile matches `email`.
    ///
    /// Blocking; see [`GithubLookup::username`] for the async entry point.
    pub fn search_login(&self, email: &str) -> CogeResult<String> {
        let url = format!("{}/search/users", self.api_url);
        debug!("Searching GitHub users: GET {}?q={}", url, email);

        let mut response = self
            .agent
            .get(&url)
            .query("q", email)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", concat!("coge/", env!("CARGO_PKG_VERSION")))
            .call()
            .map_err(|e| CogeError::GithubApi(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CogeError::GithubApi(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CogeError::GithubApi(e.to_string()))?;
        let results: SearchResponse = serde_json::from_str(&body)?;

        results
            .items
            .into_iter()
            .next()
            .map(|item| item.login)
            .ok_or_else(|| CogeError::GithubUserNotFound(email.to_string()))
    }

    /// GitHub login for the git email configured in `dir`
    pub async fn username(&self, identity: &IdentityCache, dir: &Path) -> CogeResult<String> {
        let email = identity
            .email(dir)
            .await
            .ok_or_else(|| CogeError::GithubEmailMissing(dir.to_path_buf()))?;

        let lookup = self.clone();
        tokio::task::spawn_blocking(move || lookup.search_login(&email))
            .await
            .map_err(|e| CogeError::Internal(format!("GitHub lookup task failed: {}", e)))?
    }
}

impl Default for GithubLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GithubLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubLookup")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}
