//! Local developer identity: git name/email and GitHub login

pub mod git;
pub mod github;

pub use git::{GitCli, GitConfig, IdentityCache};
pub use github::GithubLookup;

use crate::error::CogeResult;
use std::path::Path;
use std::sync::Arc;

/// Identity accessors exposed on a template
#[derive(Clone)]
pub struct User {
    git: Arc<IdentityCache>,
    github: GithubLookup,
}

impl User {
    pub fn new(git: Arc<IdentityCache>, github: GithubLookup) -> Self {
        Self { git, github }
    }

    /// Cached git identity
    pub fn git(&self) -> &IdentityCache {
        &self.git
    }

    pub fn github(&self) -> &GithubLookup {
        &self.github
    }

    /// GitHub login for the git email configured in `dir`
    pub async fn github_username(&self, dir: &Path) -> CogeResult<String> {
        self.github.username(&self.git, dir).await
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new(Arc::new(IdentityCache::new()), GithubLookup::new())
    }
}
