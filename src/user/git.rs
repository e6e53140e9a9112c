//! Git identity lookup with a per-directory cache

use crate::spawn::which;
use async_trait::async_trait;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::process::Command;
use tracing::debug;

/// Reads values out of git's configuration
#[async_trait]
pub trait GitConfig: Send + Sync {
    /// Whether a git executable is resolvable
    fn is_available(&self) -> bool;

    /// Raw stdout of `git config --get <key>` run in `dir`.
    ///
    /// Empty when git exits non-zero or cannot be started.
    async fn get(&self, dir: &Path, key: &str) -> String;
}

/// Shells out to the `git` found on `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

#[async_trait]
impl GitConfig for GitCli {
    fn is_available(&self) -> bool {
        which("git").is_some()
    }

    async fn get(&self, dir: &Path, key: &str) -> String {
        debug!("Executing: git config --get {} (in {})", key, dir.display());

        let output = Command::new("git")
            .args(["config", "--get", key])
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await;

        match output {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(e) => {
                debug!("git config --get {} failed to start: {}", key, e);
                String::new()
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Email,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Self::Name => "user.name",
            Self::Email => "user.email",
        }
    }
}

/// Keyed on the directory exactly as supplied; `/work` and `/work/` are
/// separate entries.
type Cache = Mutex<HashMap<OsString, Option<String>>>;

/// Git user name/email, cached per working directory.
///
/// Entries live until [`IdentityCache::clear`]; later changes to git config
/// are not observed. A directory without a configured value caches that
/// absence too.
pub struct IdentityCache {
    git: Arc<dyn GitConfig>,
    names: Cache,
    emails: Cache,
}

impl IdentityCache {
    /// Cache backed by the `git` executable
    pub fn new() -> Self {
        Self::with_backend(Arc::new(GitCli))
    }

    pub fn with_backend(git: Arc<dyn GitConfig>) -> Self {
        Self {
            git,
            names: Mutex::default(),
            emails: Mutex::default(),
        }
    }

    /// `user.name` as git resolves it in `dir`
    pub async fn name(&self, dir: &Path) -> Option<String> {
        self.lookup(Field::Name, dir).await
    }

    /// `user.email` as git resolves it in `dir`
    pub async fn email(&self, dir: &Path) -> Option<String> {
        self.lookup(Field::Email, dir).await
    }

    /// Drop every cached name and email
    pub fn clear(&self) {
        self.names
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.emails
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn cache(&self, field: Field) -> &Cache {
        match field {
            Field::Name => &self.names,
            Field::Email => &self.emails,
        }
    }

    async fn lookup(&self, field: Field, dir: &Path) -> Option<String> {
        // The lock is released before awaiting git; concurrent misses both
        // run git and the last insert wins.
        let cached = self
            .cache(field)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(dir.as_os_str())
            .cloned();
        if let Some(value) = cached {
            return value;
        }

        if !self.git.is_available() {
            debug!("git not found on PATH, {} unavailable", field.key());
            return None;
        }

        let raw = self.git.get(dir, field.key()).await;
        let value = Some(raw.trim().to_string()).filter(|v| !v.is_empty());
        debug!(
            "Cached git {} for {} ({})",
            field.key(),
            dir.display(),
            if value.is_some() { "set" } else { "unset" }
        );

        self.cache(field)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(dir.as_os_str().to_os_string(), value.clone());
        value
    }
}

impl Default for IdentityCache {
    fn default() -> Self {
        Self::new()
    }
}
