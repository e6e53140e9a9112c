//! Error types for coge
//!
//! All modules use `CogeResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for coge operations
pub type CogeResult<T> = Result<T, CogeError>;

/// All errors that can occur in coge
#[derive(Error, Debug)]
pub enum CogeError {
    // Install errors
    #[error("installDependencies needs at least one of `npm`, `bower` or `yarn` to run.")]
    NoInstallerSelected,

    #[error("Installation of {installer} failed with code {code}")]
    InstallFailed { installer: String, code: i32 },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // GitHub errors
    #[error("No git email configured in {0}")]
    GithubEmailMissing(PathBuf),

    #[error("No GitHub user found for {0}")]
    GithubUserNotFound(String),

    #[error("GitHub API error: {0}")]
    GithubApi(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command exited unsuccessfully: {command}, {}", describe_exit(.code, .signal))]
    ProcessExit {
        command: String,
        code: Option<i32>,
        signal: Option<i32>,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

fn describe_exit(code: &Option<i32>, signal: &Option<i32>) -> String {
    match (code, signal) {
        (Some(code), _) => format!("exit code: {}", code),
        (None, Some(signal)) => format!("terminated by signal {}", signal),
        (None, None) => "no exit status".to_string(),
    }
}

impl CogeError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Exit code, or terminating signal, of a process that ran and failed.
    ///
    /// `None` when the process never started.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            Self::ProcessExit { code, signal, .. } => code.or(*signal),
            _ => None,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoInstallerSelected => Some("Pass --yarn or --bower, or drop --no-npm"),
            Self::GithubEmailMissing(_) => Some("Run: git config --global user.email <email>"),
            Self::InstallFailed { .. } => {
                Some("Re-run without --force-install to continue past installer failures")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CogeError::NoInstallerSelected;
        assert!(err.to_string().contains("at least one of `npm`, `bower` or `yarn`"));
    }

    #[test]
    fn install_failed_display() {
        let err = CogeError::InstallFailed {
            installer: "yarn".to_string(),
            code: 2,
        };
        assert_eq!(err.to_string(), "Installation of yarn failed with code 2");
    }

    #[test]
    fn process_exit_display() {
        let err = CogeError::ProcessExit {
            command: "npm install".to_string(),
            code: None,
            signal: Some(9),
        };
        assert!(err.to_string().contains("terminated by signal 9"));
    }

    #[test]
    fn exit_status_prefers_code() {
        let err = CogeError::ProcessExit {
            command: "npm".to_string(),
            code: Some(1),
            signal: None,
        };
        assert_eq!(err.exit_status(), Some(1));

        let err = CogeError::command_failed(
            "npm",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.exit_status(), None);
    }

    #[test]
    fn error_hint() {
        let err = CogeError::GithubEmailMissing(PathBuf::from("/tmp"));
        assert_eq!(
            err.hint(),
            Some("Run: git config --global user.email <email>")
        );
        assert_eq!(CogeError::Internal("x".to_string()).hint(), None);
    }
}
