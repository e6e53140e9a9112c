//! Subprocess spawning with inherited standard streams

use crate::error::{CogeError, CogeResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Caller-adjustable spawn settings.
///
/// Standard streams are not configurable: children always inherit the
/// parent's stdin, stdout and stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnOptions {
    /// Working directory for the child (defaults to the parent's)
    pub cwd: Option<PathBuf>,

    /// Extra environment variables
    pub env: Vec<(String, String)>,
}

impl SpawnOptions {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
            ..Self::default()
        }
    }
}

/// Runs external commands
#[async_trait]
pub trait Spawner: Send + Sync {
    /// Run `cmd` with `args` to completion.
    ///
    /// Resolves to the captured stdout, which is empty for inherited streams.
    async fn spawn(&self, cmd: &str, args: &[String], options: &SpawnOptions)
        -> CogeResult<Vec<u8>>;
}

/// Spawns real processes with tokio
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

#[async_trait]
impl Spawner for ProcessSpawner {
    async fn spawn(
        &self,
        cmd: &str,
        args: &[String],
        options: &SpawnOptions,
    ) -> CogeResult<Vec<u8>> {
        let display_cmd = display_command(cmd, args);
        let (program, argv) = normalize_command(cmd, args);
        debug!("Executing interactively: {}", display_cmd);

        let mut command = Command::new(&program);
        command.args(&argv);
        if let Some(ref dir) = options.cwd {
            command.current_dir(dir);
        }
        command.envs(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let status = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| CogeError::command_failed(display_cmd.clone(), e))?;

        if status.success() {
            Ok(Vec::new())
        } else {
            Err(CogeError::ProcessExit {
                command: display_cmd,
                code: status.code(),
                signal: exit_signal(&status),
            })
        }
    }
}

/// Adapt a command line for the host OS.
///
/// On Windows, package managers ship as `.cmd` shims that `CreateProcess`
/// will not resolve, so the command is routed through `cmd /C`.
pub fn normalize_command(cmd: &str, args: &[String]) -> (String, Vec<String>) {
    if cfg!(windows) {
        let mut argv = vec!["/C".to_string(), cmd.to_string()];
        argv.extend(args.iter().cloned());
        ("cmd".to_string(), argv)
    } else {
        (cmd.to_string(), args.to_vec())
    }
}

/// `cmd arg1 arg2`, for logs and error messages
pub fn display_command(cmd: &str, args: &[String]) -> String {
    std::iter::once(cmd)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Locate `program` on `PATH`
pub fn which(program: &str) -> Option<PathBuf> {
    which_in(program, &parse_system_path())
}

fn which_in(program: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let names = executable_names(program);
    dirs.iter()
        .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn executable_names(program: &str) -> Vec<String> {
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    std::iter::once(program.to_string())
        .chain(exts.split(';').filter(|e| !e.is_empty()).map(|e| format!("{}{}", program, e)))
        .collect()
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> Vec<String> {
    vec![program.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
