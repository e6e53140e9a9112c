//! Dependency installation through npm, yarn and bower
//!
//! [`Installer`] builds package manager command lines, runs them one after
//! another through a [`Spawner`], and reports what it did through the
//! template [`Logger`]. Installer failures are logged with a remediation
//! hint and swallowed unless force-install is on.

mod command;
mod flags;

pub use command::{InstallCommand, PackageList, PackageManager};
pub use flags::{FlagOptions, FlagValue, POSITIONAL_KEY};
pub(crate) use flags::kebab_case;

use crate::environment::Logger;
use crate::error::{CogeError, CogeResult};
use crate::spawn::{SpawnOptions, Spawner};
use console::style;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Whether a package manager runs, and with which flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerSelection {
    Disabled,
    Enabled,
    EnabledWithOptions(FlagOptions),
}

impl ManagerSelection {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Flags to forward, if any were given
    pub fn flags(&self) -> Option<&FlagOptions> {
        match self {
            Self::EnabledWithOptions(flags) => Some(flags),
            _ => None,
        }
    }
}

impl From<bool> for ManagerSelection {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl From<FlagOptions> for ManagerSelection {
    fn from(flags: FlagOptions) -> Self {
        Self::EnabledWithOptions(flags)
    }
}

/// Options for [`Installer::install_dependencies`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Default: enabled
    pub npm: ManagerSelection,
    /// Default: disabled
    pub yarn: ManagerSelection,
    /// Default: disabled
    pub bower: ManagerSelection,
    /// Don't log the closing summary
    pub skip_message: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            npm: ManagerSelection::Enabled,
            yarn: ManagerSelection::Disabled,
            bower: ManagerSelection::Disabled,
            skip_message: false,
        }
    }
}

impl InstallOptions {
    pub fn npm(mut self, selection: impl Into<ManagerSelection>) -> Self {
        self.npm = selection.into();
        self
    }

    pub fn yarn(mut self, selection: impl Into<ManagerSelection>) -> Self {
        self.yarn = selection.into();
        self
    }

    pub fn bower(mut self, selection: impl Into<ManagerSelection>) -> Self {
        self.bower = selection.into();
        self
    }

    pub fn skip_message(mut self, skip: bool) -> Self {
        self.skip_message = skip;
        self
    }

    pub fn selection(&self, manager: PackageManager) -> &ManagerSelection {
        match manager {
            PackageManager::Npm => &self.npm,
            PackageManager::Yarn => &self.yarn,
            PackageManager::Bower => &self.bower,
        }
    }
}

/// Switches from the template's broader options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallPolicy {
    /// Log commands instead of running them
    pub skip_install: bool,
    /// Escalate installer failures
    pub force_install: bool,
}

/// Runs package manager installs
pub struct Installer {
    spawner: Arc<dyn Spawner>,
    logger: Arc<dyn Logger>,
    policy: InstallPolicy,
    cwd: Option<PathBuf>,
}

impl Installer {
    pub fn new(spawner: Arc<dyn Spawner>, logger: Arc<dyn Logger>, policy: InstallPolicy) -> Self {
        Self {
            spawner,
            logger,
            policy,
            cwd: None,
        }
    }

    /// Default working directory for installs that don't set one
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn policy(&self) -> InstallPolicy {
        self.policy
    }

    /// Run `install` for every selected manager (npm, then yarn, then bower)
    /// and log a summary of the commands.
    pub async fn install_dependencies(&self, options: &InstallOptions) -> CogeResult<()> {
        let no_flags = FlagOptions::new();
        let mut commands = Vec::new();

        for manager in PackageManager::ALL {
            let selection = options.selection(manager);
            if !selection.is_enabled() {
                continue;
            }

            commands.push(format!("{} install", manager));
            self.schedule_install(
                manager,
                &PackageList::new(),
                selection.flags().unwrap_or(&no_flags),
                &SpawnOptions::default(),
            )
            .await?;
        }

        if commands.is_empty() {
            return Err(CogeError::NoInstallerSelected);
        }

        if !options.skip_message {
            self.logger
                .log(&completion_message(&commands, self.policy.skip_install));
        }

        Ok(())
    }

    /// Install npm packages (all of `package.json` when `packages` is empty)
    pub async fn npm_install(
        &self,
        packages: impl Into<PackageList>,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        self.schedule_install(PackageManager::Npm, &packages.into(), flags, spawn_options)
            .await
    }

    /// Install with yarn; named packages are added with `yarn add`
    pub async fn yarn_install(
        &self,
        packages: impl Into<PackageList>,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        self.schedule_install(PackageManager::Yarn, &packages.into(), flags, spawn_options)
            .await
    }

    /// Install bower components
    pub async fn bower_install(
        &self,
        components: impl Into<PackageList>,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        self.schedule_install(PackageManager::Bower, &components.into(), flags, spawn_options)
            .await
    }

    /// Build and run one installer command
    pub async fn schedule_install(
        &self,
        manager: PackageManager,
        packages: &PackageList,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        let command = InstallCommand::build(manager, packages, flags);

        if self.policy.skip_install {
            debug!("skip-install set, not running: {}", command);
            self.logger.log(&format!(
                "Skipping install command: {}",
                style(&command).yellow()
            ));
            return Ok(());
        }

        let mut options = spawn_options.clone();
        if options.cwd.is_none() {
            options.cwd = self.cwd.clone();
        }

        match self
            .spawner
            .spawn(command.program(), command.args(), &options)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => self.handle_failure(&command, err),
        }
    }

    fn handle_failure(&self, command: &InstallCommand, err: CogeError) -> CogeResult<()> {
        let installer = command.program();

        if self.policy.force_install {
            if let Some(code) = err.exit_status() {
                return Err(CogeError::InstallFailed {
                    installer: installer.to_string(),
                    code,
                });
            }
        }

        warn!("{} failed: {}", command, err);
        self.logger.log(&format!(
            "{}Please install {} with {} and try again. \nIf {} is already installed, try running the following command manually: {}",
            style("Could not finish installation. \n").red(),
            installer,
            style(format!("npm install -g {}", installer)).yellow(),
            installer,
            style(command).yellow(),
        ));

        if self.policy.force_install {
            return Err(err);
        }
        Ok(())
    }
}

fn completion_message(commands: &[String], skip_install: bool) -> String {
    let commands = style(commands.join(" && ")).yellow().bold();
    if skip_install {
        format!(
            "\nI'm all done. Just run {} to install the required dependencies.\n",
            commands
        )
    } else {
        format!(
            "\nI'm all done. Running {} for you to install the required dependencies. If this fails, try running the command yourself.\n",
            commands
        )
    }
}
