//! CLI argument definitions using clap derive

use crate::install::PackageManager;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// coge - template toolkit
///
/// Looks up the local git/GitHub identity and runs npm, yarn or bower
/// installs the way scaffolded templates do.
#[derive(Parser, Debug)]
#[command(name = "coge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "COGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .coge.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the git identity (and GitHub login) for a directory
    User(UserArgs),

    /// Install dependencies with npm, yarn or bower
    Install(InstallArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Directory to resolve git config in (defaults to current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Also look up the GitHub login for the git email
    #[arg(long)]
    pub github: bool,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Packages to install; without any, installs from the manifest
    pub packages: Vec<String>,

    /// Package manager for named packages (default: npm)
    #[arg(short, long, requires = "packages")]
    pub manager: Option<PackageManager>,

    /// Don't run npm
    #[arg(long)]
    pub no_npm: bool,

    /// Run yarn
    #[arg(long)]
    pub yarn: bool,

    /// Run bower
    #[arg(long)]
    pub bower: bool,

    /// Extra installer flag, KEY or KEY=VALUE (repeatable)
    #[arg(short = 'f', long = "flag", value_name = "KEY[=VALUE]")]
    pub flags: Vec<String>,

    /// Don't print the closing summary
    #[arg(long)]
    pub skip_message: bool,

    /// Print the install commands instead of running them
    #[arg(long)]
    pub skip_install: bool,

    /// Fail when an installer fails
    #[arg(long)]
    pub force_install: bool,

    /// Directory to install in (defaults to current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration
    Init {
        /// Overwrite existing configuration without asking
        #[arg(short, long)]
        force: bool,

        /// Answer yes to the overwrite prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_user() {
        let cli = Cli::parse_from(["coge", "user", "--github"]);
        match cli.command {
            Commands::User(args) => {
                assert!(args.github);
                assert!(args.dir.is_none());
            }
            _ => panic!("expected User command"),
        }
    }

    #[test]
    fn cli_parses_install_defaults() {
        let cli = Cli::parse_from(["coge", "install"]);
        match cli.command {
            Commands::Install(args) => {
                assert!(args.packages.is_empty());
                assert!(args.manager.is_none());
                assert!(!args.no_npm);
                assert!(!args.yarn);
                assert!(!args.skip_install);
            }
            _ => panic!("expected Install command"),
        }
    }

    #[test]
    fn cli_parses_install_packages() {
        let cli = Cli::parse_from([
            "coge", "install", "-m", "yarn", "react", "react-dom", "-f", "dev",
        ]);
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.manager, Some(PackageManager::Yarn));
                assert_eq!(args.packages, vec!["react", "react-dom"]);
                assert_eq!(args.flags, vec!["dev"]);
            }
            _ => panic!("expected Install command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_manager() {
        assert!(Cli::try_parse_from(["coge", "install", "-m", "pnpm", "left-pad"]).is_err());
    }

    #[test]
    fn cli_manager_requires_packages() {
        assert!(Cli::try_parse_from(["coge", "install", "-m", "yarn"]).is_err());
    }

    #[test]
    fn cli_parses_config_init_force() {
        let cli = Cli::parse_from(["coge", "config", "init", "--force"]);
        match cli.command {
            Commands::Config(ConfigArgs {
                action: Some(ConfigAction::Init { force, yes }),
            }) => {
                assert!(force);
                assert!(!yes);
            }
            _ => panic!("expected Config init"),
        }
    }

    #[test]
    fn cli_parses_config_init_yes() {
        let cli = Cli::parse_from(["coge", "config", "init", "-y"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigArgs {
                action: Some(ConfigAction::Init { force: false, yes: true }),
            })
        ));
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["coge", "config"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["coge", "-vv", "config"]);
        assert_eq!(cli.verbose, 2);
    }
}
