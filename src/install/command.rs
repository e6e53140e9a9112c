//! Package manager command lines

use super::flags::FlagOptions;
use crate::spawn::display_command;
use std::fmt;
use std::str::FromStr;

/// npm's `--cache-min`: reuse cached metadata for a day
const NPM_CACHE_MIN_SECS: u32 = 24 * 60 * 60;

/// Supported package managers, in install order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Bower,
}

impl PackageManager {
    /// Every manager, in the order `install_dependencies` runs them
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Yarn, Self::Bower];

    /// Executable name
    pub fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Bower => "bower",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "bower" => Ok(Self::Bower),
            other => Err(format!(
                "unknown package manager '{}' (expected npm, yarn or bower)",
                other
            )),
        }
    }
}

/// Packages (or bower components) to install.
///
/// Built from a list, a single name, or a whitespace-separated string.
/// Empty means "everything in the manifest".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList(Vec<String>);

impl PackageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for PackageList {
    fn from(s: &str) -> Self {
        Self(s.split_whitespace().map(String::from).collect())
    }
}

impl From<String> for PackageList {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<String>> for PackageList {
    fn from(v: Vec<String>) -> Self {
        Self(v.into_iter().filter(|p| !p.trim().is_empty()).collect())
    }
}

impl From<Vec<&str>> for PackageList {
    fn from(v: Vec<&str>) -> Self {
        Self(
            v.into_iter()
                .filter(|p| !p.trim().is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

impl From<&[&str]> for PackageList {
    fn from(v: &[&str]) -> Self {
        Self::from(v.to_vec())
    }
}

impl<T: Into<PackageList>> From<Option<T>> for PackageList {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

/// A resolved installer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    manager: PackageManager,
    args: Vec<String>,
}

impl InstallCommand {
    /// `<manager> install [packages] [flags]`, adjusted per manager:
    /// yarn adds named packages with `add`, npm gets a one-day `--cache-min`.
    pub fn build(manager: PackageManager, packages: &PackageList, flags: &FlagOptions) -> Self {
        let verb = if manager == PackageManager::Yarn && !packages.is_empty() {
            "add"
        } else {
            "install"
        };

        let mut args = vec![verb.to_string()];
        args.extend(packages.as_slice().iter().cloned());
        args.extend(flags.to_args());

        if manager == PackageManager::Npm {
            args.push("--cache-min".to_string());
            args.push(NPM_CACHE_MIN_SECS.to_string());
        }

        Self { manager, args }
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    pub fn program(&self) -> &'static str {
        self.manager.program()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_command(self.program(), &self.args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npm_install_adds_cache_min() {
        let cmd = InstallCommand::build(PackageManager::Npm, &PackageList::new(), &FlagOptions::new());
        assert_eq!(cmd.to_string(), "npm install --cache-min 86400");
    }

    #[test]
    fn npm_packages_then_flags_then_cache() {
        let flags = FlagOptions::new().with("saveDev", true);
        let cmd = InstallCommand::build(PackageManager::Npm, &"lodash chalk".into(), &flags);
        assert_eq!(
            cmd.args(),
            ["install", "lodash", "chalk", "--save-dev", "--cache-min", "86400"]
        );
    }

    #[test]
    fn yarn_with_packages_uses_add() {
        let cmd = InstallCommand::build(PackageManager::Yarn, &vec!["react"].into(), &FlagOptions::new());
        assert_eq!(cmd.args(), ["add", "react"]);
    }

    #[test]
    fn yarn_without_packages_uses_install() {
        let cmd = InstallCommand::build(PackageManager::Yarn, &PackageList::new(), &FlagOptions::new());
        assert_eq!(cmd.args(), ["install"]);
        assert_eq!(cmd.program(), "yarn");
    }

    #[test]
    fn bower_keeps_install_for_components() {
        let cmd = InstallCommand::build(PackageManager::Bower, &"jquery".into(), &FlagOptions::new());
        assert_eq!(cmd.to_string(), "bower install jquery");
    }

    #[test]
    fn package_list_forms() {
        assert_eq!(PackageList::from("a  b").as_slice(), ["a", "b"]);
        assert_eq!(PackageList::from("single").as_slice(), ["single"]);
        assert!(PackageList::from("").is_empty());
        assert!(PackageList::from(vec![""]).is_empty());
        assert!(PackageList::from(None::<&str>).is_empty());
        assert_eq!(PackageList::from(Some("x y")).as_slice(), ["x", "y"]);
    }

    #[test]
    fn manager_parses_case_insensitively() {
        assert_eq!("Yarn".parse::<PackageManager>(), Ok(PackageManager::Yarn));
        assert!("pnpm".parse::<PackageManager>().is_err());
    }
}
