//! coge - template toolkit
//!
//! The pieces a project template needs at generation time: the local git
//! identity and matching GitHub login, subprocesses with inherited
//! terminal streams, and npm/yarn/bower installs with skip and force
//! policies.

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod install;
pub mod spawn;
pub mod template;
pub mod ui;
pub mod user;

pub use environment::{Environment, Logger};
pub use error::{CogeError, CogeResult};
pub use install::{FlagOptions, InstallOptions, ManagerSelection, PackageManager};
pub use template::{Template, TemplateOptions, Templating};
