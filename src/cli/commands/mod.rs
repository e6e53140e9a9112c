//! CLI command implementations

pub mod config;
pub mod install;
pub mod user;

pub use config::execute as config;
pub use install::execute as install;
pub use user::execute as user;
