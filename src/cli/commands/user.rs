//! User command - show the git identity and GitHub login for a directory

use crate::cli::args::UserArgs;
use crate::config::Config;
use crate::error::{CogeError, CogeResult};
use crate::ui::{self, TaskSpinner, UiContext};
use crate::user::{GithubLookup, IdentityCache, User};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Execute the user command
pub async fn execute(args: UserArgs, config: &Config) -> CogeResult<()> {
    let ctx = UiContext::detect();
    let dir = match args.dir {
        Some(dir) => dir,
        None => current_dir()?,
    };
    debug!("Resolving identity in {}", dir.display());

    let user = User::new(
        Arc::new(IdentityCache::new()),
        GithubLookup::with_api_url(config.github.api_url.as_str()),
    );

    ui::intro(&ctx, "coge user");
    ui::key_value(&ctx, "directory", &dir.display().to_string());

    let name = user.git().name(&dir).await;
    let email = user.git().email(&dir).await;
    ui::key_value_status(&ctx, "git name", name.as_deref());
    ui::key_value_status(&ctx, "git email", email.as_deref());

    if args.github {
        let mut spinner = TaskSpinner::new(&ctx);
        spinner.start("Looking up GitHub user...");
        match user.github_username(&dir).await {
            Ok(login) => {
                spinner.stop("GitHub user found");
                ui::key_value_status(&ctx, "github", Some(&login));
            }
            Err(e) => {
                spinner.stop_error("GitHub lookup failed");
                return Err(e);
            }
        }
    }

    if name.is_none() || email.is_none() {
        ui::remark(
            &ctx,
            "Set missing values with: git config --global user.name/user.email",
        );
    }

    ui::outro_success(&ctx, "Identity resolved");
    Ok(())
}

fn current_dir() -> CogeResult<PathBuf> {
    std::env::current_dir().map_err(|e| CogeError::io("getting current directory", e))
}
