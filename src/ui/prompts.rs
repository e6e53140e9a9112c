//! Confirmation prompt with non-interactive fallback

use super::context::UiContext;
use crate::error::{CogeError, CogeResult};

/// Ask a yes/no question; `default` is used when nobody can answer
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> CogeResult<bool> {
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    let message = message.to_string();
    tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| CogeError::User(format!("Prompt task failed: {}", e)))?
    .map_err(|e| CogeError::User(format!("Prompt failed: {}", e)))
}
