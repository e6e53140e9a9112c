//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::CogeResult;
use crate::ui::{self, UiContext};

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> CogeResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force, yes }) => {
            init_config(manager, force, &UiContext::detect().with_auto_yes(yes)).await?
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> CogeResult<()> {
    let toml = toml::to_string_pretty(config)?;
    println!("{}", toml);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool, ctx: &UiContext) -> CogeResult<()> {
    let path = manager.path();

    if path.exists() && !force {
        let prompt = format!("Config already exists at {}. Overwrite?", path.display());
        if !ui::confirm(ctx, &prompt, false).await? {
            ui::step_warn_hint(
                ctx,
                &format!("Kept existing config at {}", path.display()),
                "Use --force to overwrite",
            );
            return Ok(());
        }
    }

    manager.save(&Config::default()).await?;

    ui::step_ok_detail(
        ctx,
        "Configuration initialized",
        &path.display().to_string(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(path.clone());

        init_config(&manager, false, &UiContext::non_interactive())
            .await
            .unwrap();

        let loaded = manager.load().await.unwrap();
        assert!(loaded.install.npm);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[install]\nyarn = true\n").unwrap();
        let manager = ConfigManager::with_path(path);

        init_config(&manager, true, &UiContext::non_interactive())
            .await
            .unwrap();

        let loaded = manager.load().await.unwrap();
        assert!(!loaded.install.yarn);
    }

    #[tokio::test]
    async fn init_keeps_existing_without_answer() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[install]\nyarn = true\n").unwrap();
        let manager = ConfigManager::with_path(path);

        init_config(&manager, false, &UiContext::non_interactive())
            .await
            .unwrap();

        assert!(manager.load().await.unwrap().install.yarn);
    }

    #[tokio::test]
    async fn init_auto_yes_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[install]\nyarn = true\n").unwrap();
        let manager = ConfigManager::with_path(path);

        let ctx = UiContext::non_interactive().with_auto_yes(true);
        init_config(&manager, false, &ctx).await.unwrap();

        assert!(!manager.load().await.unwrap().install.yarn);
    }
}
