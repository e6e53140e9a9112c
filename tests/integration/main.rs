//! Integration tests for coge

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    /// `coge` with plain output, no local config and a config file under `dir`
    fn coge(dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("coge");
        cmd.current_dir(dir)
            .env("COGE_PLAIN", "1")
            .env_remove("COGE_CONFIG")
            .env_remove("CLICOLOR_FORCE")
            .arg("--no-local")
            .arg("--config")
            .arg(dir.join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("coge")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Install dependencies"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("coge")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("coge"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[install]"))
            .stdout(predicate::str::contains("npm = true"));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));

        assert!(temp.path().join("config.toml").exists());
    }

    #[test]
    fn config_init_yes_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[install]\nyarn = true\n").unwrap();

        coge(temp.path())
            .args(["config", "init", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("auto-approved"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("yarn = false"));
    }

    #[test]
    fn invalid_config_reports_hint() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[install\nnpm = ").unwrap();

        coge(temp.path())
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn install_skip_install_logs_command() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["install", "--skip-install"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Skipping install command: npm install --cache-min 86400",
            ))
            .stdout(predicate::str::contains("Just run npm install"));
    }

    #[test]
    fn install_skip_message() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["install", "--skip-install", "--skip-message", "--yarn"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Skipping install command: yarn install"))
            .stdout(predicate::str::contains("I'm all done").not());
    }

    #[test]
    fn install_packages_with_yarn_uses_add() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["install", "--skip-install", "-m", "yarn", "left-pad"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Skipping install command: yarn add left-pad",
            ));
    }

    #[test]
    fn install_skip_from_local_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".coge.toml"),
            "[install]\nskip_install = true\nnpm = false\nbower = true\n",
        )
        .unwrap();

        cargo_bin_cmd!("coge")
            .current_dir(temp.path())
            .env("COGE_PLAIN", "1")
            .env_remove("CLICOLOR_FORCE")
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("install")
            .assert()
            .success()
            .stdout(predicate::str::contains("Skipping install command: bower install"))
            .stdout(predicate::str::contains("npm install").not());
    }

    #[test]
    fn install_without_managers_fails() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["install", "--no-npm", "--skip-install"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("at least one of"));
    }

    #[test]
    fn install_rejects_unknown_manager() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["install", "-m", "pnpm", "left-pad"])
            .assert()
            .failure();
    }

    #[test]
    fn user_shows_identity_fields() {
        let temp = TempDir::new().unwrap();
        coge(temp.path())
            .args(["user", "--dir"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("git name"))
            .stdout(predicate::str::contains("git email"));
    }
}
