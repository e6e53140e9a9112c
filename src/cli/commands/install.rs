//! Install command - run npm, yarn or bower the way a template does

use crate::cli::args::InstallArgs;
use crate::config::Config;
use crate::environment::Environment;
use crate::error::CogeResult;
use crate::install::{FlagOptions, InstallOptions, ManagerSelection, PackageList, PackageManager};
use crate::spawn::SpawnOptions;
use crate::template::{Template, TemplateOptions};
use tracing::debug;

/// Execute the install command
pub async fn execute(args: InstallArgs, config: &Config) -> CogeResult<()> {
    let env = match &args.dir {
        Some(dir) => Environment::at(dir),
        None => Environment::create()?,
    };

    let opts = template_options(&args, config).with_env(env);
    let template = Template::new(opts)?;
    let flags = parse_flags(&args.flags);

    if args.packages.is_empty() {
        let options = install_options(&args, config, &flags);
        debug!("Installing dependencies: {:?}", options);
        return template.install_dependencies(&options).await;
    }

    let manager = args.manager.unwrap_or(PackageManager::Npm);
    let packages = PackageList::from(args.packages);
    debug!("Installing {:?} with {}", packages, manager);
    template
        .schedule_install(manager, &packages, &flags, &SpawnOptions::default())
        .await
}

/// CLI switches win over config defaults; either can turn a switch on
fn template_options(args: &InstallArgs, config: &Config) -> TemplateOptions {
    TemplateOptions::new()
        .with("skipInstall", args.skip_install || config.install.skip_install)
        .with(
            "forceInstall",
            args.force_install || config.install.force_install,
        )
}

fn install_options(args: &InstallArgs, config: &Config, flags: &FlagOptions) -> InstallOptions {
    let select = |enabled: bool| -> ManagerSelection {
        match (enabled, flags.is_empty()) {
            (false, _) => ManagerSelection::Disabled,
            (true, true) => ManagerSelection::Enabled,
            (true, false) => ManagerSelection::EnabledWithOptions(flags.clone()),
        }
    };

    InstallOptions::default()
        .npm(select(config.install.npm && !args.no_npm))
        .yarn(select(config.install.yarn || args.yarn))
        .bower(select(config.install.bower || args.bower))
        .skip_message(args.skip_message)
}

fn parse_flags(specs: &[String]) -> FlagOptions {
    let mut flags = FlagOptions::new();
    for spec in specs {
        flags.push_spec(spec);
    }
    flags
}
