//! Template base: environment, identity, spawning and installs on one type
//!
//! Concrete templates wrap a [`Template`] and override the [`Templating`]
//! lifecycle hooks they need; everything else is delegated.
//!
//! ```rust,ignore
//! struct WebApp(Template);
//!
//! #[async_trait]
//! impl Templating for WebApp {
//!     async fn install(&self) -> CogeResult<()> {
//!         self.0.install_dependencies(&InstallOptions::default().yarn(true)).await
//!     }
//! }
//! ```

use crate::environment::{Environment, Logger};
use crate::error::CogeResult;
use crate::install::{
    kebab_case, FlagOptions, InstallOptions, InstallPolicy, Installer, PackageList,
    PackageManager,
};
use crate::spawn::{ProcessSpawner, SpawnOptions, Spawner};
use crate::user::{GithubLookup, IdentityCache, User};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Values templates render with
pub type Locals = Map<String, Value>;

/// The broader option record a template is built from.
///
/// Keys are kept verbatim; the install switches are read in both camelCase
/// and kebab-case spellings.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    env: Option<Environment>,
    values: Map<String, Value>,
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options from a JSON object; anything else yields empty options
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { env: None, values },
            _ => Self::default(),
        }
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether `name` (camelCase) or its kebab-case form is set to a truthy value
    pub fn flag(&self, name: &str) -> bool {
        let kebab = kebab_case(name);
        [name, kebab.as_str()]
            .iter()
            .filter_map(|key| self.values.get(*key))
            .any(is_truthy)
    }

    /// `skipInstall` / `skip-install`
    pub fn skip_install(&self) -> bool {
        self.flag("skipInstall")
    }

    /// `forceInstall` / `force-install`
    pub fn force_install(&self) -> bool {
        self.flag("forceInstall")
    }

    pub fn install_policy(&self) -> InstallPolicy {
        InstallPolicy {
            skip_install: self.skip_install(),
            force_install: self.force_install(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Lifecycle hooks a generator drives a template through.
///
/// Every hook has a pass-through default.
#[async_trait]
pub trait Templating: Send + Sync {
    /// Runs first; returning `false` stops the template
    async fn init(&self) -> CogeResult<bool> {
        Ok(true)
    }

    /// Adjust the values files are rendered with
    async fn locals(&self, locals: Locals) -> CogeResult<Locals> {
        Ok(locals)
    }

    /// Choose which template files are rendered
    async fn filter(&self, files: Vec<String>, _locals: &Locals) -> CogeResult<Vec<String>> {
        Ok(files)
    }

    /// Install dependencies after rendering
    async fn install(&self) -> CogeResult<()> {
        Ok(())
    }

    /// Runs last
    async fn end(&self) -> CogeResult<()> {
        Ok(())
    }
}

/// Base template
pub struct Template {
    opts: TemplateOptions,
    env: Environment,
    user: User,
    spawner: Arc<dyn Spawner>,
    installer: Installer,
}

impl Template {
    /// Template with real git, GitHub and process collaborators.
    ///
    /// Uses the environment from `opts`, or one rooted at the process
    /// working directory. The template gets its own identity cache; use
    /// [`Template::with_identity`] to share one between templates.
    pub fn new(opts: TemplateOptions) -> CogeResult<Self> {
        Self::with_identity(opts, Arc::new(IdentityCache::new()))
    }

    /// Like [`Template::new`], resolving git identity through `identity`
    pub fn with_identity(opts: TemplateOptions, identity: Arc<IdentityCache>) -> CogeResult<Self> {
        let env = match opts.env.clone() {
            Some(env) => env,
            None => Environment::create()?,
        };
        Ok(Self::from_parts(
            opts,
            env,
            User::new(identity, GithubLookup::new()),
            Arc::new(ProcessSpawner),
        ))
    }

    /// Template with explicit collaborators; `opts`' own environment is ignored
    pub fn from_parts(
        opts: TemplateOptions,
        env: Environment,
        user: User,
        spawner: Arc<dyn Spawner>,
    ) -> Self {
        let installer = Installer::new(
            spawner.clone(),
            env.logger().clone(),
            opts.install_policy(),
        )
        .in_dir(env.cwd());

        Self {
            opts,
            env,
            user,
            spawner,
            installer,
        }
    }

    pub fn opts(&self) -> &TemplateOptions {
        &self.opts
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        self.env.logger()
    }

    /// Write a message through the environment's logger
    pub fn log(&self, message: &str) {
        self.env.logger().log(message);
    }

    /// Git and GitHub identity
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Git `user.name` for the template's working directory
    pub async fn git_name(&self) -> Option<String> {
        self.user.git().name(self.env.cwd()).await
    }

    /// Git `user.email` for the template's working directory
    pub async fn git_email(&self) -> Option<String> {
        self.user.git().email(self.env.cwd()).await
    }

    /// GitHub login for the template's working directory
    pub async fn github_username(&self) -> CogeResult<String> {
        self.user.github_username(self.env.cwd()).await
    }

    pub fn installer(&self) -> &Installer {
        &self.installer
    }

    /// Run a command with inherited standard streams
    pub async fn spawn(
        &self,
        cmd: &str,
        args: &[String],
        options: &SpawnOptions,
    ) -> CogeResult<Vec<u8>> {
        self.spawner.spawn(cmd, args, options).await
    }

    pub async fn install_dependencies(&self, options: &InstallOptions) -> CogeResult<()> {
        self.installer.install_dependencies(options).await
    }

    pub async fn npm_install(
        &self,
        packages: impl Into<PackageList>,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        self.installer
            .npm_install(packages, flags, spawn_options)
            .await
    }

    pub async fn yarn_install(
        &self,
        packages: impl Into<PackageList>,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        self.installer
            .yarn_install(packages, flags, spawn_options)
            .await
    }

    pub async fn bower_install(
        &self,
        components: impl Into<PackageList>,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        self.installer
            .bower_install(components, flags, spawn_options)
            .await
    }

    pub async fn schedule_install(
        &self,
        manager: PackageManager,
        packages: &PackageList,
        flags: &FlagOptions,
        spawn_options: &SpawnOptions,
    ) -> CogeResult<()> {
        self.installer
            .schedule_install(manager, packages, flags, spawn_options)
            .await
    }
}

impl Templating for Template {}
