//! Typed façade over the shadcn CLI
//!
//! Each operation turns a typed options struct into an argument vector,
//! runs it through a [`CommandExecutor`] with an operation-specific timeout
//! and pairs the raw result with its classification. Non-zero exits and
//! timeouts come back as data; only calls that could never be valid (no
//! item names, empty name) are rejected with an error.

use crate::core::{
    config::CliSettings, ClassifiedResult, Error, Framework, ProjectInfo, ProjectStatus,
    RawCommandResult, Result, Style,
};
use crate::runtime::classify::classify;
use crate::runtime::process::{CommandExecutor, RunOptions};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Options for `shadcn init`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub cwd: Option<PathBuf>,
    pub yes: bool,
    pub defaults: bool,
    pub force: bool,
    /// `Some(true)` → `--typescript`, `Some(false)` → `--no-typescript`
    pub typescript: Option<bool>,
    pub style: Option<Style>,
    pub tailwind_config: Option<String>,
    pub tailwind_css: Option<String>,
    pub components_path: Option<String>,
}

/// Options for `shadcn add`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOptions {
    pub cwd: Option<PathBuf>,
    pub yes: bool,
    pub force: bool,
    pub silent: bool,
}

/// Options for `shadcn diff`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub cwd: Option<PathBuf>,
    pub yes: bool,
}

/// Result of one façade operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutcome {
    /// Rendered command line, for display only
    pub command: String,
    pub raw: RawCommandResult,
    pub classified: ClassifiedResult,
    pub raw_success: bool,
}

/// Result of installing an item after its dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositeOutcome {
    /// The dependency install failed; the item itself was not attempted
    DependenciesFailed(CommandOutcome),
    Completed {
        dependencies: Option<CommandOutcome>,
        target: CommandOutcome,
    },
}

/// Everything `project_status` learned about a directory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub status: ProjectStatus,
    pub project_info: ProjectInfo,
    pub components_json: Option<serde_json::Value>,
}

fn push_flag(args: &mut Vec<String>, enabled: bool, flag: &str) {
    if enabled {
        args.push(flag.to_string());
    }
}

fn push_value(args: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
}

/// Arguments for `init`, without the launcher package
pub fn init_args(options: &InitOptions) -> Vec<String> {
    let mut args = vec!["init".to_string()];
    push_flag(&mut args, options.yes, "--yes");
    push_flag(&mut args, options.defaults, "--defaults");
    push_flag(&mut args, options.force, "--force");
    match options.typescript {
        Some(true) => args.push("--typescript".to_string()),
        Some(false) => args.push("--no-typescript".to_string()),
        None => {}
    }
    push_value(&mut args, "--style", options.style.map(|s| s.as_str()));
    push_value(&mut args, "--tailwind-config", options.tailwind_config.as_deref());
    push_value(&mut args, "--tailwind-css", options.tailwind_css.as_deref());
    push_value(&mut args, "--components", options.components_path.as_deref());
    args
}

/// Arguments for `add`; names follow the flags in the given order
pub fn add_args(names: &[String], options: &AddOptions) -> Result<Vec<String>> {
    if names.is_empty() {
        return Err(Error::invalid_input("add requires at least one item name"));
    }
    if let Some(blank) = names.iter().find(|n| n.trim().is_empty()) {
        return Err(Error::invalid_input(format!(
            "add received a blank item name: {:?}",
            blank
        )));
    }

    let mut args = vec!["add".to_string()];
    push_flag(&mut args, options.yes, "--yes");
    push_flag(&mut args, options.force, "--force");
    push_flag(&mut args, options.silent, "--silent");
    args.extend(names.iter().cloned());
    Ok(args)
}

/// Arguments for `diff`
pub fn diff_args(name: &str, options: &DiffOptions) -> Result<Vec<String>> {
    if name.trim().is_empty() {
        return Err(Error::invalid_input("diff requires an item name"));
    }

    let mut args = vec!["diff".to_string()];
    push_flag(&mut args, options.yes, "--yes");
    args.push(name.to_string());
    Ok(args)
}

/// Client for the shadcn CLI
#[derive(Clone)]
pub struct ShadcnCli {
    executor: Arc<dyn CommandExecutor>,
    settings: CliSettings,
    launcher: String,
    npm: String,
}

impl std::fmt::Debug for ShadcnCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShadcnCli")
            .field("launcher", &self.launcher)
            .field("package", &self.settings.package)
            .finish()
    }
}

/// Resolve a program on `PATH`, keeping the bare name when it is missing
fn resolve_program(program: &str) -> String {
    match which::which(program) {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(e) => {
            debug!(program, error = %e, "Program not found on PATH, using bare name");
            program.to_string()
        }
    }
}

impl ShadcnCli {
    pub fn new(settings: CliSettings, executor: Arc<dyn CommandExecutor>) -> Self {
        let launcher = resolve_program(&settings.program);
        let npm = resolve_program(&settings.npm);
        Self {
            executor,
            settings,
            launcher,
            npm,
        }
    }

    pub fn settings(&self) -> &CliSettings {
        &self.settings
    }

    /// Display form of the command the façade would run for `args`
    pub fn render_command(&self, args: &[String]) -> String {
        let mut parts = vec![self.settings.program.clone(), self.settings.package.clone()];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }

    async fn run_shadcn(
        &self,
        args: Vec<String>,
        cwd: Option<PathBuf>,
        timeout: Duration,
    ) -> CommandOutcome {
        let command = self.render_command(&args);
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(self.settings.package.clone());
        full.extend(args);

        info!(%command, "Running shadcn CLI");
        let raw = self
            .executor
            .run(&self.launcher, &full, RunOptions::new().cwd(cwd).timeout(timeout))
            .await;
        if !raw.success {
            warn!(%command, error = raw.error_text(), "shadcn CLI reported failure");
        }

        let classified = classify(&raw.output);
        CommandOutcome {
            command,
            raw_success: raw.success,
            raw,
            classified,
        }
    }

    /// `shadcn init`
    pub async fn init(&self, options: &InitOptions) -> CommandOutcome {
        self.run_shadcn(
            init_args(options),
            options.cwd.clone(),
            self.settings.init_timeout(),
        )
        .await
    }

    /// `shadcn add <names...>`
    pub async fn add(&self, names: &[String], options: &AddOptions) -> Result<CommandOutcome> {
        let args = add_args(names, options)?;
        Ok(self
            .run_shadcn(args, options.cwd.clone(), self.settings.add_timeout())
            .await)
    }

    /// `shadcn diff <name>`
    pub async fn diff(&self, name: &str, options: &DiffOptions) -> Result<CommandOutcome> {
        let args = diff_args(name, options)?;
        Ok(self
            .run_shadcn(args, options.cwd.clone(), self.settings.diff_timeout())
            .await)
    }

    /// Install `dependencies`, then `name`; stops after a failed first step
    pub async fn add_with_dependencies(
        &self,
        dependencies: &[String],
        name: &str,
        options: &AddOptions,
    ) -> Result<CompositeOutcome> {
        let target_names = vec![name.to_string()];
        add_args(&target_names, options)?;

        let dependencies = if dependencies.is_empty() {
            None
        } else {
            let outcome = self.add(dependencies, options).await?;
            if !outcome.raw_success {
                return Ok(CompositeOutcome::DependenciesFailed(outcome));
            }
            Some(outcome)
        };

        let target = self.add(&target_names, options).await?;
        Ok(CompositeOutcome::Completed {
            dependencies,
            target,
        })
    }

    async fn npm_list_tailwind(&self, cwd: Option<&Path>) -> RawCommandResult {
        let args = vec![
            "list".to_string(),
            "tailwindcss".to_string(),
            "--json".to_string(),
        ];
        self.executor
            .run(
                &self.npm,
                &args,
                RunOptions::new()
                    .cwd(cwd.map(Path::to_path_buf))
                    .timeout(self.settings.inspect_timeout()),
            )
            .await
    }

    /// Check for package.json, then ask npm whether tailwindcss is installed
    pub async fn check_dependencies(&self, cwd: Option<&Path>) -> RawCommandResult {
        if !file_exists(cwd, "package.json").await {
            return RawCommandResult {
                success: false,
                output: String::new(),
                error: Some("No package.json found. Please run npm init first.".to_string()),
            };
        }
        self.npm_list_tailwind(cwd).await
    }

    /// Inspect a project: tailwind, TypeScript, framework
    pub async fn project_info(&self, cwd: Option<&Path>) -> ProjectInfo {
        let tailwind = self.npm_list_tailwind(cwd).await;
        let has_tailwind = tailwind.success && tailwind_listed(&tailwind.output);
        let has_typescript = file_exists(cwd, "tsconfig.json").await;

        let framework = match read_json(cwd, "package.json").await {
            Some(package) => detect_framework(&package),
            None => None,
        };

        ProjectInfo {
            has_tailwind,
            has_typescript,
            framework,
        }
    }

    /// Combine [`project_info`](Self::project_info) with components.json
    pub async fn project_status(&self, cwd: Option<&Path>) -> ProjectReport {
        let project_info = self.project_info(cwd).await;
        let components_json = read_json(cwd, "components.json").await;
        let status = build_status(&project_info, components_json.as_ref());

        ProjectReport {
            status,
            project_info,
            components_json,
        }
    }
}

fn project_path(cwd: Option<&Path>, file: &str) -> PathBuf {
    cwd.unwrap_or_else(|| Path::new(".")).join(file)
}

async fn file_exists(cwd: Option<&Path>, file: &str) -> bool {
    tokio::fs::try_exists(project_path(cwd, file))
        .await
        .unwrap_or(false)
}

async fn read_json(cwd: Option<&Path>, file: &str) -> Option<serde_json::Value> {
    let path = project_path(cwd, file);
    let content = tokio::fs::read_to_string(&path).await.ok()?;
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unparsable JSON file");
            None
        }
    }
}

/// True when `npm list --json` output shows tailwindcss as a dependency
fn tailwind_listed(output: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(output)
        .ok()
        .and_then(|v| v.pointer("/dependencies/tailwindcss").cloned())
        .is_some()
}

/// First framework found among package.json dependencies
pub fn detect_framework(package: &serde_json::Value) -> Option<Framework> {
    const MARKERS: [(Framework, &[&str]); 5] = [
        (Framework::Next, &["next"]),
        (Framework::Vite, &["vite"]),
        (Framework::Remix, &["remix", "@remix-run/react", "@remix-run/dev"]),
        (Framework::Gatsby, &["gatsby"]),
        (Framework::Astro, &["astro"]),
    ];

    let declared = |name: &str| {
        ["dependencies", "devDependencies"].iter().any(|section| {
            package
                .get(section)
                .and_then(|deps| deps.as_object())
                .map_or(false, |deps| deps.contains_key(name))
        })
    };

    MARKERS
        .iter()
        .find(|(_, names)| names.iter().any(|name| declared(name)))
        .map(|(framework, _)| *framework)
}

fn build_status(info: &ProjectInfo, components_json: Option<&serde_json::Value>) -> ProjectStatus {
    let string_at = |pointer: &str| {
        components_json
            .and_then(|c| c.pointer(pointer))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };

    let style = string_at("/style")
        .and_then(|s| s.parse::<Style>().ok())
        .unwrap_or_default();

    let aliases = components_json
        .and_then(|c| c.get("aliases"))
        .and_then(|a| a.as_object())
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect::<BTreeMap<_, _>>()
        });

    ProjectStatus {
        initialized: components_json.is_some(),
        framework: info.framework,
        tailwind_installed: info.has_tailwind,
        components_installed: Vec::new(),
        blocks_installed: Vec::new(),
        typescript: info.has_typescript,
        style,
        tailwind_config: string_at("/tailwind/config"),
        tailwind_css: string_at("/tailwind/css"),
        aliases,
    }
}
