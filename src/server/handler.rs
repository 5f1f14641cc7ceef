//! Request orchestration for tool calls
//!
//! This module handles:
//! - Decoding tool arguments
//! - Validating names against the local catalog before any I/O
//! - Routing to the registry fetcher or the CLI façade
//! - Falling back to local metadata for metadata reads only

use crate::catalog::{self, blocks, components, BlockCategory, ComponentCategory};
use crate::core::{Config, EntityKind, Error, Result, Style};
use crate::demos;
use crate::runtime::{
    AddOptions, CommandExecutor, CompositeOutcome, DiffOptions, InitOptions, ProcessRunner,
    RegistryClient, RegistrySource, ShadcnCli,
};
use crate::server::error::ToolError;
use crate::server::tools::*;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

type ToolResult = std::result::Result<String, ToolError>;

/// Dispatches named tool calls to the runtime layer
#[derive(Clone)]
pub struct ToolHandler {
    registry: Arc<dyn RegistrySource>,
    cli: ShadcnCli,
    style: Style,
    base_url: String,
    default_cwd: Option<PathBuf>,
}

impl std::fmt::Debug for ToolHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolHandler")
            .field("cli", &self.cli)
            .field("style", &self.style)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ToolHandler {
    pub fn new(
        config: &Config,
        registry: Arc<dyn RegistrySource>,
        executor: Arc<dyn CommandExecutor>,
    ) -> Self {
        Self {
            registry,
            cli: ShadcnCli::new(config.cli.clone(), executor),
            style: config.registry.style,
            base_url: config.registry.base_url.clone(),
            default_cwd: config.default_cwd.clone(),
        }
    }

    /// Handler wired to the real registry and real child processes
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = RegistryClient::from_settings(&config.registry)?;
        Ok(Self::new(config, Arc::new(registry), Arc::new(ProcessRunner::new())))
    }

    /// Run one tool; the `Ok` text is what the client sees
    pub async fn call(&self, name: &str, args: Value) -> ToolResult {
        info!(tool = name, "Dispatching tool call");
        match name {
            "list_components" => self.list_components(decode(args)?),
            "get_component_source" => self.get_component_source(decode(args)?).await,
            "get_component_metadata" => self.get_component_metadata(decode(args)?).await,
            "get_component_demo" => self.get_component_demo(decode(args)?),
            "install_component" => self.install_component(decode(args)?).await,
            "list_blocks" => self.list_blocks(decode(args)?),
            "get_block_source" => self.get_block_source(decode(args)?).await,
            "install_block" => self.install_block(decode(args)?).await,
            "browse_repository" => self.browse_repository(decode(args)?),
            "search_repository" => self.search_repository(decode(args)?),
            "init_shadcn" => self.init_shadcn(decode(args)?).await,
            "check_project_status" => self.check_project_status(decode(args)?).await,
            "diff_component" => self.diff_component(decode(args)?).await,
            other => Err(ToolError::MethodNotFound(other.to_string())),
        }
    }

    fn cwd(&self, requested: Option<String>) -> Option<PathBuf> {
        requested
            .filter(|c| !c.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.default_cwd.clone())
    }

    fn list_components(&self, args: CategoryArgs) -> ToolResult {
        let found = match args.category {
            Some(category) => {
                let category: ComponentCategory =
                    category.parse().map_err(ToolError::invalid_params)?;
                components::by_category(category)
            }
            None => components::all().iter().collect(),
        };

        render(&json!({
            "count": found.len(),
            "components": found,
        }))
    }

    async fn get_component_source(&self, args: NameArgs) -> ToolResult {
        require_component(&args.name)?;

        let item = self
            .registry
            .fetch(EntityKind::Component, &args.name, self.style)
            .await
            .map_err(|e| source_error("component", e))?;
        let source = item.primary_source().map_err(|e| source_error("component", e))?;
        Ok(source.to_string())
    }

    async fn get_component_metadata(&self, args: NameArgs) -> ToolResult {
        let meta = require_component(&args.name)?;

        match self
            .registry
            .fetch(EntityKind::Component, &args.name, self.style)
            .await
        {
            Ok(item) => render(&json!({
                "name": meta.name,
                "description": meta.description,
                "category": meta.category,
                "dependencies": item.dependencies(),
                "devDependencies": item.dev_dependencies(),
                "registryDependencies": item.registry_dependencies(),
                "files": item.file_names(),
                "tailwindConfig": item.tailwind_config(),
                "cssVars": item.css_vars(),
            })),
            Err(e) => {
                warn!(component = meta.name, error = %e, "Registry unavailable, serving local metadata");
                render(&json!({
                    "name": meta.name,
                    "description": meta.description,
                    "category": meta.category,
                    "dependencies": meta.dependencies,
                    "registryUrl": meta.registry_url(&self.base_url, self.style),
                    "degraded": true,
                }))
            }
        }
    }

    fn get_component_demo(&self, args: DemoArgs) -> ToolResult {
        require_component(&args.name)?;

        let demo = demos::demo_for(&args.name, args.demo_index.unwrap_or(0));
        let all = demos::demos_for(&args.name);
        render(&json!({
            "component": args.name,
            "formattedCode": demos::format_demo(&demo),
            "currentDemo": demo,
            "availableDemos": all.len(),
            "allDemos": all
                .iter()
                .map(|d| json!({"name": d.name, "description": d.description}))
                .collect::<Vec<_>>(),
        }))
    }

    async fn install_component(&self, args: InstallComponentArgs) -> ToolResult {
        if args.components.is_empty() {
            return Err(ToolError::invalid_params("components must not be empty"));
        }
        for name in &args.components {
            require_component(name)?;
        }

        let options = AddOptions {
            cwd: self.cwd(args.cwd),
            yes: true,
            force: args.force.unwrap_or(false),
            silent: false,
        };
        let outcome = self.cli.add(&args.components, &options).await?;

        let classified = outcome.classified;
        let errors = classified
            .errors
            .unwrap_or_else(|| outcome.raw.error.iter().cloned().collect());
        render(&json!({
            "success": outcome.raw_success,
            "installed": classified.installed.unwrap_or(args.components),
            "skipped": classified.skipped.unwrap_or_default(),
            "errors": errors,
            "output": outcome.raw.output,
            "command": outcome.command,
        }))
    }

    fn list_blocks(&self, args: CategoryArgs) -> ToolResult {
        let found = match args.category {
            Some(category) => {
                let category: BlockCategory =
                    category.parse().map_err(ToolError::invalid_params)?;
                blocks::by_category(category)
            }
            None => blocks::all().iter().collect(),
        };

        render(&json!({
            "count": found.len(),
            "blocks": found,
        }))
    }

    async fn get_block_source(&self, args: NameArgs) -> ToolResult {
        let meta = require_block(&args.name)?;

        let item = self
            .registry
            .fetch(EntityKind::Block, &args.name, self.style)
            .await
            .map_err(|e| source_error("block", e))?;
        let files = item.require_files().map_err(|e| source_error("block", e))?;

        render(&json!({
            "name": meta.name,
            "description": meta.description,
            "files": files
                .iter()
                .map(|f| json!({"name": f.display_name(), "content": f.content}))
                .collect::<Vec<_>>(),
            "dependencies": item.dependencies(),
            "registryDependencies": item.registry_dependencies(),
            "components": meta.components,
        }))
    }

    async fn install_block(&self, args: InstallBlockArgs) -> ToolResult {
        let meta = require_block(&args.name)?;

        let options = AddOptions {
            cwd: self.cwd(args.cwd),
            yes: true,
            force: args.force.unwrap_or(false),
            silent: false,
        };
        let outcome = self
            .cli
            .add_with_dependencies(&meta.component_names(), meta.name, &options)
            .await?;

        match outcome {
            CompositeOutcome::DependenciesFailed(first) => Err(ToolError::internal(format!(
                "Failed to install required components: {}",
                first.raw.error_text()
            ))),
            CompositeOutcome::Completed { target, .. } => render(&json!({
                "success": target.raw_success,
                "block": meta.name,
                "installedComponents": meta.components,
                "output": target.raw.output,
                "error": target.raw.error,
                "command": target.command,
            })),
        }
    }

    fn browse_repository(&self, args: BrowseArgs) -> ToolResult {
        let path = args
            .path
            .map(|p| p.trim_matches('/').to_string())
            .unwrap_or_default();
        let contents = repository_listing(&path);

        render(&json!({
            "path": if path.is_empty() { "/".to_string() } else { path },
            "found": contents.is_some(),
            "contents": contents.unwrap_or_else(|| vec!["File not found".to_string()]),
            "type": "directory",
        }))
    }

    fn search_repository(&self, args: SearchArgs) -> ToolResult {
        let mut results: Vec<Value> = components::search(&args.query)
            .into_iter()
            .map(|c| {
                json!({
                    "path": format!("{}/{}.tsx", UI_DIR, c.name),
                    "type": "component",
                    "name": c.name,
                    "description": c.description,
                })
            })
            .collect();
        results.extend(blocks::search(&args.query).into_iter().map(|b| {
            json!({
                "path": format!("{}/{}/", BLOCKS_DIR, b.name),
                "type": "block",
                "name": b.name,
                "description": b.description,
            })
        }));

        if let Some(file_type) = args.file_type.as_deref().filter(|t| !t.is_empty()) {
            let suffix = format!(".{}", file_type.trim_start_matches('.'));
            results.retain(|r| r["path"].as_str().map_or(false, |p| p.ends_with(&suffix)));
        }
        debug!(query = %args.query, hits = results.len(), "Repository search");

        render(&json!({
            "query": args.query,
            "fileType": args.file_type,
            "count": results.len(),
            "results": results,
        }))
    }

    async fn init_shadcn(&self, args: InitArgs) -> ToolResult {
        let options = InitOptions {
            cwd: self.cwd(args.cwd),
            yes: true,
            defaults: true,
            force: args.force.unwrap_or(false),
            typescript: args.typescript,
            style: args.style,
            tailwind_config: args.tailwind_config,
            tailwind_css: args.tailwind_css,
            components_path: args.components_path,
        };
        let outcome = self.cli.init(&options).await;

        render(&json!({
            "success": outcome.raw_success,
            "output": outcome.raw.output,
            "error": outcome.raw.error,
            "command": outcome.command,
        }))
    }

    async fn check_project_status(&self, args: CwdArgs) -> ToolResult {
        let cwd = self.cwd(args.cwd);
        let report = self.cli.project_status(cwd.as_deref()).await;

        let recommendation = if report.status.initialized {
            "Project is ready for shadcn/ui components"
        } else {
            "Run init_shadcn to initialize shadcn/ui in this project"
        };
        render(&json!({
            "status": report.status,
            "projectInfo": report.project_info,
            "componentsJson": report.components_json,
            "recommendation": recommendation,
        }))
    }

    async fn diff_component(&self, args: DiffArgs) -> ToolResult {
        require_component(&args.name)?;

        let options = DiffOptions {
            cwd: self.cwd(args.cwd),
            yes: false,
        };
        let outcome = self.cli.diff(&args.name, &options).await?;

        render(&json!({
            "success": outcome.raw_success,
            "component": args.name,
            "output": outcome.raw.output,
            "error": outcome.raw.error,
            "command": outcome.command,
        }))
    }
}

const COMPONENTS_DIR: &str = "apps/www/components";
const UI_DIR: &str = "apps/www/components/ui";
const BLOCKS_DIR: &str = "apps/www/components/blocks";
const REGISTRY_DIR: &str = "apps/www/registry";

/// Simulated repository tree derived from the catalog
fn repository_listing(path: &str) -> Option<Vec<String>> {
    let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    match path {
        "" => Some(owned(&[
            "apps/www/components/",
            "apps/www/components/ui/",
            "apps/www/components/blocks/",
            "apps/www/registry/",
        ])),
        COMPONENTS_DIR => Some(owned(&["ui/", "examples/", "blocks/", "docs/", "layouts/", "lib/"])),
        UI_DIR => Some(
            components::all()
                .iter()
                .map(|c| format!("{}.tsx", c.name))
                .collect(),
        ),
        BLOCKS_DIR => Some(blocks::all().iter().map(|b| format!("{}/", b.name)).collect()),
        REGISTRY_DIR => Some(owned(&["default/", "new-york/", "index.json"])),
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(args: Value) -> std::result::Result<T, ToolError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(args).map_err(|e| ToolError::invalid_params(e.to_string()))
}

fn render(value: &Value) -> ToolResult {
    serde_json::to_string_pretty(value)
        .map_err(|e| ToolError::internal(format!("Internal error: {}", e)))
}

fn require_component(name: &str) -> Result<&'static catalog::ComponentMeta> {
    components::by_name(name).ok_or_else(|| Error::not_found(format!("Component \"{}\"", name)))
}

fn require_block(name: &str) -> Result<&'static catalog::BlockMeta> {
    blocks::by_name(name).ok_or_else(|| Error::not_found(format!("Block \"{}\"", name)))
}

fn source_error(what: &str, err: impl std::fmt::Display) -> ToolError {
    warn!(error = %err, "Source retrieval failed");
    ToolError::internal(format!("Failed to fetch {} source: {}", what, err))
}
