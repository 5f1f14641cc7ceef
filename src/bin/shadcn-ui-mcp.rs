use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use shadcn_ui_mcp::core::{Config, Style};
use shadcn_ui_mcp::server::{tool_definitions, StdioServer, ToolHandler};
use std::path::PathBuf;
use tracing::{error, info};

/// MCP server exposing shadcn/ui components, blocks and CLI over stdio
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Registry base URL
    #[arg(long, global = true, env = "SHADCN_MCP_REGISTRY_URL")]
    registry_url: Option<String>,

    /// Registry style (default or new-york)
    #[arg(long, global = true, env = "SHADCN_MCP_STYLE")]
    style: Option<Style>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP requests on stdin/stdout (the default)
    Serve,

    /// Print the tool definitions as JSON
    Tools,

    /// Run a single tool and print its result
    Call {
        /// Tool name, e.g. list_components
        tool: String,

        /// Tool arguments as a JSON object
        args: Option<String>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        let config = Config::load_from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?
            .with_overrides(self.registry_url.clone(), self.style, self.verbose);
        config.validate()?;
        Ok(config)
    }

    async fn execute(self, config: Config) -> Result<()> {
        let config_path = self.config_path();
        match self.command.unwrap_or(Commands::Serve) {
            Commands::Serve => {
                let handler = ToolHandler::from_config(&config)?;
                StdioServer::new(handler).serve().await?;
            }
            Commands::Tools => {
                println!("{}", serde_json::to_string_pretty(&tool_definitions())?);
            }
            Commands::Call { tool, args } => {
                let args: serde_json::Value = match args {
                    Some(raw) => serde_json::from_str(&raw).context("tool arguments must be JSON")?,
                    None => serde_json::Value::Null,
                };
                let handler = ToolHandler::from_config(&config)?;
                let text = handler
                    .call(&tool, args)
                    .await
                    .map_err(|e| anyhow::anyhow!("{} (code {})", e, e.code()))?;
                println!("{}", text);
            }
            Commands::Config { action } => match action {
                ConfigAction::Show => print!("{}", toml::to_string_pretty(&config)?),
                ConfigAction::Path => println!("{}", config_path.display()),
                ConfigAction::Init { force } => {
                    if config_path.exists() && !force {
                        anyhow::bail!(
                            "{} already exists, pass --force to overwrite",
                            config_path.display()
                        );
                    }
                    Config::default().save_to_file(&config_path)?;
                    println!("Wrote {}", config_path.display());
                }
            },
            Commands::Completion { shell } => {
                let mut cmd = Cli::command();
                let name = cmd.get_name().to_string();
                generate(shell, &mut cmd, name, &mut std::io::stdout());
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    // stdout carries protocol frames, so logs go to stderr
    let default_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!(
        registry = %config.registry.base_url,
        style = %config.registry.style,
        "Starting shadcn-ui-mcp"
    );

    if let Err(e) = cli.execute(config).await {
        error!("Command failed: {:?}", e);
        match e.downcast_ref::<shadcn_ui_mcp::core::Error>() {
            Some(lib_err) => eprintln!("Error: {}", lib_err.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}
