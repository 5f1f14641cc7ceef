use crate::core::error::{Error, Result};
use crate::core::types::Style;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default base URL of the shadcn/ui registry
pub const DEFAULT_REGISTRY_URL: &str = "https://ui.shadcn.com/registry";

/// Configuration settings for the shadcn/ui MCP server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Working directory used when a request does not name one
    pub default_cwd: Option<PathBuf>,

    /// Default verbosity level
    #[serde(default)]
    pub verbose: bool,

    /// Remote registry settings
    #[serde(default)]
    pub registry: RegistrySettings,

    /// External CLI settings
    #[serde(default)]
    pub cli: CliSettings,
}

/// Remote registry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Base URL, without the trailing style segment
    #[serde(default = "default_registry_url")]
    pub base_url: String,

    /// Style used for registry lookups
    #[serde(default)]
    pub style: Style,

    /// Per-request timeout for registry calls
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// External shadcn CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliSettings {
    /// Launcher program
    #[serde(default = "default_program")]
    pub program: String,

    /// Package spec handed to the launcher
    #[serde(default = "default_package")]
    pub package: String,

    /// Package manager used for project inspection
    #[serde(default = "default_npm")]
    pub npm: String,

    #[serde(default = "default_init_timeout")]
    pub init_timeout_secs: u64,

    #[serde(default = "default_add_timeout")]
    pub add_timeout_secs: u64,

    #[serde(default = "default_diff_timeout")]
    pub diff_timeout_secs: u64,

    /// Timeout for project inspection probes (`npm list`)
    #[serde(default = "default_inspect_timeout")]
    pub inspect_timeout_secs: u64,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            base_url: default_registry_url(),
            style: Style::default(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            package: default_package(),
            npm: default_npm(),
            init_timeout_secs: default_init_timeout(),
            add_timeout_secs: default_add_timeout(),
            diff_timeout_secs: default_diff_timeout(),
            inspect_timeout_secs: default_inspect_timeout(),
        }
    }
}

impl RegistrySettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl CliSettings {
    pub fn init_timeout(&self) -> Duration {
        Duration::from_secs(self.init_timeout_secs)
    }

    pub fn add_timeout(&self) -> Duration {
        Duration::from_secs(self.add_timeout_secs)
    }

    pub fn diff_timeout(&self) -> Duration {
        Duration::from_secs(self.diff_timeout_secs)
    }

    pub fn inspect_timeout(&self) -> Duration {
        Duration::from_secs(self.inspect_timeout_secs)
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load configuration from file, falling back to defaults when it is absent
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "shadcn-ui-mcp")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                // Fallback to home directory if project dirs not available
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".shadcn-ui-mcp")
                    .join("config.toml")
            })
    }

    /// Load configuration from the default location
    pub fn load_default() -> Result<Self> {
        Self::load_from_file(Self::default_path())
    }

    /// Apply command-line overrides, giving priority to explicit values
    pub fn with_overrides(
        mut self,
        registry_url: Option<String>,
        style: Option<Style>,
        verbose: bool,
    ) -> Self {
        if let Some(url) = registry_url {
            self.registry.base_url = url;
        }
        if let Some(style) = style {
            self.registry.style = style;
        }
        if verbose {
            self.verbose = true;
        }
        self
    }

    /// Check that the configuration can be used
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.registry.base_url).map_err(|e| {
            Error::configuration(format!(
                "registry.base_url '{}' is not a valid URL: {}",
                self.registry.base_url, e
            ))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::configuration(format!(
                "registry.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.cli.program.trim().is_empty() {
            return Err(Error::configuration("cli.program must not be empty"));
        }

        let timeouts = [
            ("registry.request_timeout_secs", self.registry.request_timeout_secs),
            ("cli.init_timeout_secs", self.cli.init_timeout_secs),
            ("cli.add_timeout_secs", self.cli.add_timeout_secs),
            ("cli.diff_timeout_secs", self.cli.diff_timeout_secs),
            ("cli.inspect_timeout_secs", self.cli.inspect_timeout_secs),
        ];
        for (key, secs) in timeouts {
            if secs == 0 {
                return Err(Error::configuration(format!("{} must be greater than 0", key)));
            }
        }

        Ok(())
    }
}

/// Builder for creating `Config` instances with fluent configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry base URL
    pub fn registry_url(mut self, url: impl Into<String>) -> Self {
        self.config.registry.base_url = url.into();
        self
    }

    /// Set the registry style
    pub fn style(mut self, style: Style) -> Self {
        self.config.registry.style = style;
        self
    }

    /// Set the launcher program and the package it runs
    pub fn cli_program(mut self, program: impl Into<String>, package: impl Into<String>) -> Self {
        self.config.cli.program = program.into();
        self.config.cli.package = package.into();
        self
    }

    /// Set the default working directory
    pub fn default_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.config.default_cwd = Some(cwd.into());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// Helper functions for default values
fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_program() -> String {
    "npx".to_string()
}

fn default_package() -> String {
    "shadcn@latest".to_string()
}

fn default_npm() -> String {
    "npm".to_string()
}

fn default_init_timeout() -> u64 {
    120
}

fn default_add_timeout() -> u64 {
    60
}

fn default_diff_timeout() -> u64 {
    30
}

fn default_inspect_timeout() -> u64 {
    30
}
