//! Remote registry access
//!
//! This module handles:
//! - Building item and index URLs from base URL, style, kind and name
//! - Fetching and decoding registry JSON, one GET per call
//! - Read-only projections over a fetched [`RegistryItem`]
//!
//! Nothing is cached and nothing is retried. Every failure is reported as
//! a [`RegistryFetchError`] so callers can decide whether a local fallback
//! is acceptable.

use crate::core::{
    config::RegistrySettings, EntityKind, Error, IndexEntry, RegistryFetchError, RegistryFile,
    RegistryItem, Result, Style,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Source of registry definitions
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Fetch one item of the given kind
    async fn fetch(
        &self,
        kind: EntityKind,
        name: &str,
        style: Style,
    ) -> std::result::Result<RegistryItem, RegistryFetchError>;

    /// Fetch the full registry index for a style
    async fn fetch_index(
        &self,
        style: Style,
    ) -> std::result::Result<Vec<IndexEntry>, RegistryFetchError>;
}

/// HTTP client for the shadcn/ui registry
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            Error::configuration(format!("invalid registry URL '{}': {}", base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shadcn-ui-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Create a client from the registry section of the configuration
    pub fn from_settings(settings: &RegistrySettings) -> Result<Self> {
        Self::new(settings.base_url.clone(), settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{style}/{segment}/{name}.json`
    pub fn item_url(
        &self,
        kind: EntityKind,
        name: &str,
        style: Style,
    ) -> std::result::Result<Url, RegistryFetchError> {
        let invalid = |message: String| RegistryFetchError::Transport {
            kind,
            name: name.to_string(),
            message,
        };

        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Err(invalid(format!("invalid item name '{}'", name)));
        }

        let raw = format!(
            "{}/{}/{}/{}.json",
            self.base_url,
            style.as_str(),
            kind.segment(),
            name
        );
        Url::parse(&raw).map_err(|e| invalid(format!("invalid request URL: {}", e)))
    }

    /// `{base}/{style}/index.json`
    pub fn index_url(&self, style: Style) -> std::result::Result<Url, RegistryFetchError> {
        let raw = format!("{}/{}/index.json", self.base_url, style.as_str());
        Url::parse(&raw).map_err(|e| RegistryFetchError::Index {
            message: format!("invalid request URL: {}", e),
        })
    }

    /// Issue one GET and decode the body, mapping each failure stage through `on_error`
    async fn get_json<T, F>(&self, url: Url, on_error: F) -> std::result::Result<T, RegistryFetchError>
    where
        T: DeserializeOwned,
        F: Fn(FetchStage, String) -> RegistryFetchError,
    {
        debug!(%url, "Fetching from registry");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| on_error(FetchStage::Transport, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            warn!(%url, %status, "Registry returned an error status");
            return Err(on_error(FetchStage::Status, reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| on_error(FetchStage::Transport, e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(%url, error = %e, "Registry returned an undecodable body");
            on_error(FetchStage::Parse, e.to_string())
        })
    }
}

/// Where a registry request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchStage {
    Transport,
    Status,
    Parse,
}

#[async_trait]
impl RegistrySource for RegistryClient {
    async fn fetch(
        &self,
        kind: EntityKind,
        name: &str,
        style: Style,
    ) -> std::result::Result<RegistryItem, RegistryFetchError> {
        let url = self.item_url(kind, name, style)?;
        let name = name.to_string();

        self.get_json(url, |stage, message| match stage {
            FetchStage::Transport => RegistryFetchError::Transport {
                kind,
                name: name.clone(),
                message,
            },
            FetchStage::Status => RegistryFetchError::Status {
                kind,
                name: name.clone(),
                status: message,
            },
            FetchStage::Parse => RegistryFetchError::Parse {
                kind,
                name: name.clone(),
                message,
            },
        })
        .await
    }

    async fn fetch_index(
        &self,
        style: Style,
    ) -> std::result::Result<Vec<IndexEntry>, RegistryFetchError> {
        let url = self.index_url(style)?;
        self.get_json(url, |_, message| RegistryFetchError::Index { message })
            .await
    }
}

impl RegistryItem {
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &[String] {
        &self.dev_dependencies
    }

    /// Other registry items this one builds on
    pub fn registry_dependencies(&self) -> &[String] {
        &self.registry_dependencies
    }

    pub fn files(&self) -> &[RegistryFile] {
        &self.files
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(RegistryFile::display_name).collect()
    }

    /// Content of the main file, which is the first one listed
    ///
    /// # Errors
    ///
    /// An item without files cannot provide source; this is reported rather
    /// than returning empty content.
    pub fn primary_source(&self) -> Result<&str> {
        self.files
            .first()
            .map(|file| file.content.as_str())
            .ok_or_else(|| Error::EmptyRegistryItem(self.name.clone()))
    }

    /// Like [`files`](Self::files) but rejects an empty list
    pub fn require_files(&self) -> Result<&[RegistryFile]> {
        if self.files.is_empty() {
            return Err(Error::EmptyRegistryItem(self.name.clone()));
        }
        Ok(&self.files)
    }

    pub fn tailwind_config(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.tailwind.as_ref().and_then(|t| t.config.as_ref())
    }

    pub fn css_vars(&self) -> Option<&crate::core::CssVars> {
        self.css_vars.as_ref()
    }

    /// Light-mode theme variables, empty when absent
    pub fn light_vars(&self) -> BTreeMap<String, String> {
        self.css_vars
            .as_ref()
            .and_then(|vars| vars.light.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RegistryClient {
        RegistryClient::new(server.uri(), Duration::from_secs(5)).unwrap()
    }

    fn button_payload() -> serde_json::Value {
        json!({
            "name": "button",
            "type": "registry:ui",
            "dependencies": ["@radix-ui/react-slot"],
            "files": [
                {"name": "button.tsx", "content": "export function Button() {}"},
                {"name": "button-variants.ts", "content": "export const variants = {}"}
            ],
            "tailwind": {"config": {"theme": {"extend": {}}}},
            "cssVars": {"light": {"primary": "0 0% 9%"}, "dark": {"primary": "0 0% 98%"}}
        })
    }

    #[test]
    fn test_item_url_template() {
        let client = RegistryClient::new("https://ui.shadcn.com/registry/", Duration::from_secs(1)).unwrap();

        let url = client
            .item_url(EntityKind::Component, "button", Style::NewYork)
            .unwrap();
        assert_eq!(url.as_str(), "https://ui.shadcn.com/registry/new-york/ui/button.json");

        let url = client
            .item_url(EntityKind::Block, "dashboard-01", Style::Default)
            .unwrap();
        assert_eq!(url.as_str(), "https://ui.shadcn.com/registry/default/block/dashboard-01.json");

        let url = client.index_url(Style::Default).unwrap();
        assert_eq!(url.as_str(), "https://ui.shadcn.com/registry/default/index.json");
    }

    #[test]
    fn test_item_url_rejects_path_tricks() {
        let client = RegistryClient::new("https://ui.shadcn.com/registry", Duration::from_secs(1)).unwrap();

        assert!(client.item_url(EntityKind::Component, "", Style::Default).is_err());
        assert!(client.item_url(EntityKind::Component, "../index", Style::Default).is_err());
        assert!(client.item_url(EntityKind::Component, "ui/button", Style::Default).is_err());
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let err = RegistryClient::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[tokio::test]
    async fn test_fetch_decodes_item() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/default/ui/button.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(button_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let item = client_for(&server)
            .fetch(EntityKind::Component, "button", Style::Default)
            .await
            .unwrap();

        assert_eq!(item.name, "button");
        assert_eq!(item.dependencies(), ["@radix-ui/react-slot".to_string()]);
        assert_eq!(item.file_names(), vec!["button.tsx", "button-variants.ts"]);
        assert_eq!(item.primary_source().unwrap(), "export function Button() {}");
        assert!(item.tailwind_config().unwrap().contains_key("theme"));
        assert_eq!(item.light_vars().get("primary").unwrap(), "0 0% 9%");
    }

    #[tokio::test]
    async fn test_not_found_names_the_item() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/new-york/ui/nonexistent.json"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(EntityKind::Component, "nonexistent", Style::NewYork)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryFetchError::Status { .. }));
        assert!(err.to_string().contains("nonexistent"));
        assert!(err.to_string().contains("Not Found"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/default/block/login-01.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(EntityKind::Block, "login-01", Style::Default)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryFetchError::Parse { .. }));
        assert!(err.to_string().contains("login-01"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/default/example/card-demo.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": "nope"})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(EntityKind::Example, "card-demo", Style::Default)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryFetchError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/default/ui/card.json"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(EntityKind::Component, "card", Style::Default)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[tokio::test]
    async fn test_every_fetch_hits_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/default/ui/button.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(button_payload()))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = client
            .fetch(EntityKind::Component, "button", Style::Default)
            .await
            .unwrap();
        let second = client
            .fetch(EntityKind::Component, "button", Style::Default)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unreachable_registry_is_transport_error() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        let err = client
            .fetch(EntityKind::Component, "button", Style::Default)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryFetchError::Transport { .. }));
        assert_eq!(err.item_name(), Some("button"));
    }

    #[tokio::test]
    async fn test_fetch_index() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/default/index.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "button", "type": "registry:ui"},
                {"name": "dashboard-01", "type": "registry:block", "registryDependencies": ["card", "tabs"]}
            ])))
            .mount(&server)
            .await;

        let index = client_for(&server).fetch_index(Style::Default).await.unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index[1].registry_dependencies, vec!["card", "tabs"]);
    }

    #[tokio::test]
    async fn test_fetch_index_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/default/index.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_index(Style::Default).await.unwrap_err();

        assert!(matches!(err, RegistryFetchError::Index { .. }));
    }

    #[test]
    fn test_empty_item_has_no_source() {
        let item: RegistryItem = serde_json::from_value(json!({"name": "ghost"})).unwrap();

        assert!(matches!(item.primary_source(), Err(Error::EmptyRegistryItem(name)) if name == "ghost"));
        assert!(item.require_files().is_err());
        assert!(item.file_names().is_empty());
        assert!(item.light_vars().is_empty());
    }
}
