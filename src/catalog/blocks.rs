use super::contains_ignore_case;
use crate::core::{EntityKind, Style};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Grouping used when listing blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockCategory {
    Authentication,
    Dashboard,
    Layout,
    Charts,
    Forms,
    Ecommerce,
    Marketing,
    Application,
}

impl BlockCategory {
    pub const ALL: [BlockCategory; 8] = [
        Self::Authentication,
        Self::Dashboard,
        Self::Layout,
        Self::Charts,
        Self::Forms,
        Self::Ecommerce,
        Self::Marketing,
        Self::Application,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Dashboard => "dashboard",
            Self::Layout => "layout",
            Self::Charts => "charts",
            Self::Forms => "forms",
            Self::Ecommerce => "ecommerce",
            Self::Marketing => "marketing",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown block category '{}'", s))
    }
}

/// Locally known facts about one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub category: BlockCategory,
    /// Components the block is assembled from
    pub components: &'static [&'static str],
    /// npm packages the block needs beyond its components
    pub dependencies: &'static [&'static str],
}

impl BlockMeta {
    pub fn registry_url(&self, base_url: &str, style: Style) -> String {
        format!(
            "{}/{}/{}/{}.json",
            base_url.trim_end_matches('/'),
            style,
            EntityKind::Block.segment(),
            self.name
        )
    }

    /// Member components as owned names, ready for `add`
    pub fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.to_string()).collect()
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.name, query)
            || contains_ignore_case(self.description, query)
            || contains_ignore_case(self.category.as_str(), query)
            || self.components.iter().any(|c| contains_ignore_case(c, query))
    }
}

macro_rules! block {
    ($name:literal, $category:ident, $description:literal, [$($comp:literal),* $(,)?], [$($dep:literal),* $(,)?]) => {
        BlockMeta {
            name: $name,
            description: $description,
            category: BlockCategory::$category,
            components: &[$($comp),*],
            dependencies: &[$($dep),*],
        }
    };
}

const FORM_DEPS: [&str; 3] = ["react-hook-form", "zod", "@hookform/resolvers"];

static BLOCKS: &[BlockMeta] = &[
    block!("authentication-01", Authentication, "A simple login form with email and password", ["button", "card", "input", "label"], []),
    block!("authentication-02", Authentication, "A login form with email, password, and social login options", ["button", "card", "input", "label", "separator"], []),
    block!("authentication-03", Authentication, "A sign-up form with name, email, and password", ["button", "card", "input", "label"], []),
    block!("authentication-04", Authentication, "A login page with a split layout", ["button", "input", "label"], []),
    block!("dashboard-01", Dashboard, "A dashboard with cards displaying key metrics", ["card", "tabs", "button"], []),
    block!("dashboard-02", Dashboard, "A dashboard with sidebar navigation", ["card", "sheet", "button", "nav"], []),
    block!("dashboard-03", Dashboard, "A dashboard with charts and data tables", ["card", "chart", "table", "tabs"], ["recharts"]),
    block!("dashboard-04", Dashboard, "An analytics dashboard with multiple chart types", ["card", "chart", "select", "button"], ["recharts"]),
    block!("dashboard-05", Dashboard, "A responsive dashboard with collapsible sidebar", ["card", "sheet", "button", "badge", "dropdown-menu"], []),
    block!("dashboard-06", Dashboard, "A dashboard with dark mode support", ["card", "button", "switch", "tabs"], []),
    block!("dashboard-07", Dashboard, "A minimal dashboard with key performance indicators", ["card", "progress", "badge"], []),
    block!("chart-01", Charts, "A simple bar chart with responsive container", ["card", "chart"], ["recharts"]),
    block!("chart-02", Charts, "A line chart with multiple data series", ["card", "chart"], ["recharts"]),
    block!("chart-03", Charts, "A pie chart with custom colors", ["card", "chart"], ["recharts"]),
    block!("chart-04", Charts, "An area chart with gradient fill", ["card", "chart"], ["recharts"]),
    block!("sidebar-01", Layout, "A collapsible sidebar with navigation links", ["button", "sheet", "scroll-area"], []),
    block!("sidebar-02", Layout, "A sidebar with nested navigation", ["accordion", "button", "sheet"], []),
    block!("sidebar-03", Layout, "A sidebar with user profile section", ["avatar", "button", "dropdown-menu", "sheet"], []),
    block!("sidebar-04", Layout, "A minimal sidebar with icon navigation", ["button", "tooltip", "sheet"], []),
    block!("sidebar-05", Layout, "A sidebar with search functionality", ["input", "button", "command", "sheet"], []),
    block!("sidebar-06", Layout, "A responsive sidebar that converts to bottom nav on mobile", ["button", "sheet"], []),
    block!("sidebar-07", Layout, "A sidebar with pinnable sections", ["button", "separator", "sheet"], []),
    BlockMeta {
        name: "settings-01",
        description: "A settings page with tabs for different sections",
        category: BlockCategory::Forms,
        components: &["form", "tabs", "card", "button", "input", "label"],
        dependencies: &FORM_DEPS,
    },
    BlockMeta {
        name: "settings-02",
        description: "A profile settings form",
        category: BlockCategory::Forms,
        components: &["form", "card", "button", "input", "textarea", "label", "avatar"],
        dependencies: &FORM_DEPS,
    },
    BlockMeta {
        name: "settings-03",
        description: "Account settings with password change",
        category: BlockCategory::Forms,
        components: &["form", "card", "button", "input", "label"],
        dependencies: &FORM_DEPS,
    },
    BlockMeta {
        name: "settings-04",
        description: "Notification preferences settings",
        category: BlockCategory::Forms,
        components: &["form", "card", "switch", "label"],
        dependencies: &FORM_DEPS,
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static BlockMeta>> =
    Lazy::new(|| BLOCKS.iter().map(|b| (b.name, b)).collect());

pub fn all() -> &'static [BlockMeta] {
    BLOCKS
}

pub fn by_name(name: &str) -> Option<&'static BlockMeta> {
    BY_NAME.get(name).copied()
}

pub fn by_category(category: BlockCategory) -> Vec<&'static BlockMeta> {
    BLOCKS.iter().filter(|b| b.category == category).collect()
}

/// Like [`components::search`](super::components::search), also matching member components
pub fn search(query: &str) -> Vec<&'static BlockMeta> {
    BLOCKS.iter().filter(|b| b.matches(query)).collect()
}
