use super::contains_ignore_case;
use crate::core::{EntityKind, Style};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Grouping used when listing components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentCategory {
    Form,
    Layout,
    Navigation,
    Overlay,
    Feedback,
    DataDisplay,
    Disclosure,
    DataEntry,
    Typography,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 9] = [
        Self::Form,
        Self::Layout,
        Self::Navigation,
        Self::Overlay,
        Self::Feedback,
        Self::DataDisplay,
        Self::Disclosure,
        Self::DataEntry,
        Self::Typography,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Layout => "layout",
            Self::Navigation => "navigation",
            Self::Overlay => "overlay",
            Self::Feedback => "feedback",
            Self::DataDisplay => "data-display",
            Self::Disclosure => "disclosure",
            Self::DataEntry => "data-entry",
            Self::Typography => "typography",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown component category '{}'", s))
    }
}

/// Locally known facts about one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ComponentCategory,
    pub dependencies: &'static [&'static str],
}

impl ComponentMeta {
    /// Registry location of this component for the given base and style
    pub fn registry_url(&self, base_url: &str, style: Style) -> String {
        format!(
            "{}/{}/{}/{}.json",
            base_url.trim_end_matches('/'),
            style,
            EntityKind::Component.segment(),
            self.name
        )
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.name, query)
            || contains_ignore_case(self.description, query)
            || contains_ignore_case(self.category.as_str(), query)
    }
}

macro_rules! component {
    ($name:literal, $category:ident, $description:literal, [$($dep:literal),* $(,)?]) => {
        ComponentMeta {
            name: $name,
            description: $description,
            category: ComponentCategory::$category,
            dependencies: &[$($dep),*],
        }
    };
}

static COMPONENTS: &[ComponentMeta] = &[
    // Layout & structure
    component!("accordion", Disclosure, "A vertically stacked set of interactive headings that reveal content", ["@radix-ui/react-accordion"]),
    component!("aspect-ratio", Layout, "Displays content within a desired ratio", ["@radix-ui/react-aspect-ratio"]),
    component!("card", Layout, "Displays content in a card container", []),
    component!("collapsible", Disclosure, "An interactive component which expands/collapses a content area", ["@radix-ui/react-collapsible"]),
    component!("resizable", Layout, "A component that allows resizing of panels", ["react-resizable-panels"]),
    component!("scroll-area", Layout, "Augments native scroll functionality with custom styling", ["@radix-ui/react-scroll-area"]),
    component!("separator", Layout, "Visually or semantically separates content", ["@radix-ui/react-separator"]),
    component!("tabs", Disclosure, "A set of layered sections of content, known as tab panels", ["@radix-ui/react-tabs"]),
    // Form
    component!("button", Form, "Displays a button or a component that looks like a button", ["@radix-ui/react-slot"]),
    component!("checkbox", Form, "A control that allows the user to toggle between checked and not checked", ["@radix-ui/react-checkbox"]),
    component!("form", Form, "Building forms with React Hook Form and Zod", ["@radix-ui/react-label", "@radix-ui/react-slot", "react-hook-form", "@hookform/resolvers", "zod"]),
    component!("input", Form, "Displays a form input field", []),
    component!("input-otp", Form, "One-time password input component", ["input-otp"]),
    component!("label", Form, "Renders an accessible label associated with controls", ["@radix-ui/react-label"]),
    component!("radio-group", Form, "A set of checkable buttons where no more than one can be checked", ["@radix-ui/react-radio-group"]),
    component!("select", Form, "Displays a list of options for the user to pick from", ["@radix-ui/react-select"]),
    component!("slider", Form, "An input where the user selects a value from within a given range", ["@radix-ui/react-slider"]),
    component!("switch", Form, "A control that allows the user to toggle between on and off", ["@radix-ui/react-switch"]),
    component!("textarea", Form, "Displays a form textarea field", []),
    component!("toggle", Form, "A two-state button that can be either on or off", ["@radix-ui/react-toggle"]),
    component!("toggle-group", Form, "A set of two-state buttons that can be toggled on or off", ["@radix-ui/react-toggle-group"]),
    // Navigation
    component!("breadcrumb", Navigation, "Displays the path to the current resource", []),
    component!("command", Navigation, "Fast, composable command menu", ["cmdk"]),
    component!("dropdown-menu", Navigation, "Displays a menu to the user triggered by a button", ["@radix-ui/react-dropdown-menu"]),
    component!("menubar", Navigation, "A visually persistent menu common in desktop applications", ["@radix-ui/react-menubar"]),
    component!("navigation-menu", Navigation, "A collection of links for navigating websites", ["@radix-ui/react-navigation-menu"]),
    component!("pagination", Navigation, "Component to navigate between pages", []),
    // Overlays
    component!("alert-dialog", Overlay, "A modal dialog that interrupts interaction", ["@radix-ui/react-alert-dialog"]),
    component!("context-menu", Overlay, "Displays a menu triggered by right-click", ["@radix-ui/react-context-menu"]),
    component!("dialog", Overlay, "A window overlaid on the primary window", ["@radix-ui/react-dialog"]),
    component!("drawer", Overlay, "A drawer component that slides in from the edge of the screen", ["vaul"]),
    component!("hover-card", Overlay, "Displays content on hover", ["@radix-ui/react-hover-card"]),
    component!("popover", Overlay, "Displays rich content in a portal", ["@radix-ui/react-popover"]),
    component!("sheet", Overlay, "Extends the dialog component with slide-in animation", ["@radix-ui/react-dialog"]),
    component!("tooltip", Overlay, "A popup that displays information on hover", ["@radix-ui/react-tooltip"]),
    // Feedback
    component!("alert", Feedback, "Displays a callout for user attention", []),
    component!("badge", Feedback, "Displays a small badge or status indicator", []),
    component!("progress", Feedback, "Displays an indicator showing completion progress", ["@radix-ui/react-progress"]),
    component!("skeleton", Feedback, "Use to show a placeholder while content is loading", []),
    component!("sonner", Feedback, "An opinionated toast component", ["sonner"]),
    component!("toast", Feedback, "A notification that appears at the corner of the screen", ["@radix-ui/react-toast"]),
    component!("toaster", Feedback, "The toaster component for displaying toasts", []),
    // Data display and entry
    component!("avatar", DataDisplay, "An image element with a fallback", ["@radix-ui/react-avatar"]),
    component!("calendar", DataEntry, "A date picker component", ["react-day-picker", "date-fns"]),
    component!("carousel", DataDisplay, "A carousel component for cycling through content", ["embla-carousel-react"]),
    component!("chart", DataDisplay, "Beautiful and responsive charts using Recharts", ["recharts"]),
    component!("combobox", DataEntry, "Autocomplete input with a dropdown list", ["@radix-ui/react-popover", "cmdk"]),
    component!("data-table", DataDisplay, "Powerful data table with sorting, filtering, and pagination", ["@tanstack/react-table"]),
    component!("date-picker", DataEntry, "A date picker component with calendar popup", ["react-day-picker", "date-fns", "@radix-ui/react-popover"]),
    component!("table", DataDisplay, "Displays data in a table format", []),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static ComponentMeta>> =
    Lazy::new(|| COMPONENTS.iter().map(|c| (c.name, c)).collect());

/// Every known component, in catalog order
pub fn all() -> &'static [ComponentMeta] {
    COMPONENTS
}

pub fn by_name(name: &str) -> Option<&'static ComponentMeta> {
    BY_NAME.get(name).copied()
}

pub fn by_category(category: ComponentCategory) -> Vec<&'static ComponentMeta> {
    COMPONENTS.iter().filter(|c| c.category == category).collect()
}

/// Case-insensitive substring match over name, description and category
pub fn search(query: &str) -> Vec<&'static ComponentMeta> {
    COMPONENTS.iter().filter(|c| c.matches(query)).collect()
}
