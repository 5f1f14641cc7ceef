//! Tool argument shapes and their advertised schemas

use crate::catalog::{BlockCategory, ComponentCategory};
use crate::core::Style;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryArgs {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoArgs {
    pub name: String,
    #[serde(default, deserialize_with = "demo_index")]
    pub demo_index: Option<usize>,
}

/// JSON clients may send `1.0`; negative or non-finite values mean "unset"
fn demo_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc() as usize))
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstallComponentArgs {
    pub components: Vec<String>,
    pub force: Option<bool>,
    pub cwd: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstallBlockArgs {
    pub name: String,
    pub force: Option<bool>,
    pub cwd: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseArgs {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArgs {
    pub query: String,
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitArgs {
    pub style: Option<Style>,
    pub typescript: Option<bool>,
    pub tailwind_config: Option<String>,
    pub tailwind_css: Option<String>,
    pub components_path: Option<String>,
    pub force: Option<bool>,
    pub cwd: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CwdArgs {
    pub cwd: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiffArgs {
    pub name: String,
    pub cwd: Option<String>,
}

/// Advertised description of one tool
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

fn string_prop(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    let mut schema = json!({"type": "object", "properties": properties});
    if !required.is_empty() {
        schema["required"] = json!(required);
    }
    schema
}

fn name_schema(what: &str) -> Value {
    object_schema(
        json!({"name": string_prop(&format!("The name of the {}", what))}),
        &["name"],
    )
}

fn category_schema(names: Vec<&'static str>) -> Value {
    object_schema(
        json!({
            "category": {
                "type": "string",
                "description": format!("Filter by category ({})", names.join(", ")),
                "enum": names,
            }
        }),
        &[],
    )
}

/// Every tool the server exposes, in listing order
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let force = json!({"type": "boolean", "description": "Force overwrite existing files"});
    let cwd = string_prop("Working directory for the command");

    vec![
        ToolDefinition {
            name: "list_components",
            description: "List all available shadcn/ui components with optional category filtering",
            input_schema: category_schema(
                ComponentCategory::ALL.iter().map(|c| c.as_str()).collect(),
            ),
        },
        ToolDefinition {
            name: "get_component_source",
            description: "Get the source code for a specific shadcn/ui component",
            input_schema: name_schema("component"),
        },
        ToolDefinition {
            name: "get_component_metadata",
            description: "Get metadata for a specific component including dependencies and description",
            input_schema: name_schema("component"),
        },
        ToolDefinition {
            name: "get_component_demo",
            description: "Get demo code and usage examples for a specific component",
            input_schema: object_schema(
                json!({
                    "name": string_prop("The name of the component"),
                    "demoIndex": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Index of the demo to retrieve (defaults to 0)"
                    }
                }),
                &["name"],
            ),
        },
        ToolDefinition {
            name: "install_component",
            description: "Install one or more shadcn/ui components using the CLI",
            input_schema: object_schema(
                json!({
                    "components": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Array of component names to install"
                    },
                    "force": force,
                    "cwd": cwd,
                }),
                &["components"],
            ),
        },
        ToolDefinition {
            name: "list_blocks",
            description: "List all available shadcn/ui blocks with optional category filtering",
            input_schema: category_schema(BlockCategory::ALL.iter().map(|c| c.as_str()).collect()),
        },
        ToolDefinition {
            name: "get_block_source",
            description: "Get the complete source code for a shadcn/ui block",
            input_schema: name_schema("block"),
        },
        ToolDefinition {
            name: "install_block",
            description: "Install a shadcn/ui block with all its dependencies",
            input_schema: object_schema(
                json!({
                    "name": string_prop("The name of the block to install"),
                    "force": force,
                    "cwd": cwd,
                }),
                &["name"],
            ),
        },
        ToolDefinition {
            name: "browse_repository",
            description: "Browse the shadcn/ui repository structure",
            input_schema: object_schema(
                json!({
                    "path": string_prop("Repository path to browse (e.g., \"apps/www/components\")")
                }),
                &[],
            ),
        },
        ToolDefinition {
            name: "search_repository",
            description: "Search for files or content in the shadcn/ui repository",
            input_schema: object_schema(
                json!({
                    "query": string_prop("Search query"),
                    "fileType": string_prop("Filter by file type (e.g., \"tsx\", \"ts\", \"css\")"),
                }),
                &["query"],
            ),
        },
        ToolDefinition {
            name: "init_shadcn",
            description: "Initialize shadcn/ui in a project",
            input_schema: object_schema(
                json!({
                    "style": {
                        "type": "string",
                        "enum": [Style::Default.as_str(), Style::NewYork.as_str()],
                        "description": "Which style to use"
                    },
                    "typescript": {"type": "boolean", "description": "Use TypeScript"},
                    "tailwindConfig": string_prop("Path to tailwind config"),
                    "tailwindCss": string_prop("Path to the global CSS file"),
                    "componentsPath": string_prop("Path to components directory"),
                    "force": {"type": "boolean", "description": "Force init (skip checks)"},
                    "cwd": string_prop("Working directory"),
                }),
                &[],
            ),
        },
        ToolDefinition {
            name: "check_project_status",
            description: "Check the current project status and shadcn/ui configuration",
            input_schema: object_schema(json!({"cwd": string_prop("Working directory to check")}), &[]),
        },
        ToolDefinition {
            name: "diff_component",
            description: "Show differences between an installed component and the registry version",
            input_schema: object_schema(
                json!({
                    "name": string_prop("The name of the component"),
                    "cwd": cwd,
                }),
                &["name"],
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tool_names_are_unique() {
        let tools = tool_definitions();
        let names: HashSet<_> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), tools.len());
        assert_eq!(tools.len(), 13);
    }

    #[test]
    fn test_schemas_are_objects_with_declared_required_fields() {
        for tool in tool_definitions() {
            let schema = &tool.input_schema;
            assert_eq!(schema["type"], "object", "{}", tool.name);
            if let Some(required) = schema["required"].as_array() {
                for field in required {
                    let field = field.as_str().unwrap();
                    assert!(
                        schema["properties"].get(field).is_some(),
                        "{} requires undeclared {}",
                        tool.name,
                        field
                    );
                }
            }
        }
    }

    #[test]
    fn test_category_enum_lists_every_category() {
        let tools = tool_definitions();
        let list = tools.iter().find(|t| t.name == "list_components").unwrap();
        let values = list.input_schema["properties"]["category"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(values.len(), ComponentCategory::ALL.len());
        assert!(values.contains(&json!("data-display")));
    }

    #[test]
    fn test_definition_serializes_input_schema_in_camel_case() {
        let value = serde_json::to_value(&tool_definitions()[0]).unwrap();
        assert!(value.get("inputSchema").is_some());
    }

    #[test]
    fn test_demo_index_accepts_whole_floats() {
        let decode = |v: Value| serde_json::from_value::<DemoArgs>(v).unwrap().demo_index;

        assert_eq!(decode(json!({"name": "button", "demoIndex": 1.0})), Some(1));
        assert_eq!(decode(json!({"name": "button", "demoIndex": 2.7})), Some(2));
        assert_eq!(decode(json!({"name": "button", "demoIndex": -1})), None);
        assert_eq!(decode(json!({"name": "button", "demoIndex": null})), None);
        assert_eq!(decode(json!({"name": "button"})), None);

        let err = serde_json::from_value::<DemoArgs>(json!({"name": "button", "demoIndex": "1"}));
        assert!(err.is_err());

        let demo = tool_definitions()
            .into_iter()
            .find(|t| t.name == "get_component_demo")
            .unwrap();
        assert_eq!(demo.input_schema["properties"]["demoIndex"]["type"], "integer");
    }

    #[test]
    fn test_args_decode_camel_case() {
        let args: DemoArgs = serde_json::from_value(json!({"name": "button", "demoIndex": 2})).unwrap();
        assert_eq!(args.demo_index, Some(2));

        let args: InitArgs =
            serde_json::from_value(json!({"style": "new-york", "componentsPath": "src/ui"})).unwrap();
        assert_eq!(args.style, Some(Style::NewYork));
        assert_eq!(args.components_path.as_deref(), Some("src/ui"));

        assert!(serde_json::from_value::<InstallComponentArgs>(json!({"components": "button"})).is_err());
    }
}
