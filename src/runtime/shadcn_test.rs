//! Tests for the shadcn CLI façade: argument rendering, execution through
//! the executor seam, the composite install and project inspection

use super::shadcn::*;
use crate::core::{config::CliSettings, Error, Framework, Style};
use crate::testing::{failure, success, MockExecutor};
use proptest::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn test_settings() -> CliSettings {
    CliSettings {
        program: "shadcn-test-launcher-not-on-path".to_string(),
        npm: "shadcn-test-npm-not-on-path".to_string(),
        ..CliSettings::default()
    }
}

fn cli_with(executor: Arc<MockExecutor>) -> ShadcnCli {
    ShadcnCli::new(test_settings(), executor)
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod argument_tests {
    use super::*;

    #[test]
    fn test_init_args_only_emit_requested_flags() {
        assert_eq!(init_args(&InitOptions::default()), vec!["init"]);

        let options = InitOptions {
            yes: true,
            defaults: true,
            typescript: Some(false),
            style: Some(Style::NewYork),
            tailwind_css: Some("app/globals.css".to_string()),
            components_path: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            init_args(&options),
            vec![
                "init",
                "--yes",
                "--defaults",
                "--no-typescript",
                "--style",
                "new-york",
                "--tailwind-css",
                "app/globals.css",
            ]
        );
    }

    #[test]
    fn test_add_args_put_flags_before_names() {
        let options = AddOptions {
            yes: true,
            silent: true,
            ..Default::default()
        };
        let args = add_args(&names(&["card", "button"]), &options).unwrap();
        assert_eq!(args, vec!["add", "--yes", "--silent", "card", "button"]);
    }

    #[test]
    fn test_add_args_reject_missing_names() {
        assert!(matches!(
            add_args(&[], &AddOptions::default()),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            add_args(&names(&["button", "  "]), &AddOptions::default()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_diff_args() {
        let args = diff_args("button", &DiffOptions { yes: true, cwd: None }).unwrap();
        assert_eq!(args, vec!["diff", "--yes", "button"]);
        assert!(diff_args("", &DiffOptions::default()).is_err());
    }

    proptest! {
        #[test]
        fn prop_add_flags_appear_once_when_set(yes: bool, force: bool, silent: bool) {
            let options = AddOptions { cwd: None, yes, force, silent };
            let args = add_args(&names(&["badge"]), &options).unwrap();
            for (enabled, flag) in [(yes, "--yes"), (force, "--force"), (silent, "--silent")] {
                let count = args.iter().filter(|a| a.as_str() == flag).count();
                prop_assert_eq!(count, usize::from(enabled));
            }
            prop_assert_eq!(args.last().map(String::as_str), Some("badge"));
        }

        #[test]
        fn prop_init_never_emits_empty_values(config in "[a-z./]{0,12}") {
            let options = InitOptions {
                tailwind_config: Some(config.clone()),
                ..Default::default()
            };
            let args = init_args(&options);
            prop_assert_eq!(args.contains(&"--tailwind-config".to_string()), !config.is_empty());
            prop_assert!(args.iter().all(|a| !a.is_empty()));
        }
    }
}

#[cfg(test)]
mod execution_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_prefixes_package_and_uses_add_timeout() {
        let executor = Arc::new(MockExecutor::new());
        executor.push_result(success("Installing components\n- button\n"));
        let cli = cli_with(executor.clone());

        let options = AddOptions {
            cwd: Some(PathBuf::from("/tmp/project")),
            yes: true,
            ..Default::default()
        };
        let outcome = cli.add(&names(&["button"]), &options).await.unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "shadcn-test-launcher-not-on-path");
        assert_eq!(calls[0].args, vec!["shadcn@latest", "add", "--yes", "button"]);
        assert_eq!(calls[0].options.cwd, Some(PathBuf::from("/tmp/project")));
        assert_eq!(calls[0].options.timeout, Some(Duration::from_secs(60)));

        assert!(outcome.raw_success);
        assert_eq!(outcome.classified.installed, Some(names(&["button"])));
        assert_eq!(
            outcome.command,
            "shadcn-test-launcher-not-on-path shadcn@latest add --yes button"
        );
    }

    #[tokio::test]
    async fn test_operation_timeouts_are_ordered() {
        let executor = Arc::new(MockExecutor::new());
        let cli = cli_with(executor.clone());

        cli.init(&InitOptions::default()).await;
        cli.add(&names(&["card"]), &AddOptions::default()).await.unwrap();
        cli.diff("card", &DiffOptions::default()).await.unwrap();

        let timeouts: Vec<_> = executor
            .calls()
            .into_iter()
            .map(|call| call.options.timeout.unwrap())
            .collect();
        assert_eq!(
            timeouts,
            vec![
                Duration::from_secs(120),
                Duration::from_secs(60),
                Duration::from_secs(30),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_is_data_not_error() {
        let executor = Arc::new(MockExecutor::new());
        executor.push_result(failure("Command timed out"));
        let cli = cli_with(executor);

        let outcome = cli.init(&InitOptions::default()).await;
        assert!(!outcome.raw_success);
        assert_eq!(outcome.raw.error_text(), "Command timed out");
        assert!(outcome.classified.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_add_never_reaches_executor() {
        let executor = Arc::new(MockExecutor::new());
        let cli = cli_with(executor.clone());

        assert!(cli.add(&[], &AddOptions::default()).await.is_err());
        assert!(cli.diff(" ", &DiffOptions::default()).await.is_err());
        assert_eq!(executor.call_count(), 0);
    }
}

#[cfg(test)]
mod composite_tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_dependencies_stop_before_target() {
        let executor = Arc::new(MockExecutor::new());
        executor.push_result(failure("Failed to resolve card"));
        let cli = cli_with(executor.clone());

        let outcome = cli
            .add_with_dependencies(&names(&["button", "card"]), "login-01", &AddOptions::default())
            .await
            .unwrap();

        match outcome {
            CompositeOutcome::DependenciesFailed(first) => {
                assert_eq!(first.raw.error_text(), "Failed to resolve card");
                assert!(first.command.ends_with("add button card"));
            }
            other => panic!("Expected DependenciesFailed, got {:?}", other),
        }
        assert_eq!(executor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_dependencies_then_target() {
        let executor = Arc::new(MockExecutor::new());
        executor
            .push_result(success("Installing components\n- button\n"))
            .push_result(success("Installing components\n- login-01\n"));
        let cli = cli_with(executor.clone());

        let outcome = cli
            .add_with_dependencies(&names(&["button"]), "login-01", &AddOptions::default())
            .await
            .unwrap();

        match outcome {
            CompositeOutcome::Completed {
                dependencies: Some(deps),
                target,
            } => {
                assert_eq!(deps.classified.installed, Some(names(&["button"])));
                assert_eq!(target.classified.installed, Some(names(&["login-01"])));
            }
            other => panic!("Expected Completed with dependencies, got {:?}", other),
        }

        let calls = executor.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].args.last().map(String::as_str), Some("login-01"));
    }

    #[tokio::test]
    async fn test_no_dependencies_runs_single_add() {
        let executor = Arc::new(MockExecutor::new());
        let cli = cli_with(executor.clone());

        let outcome = cli
            .add_with_dependencies(&[], "hero-01", &AddOptions::default())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            CompositeOutcome::Completed {
                dependencies: None,
                ..
            }
        ));
        assert_eq!(executor.call_count(), 1);
    }
}

#[cfg(test)]
mod project_tests {
    use super::*;

    fn write(dir: &TempDir, file: &str, value: serde_json::Value) {
        std::fs::write(dir.path().join(file), value.to_string()).unwrap();
    }

    #[test]
    fn test_detect_framework() {
        let next = json!({"dependencies": {"next": "14.0.0", "react": "18"}});
        assert_eq!(detect_framework(&next), Some(Framework::Next));

        let remix = json!({"devDependencies": {"@remix-run/dev": "2.0.0"}});
        assert_eq!(detect_framework(&remix), Some(Framework::Remix));

        let plain = json!({"dependencies": {"react": "18"}});
        assert_eq!(detect_framework(&plain), None);
        assert_eq!(detect_framework(&json!({})), None);
    }

    #[tokio::test]
    async fn test_check_dependencies_without_package_json() {
        let dir = TempDir::new().unwrap();
        let executor = Arc::new(MockExecutor::new());
        let cli = cli_with(executor.clone());

        let result = cli.check_dependencies(Some(dir.path())).await;
        assert!(!result.success);
        assert_eq!(
            result.error_text(),
            "No package.json found. Please run npm init first."
        );
        assert_eq!(executor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_check_dependencies_runs_npm_list() {
        let dir = TempDir::new().unwrap();
        write(&dir, "package.json", json!({"name": "app"}));
        let executor = Arc::new(MockExecutor::new());
        let cli = cli_with(executor.clone());

        cli.check_dependencies(Some(dir.path())).await;

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "shadcn-test-npm-not-on-path");
        assert_eq!(calls[0].args, vec!["list", "tailwindcss", "--json"]);
    }

    #[tokio::test]
    async fn test_project_status_reads_components_json() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "package.json",
            json!({"dependencies": {"vite": "5.0.0"}}),
        );
        write(&dir, "tsconfig.json", json!({}));
        write(
            &dir,
            "components.json",
            json!({
                "style": "new-york",
                "tailwind": {"config": "tailwind.config.ts", "css": "src/index.css"},
                "aliases": {"components": "@/components", "utils": "@/lib/utils"}
            }),
        );

        let executor = Arc::new(MockExecutor::new());
        executor.push_result(success(
            r#"{"dependencies": {"tailwindcss": {"version": "3.4.1"}}}"#,
        ));
        let cli = cli_with(executor);

        let report = cli.project_status(Some(dir.path())).await;
        let status = &report.status;
        assert!(status.initialized);
        assert_eq!(status.framework, Some(Framework::Vite));
        assert!(status.tailwind_installed);
        assert!(status.typescript);
        assert_eq!(status.style, Style::NewYork);
        assert_eq!(status.tailwind_config.as_deref(), Some("tailwind.config.ts"));
        assert_eq!(status.tailwind_css.as_deref(), Some("src/index.css"));
        assert_eq!(
            status.aliases.as_ref().and_then(|a| a.get("utils")).map(String::as_str),
            Some("@/lib/utils")
        );
        assert!(report.components_json.is_some());
    }

    #[tokio::test]
    async fn test_project_status_for_empty_directory() {
        let dir = TempDir::new().unwrap();
        let executor = Arc::new(MockExecutor::new());
        executor.push_result(failure("npm ERR! missing package.json"));
        let cli = cli_with(executor);

        let report = cli.project_status(Some(dir.path())).await;
        assert!(!report.status.initialized);
        assert!(!report.status.tailwind_installed);
        assert!(!report.status.typescript);
        assert_eq!(report.status.framework, None);
        assert_eq!(report.status.style, Style::Default);
        assert!(report.components_json.is_none());
    }
}
