//! Integration tests for the public probe API.
//!
//! Exercises the orchestrator through the library surface the way an
//! embedding tool would: build specs, run them against an injected
//! environment, inspect the report.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use scout::plan::{self, PlanOptions};
use scout::probe::{Orchestrator, OverallStatus, ProbeKind, ProbeSpec, ProbeStatus};
use scout::registry::ServerRegistry;
use tempfile::TempDir;

fn empty_env() -> HashMap<String, String> {
    HashMap::new()
}

#[test]
fn present_file_and_unset_var_is_degraded() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{}").unwrap();

    let specs = vec![
        ProbeSpec::file_exists("config.json", "config.json"),
        ProbeSpec::env_var("API_KEY", "API_KEY"),
    ];
    let report = Orchestrator::new(temp.path())
        .run(&specs, &empty_env())
        .unwrap();

    assert_eq!(report.overall(), OverallStatus::Degraded);
    let statuses: Vec<_> = report.results().iter().map(|r| r.status).collect();
    assert_eq!(statuses, [ProbeStatus::Ok, ProbeStatus::Warn]);
}

#[test]
fn missing_file_blocks_but_evaluation_continues() {
    let temp = TempDir::new().unwrap();

    let specs = vec![
        ProbeSpec::file_exists("config.json", "config.json"),
        ProbeSpec::env_var("API_KEY", "API_KEY"),
    ];
    let report = Orchestrator::new(temp.path())
        .run(&specs, &empty_env())
        .unwrap();

    assert_eq!(report.overall(), OverallStatus::Blocked);
    let statuses: Vec<_> = report.results().iter().map(|r| r.status).collect();
    assert_eq!(statuses, [ProbeStatus::Fail, ProbeStatus::Warn]);
}

#[test]
fn all_passing_run_is_ok() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{}").unwrap();
    let mut env = empty_env();
    env.insert("API_KEY".to_string(), "secret".to_string());

    let specs = vec![
        ProbeSpec::file_exists("config.json", "config.json"),
        ProbeSpec::env_var("API_KEY", "API_KEY"),
    ];
    let report = Orchestrator::new(temp.path()).run(&specs, &env).unwrap();

    assert_eq!(report.overall(), OverallStatus::Ok);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn spawn_free_plan_completes_quickly() {
    let temp = TempDir::new().unwrap();

    // A generous pile of filesystem and env probes, no processes.
    let mut specs = Vec::new();
    for i in 0..50 {
        specs.push(ProbeSpec::file_exists(format!("file {}", i), format!("f{}.json", i)).required(false));
        specs.push(ProbeSpec::env_var(format!("var {}", i), format!("SCOUT_TEST_VAR_{}", i)));
    }

    let start = Instant::now();
    let report = Orchestrator::new(temp.path())
        .run(&specs, &empty_env())
        .unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(report.results().len(), 100);
    assert_eq!(report.overall(), OverallStatus::Degraded);
}

#[cfg(unix)]
#[test]
fn process_probe_zero_exit_is_ok_regardless_of_output() {
    let temp = TempDir::new().unwrap();
    let specs = vec![ProbeSpec::process_probe(
        "noisy server",
        "sh",
        vec!["-c".into(), "echo 'no marker words here'".into()],
    )];
    let report = Orchestrator::new(temp.path())
        .run(&specs, &empty_env())
        .unwrap();

    assert_eq!(report.results()[0].status, ProbeStatus::Ok);
}

#[test]
fn unknown_binary_fails_with_detail_and_no_panic() {
    let temp = TempDir::new().unwrap();
    let specs = vec![ProbeSpec::process_probe(
        "ghost server",
        "scout-no-such-binary-on-path",
        vec!["--help".into()],
    )];
    let report = Orchestrator::new(temp.path())
        .run(&specs, &empty_env())
        .unwrap();

    let result = &report.results()[0];
    assert_eq!(result.status, ProbeStatus::Fail);
    assert!(!result.detail.as_deref().unwrap_or("").is_empty());
    assert_eq!(report.overall(), OverallStatus::Blocked);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn planned_probes_run_end_to_end() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("mcp-config.json"),
        r#"{
          "mcpServers": {
            "weather": {
              "command": "npx",
              "args": ["-y", "@modelcontextprotocol/server-weather"]
            }
          }
        }"#,
    )
    .unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    fs::create_dir_all(
        temp.path()
            .join("node_modules/@modelcontextprotocol/server-weather"),
    )
    .unwrap();

    let config_file = temp.path().join("mcp-config.json");
    let config = scout::config::load_config(&config_file).unwrap();
    let registry = ServerRegistry::new();
    let specs = plan::build(
        &config_file,
        Some(&config),
        &registry,
        PlanOptions {
            spawn_probes: false,
        },
    );

    let mut env = empty_env();
    env.insert("OPENWEATHER_API_KEY".to_string(), "secret".to_string());

    let report = Orchestrator::new(temp.path()).run(&specs, &env).unwrap();

    assert_eq!(report.overall(), OverallStatus::Ok);
    assert!(report
        .results()
        .iter()
        .all(|r| r.status == ProbeStatus::Ok));
    // No process probes were planned.
    assert!(report
        .results()
        .iter()
        .all(|r| !matches!(r.spec.kind, ProbeKind::ProcessProbe { .. })));
}

#[test]
fn guidance_numbers_follow_result_order() {
    let temp = TempDir::new().unwrap();

    let specs = vec![
        ProbeSpec::file_exists("Configuration file", "mcp-config.json")
            .with_hint("Create mcp-config.json"),
        ProbeSpec::env_var("BRAVE_API_KEY environment variable", "BRAVE_API_KEY"),
    ];
    let report = Orchestrator::new(temp.path())
        .run(&specs, &empty_env())
        .unwrap();

    let steps = scout::probe::next_steps(&report);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0], "Create mcp-config.json");
    assert!(steps[1].contains("BRAVE_API_KEY"));
}

#[test]
fn absolute_paths_do_not_depend_on_root() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("anywhere.json");
    fs::write(&file, "{}").unwrap();

    let specs = vec![ProbeSpec::file_exists("absolute", &file)];
    let report = Orchestrator::new(Path::new("/definitely/not/here"))
        .run(&specs, &empty_env())
        .unwrap();

    assert_eq!(report.results()[0].status, ProbeStatus::Ok);
}
