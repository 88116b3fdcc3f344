//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary inside a temporary working directory and
//! verify outputs and the files it leaves behind.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run the CLI in `dir` and return (exit code, stdout, stderr).
fn run_cli(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_dailycode"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn index_entries(index: &str) -> Vec<&str> {
    index.lines().filter(|l| l.starts_with("- ")).collect()
}

#[test]
fn test_no_arguments_generates_today() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, stderr) = run_cli(dir.path(), &[]);
    assert_eq!(code, 0, "generate failed: {stderr}");
    assert!(stdout.starts_with("Wrote "));

    let index = fs::read_to_string(dir.path().join("daily_code/README.md")).unwrap();
    assert!(index.starts_with("# Daily Python Code\n"));
    assert_eq!(index_entries(&index).len(), 1);
    assert!(dir.path().join("daily_code/.gitkeep").exists());
}

#[test]
fn test_generate_for_date_twice() {
    let dir = TempDir::new().unwrap();
    let args = ["generate", "--date", "2024-01-01", "--template", "fibonacci_iterative"];

    let (code, stdout, _) = run_cli(dir.path(), &args);
    assert_eq!(code, 0);
    assert!(stdout.contains("2024-01-01_fibonacci_iterative.py"));

    let (code, stdout, _) = run_cli(dir.path(), &args);
    assert_eq!(code, 0);
    assert!(stdout.contains("2024-01-01_fibonacci_iterative_v2.py"));

    let year = dir.path().join("daily_code/2024");
    assert!(year.join("2024-01-01_fibonacci_iterative.py").exists());
    assert!(year.join("2024-01-01_fibonacci_iterative_v2.py").exists());

    let index = fs::read_to_string(dir.path().join("daily_code/README.md")).unwrap();
    let entries = index_entries(&index);
    assert_eq!(entries.len(), 2);
    assert!(entries[0].starts_with("- 2024-01-01 00:00 UTC: [Fibonacci Iterative](2024/"));
    assert!(entries[1].contains("(2024/2024-01-01_fibonacci_iterative_v2.py)"));
}

#[test]
fn test_same_date_same_output() {
    let dir = TempDir::new().unwrap();
    let (_, first, _) = run_cli(dir.path(), &["generate", "--date", "2023-06-15", "--dry-run"]);
    let (_, second, _) = run_cli(dir.path(), &["generate", "--date", "2023-06-15", "--dry-run"]);
    assert!(first.contains("Date: 2023-06-15"));
    assert_eq!(first, second);
    assert!(!dir.path().join("daily_code").exists(), "dry run must not write");
}

#[test]
fn test_root_override() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["--root", "snippets", "generate", "--date", "2024-03-05"]);
    assert_eq!(code, 0);
    assert!(dir.path().join("snippets/README.md").exists());
    assert!(dir.path().join("snippets/2024").is_dir());
}

#[test]
fn test_generate_json() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["generate", "--date", "2024-01-01", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["seed"], 20240101);
    assert!(value["written"]["relative_path"]
        .as_str()
        .unwrap()
        .starts_with("2024/2024-01-01_"));
}

#[test]
fn test_list() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["list"]);
    assert_eq!(code, 0);
    for name in [
        "fibonacci_iterative",
        "sieve_of_eratosthenes",
        "merge_sort",
        "levenshtein_distance",
        "dijkstra_on_grid",
    ] {
        assert!(stdout.contains(name), "missing {name}");
    }

    let (code, stdout, _) = run_cli(dir.path(), &["list", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 5);
}

#[test]
fn test_show_matches_generate() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["show", "--date", "2024-01-01", "--json"]);
    assert_eq!(code, 0);
    let shown: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let (_, stdout, _) = run_cli(dir.path(), &["generate", "--date", "2024-01-01", "--dry-run", "--json"]);
    let planned: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(shown["template"]["name"], planned["template"]["name"]);
    assert_eq!(shown["params"], planned["params"]);
}

#[test]
fn test_show_defaults_to_today_utc() {
    let dir = TempDir::new().unwrap();
    let before = chrono::Utc::now().date_naive();
    let (code, stdout, _) = run_cli(dir.path(), &["show", "--json"]);
    let after = chrono::Utc::now().date_naive();
    assert_eq!(code, 0);

    let shown: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let date: chrono::NaiveDate = serde_json::from_value(shown["date"].clone()).unwrap();
    assert!(date == before || date == after);
}

#[test]
fn test_unknown_template_fails() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["generate", "--template", "bogosort"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Unknown template: bogosort"));
}

#[test]
fn test_invalid_date_rejected() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["generate", "--date", "2024-13-01"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_init_and_use() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "init"]);
    assert_eq!(code, 0);
    assert!(dir.path().join("dailycode.toml").exists());

    let (code, _, stderr) = run_cli(dir.path(), &["config", "init"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));

    fs::write(dir.path().join("dailycode.toml"), "output_dir = \"out\"\n").unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("output_dir = \"out\""));

    let (code, _, _) = run_cli(dir.path(), &["generate", "--date", "2024-01-01"]);
    assert_eq!(code, 0);
    assert!(dir.path().join("out/README.md").exists());
}

#[test]
fn test_broken_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "output_dir = [").unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["--config", "broken.toml", "generate"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Failed to parse configuration"));
}
