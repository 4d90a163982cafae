mod common;

use common::{run_pharmacy, stdout_of, TestEnv};

#[test]
fn pharmacy_help_shows_usage() {
    let output = run_pharmacy(&["--help"]);
    let stdout = stdout_of(&output, "--help");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(
        !stderr.contains("No config file found"),
        "--help should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn pharmacy_version_shows_version() {
    let output = run_pharmacy(&["--version"]);
    let stdout = stdout_of(&output, "--version");
    assert!(stdout.contains("pharmacy "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_pharmacy(&["completions", "bash"]);
    let stdout = stdout_of(&output, "completions bash");
    assert!(
        stdout.contains("pharmacy"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works() {
    let output = run_pharmacy(&["config", "show"]);
    let stdout = stdout_of(&output, "config show");
    assert!(stdout.contains("[general]"));
    assert!(stdout.contains("[database]"));
    assert!(stdout.contains("busy_timeout_ms"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_pharmacy(&["config", "path"]);
    let stdout = stdout_of(&output, "config path");
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_respects_force() {
    let env = TestEnv::new();
    let config_path = std::path::PathBuf::from(
        stdout_of(&env.run(&["config", "path"]), "config path").trim(),
    );
    assert!(!config_path.exists());

    let stdout = stdout_of(&env.run(&["config", "init"]), "config init");
    assert!(stdout.contains("Configuration initialized at:"));
    let written = std::fs::read_to_string(&config_path).expect("config file written");
    assert!(written.contains("[database]"));

    std::fs::write(&config_path, "[database]\nfile_name = \"custom.db\"\n").unwrap();
    let output = env.run(&["config", "init"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "second init should fail");
    assert!(stderr.contains("already exists"), "stderr:\n{}", stderr);
    let kept = std::fs::read_to_string(&config_path).unwrap();
    assert!(kept.contains("custom.db"), "existing config must be left alone");

    stdout_of(&env.run(&["config", "init", "--force"]), "config init --force");
    let rewritten = std::fs::read_to_string(&config_path).unwrap();
    assert!(rewritten.contains("pharmacy.db"));
    assert!(!rewritten.contains("custom.db"));
}

#[test]
fn list_works_with_empty_database() {
    let output = run_pharmacy(&["list"]);
    let stdout = stdout_of(&output, "list");
    assert!(stdout.contains("No medicines found"));
}

#[test]
fn add_list_update_delete_workflow() {
    let env = TestEnv::new();

    let stdout = stdout_of(
        &env.run(&["add", "--name", "Ibuprofen", "--expiry", "2999-12-01", "--price", "70", "--stock", "15"]),
        "add",
    );
    assert!(stdout.contains("Medicine added! ID = 1"));

    let stdout = stdout_of(
        &env.run(&["add", "-n", "Aspirin", "-e", "2999-03-01", "-p", "30", "-s", "3"]),
        "add",
    );
    assert!(stdout.contains("Medicine added! ID = 2"));

    let stdout = stdout_of(&env.run(&["list"]), "list");
    let aspirin = stdout.find("Aspirin").expect("Aspirin listed");
    let ibuprofen = stdout.find("Ibuprofen").expect("Ibuprofen listed");
    assert!(aspirin < ibuprofen, "soonest expiry first\n{}", stdout);
    assert!(stdout.contains("Low Stock Medicines:"));
    assert!(stdout.contains("Aspirin -> 3 units left"));

    let stdout = stdout_of(&env.run(&["update", "2", "--stock", "40", "--clear-expiry"]), "update");
    assert!(stdout.contains("Updated successfully!"));

    let stdout = stdout_of(&env.run(&["show", "2"]), "show");
    assert!(stdout.contains("#2 Aspirin | no expiry | price 30.00 | stock 40"));

    let stdout = stdout_of(&env.run(&["delete", "1"]), "delete");
    assert!(stdout.contains("Deleted successfully!"));

    let stdout = stdout_of(&env.run(&["list", "--json"]), "list --json");
    let listed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let listed = listed.as_array().expect("JSON array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Aspirin");
    assert_eq!(listed[0]["expiry_date"], serde_json::Value::Null);
}

#[test]
fn expired_medicine_is_not_listed() {
    let env = TestEnv::new();

    stdout_of(
        &env.run(&["add", "-n", "ExpiredMed", "-e", "2000-01-01", "-p", "20", "-s", "10"]),
        "add",
    );

    let stdout = stdout_of(&env.run(&["list"]), "list");
    assert!(stdout.contains("No medicines found"));

    // Still reachable directly.
    let stdout = stdout_of(&env.run(&["show", "1"]), "show");
    assert!(stdout.contains("ExpiredMed"));
}

#[test]
fn missing_medicine_fails_with_message() {
    let env = TestEnv::new();

    let cases: [&[&str]; 3] = [
        &["show", "9999"],
        &["delete", "9999"],
        &["update", "9999", "-s", "1"],
    ];
    for args in cases {
        let output = env.run(args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!output.status.success(), "{:?} should fail", args);
        assert!(
            stderr.contains("Medicine with ID 9999 not found"),
            "{:?} stderr:\n{}",
            args,
            stderr
        );
    }
}

#[test]
fn menu_runs_from_piped_input() {
    let env = TestEnv::new();

    let output = env.run_with_input(&["menu"], "1\nParacetamol\n\n5.5\n2\n2\n0\n");
    let stdout = stdout_of(&output, "menu");

    assert!(stdout.contains("--- Pharmacy Store ---"));
    assert!(stdout.contains("Medicine added! ID = 1"));
    assert!(stdout.contains("Paracetamol -> 2 units left"));
    assert!(stdout.contains("Exiting... Goodbye!"));
}
