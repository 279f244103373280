//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("flare") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("flare"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_flare") || out.contains("complete"));
}

#[test]
fn test_malformed_config_reported() {
    let t = Test::with_secrets(NOTIFIER_SECRETS);
    let config = t.write_file("flare.toml", "[secrets\n");

    let output = t
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["get", "NTFY_URL"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_missing_config_path_reported() {
    let t = Test::with_secrets(NOTIFIER_SECRETS);

    let output = t
        .cmd()
        .args(["--config", "nowhere.toml", "get", "NTFY_URL"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config");
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_used() {
    let t = Test::new();
    let secrets = t.write_file("alt.b64", encode(r#"{"WHERE": "xdg"}"#));
    let dir = t.home.path().join(".config").join("flare");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        format!("[secrets]\npath = \"{}\"\n", secrets.display()),
    )
    .unwrap();

    let output = t.get("WHERE");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "xdg");
}

#[test]
fn test_empty_key_rejected() {
    use predicates::prelude::*;

    let t = Test::with_secrets(NOTIFIER_SECRETS);

    t.cmd()
        .args(["get", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("secret key cannot be empty"));
}
