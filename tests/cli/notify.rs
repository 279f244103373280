//! Tests for `flare notify` and `flare report-error`.
//!
//! Push requests go to a local listener; email is only exercised up to the
//! point where credentials are looked up.

use crate::support::server::capture_one;
use crate::support::*;

fn push_secrets(url: &str) -> String {
    format!(
        r#"{{"NTFY_URL": "{}/alerts", "NTFY_TOKEN": "tk_test"}}"#,
        url
    )
}

#[test]
fn test_push_sends_title_token_and_body() {
    let (url, server) = capture_one(200);
    let t = Test::with_secrets(&push_secrets(&url));

    let output = t.push("Disk Full", "/ is at 98%");
    assert_success(&output);
    assert_stdout_contains(&output, "push sent: BOX - Disk Full");

    let request = server.join().unwrap();
    assert!(request.head.starts_with("post /alerts "), "{}", request.head);
    assert!(request.head.contains("authorization: bearer tk_test"));
    assert!(request.head.contains("title: box - disk full"));
    assert_eq!(request.body, b"/ is at 98%");
}

#[test]
fn test_push_attachment_replaces_body() {
    let (url, server) = capture_one(200);
    let t = Test::with_secrets(&push_secrets(&url));
    let bytes: Vec<u8> = (0u8..=255).collect();
    let path = t.write_file("blob.bin", &bytes);

    let output = t
        .cmd()
        .args(["notify", "push", "Snapshot", "not sent", "--machine", "cam"])
        .arg("--attach")
        .arg(&path)
        .output()
        .unwrap();
    assert_success(&output);

    let request = server.join().unwrap();
    assert!(request.head.contains("title: cam - snapshot"));
    assert_eq!(request.body, bytes);
}

#[test]
fn test_push_non_success_status_is_not_an_error() {
    let (url, server) = capture_one(500);
    let t = Test::with_secrets(&push_secrets(&url));

    let output = t.push("Disk Full", "body");
    assert_success(&output);
    assert_stderr_contains(&output, "non-success status");
    server.join().unwrap();
}

#[test]
fn test_report_error_over_push() {
    let (url, server) = capture_one(200);
    let t = Test::with_secrets(&push_secrets(&url));

    let output = t
        .cmd()
        .args([
            "report-error",
            "backup.sh",
            "exit status 2",
            "--channel",
            "push",
            "--machine",
            "box",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let request = server.join().unwrap();
    assert!(request.head.contains("title: box - error - backup.sh"));
    assert_eq!(request.body, b"exit status 2");
}

#[test]
fn test_machine_from_env() {
    let (url, server) = capture_one(200);
    let t = Test::with_secrets(&push_secrets(&url));

    let output = t
        .cmd()
        .env("FLARE_MACHINE", "nas")
        .args(["notify", "push", "Scrub done", "ok"])
        .output()
        .unwrap();
    assert_success(&output);

    let request = server.join().unwrap();
    assert!(request.head.contains("title: nas - scrub done"));
}

#[test]
fn test_push_missing_attachment_fails() {
    let t = Test::with_secrets(NOTIFIER_SECRETS);

    let output = t
        .cmd()
        .args(["notify", "push", "Snapshot", "body", "--machine", "box"])
        .args(["--attach", "does-not-exist.jpg"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read attachment");
}

#[test]
fn test_email_missing_credentials() {
    let t = Test::with_secrets(r#"{"NTFY_URL": "https://ntfy.example/x"}"#);

    let output = t
        .cmd()
        .args(["notify", "email", "Disk Full", "body", "--machine", "box"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "secret not found: EMAIL_USER");
}

#[test]
fn test_email_non_string_credential() {
    let t = Test::with_secrets(
        r#"{"EMAIL_USER": "me@example.com", "EMAIL_APPPW": 1234, "EMAIL_RECEIVER": "you@example.com"}"#,
    );

    let output = t
        .cmd()
        .args(["notify", "email", "Disk Full", "body", "--machine", "box"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "EMAIL_APPPW must be a string");
}

#[test]
fn test_unknown_channel_rejected() {
    let t = Test::with_secrets(NOTIFIER_SECRETS);

    let output = t
        .cmd()
        .args(["notify", "sms", "Disk Full", "body"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown channel");
}
