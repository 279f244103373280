//! Tests for `flare interface`.

use crate::support::*;

#[test]
fn test_nmcli_missing_from_path() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("PATH", t.home.path())
        .args(["interface", "--probe", "nmcli"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "nmcli not found on PATH");
}

#[test]
fn test_unknown_probe_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["interface", "--probe", "carrier-pigeon"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown probe");
}

#[test]
fn test_probe_from_config() {
    let t = Test::new();
    let config = t.write_file("flare.toml", "[interface]\nprobe = \"nmcli\"\n");

    let output = t
        .cmd()
        .env("PATH", t.home.path())
        .arg("--config")
        .arg(&config)
        .arg("interface")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "nmcli not found on PATH");
}

#[cfg(unix)]
#[test]
fn test_nmcli_output_parsed() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    let bin = t.home.path().join("bin");
    std::fs::create_dir(&bin).unwrap();
    let script = bin.join("nmcli");
    std::fs::write(
        &script,
        "#!/bin/sh\necho 'DEVICE TYPE STATE CONNECTION'\necho 'wlan0 connected wifi eth0 1234-5678'\n",
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let path = format!("{}:/bin:/usr/bin", bin.display());
    let output = t
        .cmd()
        .env("PATH", path)
        .args(["interface", "--probe", "nmcli"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "eth0");
}
