//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables that would leak the developer's setup into tests.
const SCRUBBED_ENV: &[&str] = &[
    "FLARE_CONFIG",
    "FLARE_SECRETS_FILE",
    "FLARE_SECRET_BACKEND",
    "FLARE_MACHINE",
    "FLARE_LOG",
    "XDG_CONFIG_HOME",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

impl Test {
    /// Create a flare command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the temporary home directory
    /// - NO_COLOR set so output is plain
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("flare").expect("failed to find flare binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Shortcut for `flare get` command.
    pub fn get(&self, key: &str) -> Output {
        self.cmd()
            .args(["get", key])
            .output()
            .expect("failed to run flare get")
    }

    /// Shortcut for `flare notify push` with a fixed machine name.
    pub fn push(&self, subject: &str, body: &str) -> Output {
        self.cmd()
            .args(["notify", "push", subject, body, "--machine", "box"])
            .output()
            .expect("failed to run flare notify push")
    }

    /// Shortcut for `flare encode` command.
    pub fn encode(&self, input: &str, extra: &[&str]) -> Output {
        self.cmd()
            .arg("encode")
            .arg(input)
            .args(extra)
            .output()
            .expect("failed to run flare encode")
    }
}
