//! Command helper methods for Test.

use std::process::Output;

use assert_cmd::Command;

use super::Test;

impl Test {
    /// Create a courier command bound to this environment.
    ///
    /// HOME points at the temporary home and the working directory is the
    /// temporary project directory. Inherited COURIER_* settings are cleared.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("courier").expect("failed to find courier binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        for var in [
            "COURIER_API_URL",
            "COURIER_API_KEY",
            "COURIER_ALIAS",
            "COURIER_AUTH",
            "COURIER_TIMEOUT",
            "COURIER_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `courier login` with the key piped on stdin.
    pub fn login(&self, alias: &str, api_key: &str) -> Output {
        self.cmd()
            .args(["login", "--alias", alias])
            .write_stdin(format!("{}\n", api_key))
            .output()
            .expect("failed to run courier login")
    }

    /// Shortcut for `courier login --encrypt` with key and passkey piped.
    pub fn login_encrypted(&self, alias: &str, api_key: &str, passkey: &str) -> Output {
        self.cmd()
            .args(["login", "--alias", alias, "--encrypt"])
            .write_stdin(format!("{}\n{}\n", api_key, passkey))
            .output()
            .expect("failed to run courier login --encrypt")
    }

    /// Shortcut for `courier logout`.
    pub fn logout(&self, alias: &str) -> Output {
        self.cmd()
            .args(["logout", alias])
            .output()
            .expect("failed to run courier logout")
    }

    /// Shortcut for `courier profiles`.
    pub fn profiles(&self) -> Output {
        self.cmd()
            .arg("profiles")
            .output()
            .expect("failed to run courier profiles")
    }

    /// Shortcut for `courier profiles --json`.
    pub fn profiles_json(&self) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["profiles", "--json"])
            .output()
            .expect("failed to run courier profiles --json");
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("profiles --json is not JSON")
    }

    /// Shortcut for `courier fetch` with arbitrary arguments.
    pub fn fetch(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("fetch")
            .args(args)
            .output()
            .expect("failed to run courier fetch")
    }
}
