//! Common test utilities and fixtures
//!
//! This module provides shared test infrastructure

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary home directory with an optional roster configuration file.
///
/// Commands built from it never see the developer's own configuration.
pub struct RosterFixture {
    home: TempDir,
    config_path: PathBuf,
}

impl RosterFixture {
    pub fn new() -> Self {
        let home = TempDir::new().unwrap();
        let config_path = home.path().join("roster.toml");
        Self { home, config_path }
    }

    pub fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).unwrap();
    }

    pub fn path(&self) -> &str {
        self.config_path.to_str().unwrap()
    }

    pub fn home(&self) -> &std::path::Path {
        self.home.path()
    }

    /// Command for the staff-roster binary, isolated from the user's environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("staff-roster").unwrap();
        cmd.current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("STAFF_ROSTER_CONFIG")
            .env_remove("STAFF_ROSTER_CAPACITY")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Configuration with two executives and two rank-and-file members
pub const SUCCESSION_CONFIG: &str = r#"
[organization]
name = "Integration Co"
capacity = 10

[leader]
name = "Outgoing Chair"
gender = "male"
age = 70

[[staff]]
name = "Young Exec"
gender = "male"
age = 45
grade = "executive"

[[staff]]
name = "Veteran Exec"
gender = "female"
age = 55
grade = "executive"

[[staff]]
name = "Old Hand"
gender = "male"
age = 62
grade = "staff"

[[staff]]
name = "New Hire"
gender = "other"
age = 22
"#;
