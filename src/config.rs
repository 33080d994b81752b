//! Configuration system for the staff roster tool
//!
//! Supports multiple configuration sources with the following precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (STAFF_ROSTER_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::roster::{Gender, Grade, DEFAULT_CAPACITY};

/// Largest capacity the four-digit identifier space can serve.
pub const MAX_CAPACITY: usize = 9_999;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Organization settings
    pub organization: OrganizationSettings,

    /// The leader governing the roster
    pub leader: LeaderSettings,

    /// Staff members placed on the roster at startup
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub staff: Vec<StaffSeed>,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Organization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationSettings {
    /// Display name of the organization
    pub name: String,

    /// Maximum number of staff members on the roster
    pub capacity: usize,
}

/// Leader identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderSettings {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
}

/// One staff member to hire at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSeed {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    #[serde(default = "default_grade")]
    pub grade: Grade,
}

fn default_grade() -> Grade {
    Grade::bottom()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (empty = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

// Default implementations

impl Default for OrganizationSettings {
    fn default() -> Self {
        Self {
            name: "Example Corp".to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for LeaderSettings {
    fn default() -> Self {
        Self {
            name: "Founder".to_string(),
            gender: Gender::Other,
            age: 65,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            max_files: 5,
            json_format: false,
        }
    }
}

impl RosterConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        // 1. Load from config file if it exists
        if let Some(path) = Self::find_config_file(config_path)? {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path).map_err(|e| Error::IoRead {
                path: path.clone(),
                source: e,
            })?;
            config = Self::parse(&content)?;
            info!(path = %path.display(), "Configuration loaded from file");
        }

        // 2. Apply environment variable overrides
        config.apply_env_overrides();

        // 3. Expand paths
        config.expand_paths();

        // 4. Validate
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e.message().to_string(), e))
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        // If explicit path provided, use it (error if not found)
        if let Some(path) = explicit_path {
            let path = PathBuf::from(expand_path(path));
            if path.exists() {
                return Ok(Some(path));
            }
            return Err(Error::config_not_found(path));
        }

        let search_paths = [
            PathBuf::from("staff-roster.toml"),
            dirs::config_dir()
                .map(|p| p.join("staff-roster").join("roster.toml"))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|p| p.join(".staff-roster").join("roster.toml"))
                .unwrap_or_default(),
        ];

        for path in &search_paths {
            if !path.as_os_str().is_empty() && path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path.clone()));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Organization settings
        if let Ok(val) = std::env::var("STAFF_ROSTER_ORG_NAME") {
            self.organization.name = val;
        }
        if let Ok(val) = std::env::var("STAFF_ROSTER_CAPACITY") {
            if let Ok(n) = val.parse() {
                self.organization.capacity = n;
            }
        }

        // Leader settings
        if let Ok(val) = std::env::var("STAFF_ROSTER_LEADER_NAME") {
            self.leader.name = val;
        }
        if let Ok(val) = std::env::var("STAFF_ROSTER_LEADER_GENDER") {
            if let Ok(g) = val.parse() {
                self.leader.gender = g;
            }
        }
        if let Ok(val) = std::env::var("STAFF_ROSTER_LEADER_AGE") {
            if let Ok(n) = val.parse() {
                self.leader.age = n;
            }
        }

        // Logging settings
        if let Ok(val) = std::env::var("STAFF_ROSTER_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("STAFF_ROSTER_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Ok(val) = std::env::var("STAFF_ROSTER_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Expand ~ and other path variables
    fn expand_paths(&mut self) {
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let capacity = self.organization.capacity;
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(Error::config_field_invalid(
                "organization.capacity",
                format!("capacity must be between 1 and {}, got {}", MAX_CAPACITY, capacity),
            ));
        }

        if self.staff.len() > capacity {
            return Err(Error::config_field_invalid(
                "staff",
                format!(
                    "{} staff entries exceed the roster capacity of {}",
                    self.staff.len(),
                    capacity
                ),
            ));
        }

        if self.leader.name.trim().is_empty() {
            return Err(Error::config_field_invalid(
                "leader.name",
                "leader name cannot be empty",
            ));
        }

        if let Some(pos) = self.staff.iter().position(|s| s.name.trim().is_empty()) {
            return Err(Error::config_field_invalid(
                format!("staff[{}].name", pos),
                "staff name cannot be empty",
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or_else(|_| std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Initialize a new configuration file, returning where it was written
pub fn init_config(path: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".staff-roster")
                .join("roster.toml")
        });

    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::IoWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(&config_path, generate_default_config()).map_err(|e| Error::IoWrite {
        path: config_path.clone(),
        source: e,
    })?;

    info!(path = %config_path.display(), "Configuration file created");
    Ok(config_path)
}

/// Generate default configuration content with comments
fn generate_default_config() -> String {
    r#"# Staff Roster Configuration

[organization]
# Display name of the organization
name = "Example Corp"

# Maximum number of staff members (1-9999)
capacity = 10

[leader]
name = "Founder"
# male, female or other
gender = "other"
age = 65

# Staff hired at startup, in roster order.
# grade: staff, chief, manager or executive (default: staff)
[[staff]]
name = "Aiko Mori"
gender = "female"
age = 55
grade = "executive"

[[staff]]
name = "Kenji Ito"
gender = "male"
age = 45
grade = "executive"

[[staff]]
name = "Yui Sato"
gender = "female"
age = 30
grade = "staff"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log file path (comment out to disable file logging)
# file = "~/.staff-roster/logs/roster.log"

# Number of rotated log files to keep
max_files = 5

# Enable JSON formatted logging
json_format = false
"#
    .to_string()
}
