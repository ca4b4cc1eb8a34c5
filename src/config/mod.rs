//! Configuration module for labelr
//!
//! Manages application configuration: named label database paths, the
//! default database, and output preferences. Configuration is stored as
//! TOML in the user's config directory (`~/.config/labelr/config.toml` on
//! Linux).

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display paths relative to the current directory
    Relative,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LabelrConfig {
    /// Map of database names to their filesystem paths
    #[serde(default)]
    pub databases: HashMap<String, PathBuf>,

    /// The default database to use when none is specified
    #[serde(default)]
    pub default_database: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for displaying paths
    #[serde(default)]
    pub path_format: PathFormat,
}

impl LabelrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("labelr").join("config.toml"))
    }

    /// Load configuration from file, creating a default one if absent
    ///
    /// # Errors
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns `ConfigError` if the config directory cannot be created or
    /// the file cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a database to the configuration
    ///
    /// The first database added becomes the default.
    ///
    /// # Errors
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn add_database(&mut self, name: String, path: PathBuf) -> Result<(), ConfigError> {
        self.databases.insert(name.clone(), path);
        if self.default_database.is_none() {
            self.default_database = Some(name);
        }
        self.save()
    }

    /// Remove a database from the configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn remove_database(&mut self, name: &str) -> Result<Option<PathBuf>, ConfigError> {
        let removed = self.databases.remove(name);
        if self.default_database.as_deref() == Some(name) {
            self.default_database = None;
        }
        self.save()?;
        Ok(removed)
    }

    /// Get a database path by name
    #[must_use]
    pub fn get_database(&self, name: &str) -> Option<&PathBuf> {
        self.databases.get(name)
    }

    /// List all database names
    #[must_use]
    pub fn list_databases(&self) -> Vec<&String> {
        self.databases.keys().collect()
    }

    /// Set the default database
    ///
    /// # Errors
    /// Returns `ConfigError` if the name is not configured or saving fails.
    pub fn set_default_database(&mut self, name: String) -> Result<(), ConfigError> {
        if !self.databases.contains_key(&name) {
            return Err(ConfigError::Message(format!(
                "Database '{name}' does not exist in configuration"
            )));
        }
        self.default_database = Some(name);
        self.save()
    }

    /// Get the default database name
    #[must_use]
    pub const fn get_default_database(&self) -> Option<&String> {
        self.default_database.as_ref()
    }

    /// Resolve the database path to use for a command
    ///
    /// An explicit name wins; otherwise the configured default; otherwise
    /// a `labels-db` directory in the local data dir.
    ///
    /// # Errors
    /// Returns `ConfigError` if an explicit or default name is not
    /// configured, or no fallback location can be determined.
    pub fn resolve_database(&self, explicit: Option<&str>) -> Result<PathBuf, ConfigError> {
        if let Some(name) = explicit {
            return self
                .get_database(name)
                .cloned()
                .ok_or_else(|| ConfigError::Message(format!("Unknown database '{name}'")));
        }

        if let Some(name) = &self.default_database {
            return self
                .get_database(name)
                .cloned()
                .ok_or_else(|| ConfigError::Message(format!("Default database '{name}' is not configured")));
        }

        dirs::data_local_dir()
            .map(|dir| dir.join("labelr").join("labels-db"))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LabelrConfig::default();
        assert!(config.databases.is_empty());
        assert!(config.default_database.is_none());
        assert!(!config.quiet);
        assert_eq!(config.path_format, PathFormat::Absolute);
    }

    #[test]
    fn test_database_lookup() {
        let mut config = LabelrConfig::default();
        config
            .databases
            .insert("work".to_string(), PathBuf::from("/tmp/work-db"));

        assert_eq!(config.get_database("work"), Some(&PathBuf::from("/tmp/work-db")));
        assert_eq!(config.get_database("home"), None);
        assert_eq!(config.list_databases().len(), 1);
    }

    #[test]
    fn test_resolve_explicit_database() {
        let mut config = LabelrConfig::default();
        config
            .databases
            .insert("work".to_string(), PathBuf::from("/tmp/work-db"));

        let resolved = config.resolve_database(Some("work")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/work-db"));
        assert!(config.resolve_database(Some("missing")).is_err());
    }

    #[test]
    fn test_resolve_default_database() {
        let mut config = LabelrConfig::default();
        config
            .databases
            .insert("work".to_string(), PathBuf::from("/tmp/work-db"));
        config.default_database = Some("work".to_string());

        let resolved = config.resolve_database(None).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/work-db"));
    }

    #[test]
    fn test_resolve_dangling_default_is_an_error() {
        let mut config = LabelrConfig::default();
        config.default_database = Some("gone".to_string());
        assert!(config.resolve_database(None).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut config = LabelrConfig::default();
        config
            .databases
            .insert("work".to_string(), PathBuf::from("/tmp/work-db"));
        config.quiet = true;
        config.path_format = PathFormat::Relative;

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: LabelrConfig = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.databases, config.databases);
        assert!(parsed.quiet);
        assert_eq!(parsed.path_format, PathFormat::Relative);
    }
}
