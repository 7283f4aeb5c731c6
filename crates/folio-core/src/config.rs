//! Configuration management for Folio.
//!
//! Loads configuration from ${FOLIO_HOME}/config.toml with sensible defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::motion::{MotionConfigError, Threshold, TypingTiming};
use crate::profile::{Profile, Section};

pub mod paths {
    //! Path resolution for Folio configuration and log directories.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)
    //! 3. ./.folio when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Folio home directory.
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".folio"),
            |h| h.join(".config").join("folio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        folio_home().join("logs")
    }
}

/// Scroll reveal and typewriter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fade sections in as they scroll into view.
    pub reveal: bool,
    /// Animate the hero line.
    pub typewriter: bool,
    /// Threshold for sections without an override.
    pub reveal_threshold: f32,
    pub type_interval_ms: u64,
    pub delete_interval_ms: u64,
    pub hold_ms: u64,
    /// Per-section threshold overrides, keyed by section name.
    pub thresholds: BTreeMap<String, f32>,
}

impl MotionConfig {
    /// Disables every animation.
    pub fn disable(&mut self) {
        self.reveal = false;
        self.typewriter = false;
    }

    /// Validated typewriter timing.
    ///
    /// # Errors
    /// Returns an error if an interval is zero or deleting is not faster than typing.
    pub fn typing_timing(&self) -> Result<TypingTiming, MotionConfigError> {
        TypingTiming::new(
            Duration::from_millis(self.type_interval_ms),
            Duration::from_millis(self.delete_interval_ms),
            Duration::from_millis(self.hold_ms),
        )
    }

    /// Validated reveal threshold for a section.
    ///
    /// # Errors
    /// Returns an error if the configured fraction is outside 0.0..=1.0.
    pub fn threshold_for(&self, section: Section) -> Result<Threshold, MotionConfigError> {
        match self.thresholds.get(section.name()) {
            Some(value) => Threshold::new(*value),
            None if (self.reveal_threshold - Threshold::DEFAULT.get()).abs() > f32::EPSILON => {
                Threshold::new(self.reveal_threshold)
            }
            None => Ok(section.default_threshold()),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        let thresholds = [Section::About, Section::Education]
            .into_iter()
            .map(|section| (section.name().to_string(), section.default_threshold().get()))
            .collect();
        Self {
            reveal: true,
            typewriter: true,
            reveal_threshold: Threshold::DEFAULT.get(),
            type_interval_ms: TypingTiming::DEFAULT_TYPE_MS,
            delete_interval_ms: TypingTiming::DEFAULT_DELETE_MS,
            hold_ms: TypingTiming::DEFAULT_HOLD_MS,
            thresholds,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive (overridden by FOLIO_LOG and `-v`).
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub motion: MotionConfig,
    pub log: LogSettings,
    pub profile: Profile,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Checks every construction-time precondition of the page.
    pub fn validate(&self) -> Result<()> {
        self.motion
            .typing_timing()
            .context("Invalid [motion] timing")?;

        if let Some(unknown) = self
            .motion
            .thresholds
            .keys()
            .find(|key| Section::from_name(key).is_none())
        {
            anyhow::bail!("Unknown section '{unknown}' in [motion.thresholds]");
        }
        Threshold::new(self.motion.reveal_threshold).context("Invalid motion.reveal_threshold")?;
        for section in Section::ALL {
            self.motion
                .threshold_for(section)
                .with_context(|| format!("Invalid threshold for section '{}'", section.name()))?;
        }

        self.profile
            .validate()
            .map_err(|msg| anyhow::anyhow!("Invalid [profile]: {msg}"))?;
        Ok(())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    pub fn generate() -> Result<String> {
        use toml_edit::{DocumentMut, Item};

        fn merge(target: &mut toml_edit::Table, source: &toml_edit::Table) {
            for (key, value) in source {
                match value {
                    Item::Value(v) => {
                        target[key] = Item::Value(v.clone());
                    }
                    Item::Table(src_table) => {
                        if let Some(Item::Table(target_table)) = target.get_mut(key) {
                            merge(target_table, src_table);
                        } else {
                            target[key] = Item::Table(src_table.clone());
                        }
                    }
                    Item::ArrayOfTables(arr) => {
                        target[key] = Item::ArrayOfTables(arr.clone());
                    }
                    Item::None => {}
                }
            }
        }

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        // Parse template as base (preserves comments)
        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

/// The commented template written by `folio config init`.
pub fn default_config_template() -> &'static str {
    include_str!("default_config.toml")
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.motion, MotionConfig::default());
        assert_eq!(config.log, LogSettings::default());
    }

    #[test]
    fn test_partial_file_overrides_motion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[motion]\nreveal = false\nhold_ms = 500\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.motion.reveal);
        assert!(config.motion.typewriter);
        assert_eq!(config.motion.hold_ms, 500);
        assert_eq!(config.profile, Profile::default());
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "motion = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_validate_rejects_slow_delete() {
        let mut config = Config::default();
        config.motion.delete_interval_ms = 120;
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("must be shorter"));
    }

    #[test]
    fn test_validate_rejects_unknown_section() {
        let mut config = Config::default();
        config.motion.thresholds.insert("footer".to_string(), 0.5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("footer"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let mut config = Config::default();
        config.motion.thresholds.insert("skills".to_string(), 1.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_roles() {
        let mut config = Config::default();
        config.profile.roles.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("profile"));
    }

    #[test]
    fn test_threshold_resolution() {
        let mut motion = MotionConfig::default();
        assert_eq!(motion.threshold_for(Section::About).unwrap().get(), 0.2);
        assert_eq!(
            motion.threshold_for(Section::Contact).unwrap(),
            Threshold::DEFAULT
        );

        motion.reveal_threshold = 0.5;
        assert_eq!(motion.threshold_for(Section::Contact).unwrap().get(), 0.5);
        assert_eq!(motion.threshold_for(Section::About).unwrap().get(), 0.2);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_generate_keeps_comments_and_defaults() {
        let generated = Config::generate().unwrap();
        assert!(generated.contains("# Folio configuration"));

        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
