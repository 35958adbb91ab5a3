use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShieldError};

/// Default directory name for codeshield settings.
const SHIELD_DIR: &str = ".codeshield";
/// Config filename.
const CONFIG_FILE: &str = "config.toml";

/// Project-level configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory that relative paths are resolved against.
    pub project_root: PathBuf,
    /// Path to the `.codeshield/` directory.
    pub shield_dir: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from config.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from .codeshield/config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Validation limits.
    pub validation: ValidationSettings,
    /// Notification behaviour.
    pub notifications: NotificationSettings,
    /// Output configuration.
    pub output: OutputSettings,
}

/// Limits applied by the validation pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Files with more lines than this are flagged "Too Large".
    pub max_lines: usize,
    /// Number of leading bytes inspected for null bytes.
    pub binary_check_bytes: usize,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_lines: 10_000,
            binary_check_bytes: 8192,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Milliseconds before a notification is dismissed.
    pub dismiss_after_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 4000,
        }
    }
}

impl NotificationSettings {
    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

/// Output-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format: "minified" (default), "pretty", or "text".
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "minified".into(),
        }
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let shield_dir = project_root.join(SHIELD_DIR);
        let config_path = shield_dir.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            project_root,
            shield_dir,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| ShieldError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from config.toml if it exists.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), "ignoring invalid config: {e}");
                None
            }
        }
    }

    /// Save current settings to config.toml.
    pub fn save_settings(&self) -> Result<()> {
        std::fs::create_dir_all(&self.shield_dir)?;
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| ShieldError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Resolve a user-supplied path against the project root.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.project_root.join(p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_new_sets_paths() {
        let cfg = Config::new("/tmp/project");
        assert_eq!(cfg.project_root, PathBuf::from("/tmp/project"));
        assert_eq!(cfg.shield_dir, PathBuf::from("/tmp/project/.codeshield"));
        assert_eq!(
            cfg.config_path,
            PathBuf::from("/tmp/project/.codeshield/config.toml")
        );
    }

    #[test]
    fn default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.validation.max_lines, 10_000);
        assert_eq!(settings.validation.binary_check_bytes, 8192);
        assert_eq!(settings.notifications.dismiss_after_ms, 4000);
        assert_eq!(
            settings.notifications.dismiss_after(),
            Duration::from_secs(4)
        );
        assert_eq!(settings.output.format, "minified");
    }

    #[test]
    fn save_and_load_settings() {
        let tmp = TempDir::new().unwrap();
        let mut cfg = Config::new(tmp.path());

        cfg.settings.validation.max_lines = 500;
        cfg.settings.output.format = "text".to_string();
        cfg.save_settings().unwrap();
        assert!(cfg.config_path.exists());

        let cfg2 = Config::new(tmp.path());
        assert_eq!(cfg2.settings.validation.max_lines, 500);
        assert_eq!(cfg2.settings.validation.binary_check_bytes, 8192);
        assert_eq!(cfg2.settings.output.format, "text");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".codeshield");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[notifications]\ndismiss_after_ms = 100\n")
            .unwrap();

        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.notifications.dismiss_after_ms, 100);
        assert_eq!(cfg.settings.validation.max_lines, 10_000);
    }

    #[test]
    fn load_invalid_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".codeshield");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "invalid toml {{{{").unwrap();

        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.validation.max_lines, 10_000);
        assert_eq!(cfg.settings.output.format, "minified");
    }

    #[test]
    fn resolve_relative_and_absolute() {
        let cfg = Config::new("/tmp/project");
        assert_eq!(
            cfg.resolve("src/main.py"),
            PathBuf::from("/tmp/project/src/main.py")
        );
        assert_eq!(cfg.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }
}
