//! Configuration
//!
//! Settings live in `<config_dir>/playreel/config.toml`. Every field has a
//! default, so a partial (or missing) file is always valid. `migrate_config`
//! fills in fields a file is missing without touching anything the user
//! wrote, comments included.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};
use tracing::debug;

use crate::tui::theme::ThemeName;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "PLAYREEL_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Terminal player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Delay between frames while a play is animating
    pub frame_interval_ms: u64,
    /// Start the animation as soon as the player opens
    pub autoplay: bool,
    pub theme: ThemeName,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            autoplay: true,
            theme: ThemeName::default(),
        }
    }
}

impl PlayerConfig {
    /// Frame interval, never zero.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

/// SVG frame export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Pixel scale over the 800x300 logical field
    pub scale: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when neither RUST_LOG nor -v is given
    pub level: String,
    /// Log file path; empty logs to stderr
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: String::new(),
        }
    }
}

/// What each setting controls, keyed `section.key`.
const SETTING_DOCS: &[(&str, &str)] = &[
    ("player.frame_interval_ms", "delay between animation frames"),
    ("player.autoplay", "start the play as soon as the player opens"),
    ("player.theme", "broadcast, classic or mono"),
    ("export.scale", "pixel scale of exported SVG frames"),
    ("logging.level", "filter used without RUST_LOG or -v"),
    ("logging.file", "append logs here instead of stderr"),
];

/// One-line description of a `section.key` setting.
pub fn describe_setting(key: &str) -> Option<&'static str> {
    SETTING_DOCS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, doc)| *doc)
}

impl Config {
    /// Values that parse but will not be used as written.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.player.frame_interval_ms == 0 {
            problems.push("player.frame_interval_ms is 0; 1 ms is used".to_string());
        }
        if !(self.export.scale.is_finite() && self.export.scale > 0.0) {
            problems.push(format!(
                "export.scale must be a positive number (got {}); 1.0 is used",
                self.export.scale
            ));
        }
        if !self.logging.level.trim().is_empty() && !crate::logging::is_valid_directive(&self.logging.level) {
            problems.push(format!(
                "logging.level '{}' is not a valid filter; warn is used",
                self.logging.level
            ));
        }
        problems
    }

    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("playreel").join("config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Write the config file, creating its directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config: {}", path.display()))
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Updated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field of the default config that `content` is missing.
///
/// Existing values and comments are preserved; an unparsable file is an
/// error rather than being overwritten.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Existing config is not valid TOML")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?
        .parse()
        .context("Default config is not valid TOML")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            added_fields.extend(default_table.iter().map(|(key, _)| format!("{}.{}", section, key)));
            continue;
        }

        let Some(table) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            // A scalar where a section belongs; leave it for the parser to report.
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
