//! Application configuration loaded from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Top-level configuration (TOML).
///
/// Every field has a default, so an empty or missing file is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    /// How long the event loop waits for input before checking for redraws.
    pub tick_rate_ms: u64,

    pub header: HeaderConfig,

    pub theme: ThemeConfig,
}

/// Texts shown in the header bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderConfig {
    pub title: String,
    pub subtitle: String,
}

/// Colors as `#rrggbb` strings or ratatui color names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Header bar, focused borders and the Save button.
    pub accent: String,
    /// "+ Add Student" button.
    pub add: String,
    /// Edit action in list rows.
    pub edit: String,
    /// Delete action and error notices.
    pub delete: String,
    /// Placeholders, ages and hints.
    pub muted: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "TechAcademy Pro".to_string(),
            subtitle: "Student Management".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#2563eb".to_string(),
            add: "#10b981".to_string(),
            edit: "#f59e0b".to_string(),
            delete: "#ef4444".to_string(),
            muted: "#6b7280".to_string(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            header: HeaderConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(anyhow!("tick_rate_ms must be > 0"));
        }
        if self.header.title.trim().is_empty() {
            return Err(anyhow!("header.title must not be empty"));
        }
        self.theme.validate()
    }
}

impl ThemeConfig {
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.entries() {
            parse_color(value).with_context(|| format!("theme.{key}"))?;
        }
        Ok(())
    }

    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("accent", self.accent.as_str()),
            ("add", self.add.as_str()),
            ("edit", self.edit.as_str()),
            ("delete", self.delete.as_str()),
            ("muted", self.muted.as_str()),
        ]
    }
}

/// Parses a config color string into a terminal color.
pub fn parse_color(value: &str) -> Result<Color> {
    value
        .trim()
        .parse::<Color>()
        .map_err(|_| anyhow!("invalid color {value:?}"))
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RosterConfig::default()`.
pub fn load_config(path: &Path) -> Result<RosterConfig> {
    if !path.exists() {
        let cfg = RosterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RosterConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("roster.toml");
        fs::write(&path, "[header]\ntitle = \"Night School\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.header.title, "Night School");
        assert_eq!(cfg.header.subtitle, "Student Management");
        assert_eq!(cfg.tick_rate_ms, 250);
        assert_eq!(cfg.theme, ThemeConfig::default());
    }

    #[test]
    fn bad_color_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("roster.toml");
        fs::write(&path, "[theme]\nadd = \"not-a-color\"\n").expect("write");

        let err = load_config(&path).expect_err("bad color");
        assert!(format!("{err:#}").contains("theme.add"));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let cfg = RosterConfig {
            tick_rate_ms: 0,
            ..RosterConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut cfg = RosterConfig::default();
        cfg.header.title = "   ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn default_palette_parses() {
        assert_eq!(parse_color("#2563eb").expect("hex"), Color::Rgb(0x25, 0x63, 0xeb));
        assert_eq!(parse_color("red").expect("name"), Color::Red);
    }
}
