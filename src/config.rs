use anyhow::Result;
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::style::{OverlayStyle, Paint};
use crate::types::RunningMode;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub style: StyleConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub running_mode: RunningMode,
    pub show_window: bool,
    /// TrueType family for angle labels; bitmap font when unset or not found.
    pub font_family: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub point_color_hex: String,
    pub point_stroke_width: f32,
    pub line_color_hex: String,
    pub line_stroke_width: f32,
    pub arc_color_hex: String,
    pub arc_stroke_width: f32,
    pub label_color_hex: String,
    pub label_text_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            point_color_hex: "#FF0000".to_string(),
            point_stroke_width: 12.0,
            line_color_hex: "#FFFF00".to_string(),
            line_stroke_width: 6.0,
            arc_color_hex: "#00FF00".to_string(),
            arc_stroke_width: 8.0,
            label_color_hex: "#FFFFFF".to_string(),
            label_text_size: 18.0,
        }
    }
}

impl StyleConfig {
    pub fn to_style(&self) -> OverlayStyle {
        OverlayStyle {
            point: Paint::fill_and_stroke(parse_hex(&self.point_color_hex), self.point_stroke_width),
            line: Paint::fill_and_stroke(parse_hex(&self.line_color_hex), self.line_stroke_width),
            arc: Paint::stroke(parse_hex(&self.arc_color_hex), self.arc_stroke_width),
            label: Paint::text(parse_hex(&self.label_color_hex), self.label_text_size),
        }
    }
}

impl AppConfig {
    pub const PATH: &'static str = "config.json";

    /// Missing file gives defaults; a file that fails to parse is reported and replaced by defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("Configuration file {} not found. Using defaults.", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        // missing fields fall back to Default through #[serde(default)]
        match serde_json::from_str::<AppConfig>(&content) {
            Ok(c) => {
                log::info!("Loaded configuration from {}", path.display());
                Ok(c)
            }
            Err(e) => {
                log::warn!("Error parsing config {}: {}. Using defaults.", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Parses `#RRGGBB`. Anything else falls back to red.
pub fn parse_hex(hex: &str) -> Rgb<u8> {
    let channel = |range: std::ops::Range<usize>| hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok());
    if hex.len() == 7 && hex.starts_with('#') {
        if let (Some(r), Some(g), Some(b)) = (channel(1..3), channel(3..5), channel(5..7)) {
            return Rgb([r, g, b]);
        }
    }
    log::warn!("Invalid colour '{}', using red", hex);
    Rgb([255, 0, 0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF0000"), Rgb([255, 0, 0]));
        assert_eq!(parse_hex("#00FF00"), Rgb([0, 255, 0]));
        assert_eq!(parse_hex("#0000ff"), Rgb([0, 0, 255]));
        assert_eq!(parse_hex("#FFFFFF"), Rgb([255, 255, 255]));
        assert_eq!(parse_hex("invalid"), Rgb([255, 0, 0]));
        assert_eq!(parse_hex("#GG0000"), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_default_style_matches_overlay_defaults() {
        assert_eq!(StyleConfig::default().to_style(), OverlayStyle::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.defaults.running_mode, RunningMode::Image);
        assert!(config.defaults.font_family.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r##"{ "defaults": { "running_mode": "live_stream" }, "style": { "line_color_hex": "#00FFFF" } }"##,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.defaults.running_mode, RunningMode::LiveStream);
        assert_eq!(config.style.line_color_hex, "#00FFFF");
        assert_eq!(config.style.arc_stroke_width, 8.0);
        assert_eq!(config.style.to_style().line.color, Rgb([0, 255, 255]));
    }

    #[test]
    fn test_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.style.label_text_size, 18.0);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = AppConfig::default();
        config.defaults.font_family = Some("DejaVuSans".to_string());
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.defaults.font_family.as_deref(), Some("DejaVuSans"));
    }
}
