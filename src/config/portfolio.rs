//! Portfolio configuration file
//!
//! Window settings, appearance and the profile record, loaded once at startup.
//! TOML by default, JSON when the file extension is `.json`.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::profile::{ProfileRecord, Slide};
use crate::constants::{config, profile, validation};

const DEFAULT_ACCENT: &str = "#DC2626";

/// On-disk format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(config::JSON_EXTENSION) => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub profile: ProfileRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: u16,
    #[serde(default = "default_window_height")]
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Header line above the profile
    #[serde(default = "default_invocation")]
    pub invocation: String,
    /// Font family for glyphs the default fonts lack; discovered by language
    /// when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_font: Option<String>,
    /// Heading and indicator colour, `#RRGGBB`
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_title() -> String {
    "Matrimonial Portfolio".to_string()
}

fn default_window_width() -> u16 {
    960
}

fn default_window_height() -> u16 {
    900
}

fn default_invocation() -> String {
    profile::DEFAULT_INVOCATION.to_string()
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT.to_string()
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            invocation: default_invocation(),
            script_font: None,
            accent_color: default_accent_color(),
        }
    }
}

impl Appearance {
    /// Accent colour as RGB; falls back to the default accent when invalid
    pub fn accent_rgb(&self) -> [u8; 3] {
        parse_hex_rgb(&self.accent_color)
            .or_else(|| parse_hex_rgb(DEFAULT_ACCENT))
            .unwrap_or([0xDC, 0x26, 0x26])
    }
}

/// Parse `#RRGGBB` (leading `#` optional)
pub fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

impl PortfolioConfig {
    /// Default config location under the user's config directory
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        path
    }

    /// Load from `path`, or use the reference profile if the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, using reference profile");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config = Self::parse(&contents, ConfigFormat::from_path(path))
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.resolve_relative_images(path.parent());
        config.validate_and_clamp();

        info!(
            path = %path.display(),
            profile = %config.profile.name,
            slides = config.profile.slides.len(),
            "Loaded portfolio config"
        );
        Ok(config)
    }

    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(contents).context("Invalid TOML")?,
            ConfigFormat::Json => serde_json::from_str(contents).context("Invalid JSON")?,
        };
        Ok(config)
    }

    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        let contents = match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize config to TOML")?
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?
            }
        };
        Ok(contents)
    }

    /// Write this config to `path`. An existing file is only replaced when
    /// `overwrite` is set.
    pub fn save(&self, path: &Path, overwrite: bool) -> Result<()> {
        if path.exists() && !overwrite {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let contents = self.render(ConfigFormat::from_path(path))?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!(path = %path.display(), "Saved portfolio config");
        Ok(())
    }

    /// Relative image paths are taken relative to the config file
    fn resolve_relative_images(&mut self, base: Option<&Path>) {
        let Some(base) = base else { return };
        for slide in &mut self.profile.slides {
            if let Some(image) = slide.image.as_mut().filter(|p| p.is_relative()) {
                *image = base.join(&*image);
            }
        }
    }

    /// Replace unusable values so the view never sees them
    pub fn validate_and_clamp(&mut self) {
        use validation::*;

        if self.profile.slides.is_empty() {
            warn!("Profile has no slides, adding one placeholder");
            self.profile.slides.push(Slide::default());
        }

        if self.window.width < MIN_WINDOW_WIDTH {
            warn!(width = self.window.width, min = MIN_WINDOW_WIDTH, "window width below minimum, clamping");
            self.window.width = MIN_WINDOW_WIDTH;
        }
        if self.window.height < MIN_WINDOW_HEIGHT {
            warn!(height = self.window.height, min = MIN_WINDOW_HEIGHT, "window height below minimum, clamping");
            self.window.height = MIN_WINDOW_HEIGHT;
        }

        if parse_hex_rgb(&self.appearance.accent_color).is_none() {
            warn!(accent_color = %self.appearance.accent_color, "Invalid accent_color hex, using default");
            self.appearance.accent_color = default_accent_color();
        }
    }
}
