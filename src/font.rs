//! Fallback font discovery via fontconfig
//!
//! egui's bundled fonts have no Devanagari glyphs, so the invocation header
//! would render as boxes. A system font covering the script is looked up once
//! at startup and appended to egui's font fallback chain.

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use fontconfig::{Fontconfig, Pattern};
use std::ffi::{CStr, CString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::constants::fonts::{SCRIPT_FONT_KEY, SCRIPT_LANGUAGE};

/// fontconfig property for language coverage
const FC_LANG: &CStr = c"lang";

/// Last resort when fontconfig finds nothing
const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
];

/// Font file bytes ready to hand to egui
pub struct ScriptFont {
    pub path: PathBuf,
    pub data: Vec<u8>,
}

impl ScriptFont {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        info!(path = %path.display(), bytes = data.len(), "Loaded script font");
        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Resolve the configured family, or search by language when none is set
    pub fn discover(family: Option<&str>) -> Result<Self> {
        let path = match family {
            Some(family) => find_font_path(family)?,
            None => match find_font_for_language(SCRIPT_LANGUAGE) {
                Ok(path) => path,
                Err(e) => {
                    warn!(error = %e, "fontconfig lookup failed, trying hardcoded font paths");
                    first_existing(FALLBACK_FONT_PATHS)
                        .ok_or_else(|| anyhow!("No font with '{SCRIPT_LANGUAGE}' coverage found"))?
                }
            },
        };
        Self::from_path(&path)
    }
}

/// Find the font file fontconfig prefers for `language`
pub fn find_font_for_language(language: &str) -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    let mut pattern = Pattern::new(&fc);
    let lang = CString::new(language)
        .with_context(|| format!("Invalid language tag: {}", language))?;
    pattern.add_string(FC_LANG, &lang);

    let matched = pattern.font_match();
    let family = matched.get_string(fontconfig::FC_FAMILY).unwrap_or("Unknown");
    let file = matched
        .filename()
        .with_context(|| format!("No font file found for language '{}'", language))?;

    let path = PathBuf::from(file);
    if !path.exists() {
        return Err(anyhow!("Font file path '{}' does not exist", path.display()));
    }

    debug!(language, family, path = %path.display(), "Resolved font by language");
    Ok(path)
}

/// Find the font file for a family name, rejecting fontconfig's fuzzy fallback
pub fn find_font_path(family: &str) -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    let mut pattern = Pattern::new(&fc);
    let family_cstr = CString::new(family)
        .with_context(|| format!("Invalid family name: {}", family))?;
    pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);

    let matched = pattern.font_match();
    if let Some(matched_family) = matched.get_string(fontconfig::FC_FAMILY) {
        if !matched_family.eq_ignore_ascii_case(family) {
            warn!(
                requested = family,
                matched = matched_family,
                "Fontconfig returned different font family - requested font may not be installed"
            );
            return Err(anyhow!(
                "Font '{}' not found - fontconfig returned family '{}' instead",
                family,
                matched_family
            ));
        }
    }

    let file = matched
        .filename()
        .with_context(|| format!("No font file found for '{}'", family))?;
    let path = PathBuf::from(file);
    if !path.exists() {
        return Err(anyhow!("Font file path '{}' does not exist", path.display()));
    }

    debug!(family, path = %path.display(), "Resolved font path via family");
    Ok(path)
}

fn first_existing(paths: &[&str]) -> Option<PathBuf> {
    paths.iter().map(PathBuf::from).find(|p| p.exists())
}

/// Default egui fonts with `font` appended as the last fallback of every
/// family, so Latin text keeps egui's look
pub fn font_definitions_with(font: ScriptFont) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        SCRIPT_FONT_KEY.to_owned(),
        Arc::new(egui::FontData::from_owned(font.data)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(SCRIPT_FONT_KEY.to_owned());
    }
    fonts
}

/// Discover and install the script font; keeps egui defaults on failure
pub fn install_script_font(ctx: &egui::Context, family: Option<&str>) {
    match ScriptFont::discover(family) {
        Ok(font) => {
            info!(path = %font.path.display(), "Installing script fallback font");
            ctx.set_fonts(font_definitions_with(font));
        }
        Err(e) => {
            warn!(error = ?e, "No script font available, header may not render");
        }
    }
}
