//! Album slide images
//!
//! PNG files referenced by the profile are decoded once at startup and
//! uploaded as egui textures. A slide whose image is missing or unreadable
//! keeps the numbered placeholder.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use tracing::{info, warn};

use crate::config::Slide;

/// Decoded RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.pixels)
    }
}

/// One texture slot per slide, `None` for placeholders
pub struct SlideTextures {
    textures: Vec<Option<egui::TextureHandle>>,
}

impl SlideTextures {
    pub fn load(ctx: &egui::Context, slides: &[Slide]) -> Self {
        let textures = slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| {
                let path = slide.image.as_deref()?;
                match decode_png_file(path) {
                    Ok(image) => {
                        info!(slide = idx + 1, path = %path.display(), width = image.width, height = image.height, "Loaded slide image");
                        Some(ctx.load_texture(
                            format!("slide-{idx}"),
                            image.to_color_image(),
                            egui::TextureOptions::LINEAR,
                        ))
                    }
                    Err(e) => {
                        warn!(slide = idx + 1, path = %path.display(), error = ?e, "Failed to load slide image, using placeholder");
                        None
                    }
                }
            })
            .collect();
        Self { textures }
    }

    pub fn get(&self, idx: usize) -> Option<&egui::TextureHandle> {
        self.textures.get(idx).and_then(Option::as_ref)
    }
}

pub fn decode_png_file(path: &Path) -> Result<RgbaImage> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    decode_png(&bytes).with_context(|| format!("Failed to decode PNG {}", path.display()))
}

pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    // Palette and 16-bit images come out as 8-bit gray/RGB(A)
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let (color_type, _) = reader.output_color_type();
    let (width, height) = {
        let info = reader.info();
        (info.width as usize, info.height as usize)
    };
    let mut buf = vec![0; width * height * color_type.samples()];
    let frame = reader.next_frame(&mut buf)?;
    let data = &buf[..frame.buffer_size()];

    Ok(RgbaImage {
        width: frame.width as usize,
        height: frame.height as usize,
        pixels: expand_to_rgba(frame.color_type, data)?,
    })
}

fn expand_to_rgba(color_type: png::ColorType, data: &[u8]) -> Result<Vec<u8>> {
    let rgba = match color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 0xFF])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g, 0xFF]).collect(),
        other => {
            return Err(anyhow!(
                "Unsupported slide color type {:?} (expected RGB, RGBA or grayscale)",
                other
            ));
        }
    };
    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_decode_rgb_adds_opaque_alpha() {
        let bytes = encode(2, 1, png::ColorType::Rgb, &[255, 0, 0, 0, 0, 255]);
        let image = decode_png(&bytes).unwrap();
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.pixels, vec![255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_decode_grayscale() {
        let bytes = encode(1, 2, png::ColorType::Grayscale, &[10, 200]);
        let image = decode_png(&bytes).unwrap();
        assert_eq!(image.pixels, vec![10, 10, 10, 255, 200, 200, 200, 255]);
        assert_eq!(image.to_color_image().size, [1, 2]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_png(b"definitely not a png").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = decode_png_file(Path::new("/no/such/slide.png")).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/slide.png"));
    }
}
