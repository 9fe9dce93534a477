use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;

/// TrueType label renderer, used instead of the bitmap font when a family is configured.
pub struct FontRenderer {
    font: Font<'static>,
}

impl FontRenderer {
    /// Looks for `<family>.ttf` in the usual macOS/Linux font folders and the working directory.
    pub fn try_load(family: &str) -> Option<Self> {
        let paths = [
            format!("/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/Supplemental/{}.ttf", family),
            format!("/usr/share/fonts/truetype/{}.ttf", family),
            format!("{}.ttf", family),
        ];

        for p in paths.iter().filter(|p| Path::new(p).exists()) {
            match fs::read(p).ok().and_then(Font::try_from_vec) {
                Some(font) => {
                    log::info!("Loaded font from {}", p);
                    return Some(Self { font });
                }
                None => log::warn!("Could not parse font file {}", p),
            }
        }

        log::warn!("Could not find font family '{}'. Falling back to bitmap.", family);
        None
    }

    /// Draws `text` left-aligned with its baseline at `baseline_y`.
    pub fn draw_text(&self, image: &mut RgbImage, x: f32, baseline_y: f32, text: &str, color: Rgb<u8>, size_px: f32) {
        let scale = Scale::uniform(size_px);
        let (width, height) = (image.width() as i32, image.height() as i32);

        for glyph in self.font.layout(text, scale, point(x, baseline_y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                if coverage < 0.2 {
                    return;
                }
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px >= 0 && py >= 0 && px < width && py < height {
                    image.put_pixel(px as u32, py as u32, color);
                }
            });
        }
    }
}
