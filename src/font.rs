//! A tiny 3x5 bitmap font for the angle readouts. Digits only; anything else draws a block.
//! Glyphs are 5 rows of 3 bits, column 0 in the highest bit.

use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;

/// Integer pixel scale that makes glyphs roughly `text_size` tall.
pub fn scale_for_size(text_size: f32) -> u32 {
    ((text_size / 6.0).round() as u32).max(1)
}

/// Draws `text` with its top-left corner at (x, y). Pixels outside the image are skipped.
pub fn draw_text_line(image: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>, scale: u32) {
    let advance = ((GLYPH_WIDTH + 1) * scale) as i32;
    for (i, c) in text.chars().enumerate() {
        draw_char(image, x + i as i32 * advance, y, c, color, scale);
    }
}

fn glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0x7, 0x5, 0x5, 0x5, 0x7],
        '1' => [0x2, 0x6, 0x2, 0x2, 0x7],
        '2' => [0x7, 0x1, 0x7, 0x4, 0x7],
        '3' => [0x7, 0x1, 0x7, 0x1, 0x7],
        '4' => [0x5, 0x5, 0x7, 0x1, 0x1],
        '5' => [0x7, 0x4, 0x7, 0x1, 0x7],
        '6' => [0x7, 0x4, 0x7, 0x5, 0x7],
        '7' => [0x7, 0x1, 0x2, 0x4, 0x4],
        '8' => [0x7, 0x5, 0x7, 0x5, 0x7],
        '9' => [0x7, 0x5, 0x7, 0x1, 0x7],
        ' ' => [0x0, 0x0, 0x0, 0x0, 0x0],
        _ => [0x7, 0x7, 0x7, 0x7, 0x7],
    }
}

fn draw_char(image: &mut RgbImage, x: i32, y: i32, c: char, color: Rgb<u8>, scale: u32) {
    let (width, height) = (image.width() as i32, image.height() as i32);
    let scale = scale as i32;
    for (row, bits) in glyph(c).iter().enumerate() {
        for col in 0..GLYPH_WIDTH as i32 {
            if (bits >> (2 - col)) & 1 == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = x + col * scale + dx;
                    let py = y + row as i32 * scale + dy;
                    if px >= 0 && py >= 0 && px < width && py < height {
                        image.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}
