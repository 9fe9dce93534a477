use image::Rgb;

/// How a shape's outline and interior are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
    FillAndStroke,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb<u8>,
    pub stroke_width: f32,
    pub style: PaintStyle,
    pub text_size: f32,
}

impl Paint {
    pub fn stroke(color: Rgb<u8>, stroke_width: f32) -> Self {
        Self { color, stroke_width, style: PaintStyle::Stroke, text_size: 0.0 }
    }

    pub fn fill_and_stroke(color: Rgb<u8>, stroke_width: f32) -> Self {
        Self { color, stroke_width, style: PaintStyle::FillAndStroke, text_size: 0.0 }
    }

    pub fn text(color: Rgb<u8>, text_size: f32) -> Self {
        Self { color, stroke_width: 0.0, style: PaintStyle::Fill, text_size }
    }
}

/// Paints for one render pass. Immutable; build a new one to change the look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub point: Paint,
    pub line: Paint,
    pub arc: Paint,
    pub label: Paint,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            point: Paint::fill_and_stroke(Rgb([255, 0, 0]), 12.0),
            line: Paint::fill_and_stroke(Rgb([255, 255, 0]), 6.0),
            arc: Paint::stroke(Rgb([0, 255, 0]), 8.0),
            label: Paint::text(Rgb([255, 255, 255]), 18.0),
        }
    }
}
