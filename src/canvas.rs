//! Drawing surfaces for overlay primitives.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::font;
use crate::primitives::Primitive;
use crate::style::{Paint, PaintStyle};
use crate::ttf::FontRenderer;
use crate::types::Point2;

/// A 2D target for overlay primitives, in view pixels with y pointing down.
pub trait Surface {
    fn draw_circle(&mut self, center: Point2, radius: f32, paint: &Paint);
    fn draw_line(&mut self, from: Point2, to: Point2, paint: &Paint);
    /// Clockwise arc; angles in degrees, 0° along +x.
    fn draw_arc(&mut self, center: Point2, radius: f32, start_angle: f32, sweep_angle: f32, paint: &Paint);
    /// Left-aligned text with its baseline at `origin.y`.
    fn draw_text(&mut self, origin: Point2, text: &str, paint: &Paint);
}

/// Replays `primitives` onto `surface` in order.
pub fn paint_primitives<S: Surface + ?Sized>(surface: &mut S, primitives: &[Primitive]) {
    for primitive in primitives {
        match primitive {
            Primitive::Circle { center, radius, paint } => surface.draw_circle(*center, *radius, paint),
            Primitive::Line { from, to, paint } => surface.draw_line(*from, *to, paint),
            Primitive::Arc { center, radius, start_angle, sweep_angle, paint } => {
                surface.draw_arc(*center, *radius, *start_angle, *sweep_angle, paint)
            }
            Primitive::Text { origin, text, paint } => surface.draw_text(*origin, text, paint),
        }
    }
}

/// Liang-Barsky clip of `from`-`to` against the `(min, max)` rectangle.
/// Returns `None` when nothing of the segment is inside or a coordinate is not finite.
pub fn clip_segment(from: Point2, to: Point2, (min, max): (Point2, Point2)) -> Option<(Point2, Point2)> {
    if ![from.x, from.y, to.x, to.y].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let (mut t0, mut t1) = (0.0f32, 1.0f32);
    let edges = [
        (-dx, from.x - min.x),
        (dx, max.x - from.x),
        (-dy, from.y - min.y),
        (dy, max.y - from.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    let at = |t: f32| Point2::new(from.x + dx * t, from.y + dy * t);
    Some((at(t0), at(t1)))
}

/// Paints onto an RGB frame. Anything outside the frame is clipped.
pub struct ImageCanvas<'a> {
    image: &'a mut RgbImage,
    font: Option<&'a FontRenderer>,
}

impl<'a> ImageCanvas<'a> {
    pub fn new(image: &'a mut RgbImage) -> Self {
        Self { image, font: None }
    }

    pub fn with_font(image: &'a mut RgbImage, font: Option<&'a FontRenderer>) -> Self {
        Self { image, font }
    }

    /// Frame rectangle grown by `pad` on every side.
    fn bounds(&self, pad: f32) -> (Point2, Point2) {
        let pad = pad + 1.0;
        (
            Point2::new(-pad, -pad),
            Point2::new(self.image.width() as f32 + pad, self.image.height() as f32 + pad),
        )
    }

    fn fill_disc(&mut self, center: Point2, radius: f32, color: Rgb<u8>) {
        let (min, max) = self.bounds(radius);
        if center.x >= min.x && center.x <= max.x && center.y >= min.y && center.y <= max.y {
            let c = (center.x.round() as i32, center.y.round() as i32);
            draw_filled_circle_mut(self.image, c, radius.round() as i32, color);
        }
    }

    /// Round brush dab used to build thick strokes.
    fn stamp(&mut self, p: Point2, half_width: f32, color: Rgb<u8>) {
        let (x, y) = (p.x.round() as i32, p.y.round() as i32);
        if half_width < 1.0 {
            if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        } else {
            draw_filled_circle_mut(self.image, (x, y), half_width.round() as i32, color);
        }
    }
}

impl Surface for ImageCanvas<'_> {
    fn draw_circle(&mut self, center: Point2, radius: f32, paint: &Paint) {
        match paint.style {
            PaintStyle::Stroke => self.draw_arc(center, radius, 0.0, 360.0, paint),
            PaintStyle::Fill => self.fill_disc(center, radius, paint.color),
            // half the stroke lands outside the radius
            PaintStyle::FillAndStroke => self.fill_disc(center, radius + paint.stroke_width / 2.0, paint.color),
        }
    }

    fn draw_line(&mut self, from: Point2, to: Point2, paint: &Paint) {
        let half = paint.stroke_width / 2.0;
        let Some((from, to)) = clip_segment(from, to, self.bounds(half)) else {
            return;
        };
        let len = ((to.x - from.x).powi(2) + (to.y - from.y).powi(2)).sqrt();
        let steps = len.ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = Point2::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.stamp(p, half, paint.color);
        }
    }

    fn draw_arc(&mut self, center: Point2, radius: f32, start_angle: f32, sweep_angle: f32, paint: &Paint) {
        if sweep_angle <= 0.0 {
            return;
        }
        let half = paint.stroke_width / 2.0;
        let (min, max) = self.bounds(half + radius);
        if !(center.x >= min.x && center.x <= max.x && center.y >= min.y && center.y <= max.y) {
            return;
        }
        let arc_len = radius * sweep_angle.to_radians();
        let steps = arc_len.ceil().max(1.0) as u32;
        for i in 0..=steps {
            let theta = (start_angle + sweep_angle * i as f32 / steps as f32).to_radians();
            let p = Point2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin());
            self.stamp(p, half, paint.color);
        }
    }

    fn draw_text(&mut self, origin: Point2, text: &str, paint: &Paint) {
        match self.font {
            Some(ttf) => ttf.draw_text(self.image, origin.x, origin.y, text, paint.color, paint.text_size),
            None => {
                let scale = font::scale_for_size(paint.text_size);
                let top = origin.y.round() as i32 - (font::GLYPH_HEIGHT * scale) as i32;
                font::draw_text_line(self.image, origin.x.round() as i32, top, text, paint.color, scale);
            }
        }
    }
}
