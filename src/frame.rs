//! Composes the view: the source frame under the overlay.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::canvas::{paint_primitives, ImageCanvas};
use crate::error::Result;
use crate::renderer::OverlayRenderer;
use crate::style::OverlayStyle;
use crate::ttf::FontRenderer;

/// Renders a view-sized frame with `source` scaled by the renderer's current
/// factor and anchored top-left, then paints the overlay on top.
///
/// With a fit scale the unused area stays black; with a fill scale the source
/// overflow is cropped.
pub fn compose_frame(
    source: &RgbImage,
    renderer: &OverlayRenderer,
    style: &OverlayStyle,
    font: Option<&FontRenderer>,
) -> Result<RgbImage> {
    let state = renderer.state();
    let mut view = RgbImage::new(state.view_width, state.view_height);

    let scaled_w = (source.width() as f32 * state.scale_factor).round() as u32;
    let scaled_h = (source.height() as f32 * state.scale_factor).round() as u32;
    if scaled_w > 0 && scaled_h > 0 {
        let scaled = if (scaled_w, scaled_h) == source.dimensions() {
            source.clone()
        } else {
            imageops::resize(source, scaled_w, scaled_h, FilterType::Triangle)
        };
        imageops::overlay(&mut view, &scaled, 0, 0);
    }

    let primitives = renderer.render(style)?;
    paint_primitives(&mut ImageCanvas::with_font(&mut view, font), &primitives);
    Ok(view)
}
