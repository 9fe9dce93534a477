use anyhow::Result;
use image::RgbImage;

/// Preview window hosting the overlay. Frames are pushed only when the
/// renderer asks for a repaint; otherwise the window just pumps events.
pub struct WindowOutput {
    window: minifb::Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl WindowOutput {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = minifb::Window::new(title, width, height, minifb::WindowOptions::default())
            .map_err(|e| anyhow::anyhow!("Failed to create window: {}", e))?;

        window.set_target_fps(60);

        Ok(Self {
            window,
            buffer: vec![0; width * height],
            width,
            height,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    pub fn is_key_pressed(&self, key: minifb::Key) -> bool {
        self.window.is_key_pressed(key, minifb::KeyRepeat::No)
    }

    /// Shows `frame`, which must match the window size.
    pub fn show(&mut self, frame: &RgbImage) -> Result<()> {
        if frame.width() as usize != self.width || frame.height() as usize != self.height {
            anyhow::bail!(
                "Frame {}x{} does not match window {}x{}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            );
        }

        for (dst, pixel) in self.buffer.iter_mut().zip(frame.pixels()) {
            let [r, g, b] = pixel.0;
            *dst = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| anyhow::anyhow!("Window update failed: {}", e))
    }

    /// Pumps window events without a new frame.
    pub fn idle(&mut self) {
        self.window.update();
    }
}
