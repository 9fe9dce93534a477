use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use image::{ImageReader, RgbImage};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use pose_overlay::config::AppConfig;
use pose_overlay::frame::compose_frame;
use pose_overlay::output::WindowOutput;
use pose_overlay::result_io::load_results;
use pose_overlay::style::OverlayStyle;
use pose_overlay::ttf::FontRenderer;
use pose_overlay::{OverlayRenderer, PoseResult, RunningMode};

mod args;

use args::Args;

/// Replay pace for recorded and live results in the preview window.
const REPLAY_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // 0. Config
    let config = AppConfig::load(&args.config)?;
    if args.write_config {
        config.save(&args.config)?;
        log::info!("Wrote configuration to {}", args.config.display());
    }
    let style = config.style.to_style();
    let mode = args.mode.unwrap_or(config.defaults.running_mode);
    let font = config.defaults.font_family.as_deref().and_then(FontRenderer::try_load);

    // 1. Inputs
    let source = ImageReader::open(&args.image)
        .with_context(|| format!("Failed to open image {}", args.image.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", args.image.display()))?
        .to_rgb8();
    let results = load_results(&args.landmarks)
        .with_context(|| format!("Failed to load landmarks from {}", args.landmarks.display()))?;

    let view_width = args.view_width.unwrap_or(source.width());
    let view_height = args.view_height.unwrap_or(source.height());
    log::info!(
        "Image {}x{}, view {}x{}, mode {:?}",
        source.width(),
        source.height(),
        view_width,
        view_height,
        mode
    );

    let mut renderer = OverlayRenderer::new(view_width, view_height);

    if args.show || config.defaults.show_window {
        run_window(&source, &results, mode, &mut renderer, &style, font.as_ref())
    } else {
        write_frames(&source, &results, mode, &mut renderer, &style, font.as_ref(), &args.out)
    }
}

fn write_frames(
    source: &RgbImage,
    results: &[PoseResult],
    mode: RunningMode,
    renderer: &mut OverlayRenderer,
    style: &OverlayStyle,
    font: Option<&FontRenderer>,
    out: &Path,
) -> Result<()> {
    if results.is_empty() {
        log::warn!("No pose results to render");
        return Ok(());
    }

    for (n, result) in results.iter().enumerate() {
        renderer.update_result(result.clone(), source.width(), source.height(), mode);
        let view = compose_frame(source, renderer, style, font)
            .with_context(|| format!("Failed to render result {}", n))?;

        let path = if results.len() > 1 {
            numbered_path(out, n + 1)
        } else {
            out.to_path_buf()
        };
        view.save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{}", format!("Wrote {}", path.display()).green());
    }
    Ok(())
}

fn run_window(
    source: &RgbImage,
    results: &[PoseResult],
    mode: RunningMode,
    renderer: &mut OverlayRenderer,
    style: &OverlayStyle,
    font: Option<&FontRenderer>,
) -> Result<()> {
    let state = renderer.state();
    let mut window = WindowOutput::new("Pose Overlay", state.view_width as usize, state.view_height as usize)?;
    println!("Controls: [Space] Next result [C] Clear overlay [Esc] Quit");

    let mut next = 0;
    let mut last_advance = Instant::now();

    while window.is_open() {
        let replay_due = mode != RunningMode::Image && last_advance.elapsed() >= REPLAY_INTERVAL;
        if next < results.len() && (next == 0 || replay_due || window.is_key_pressed(minifb::Key::Space)) {
            renderer.update_result(results[next].clone(), source.width(), source.height(), mode);
            next += 1;
            last_advance = Instant::now();
        }

        if window.is_key_pressed(minifb::Key::C) {
            renderer.clear();
        }

        if renderer.take_repaint_request() {
            let view = compose_frame(source, renderer, style, font)?;
            window.show(&view)?;
        } else {
            window.idle();
        }
    }
    Ok(())
}

/// `overlay.png` -> `overlay_0003.png`
fn numbered_path(out: &Path, n: usize) -> PathBuf {
    let stem = out.file_stem().and_then(|s| s.to_str()).unwrap_or("overlay");
    let ext = out.extension().and_then(|s| s.to_str()).unwrap_or("png");
    out.with_file_name(format!("{}_{:04}.{}", stem, n, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_path() {
        assert_eq!(numbered_path(Path::new("out/overlay.png"), 3), PathBuf::from("out/overlay_0003.png"));
        assert_eq!(numbered_path(Path::new("frame"), 12), PathBuf::from("frame_0012.png"));
    }
}
