use clap::Parser;
use pose_overlay::config::AppConfig;
use pose_overlay::RunningMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source frame the landmarks were detected on
    #[arg(short, long)]
    pub image: PathBuf,

    /// Pose result JSON (one result or an array of results)
    #[arg(short, long)]
    pub landmarks: PathBuf,

    /// Output PNG; numbered per result when the file holds several
    #[arg(short, long, default_value = "overlay.png")]
    pub out: PathBuf,

    /// Scale policy (defaults to the configured running mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<RunningMode>,

    /// View width in pixels (defaults to the image width)
    #[arg(long)]
    pub view_width: Option<u32>,

    /// View height in pixels (defaults to the image height)
    #[arg(long)]
    pub view_height: Option<u32>,

    /// Configuration file
    #[arg(short, long, default_value = AppConfig::PATH)]
    pub config: PathBuf,

    /// Write the effective configuration back to --config
    #[arg(long)]
    pub write_config: bool,

    /// Open a preview window instead of writing files
    #[arg(long)]
    pub show: bool,
}
