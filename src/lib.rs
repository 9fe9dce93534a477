//! Pose skeleton and joint-angle overlays for camera and image frames.
//!
//! Landmarks come from an external pose model. [`renderer::OverlayRenderer`]
//! keeps the latest result and turns it into [`primitives::Primitive`]s, which
//! a [`canvas::Surface`] paints onto the frame.

pub mod canvas;
pub mod config;
pub mod error;
pub mod font;
pub mod frame;
pub mod geometry;
pub mod output;
pub mod primitives;
pub mod renderer;
pub mod result_io;
pub mod style;
pub mod topology;
pub mod ttf;
pub mod types;
pub mod visibility;

pub use error::{OverlayError, Result};
pub use renderer::{render, OverlayRenderer, RenderState};
pub use types::{Landmark, LandmarkSet, Point2, PoseResult, RunningMode};
