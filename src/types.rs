use serde::{Deserialize, Serialize};

/// A single body keypoint in normalized image space.
///
/// `x` and `y` are fractions of the source image width and height, `z` is the
/// model's relative depth. Visibility and presence are carried through from the
/// model output but never drive drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, visibility: None, presence: None }
    }
}

/// Landmarks of one detected body, in model index order (33 for a full pose).
pub type LandmarkSet = Vec<Landmark>;

/// One inference result: a landmark set per detected body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseResult {
    #[serde(default)]
    pub landmarks: Vec<LandmarkSet>,
}

impl PoseResult {
    pub fn single(set: LandmarkSet) -> Self {
        Self { landmarks: vec![set] }
    }
}

/// How frames reach the view. Picks the fit-vs-fill scale policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RunningMode {
    #[default]
    Image,
    Video,
    LiveStream,
}

/// A point in view (pixel) space, y pointing down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}
