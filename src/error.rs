/// Errors raised by the overlay library.
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    /// A landmark set is shorter than the indices the render pass reads.
    #[error("landmark index {index} out of range for a set of {len} landmarks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
