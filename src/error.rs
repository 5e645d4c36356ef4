use std::path::PathBuf;

/// Errors produced by the framework itself
///
/// Game callbacks return [anyhow::Result], so these convert into that freely.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written
    #[error("{}: {source}", path.display())]
    Io {
        /// The file that failed
        path: PathBuf,
        /// What went wrong
        #[source]
        source: std::io::Error,
    },
    /// An image could not be decoded or encoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Raw pixel data did not match the requested size
    #[error("expected {width}x{height} RGBA pixels, got {len} bytes")]
    InvalidTextureData {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Number of bytes supplied
        len: usize,
    },
    /// A sprite or animation was looked up by a name that was never loaded
    #[error("{kind} {name:?} does not exist")]
    MissingResource {
        /// "sprite" or "animation"
        kind: &'static str,
        /// The name that was looked up
        name: String,
    },
    /// An animation was declared with impossible parameters
    #[error("invalid animation: {0}")]
    InvalidAnimation(String),
    /// A window size string could not be parsed
    #[error("invalid size {input:?}: {reason}")]
    InvalidSize {
        /// What was given
        input: String,
        /// Why it was rejected
        reason: &'static str,
    },
    /// `init` was pointed at something that already exists
    #[error("path {} already exists, doing nothing", .0.display())]
    ProjectExists(PathBuf),
    /// The windowing system or the window surface failed
    #[error("window error: {0}")]
    Window(String),
}

/// Result type for framework operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
