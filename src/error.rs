use thiserror::Error;

/// Rejections raised while turning raw heights into a `HeightIm` or before a sweep starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid shape {w}x{h}: need at least one row and one column")]
    InvalidShape { w: usize, h: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("negative height {value} at (x={x}, y={y})")]
    NegativeHeight { x: usize, y: usize, value: i64 },

    #[error("height {value} at (x={x}, y={y}) does not fit in u32")]
    HeightOverflow { x: usize, y: usize, value: i64 },
}

/// Errors at the edges of the crate: loading descriptions, images, and grids.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "im-io")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("unsupported description: {0}")]
    Desc(String),
}

pub type PoolResult<T> = Result<T, PoolError>;
