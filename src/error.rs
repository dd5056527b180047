use thiserror::Error;

/// Region of a BMP file a truncated read was detected in. Header-level and
/// row-level truncation are reported separately for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    FileHeader,
    InfoHeader,
    PixelRow(usize),
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::FileHeader => write!(f, "file header"),
            Section::InfoHeader => write!(f, "info header"),
            Section::PixelRow(y) => write!(f, "pixel row {y}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated file: {section} needs {expected} bytes")]
    Truncated { section: Section, expected: usize },

    #[error("bad signature {0:?}, expected \"BM\"")]
    Signature([u8; 2]),

    #[error("unsupported bitmap: {0}")]
    Unsupported(String),

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("empty image cannot be encoded")]
    EmptyImage,

    #[error("blur radius must be non-negative, got {0}")]
    InvalidRadius(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
