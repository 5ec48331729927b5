//! Error types for Inkscore

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InkscoreError>;

/// Main error type for Inkscore
#[derive(Debug, Error)]
pub enum InkscoreError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),

    #[error("Comparison failed: {0}")]
    CompareFailed(#[from] CompareError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a font resource could not serve a symbol.
///
/// These are soft misses: the font chain moves on to the next candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font has no glyph for {0:?}")]
    NoCoverage(char),
}

/// Rendering errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid font data")]
    InvalidFont,

    #[error("Glyph not found: {0}")]
    GlyphNotFound(u32),

    #[error("Outline extraction failed")]
    OutlineExtractionFailed,

    #[error("Path building failed")]
    PathBuildingFailed,

    #[error("Pixmap creation failed")]
    PixmapCreationFailed,

    #[error("Malformed point #{index}: ({x}, {y})")]
    MalformedPoint { index: usize, x: f32, y: f32 },

    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Raster comparison errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("Raster size mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("Pixel buffer too small: expected {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Cannot compare empty rasters")]
    EmptyRaster,
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Request-level validation errors, surfaced to callers as 4xx responses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("target_char must be exactly one character, got {0:?}")]
    InvalidTargetChar(String),
}

impl InkscoreError {
    /// True for errors caused by the caller's input rather than by the scorer.
    pub fn is_client_error(&self) -> bool {
        matches!(self, InkscoreError::Request(_))
    }
}
