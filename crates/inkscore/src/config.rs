//! Scoring configuration
//!
//! Every tunable constant of the scorer lives here. A config is built once,
//! validated, and frozen inside a [`crate::ScoringContext`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use inkscore_core::{
    error::{InkscoreError, Result},
    types::{
        CanvasSpec, CANVAS_HEIGHT, CANVAS_WIDTH, FALLBACK_SCORE, GLYPH_SIZE, MIN_POINTS,
        STROKE_WIDTH,
    },
};
use inkscore_fontdb::{FontChain, FontDescriptor, DEFAULT_SEARCH_PATHS};

/// One entry of the font search list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub face_index: u32,
}

impl From<&FontEntry> for FontDescriptor {
    fn from(entry: &FontEntry) -> Self {
        FontDescriptor::new(entry.path.clone()).with_face_index(entry.face_index)
    }
}

/// Tunable constants of the scorer
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "stroke_width": 8.0, "fonts": [{ "path": "/fonts/SimHei.ttf" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub stroke_width: f32,
    pub glyph_size: f32,
    /// Traces with fewer points score zero without rendering
    pub min_points: usize,
    /// Score reported when rendering or comparison fails
    pub fallback_score: u8,
    /// Candidate fonts, tried in order before the built-in font
    pub fonts: Vec<FontEntry>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            stroke_width: STROKE_WIDTH,
            glyph_size: GLYPH_SIZE,
            min_points: MIN_POINTS,
            fallback_score: FALLBACK_SCORE,
            fonts: DEFAULT_SEARCH_PATHS
                .iter()
                .map(|&path| FontEntry {
                    path: PathBuf::from(path),
                    face_index: 0,
                })
                .collect(),
        }
    }
}

impl ScoringConfig {
    /// Read a config from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text).map_err(|e| match e {
            InkscoreError::ConfigError(msg) => InkscoreError::ConfigError(format!(
                "{}: {}",
                path.as_ref().display(),
                msg
            )),
            other => other,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| InkscoreError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with an empty font list, so only the built-in font is used
    pub fn builtin_font_only() -> Self {
        Self {
            fonts: Vec::new(),
            ..Self::default()
        }
    }

    /// Replace the font search list
    pub fn with_fonts<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.fonts = paths
            .into_iter()
            .map(|path| FontEntry {
                path: path.into(),
                face_index: 0,
            })
            .collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(InkscoreError::ConfigError(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(InkscoreError::ConfigError(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        if !(self.glyph_size.is_finite() && self.glyph_size > 0.0) {
            return Err(InkscoreError::ConfigError(format!(
                "glyph_size must be positive, got {}",
                self.glyph_size
            )));
        }
        if self.fallback_score > 100 {
            return Err(InkscoreError::ConfigError(format!(
                "fallback_score must be at most 100, got {}",
                self.fallback_score
            )));
        }
        Ok(())
    }

    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec::new(self.canvas_width, self.canvas_height)
    }

    pub fn font_chain(&self) -> FontChain {
        FontChain::new(self.fonts.iter().map(FontDescriptor::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_interface_constants() {
        let config = ScoringConfig::default();
        assert_eq!(config.canvas(), CanvasSpec::new(400, 400));
        assert_eq!(config.stroke_width, 5.0);
        assert_eq!(config.glyph_size, 200.0);
        assert_eq!(config.min_points, 10);
        assert_eq!(config.fallback_score, 50);
        assert_eq!(config.fonts.len(), DEFAULT_SEARCH_PATHS.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScoringConfig::from_json_str(
            r#"{ "stroke_width": 8.0, "fonts": [{ "path": "/fonts/a.ttc", "face_index": 1 }] }"#,
        )
        .unwrap();
        assert_eq!(config.stroke_width, 8.0);
        assert_eq!(config.canvas_width, 400);
        assert_eq!(config.font_chain().candidates()[0].to_string(), "/fonts/a.ttc#1");
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{ "canvas_width": 0 }"#,
            r#"{ "stroke_width": -1.0 }"#,
            r#"{ "glyph_size": 0.0 }"#,
            r#"{ "fallback_score": 101 }"#,
            r#"{ "stroke_width": "wide" }"#,
        ] {
            assert!(
                matches!(
                    ScoringConfig::from_json_str(json),
                    Err(InkscoreError::ConfigError(_))
                ),
                "{} should be rejected",
                json
            );
        }
    }

    #[test]
    fn test_builtin_only_has_empty_chain() {
        let config = ScoringConfig::builtin_font_only();
        assert!(config.font_chain().candidates().is_empty());
    }

    #[test]
    fn test_with_fonts_replaces_list() {
        let config = ScoringConfig::default().with_fonts(["x.ttf", "y.otf"]);
        assert_eq!(config.fonts.len(), 2);
        assert_eq!(config.fonts[1].path, PathBuf::from("y.otf"));
    }
}
