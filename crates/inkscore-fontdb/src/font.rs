//! Outline fonts loaded from disk or memory
//!
//! Fonts store their raw data and create a parser view on demand, which
//! keeps TTC collections with several faces cheap to hold.

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use inkscore_core::{
    error::FontLoadError,
    traits::{FontMetrics, FontRef},
};

/// A font that's been brought into memory, ready to draw glyphs
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self, FontLoadError> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FontLoadError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::from_data_index(data, face_index)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self, FontLoadError> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self, FontLoadError> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            data,
            face_index,
            units_per_em,
        })
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Finds which glyph draws this character
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
            // Glyph 0 is .notdef, which is a miss, not a match
            .filter(|&gid| gid != 0)
    }

    /// Advance width in font units, 0 when the metrics are unreadable
    pub fn advance_width(&self, glyph_id: u32) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let hmtx = font.hmtx().ok()?;
                let glyph = read_fonts::types::GlyphId::new(glyph_id);
                hmtx.advance(glyph).map(|advance| advance as f32)
            })
            .unwrap_or(0.0)
    }

    /// Typographic ascent/descent from OS/2, falling back to hhea
    pub fn metrics(&self) -> Option<FontMetrics> {
        let font = self.font_ref()?;
        let (ascent, descent, line_gap) = font
            .os2()
            .ok()
            .map(|os2| {
                (
                    os2.s_typo_ascender(),
                    os2.s_typo_descender(),
                    os2.s_typo_line_gap(),
                )
            })
            .or_else(|| {
                font.hhea().ok().map(|hhea| {
                    (
                        hhea.ascender().to_i16(),
                        hhea.descender().to_i16(),
                        hhea.line_gap().to_i16(),
                    )
                })
            })?;

        Some(FontMetrics {
            units_per_em: self.units_per_em,
            ascent,
            descent,
            line_gap,
        })
    }

    /// Counts how many different glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}

impl FontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.glyph_id(ch)
    }

    fn advance_width(&self, glyph_id: u32) -> f32 {
        self.advance_width(glyph_id)
    }

    fn metrics(&self) -> Option<FontMetrics> {
        self.metrics()
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("bytes", &self.data.len())
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_data_is_invalid() {
        let result = Font::from_data(vec![0; 100]);
        assert_eq!(result.err(), Some(FontLoadError::InvalidData));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = Font::from_file("/definitely/not/here/NoSuchFont.ttf");
        assert!(matches!(result, Err(FontLoadError::FileNotFound(_))));
    }
}
