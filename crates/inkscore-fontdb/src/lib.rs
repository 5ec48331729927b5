//! Where fonts come from: loading and fallback for Inkscore
//!
//! The reference raster needs a font that can draw the target symbol. This
//! crate loads outline fonts with `read-fonts`, walks an ordered list of
//! candidates until one covers the symbol, and keeps a small stroke font
//! compiled in so there is always something to draw with.

pub mod builtin;
pub mod chain;
pub mod font;

pub use builtin::{BuiltinFont, StrokeGlyph};
pub use chain::{FontChain, FontDescriptor, FontProbe, ResolvedFont, DEFAULT_SEARCH_PATHS};
pub use font::Font;
