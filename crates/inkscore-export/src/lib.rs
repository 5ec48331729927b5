//! Export module for Inkscore
//!
//! Writes rasters out as PNG so the reference glyph and the drawn trace can
//! be inspected side by side.

pub mod png;

pub use png::{encode_raster_to_png, write_png};
