//! Fixed-size intensity grids
//!
//! Both sides of a comparison end up here. Backends may hand back colour
//! pixels; the metric collapses them to a single intensity channel.

use crate::error::{CompareError, RenderError};
use crate::types::CanvasSpec;

/// Intensity of untouched canvas
pub const BACKGROUND: u8 = 255;

/// Intensity of full ink
pub const INK: u8 = 0;

/// How pixels are laid out in [`Raster::data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Gray8,
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Raw pixels, row-major, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl Raster {
    /// An all-background grayscale raster
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Gray8,
            data: vec![BACKGROUND; width as usize * height as usize],
        }
    }

    /// Blank raster sized to a canvas
    pub fn for_canvas(canvas: CanvasSpec) -> Self {
        Self::blank(canvas.width, canvas.height)
    }

    /// Wraps an existing buffer, checking it holds exactly `width * height` pixels
    pub fn from_raw(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(RenderError::BackendError(format!(
                "{}x{} {:?} raster needs {} bytes, got {}",
                width,
                height,
                format,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn expected_len(&self) -> usize {
        self.pixel_count() * self.format.bytes_per_pixel()
    }

    /// One intensity per pixel.
    ///
    /// Colour channels are averaged and truncated. Alpha is not an intensity
    /// channel and is ignored for `Rgba8`.
    pub fn intensities(&self) -> Result<Vec<u8>, CompareError> {
        let expected = self.expected_len();
        if self.data.len() < expected {
            return Err(CompareError::BufferTooSmall {
                expected,
                actual: self.data.len(),
            });
        }

        let pixels = &self.data[..expected];
        let gray = match self.format {
            PixelFormat::Gray8 => pixels.to_vec(),
            PixelFormat::Rgb8 => pixels.chunks_exact(3).map(mean_rgb).collect(),
            PixelFormat::Rgba8 => pixels.chunks_exact(4).map(mean_rgb).collect(),
        };
        Ok(gray)
    }

    /// Same raster collapsed to `Gray8`
    pub fn to_gray(&self) -> Result<Raster, CompareError> {
        Ok(Raster {
            width: self.width,
            height: self.height,
            format: PixelFormat::Gray8,
            data: self.intensities()?,
        })
    }

    /// Mean ink darkness in [0, 1]; 0 for a blank raster
    pub fn ink_coverage(&self) -> Result<f64, CompareError> {
        let gray = self.intensities()?;
        if gray.is_empty() {
            return Ok(0.0);
        }
        let darkness: u64 = gray.iter().map(|&v| (BACKGROUND - v) as u64).sum();
        Ok(darkness as f64 / (BACKGROUND as f64 * gray.len() as f64))
    }

    /// Count of pixels that carry any ink at all
    pub fn inked_pixels(&self) -> Result<usize, CompareError> {
        Ok(self
            .intensities()?
            .iter()
            .filter(|&&v| v < BACKGROUND)
            .count())
    }
}

fn mean_rgb(px: &[u8]) -> u8 {
    let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
    (sum / 3) as u8
}
