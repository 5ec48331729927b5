//! PNG export format
//!
//! Exports rasters to PNG using the `image` crate.

use std::fs;
use std::path::Path;

use image::{ImageBuffer, ImageEncoder, RgbaImage};
use inkscore_core::{
    error::{ExportError, Result},
    PixelFormat, Raster,
};

/// Encode a raster of any pixel format as an RGBA PNG.
pub fn encode_raster_to_png(raster: &Raster) -> Result<Vec<u8>> {
    let expected_size = raster.expected_len();
    if raster.data.len() < expected_size {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer too small: expected {} bytes for {}x{} {:?}, got {}",
            expected_size,
            raster.width,
            raster.height,
            raster.format,
            raster.data.len()
        ))
        .into());
    }

    let pixels = &raster.data[..expected_size];
    let rgba_data: Vec<u8> = match raster.format {
        PixelFormat::Rgba8 => pixels.to_vec(),
        PixelFormat::Rgb8 => pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        PixelFormat::Gray8 => pixels.iter().flat_map(|&v| [v, v, v, 255]).collect(),
    };

    let img: RgbaImage = ImageBuffer::from_raw(raster.width, raster.height, rgba_data)
        .ok_or_else(|| ExportError::EncodingFailed("Failed to create image buffer".into()))?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(
            img.as_raw(),
            raster.width,
            raster.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// Encode and write a raster to `path`
pub fn write_png(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
    let bytes = encode_raster_to_png(raster)?;
    fs::write(path.as_ref(), bytes).map_err(|e| {
        ExportError::WriteFailed(format!("{}: {}", path.as_ref().display(), e)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_export_gray() {
        let raster = Raster::from_raw(2, 2, PixelFormat::Gray8, vec![0, 128, 192, 255]).unwrap();
        let png_data = encode_raster_to_png(&raster).unwrap();
        assert_eq!(&png_data[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_png_export_rgb() {
        let raster = Raster::from_raw(
            2,
            1,
            PixelFormat::Rgb8,
            vec![
                255, 0, 0, // Red
                0, 0, 255, // Blue
            ],
        )
        .unwrap();
        let png_data = encode_raster_to_png(&raster).unwrap();
        assert_eq!(&png_data[0..8], &PNG_MAGIC);
        assert!(png_data.len() > 50);
    }

    #[test]
    fn test_png_export_short_buffer() {
        let raster = Raster {
            width: 4,
            height: 4,
            format: PixelFormat::Rgba8,
            data: vec![0; 10],
        };
        assert!(encode_raster_to_png(&raster).is_err());
    }

    #[test]
    fn test_write_png_to_temp_dir() {
        let path = std::env::temp_dir().join(format!("inkscore_export_{}.png", std::process::id()));
        write_png(&Raster::blank(3, 3), &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[0..8], &PNG_MAGIC);
        let _ = std::fs::remove_file(&path);
    }
}
