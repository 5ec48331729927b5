//! Pixel-distance similarity between two rasters
//!
//! `1 - mean(|a - b|)` over intensities normalized to [0, 1]. Missing ink
//! and stray ink cost the same, and nothing about edges or stroke topology
//! is taken into account.

use crate::error::CompareError;
use crate::raster::{Raster, BACKGROUND};

/// Similarity in [0, 1] between two rasters of the same size.
///
/// The result is symmetric in its arguments.
pub fn similarity(reference: &Raster, drawn: &Raster) -> Result<f64, CompareError> {
    if reference.width != drawn.width || reference.height != drawn.height {
        return Err(CompareError::DimensionMismatch {
            left_width: reference.width,
            left_height: reference.height,
            right_width: drawn.width,
            right_height: drawn.height,
        });
    }
    if reference.pixel_count() == 0 {
        return Err(CompareError::EmptyRaster);
    }

    let left = reference.intensities()?;
    let right = drawn.intensities()?;

    let total: u64 = left
        .iter()
        .zip(right.iter())
        .map(|(&a, &b)| a.abs_diff(b) as u64)
        .sum();

    let mean_diff = total as f64 / (BACKGROUND as f64 * left.len() as f64);
    let value = 1.0 - mean_diff;

    log::trace!(
        "similarity: {}x{} mean_diff={:.6} similarity={:.6}",
        reference.width,
        reference.height,
        mean_diff,
        value
    );

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{PixelFormat, INK};
    use proptest::prelude::*;

    fn gray(width: u32, height: u32, data: Vec<u8>) -> Raster {
        Raster::from_raw(width, height, PixelFormat::Gray8, data).unwrap()
    }

    #[test]
    fn test_identical_rasters_are_fully_similar() {
        let a = gray(2, 2, vec![0, 255, 128, 7]);
        assert_eq!(similarity(&a, &a.clone()).unwrap(), 1.0);
    }

    #[test]
    fn test_black_vs_white_is_zero() {
        let black = gray(2, 2, vec![INK; 4]);
        let white = Raster::blank(2, 2);
        assert_eq!(similarity(&black, &white).unwrap(), 0.0);
    }

    #[test]
    fn test_blank_drawing_scores_one_minus_coverage() {
        let reference = gray(4, 1, vec![0, 255, 255, 255]);
        let blank = Raster::blank(4, 1);
        let coverage = reference.ink_coverage().unwrap();
        let value = similarity(&reference, &blank).unwrap();
        assert!((value - (1.0 - coverage)).abs() < 1e-12);
        assert!((value - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_colour_and_gray_compare_equal() {
        let rgb = Raster::from_raw(1, 2, PixelFormat::Rgb8, vec![0, 0, 0, 255, 255, 255]).unwrap();
        let gray = gray(1, 2, vec![0, 255]);
        assert_eq!(similarity(&rgb, &gray).unwrap(), 1.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Raster::blank(2, 2);
        let b = Raster::blank(2, 3);
        assert!(matches!(
            similarity(&a, &b),
            Err(CompareError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_rasters_rejected() {
        let a = Raster::blank(0, 0);
        assert_eq!(similarity(&a, &a.clone()), Err(CompareError::EmptyRaster));
    }

    fn raster_pair() -> impl Strategy<Value = (Raster, Raster)> {
        (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
            let n = (w * h) as usize;
            (
                proptest::collection::vec(any::<u8>(), n),
                proptest::collection::vec(any::<u8>(), n),
            )
                .prop_map(move |(a, b)| (gray(w, h, a), gray(w, h, b)))
        })
    }

    proptest! {
        #[test]
        fn prop_similarity_is_symmetric((a, b) in raster_pair()) {
            prop_assert_eq!(similarity(&a, &b).unwrap(), similarity(&b, &a).unwrap());
        }

        #[test]
        fn prop_similarity_in_unit_range((a, b) in raster_pair()) {
            let value = similarity(&a, &b).unwrap();
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }
}
