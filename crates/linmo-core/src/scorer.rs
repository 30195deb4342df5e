//! Coverage scoring: the fraction of the reference glyph the user actually
//! inked over. Walks every pixel, no sampling, so identical rasters always
//! produce identical ratios.

use crate::raster::{Raster, Rgba8};

/// Alpha above which a reference pixel counts as glyph ink.
pub const REFERENCE_ALPHA_FLOOR: u8 = 128;
/// Alpha above which a drawn pixel counts as ink at all.
pub const INK_ALPHA_FLOOR: u8 = 180;
/// Red channel below which a drawn pixel counts as ink. Grid lines are light
/// gray (high red) and the ghost is translucent (low alpha), so neither
/// passes even on a flattened raster.
pub const INK_RED_CEILING: u8 = 80;

/// Whether a reference-layer pixel is glyph ink.
pub fn is_reference_pixel(p: Rgba8) -> bool {
    p.a > REFERENCE_ALPHA_FLOOR
}

/// Whether a drawn pixel is user ink: opaque and dark.
pub fn is_ink_pixel(p: Rgba8) -> bool {
    p.a > INK_ALPHA_FLOOR && p.r < INK_RED_CEILING
}

/// Fraction of reference pixels covered by ink, in `[0, 1]`. An empty
/// reference scores 0. The two rasters must share dimensions; the surface
/// rebuilds them together, so a mismatch cannot occur in normal use.
pub fn coverage(ink: &Raster, reference: &Raster) -> f32 {
    debug_assert_eq!(ink.dimensions(), reference.dimensions());
    let mut reference_pixels = 0u32;
    let mut covered = 0u32;
    for (ink_px, ref_px) in ink.pixels().iter().zip(reference.pixels()) {
        if is_reference_pixel(*ref_px) {
            reference_pixels += 1;
            if is_ink_pixel(*ink_px) {
                covered += 1;
            }
        }
    }
    if reference_pixels == 0 {
        0.0
    } else {
        covered as f32 / reference_pixels as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(width: u32, inked: u32, color: Rgba8) -> Raster {
        let mut raster = Raster::new(width, 1);
        for x in 0..inked {
            raster.put(x, 0, color);
        }
        raster
    }

    #[test]
    fn identical_rasters_score_one() {
        let reference = bar(50, 50, Rgba8::BLACK);
        assert_eq!(coverage(&reference, &reference), 1.0);
    }

    #[test]
    fn blank_ink_scores_zero() {
        let reference = bar(50, 50, Rgba8::BLACK);
        let ink = Raster::new(50, 1);
        assert_eq!(coverage(&ink, &reference), 0.0);
    }

    #[test]
    fn empty_reference_scores_zero() {
        let reference = Raster::new(50, 1);
        let ink = bar(50, 50, Rgba8::BLACK);
        assert_eq!(coverage(&ink, &reference), 0.0);
    }

    #[test]
    fn exact_quarter() {
        let reference = bar(100, 100, Rgba8::BLACK);
        let ink = bar(100, 25, Rgba8::opaque(0x2c, 0x2c, 0x2c));
        assert_eq!(coverage(&ink, &reference), 0.25);
    }

    #[test]
    fn ghost_and_grid_pixels_are_not_ink() {
        assert!(!is_ink_pixel(Rgba8::black_alpha(38)));
        assert!(!is_ink_pixel(Rgba8::opaque(0xe5, 0xe5, 0xe5)));
        assert!(is_ink_pixel(Rgba8::opaque(0x2c, 0x2c, 0x2c)));
        assert!(is_ink_pixel(Rgba8::BLACK));
    }

    #[test]
    fn faint_reference_pixels_do_not_count() {
        let reference = bar(10, 10, Rgba8::black_alpha(100));
        let ink = bar(10, 10, Rgba8::BLACK);
        assert_eq!(coverage(&ink, &reference), 0.0);
    }

    #[test]
    fn more_ink_never_lowers_the_score() {
        let reference = bar(100, 100, Rgba8::BLACK);
        let mut ink = Raster::new(100, 1);
        let mut last = 0.0;
        for x in 0..100 {
            ink.put(x, 0, Rgba8::BLACK);
            let score = coverage(&ink, &reference);
            assert!(score >= last);
            last = score;
        }
        assert_eq!(last, 1.0);
    }
}
