//! Polyline rasterization. Segments are stamped as capsules: every pixel
//! whose center lies within half the brush width of the segment gets painted.
//! That gives round caps and round joins with no path tessellation, and the
//! same stamping serves user ink, the glyph ghost, and the scoring reference.

use glam::Vec2;

use crate::raster::{Raster, Rgba8};

/// A fixed-width round brush.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    pub width: f32,
    pub color: Rgba8,
}

impl Brush {
    pub fn new(width: f32, color: Rgba8) -> Self {
        Self { width, color }
    }

    /// Stamp one segment. A zero-length segment paints a round dot.
    pub fn stroke_segment(&self, raster: &mut Raster, a: Vec2, b: Vec2) {
        let radius = self.width * 0.5;
        let r2 = radius * radius;
        let lo = a.min(b) - Vec2::splat(radius + 1.0);
        let hi = a.max(b) + Vec2::splat(radius + 1.0);
        let x0 = lo.x.floor().max(0.0) as u32;
        let y0 = lo.y.floor().max(0.0) as u32;
        let x1 = (hi.x.ceil().max(0.0) as u32).min(raster.width());
        let y1 = (hi.y.ceil().max(0.0) as u32).min(raster.height());
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if segment_distance_sq(center, a, b) <= r2 {
                    raster.put(x, y, self.color);
                }
            }
        }
    }

    /// Stamp a whole polyline. A single point becomes a dot.
    pub fn stroke_polyline(&self, raster: &mut Raster, points: &[Vec2]) {
        match points {
            [] => {}
            [p] => self.stroke_segment(raster, *p, *p),
            _ => {
                for pair in points.windows(2) {
                    self.stroke_segment(raster, pair[0], pair[1]);
                }
            }
        }
    }
}

/// Squared distance from `p` to the segment `ab`.
fn segment_distance_sq(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_squared(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inked(raster: &Raster) -> usize {
        raster.pixels().iter().filter(|p| p.a > 0).count()
    }

    #[test]
    fn dot_paints_a_disc() {
        let mut raster = Raster::new(20, 20);
        let brush = Brush::new(6.0, Rgba8::BLACK);
        brush.stroke_segment(&mut raster, Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        assert_eq!(raster.get(9, 9), Some(Rgba8::BLACK));
        assert_eq!(raster.get(10, 12), Some(Rgba8::BLACK));
        assert_eq!(raster.get(10, 14), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn segment_covers_its_middle_and_caps() {
        let mut raster = Raster::new(24, 20);
        let brush = Brush::new(4.0, Rgba8::BLACK);
        brush.stroke_segment(&mut raster, Vec2::new(5.0, 10.0), Vec2::new(15.0, 10.0));
        // on the spine
        assert_eq!(raster.get(10, 9), Some(Rgba8::BLACK));
        // round cap reaches just past the endpoint
        assert_eq!(raster.get(16, 9), Some(Rgba8::BLACK));
        assert_eq!(raster.get(18, 9), Some(Rgba8::TRANSPARENT));
        // but not sideways beyond the radius
        assert_eq!(raster.get(10, 13), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn corner_join_leaves_no_gap() {
        let mut raster = Raster::new(24, 24);
        let brush = Brush::new(4.0, Rgba8::BLACK);
        let points = [
            Vec2::new(5.0, 5.0),
            Vec2::new(15.0, 5.0),
            Vec2::new(15.0, 15.0),
        ];
        brush.stroke_polyline(&mut raster, &points);
        assert_eq!(raster.get(15, 5), Some(Rgba8::BLACK));
        assert_eq!(raster.get(14, 6), Some(Rgba8::BLACK));
    }

    #[test]
    fn clipping_at_the_edges_is_quiet() {
        let mut raster = Raster::new(10, 10);
        let brush = Brush::new(8.0, Rgba8::BLACK);
        brush.stroke_segment(&mut raster, Vec2::new(-20.0, 5.0), Vec2::new(30.0, 5.0));
        assert!(inked(&raster) > 0);
        brush.stroke_segment(&mut raster, Vec2::new(-50.0, -50.0), Vec2::new(-40.0, -40.0));
    }

    #[test]
    fn empty_polyline_paints_nothing() {
        let mut raster = Raster::new(10, 10);
        let brush = Brush::new(4.0, Rgba8::BLACK);
        brush.stroke_polyline(&mut raster, &[]);
        assert_eq!(inked(&raster), 0);
    }
}
