//! Glyph placement: the one rule that decides where a character sits on a
//! surface. The guide, the scoring reference, and the orientation grid are
//! all derived from the same [`Placement`], so their geometry cannot drift
//! apart.

use glam::Vec2;

/// Where the practice frame and the glyph inside it land on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Surface midpoint; frame and glyph are centered here.
    pub center: Vec2,
    /// Edge length of the practice frame square.
    pub frame_size: f32,
    /// Edge length of the glyph box inside the frame.
    pub glyph_size: f32,
}

impl Placement {
    /// Compute placement for a surface: the frame takes `frame_fraction` of
    /// the shorter dimension, the glyph fills `glyph_fraction` of the frame.
    pub fn compute(width: u32, height: u32, frame_fraction: f32, glyph_fraction: f32) -> Self {
        let w = width as f32;
        let h = height as f32;
        let frame_size = w.min(h) * frame_fraction;
        Self {
            center: Vec2::new(w * 0.5, h * 0.5),
            frame_size,
            glyph_size: frame_size * glyph_fraction,
        }
    }

    /// Top-left corner of the practice frame.
    pub fn frame_origin(&self) -> Vec2 {
        self.center - Vec2::splat(self.frame_size * 0.5)
    }

    /// Map a point in the glyph's unit square onto the surface.
    pub fn project(&self, p: Vec2) -> Vec2 {
        self.center + (p - Vec2::splat(0.5)) * self.glyph_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_on_square_surface() {
        let p = Placement::compute(200, 200, 0.75, 0.8);
        assert_eq!(p.center, Vec2::new(100.0, 100.0));
        assert_eq!(p.frame_size, 150.0);
        assert_eq!(p.glyph_size, 120.0);
        assert_eq!(p.frame_origin(), Vec2::new(25.0, 25.0));
    }

    #[test]
    fn shorter_dimension_sets_the_frame() {
        let wide = Placement::compute(300, 200, 0.75, 0.8);
        assert_eq!(wide.frame_size, 150.0);
        assert_eq!(wide.center, Vec2::new(150.0, 100.0));

        let tall = Placement::compute(200, 300, 0.75, 0.8);
        assert_eq!(tall.frame_size, 150.0);
    }

    #[test]
    fn project_maps_unit_square_around_center() {
        let p = Placement::compute(200, 200, 0.75, 0.8);
        assert_eq!(p.project(Vec2::new(0.5, 0.5)), Vec2::new(100.0, 100.0));
        assert_eq!(p.project(Vec2::new(0.0, 0.0)), Vec2::new(40.0, 40.0));
        assert_eq!(p.project(Vec2::new(1.0, 1.0)), Vec2::new(160.0, 160.0));
    }
}
