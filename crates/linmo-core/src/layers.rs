//! The drawing surface as separate layers: orientation grid, glyph ghost,
//! user ink, and the off-screen scoring reference. All four are rebuilt
//! together from one [`Placement`], so their geometry cannot disagree, and
//! they are flattened only for display. Scoring reads the ink layer alone.

use glam::Vec2;

use crate::brush::Brush;
use crate::config::TraceConfig;
use crate::geometry::Placement;
use crate::glyphs::Strokes;
use crate::raster::{Raster, Rgba8};

pub struct TraceSurface {
    placement: Placement,
    grid: Raster,
    guide: Raster,
    ink: Raster,
    reference: Raster,
    ink_brush: Brush,
}

impl TraceSurface {
    /// Build all layers for one character on a `width` × `height` surface.
    /// `strokes` is the glyph to trace; `None` (unknown character) leaves the
    /// ghost and the reference empty.
    pub fn render(
        width: u32,
        height: u32,
        config: &TraceConfig,
        strokes: Option<&Strokes>,
    ) -> Self {
        let placement = Placement::compute(
            width,
            height,
            config.frame_fraction,
            config.glyph_fraction,
        );

        let mut grid = Raster::new(width, height);
        draw_grid(&mut grid, &placement, config);

        let mut guide = Raster::new(width, height);
        let mut reference = Raster::new(width, height);
        if let Some(strokes) = strokes {
            let ghost = Brush::new(config.ink_width, config.guide_color);
            let solid = Brush::new(config.ink_width, Rgba8::BLACK);
            for stroke in strokes {
                let points: Vec<Vec2> = stroke
                    .iter()
                    .map(|p| placement.project(Vec2::new(p[0], p[1])))
                    .collect();
                ghost.stroke_polyline(&mut guide, &points);
                solid.stroke_polyline(&mut reference, &points);
            }
        }

        Self {
            placement,
            grid,
            guide,
            ink: Raster::new(width, height),
            reference,
            ink_brush: Brush::new(config.ink_width, config.ink_color),
        }
    }

    pub fn width(&self) -> u32 {
        self.ink.width()
    }

    pub fn height(&self) -> u32 {
        self.ink.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.ink.dimensions()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn grid(&self) -> &Raster {
        &self.grid
    }

    pub fn guide(&self) -> &Raster {
        &self.guide
    }

    pub fn ink(&self) -> &Raster {
        &self.ink
    }

    /// The opaque scoring raster. Never composited for display.
    pub fn reference(&self) -> &Raster {
        &self.reference
    }

    /// Stamp one ink segment from `a` to `b` in surface coordinates.
    pub fn stroke_ink(&mut self, a: Vec2, b: Vec2) {
        self.ink_brush.stroke_segment(&mut self.ink, a, b);
    }

    pub fn clear_ink(&mut self) {
        self.ink.clear();
    }

    /// Flatten grid, ghost and ink into `out` for display. `out` is resized
    /// when its dimensions differ.
    pub fn composite_into(&self, out: &mut Raster) {
        if out.dimensions() != self.ink.dimensions() {
            *out = Raster::new(self.ink.width(), self.ink.height());
        } else {
            out.clear();
        }
        out.blend_layer(&self.grid);
        out.blend_layer(&self.guide);
        out.blend_layer(&self.ink);
    }
}

fn draw_grid(raster: &mut Raster, placement: &Placement, config: &TraceConfig) {
    let brush = Brush::new(config.grid_width, config.grid_color);
    let origin = placement.frame_origin();
    let size = placement.frame_size;
    let tl = origin;
    let tr = origin + Vec2::new(size, 0.0);
    let bl = origin + Vec2::new(0.0, size);
    let br = origin + Vec2::new(size, size);
    // frame
    brush.stroke_segment(raster, tl, tr);
    brush.stroke_segment(raster, tr, br);
    brush.stroke_segment(raster, br, bl);
    brush.stroke_segment(raster, bl, tl);
    // diagonals
    brush.stroke_segment(raster, tl, br);
    brush.stroke_segment(raster, tr, bl);
    // midlines
    brush.stroke_segment(
        raster,
        origin + Vec2::new(0.0, size * 0.5),
        origin + Vec2::new(size, size * 0.5),
    );
    brush.stroke_segment(
        raster,
        origin + Vec2::new(size * 0.5, 0.0),
        origin + Vec2::new(size * 0.5, size),
    );
}
