//! Session tunables. The defaults are the tuned values of the copying
//! ritual; hosts mostly adjust widths for display scale and thresholds in
//! tests.

use crate::raster::Rgba8;

/// Everything adjustable about a tracing session.
#[derive(Debug, Clone, Copy)]
pub struct TraceConfig {
    /// Coverage needed for the silent check after each stroke.
    pub auto_threshold: f32,
    /// Coverage needed when the user explicitly asks to be checked. Kept at
    /// or below `auto_threshold`: an explicit request is graded leniently.
    pub manual_threshold: f32,
    /// Pause between success and moving to the next character.
    pub advance_delay_ms: f64,
    /// Ledger credit per completed character.
    pub credit_per_glyph: u64,
    /// Brush width for user ink, the ghost, and the reference.
    pub ink_width: f32,
    pub ink_color: Rgba8,
    /// Ghost tint for the guide glyph.
    pub guide_color: Rgba8,
    pub grid_color: Rgba8,
    pub grid_width: f32,
    /// Practice frame edge as a fraction of the shorter surface dimension.
    pub frame_fraction: f32,
    /// Glyph box edge as a fraction of the frame.
    pub glyph_fraction: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            auto_threshold: 0.25,
            manual_threshold: 0.12,
            advance_delay_ms: 1500.0,
            credit_per_glyph: 1,
            ink_width: 12.0,
            ink_color: Rgba8::opaque(0x2c, 0x2c, 0x2c),
            guide_color: Rgba8::black_alpha(38),
            grid_color: Rgba8::opaque(0xe5, 0xe5, 0xe5),
            grid_width: 1.0,
            frame_fraction: 0.75,
            glyph_fraction: 0.8,
        }
    }
}

impl TraceConfig {
    pub fn with_thresholds(mut self, auto: f32, manual: f32) -> Self {
        self.auto_threshold = auto;
        self.manual_threshold = manual;
        self
    }

    pub fn with_advance_delay_ms(mut self, delay_ms: f64) -> Self {
        self.advance_delay_ms = delay_ms;
        self
    }

    pub fn with_ink_width(mut self, width: f32) -> Self {
        self.ink_width = width;
        self
    }

    /// Scale brush and grid widths, for high-DPI surfaces.
    pub fn with_pixel_scale(mut self, scale: f32) -> Self {
        self.ink_width *= scale;
        self.grid_width *= scale;
        self
    }

    /// Clamp fields into usable ranges. The manual threshold is never allowed
    /// above the automatic one.
    pub fn sanitized(mut self) -> Self {
        self.auto_threshold = self.auto_threshold.clamp(0.0, 1.0);
        self.manual_threshold = self.manual_threshold.clamp(0.0, 1.0);
        if self.manual_threshold > self.auto_threshold {
            log::warn!(
                "manual threshold {} above auto threshold {}, clamping",
                self.manual_threshold,
                self.auto_threshold
            );
            self.manual_threshold = self.auto_threshold;
        }
        self.advance_delay_ms = self.advance_delay_ms.max(0.0);
        self.ink_width = self.ink_width.max(1.0);
        self.grid_width = self.grid_width.max(1.0);
        self.frame_fraction = self.frame_fraction.clamp(0.05, 1.0);
        self.glyph_fraction = self.glyph_fraction.clamp(0.05, 1.0);
        self
    }
}
