use linmo_core::{
    Corpus, Feedback, GlyphLibrary, InputEvent, InputQueue, Raster, TraceConfig, TraceSession,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::browser_store::BrowserStore;

/// Runner that wires the tracing session to a canvas.
///
/// The session is headless; this struct owns the browser half: sizing the
/// canvas backing store to the device pixel ratio, translating client
/// coordinates into surface pixels, and blitting the composited frame.
/// Exported free functions reach it through `thread_local!` storage because
/// wasm-bindgen cannot export the struct directly.
pub struct SessionRunner {
    session: TraceSession<BrowserStore>,
    input: InputQueue,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    frame: Raster,
    device_ratio: f64,
    needs_present: bool,
}

impl SessionRunner {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let device_ratio = window.device_pixel_ratio();
        let (width, height) = backing_size(&canvas, device_ratio);
        canvas.set_width(width);
        canvas.set_height(height);
        canvas.style().set_property("touch-action", "none")?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = TraceConfig::default().with_pixel_scale(device_ratio as f32);
        let session = TraceSession::new(
            config,
            Corpus::heart_sutra(),
            GlyphLibrary::basic(),
            BrowserStore::new(),
            width,
            height,
        );

        Ok(Self {
            session,
            input: InputQueue::new(),
            canvas,
            ctx,
            frame: Raster::new(width, height),
            device_ratio,
            needs_present: true,
        })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Client coordinates to surface pixels, scaled by the device ratio.
    pub fn surface_point(&self, client_x: f64, client_y: f64) -> (f32, f32) {
        let rect = self.canvas.get_bounding_client_rect();
        let x = (client_x - rect.left()) * self.device_ratio;
        let y = (client_y - rect.top()) * self.device_ratio;
        (x as f32, y as f32)
    }

    /// Resizes the backing store to the element's current CSS size and
    /// queues the matching surface rebuild.
    pub fn handle_resize(&mut self) {
        let (width, height) = backing_size(&self.canvas, self.device_ratio);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.input.push(InputEvent::Resize { width, height });
    }

    /// Run one frame: drain queued events into the session, fire any due
    /// advance, repaint when something changed.
    pub fn tick(&mut self, now_ms: f64) {
        let had_input = !self.input.is_empty();
        for event in self.input.drain() {
            self.session.apply(event, now_ms);
        }
        let advanced = self.session.tick(now_ms);
        if had_input || advanced || self.needs_present {
            self.present();
            self.needs_present = false;
        }
    }

    /// Merges a glyph pack over the built-in set and re-renders.
    pub fn load_glyphs(&mut self, json: &str) -> Result<(), JsValue> {
        let pack =
            GlyphLibrary::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        log::info!("loaded glyph pack {} ({} glyphs)", pack.name, pack.len());
        let mut merged = GlyphLibrary::basic();
        merged.extend(pack);
        self.session.set_library(merged);
        self.needs_present = true;
        Ok(())
    }

    fn present(&mut self) {
        self.session.surface().composite_into(&mut self.frame);
        let (width, height) = self.frame.dimensions();
        match ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.frame.as_bytes()),
            width,
            height,
        ) {
            Ok(image) => {
                if let Err(err) = self.ctx.put_image_data(&image, 0.0, 0.0) {
                    log::warn!("could not present frame: {err:?}");
                }
            }
            Err(err) => log::warn!("could not build frame image: {err:?}"),
        }
    }

    // ---- State accessors for the page UI ----

    pub fn feedback_code(&self) -> u8 {
        match self.session.feedback() {
            Feedback::None => 0,
            Feedback::Success => 1,
            Feedback::Retry => 2,
        }
    }

    pub fn position(&self) -> u32 {
        (self.session.cursor() + 1) as u32
    }

    pub fn corpus_len(&self) -> u32 {
        self.session.corpus().len() as u32
    }

    pub fn corpus_title(&self) -> String {
        self.session.corpus().title().to_string()
    }

    pub fn current_char(&self) -> String {
        self.session.current_char().map(String::from).unwrap_or_default()
    }
}

fn backing_size(canvas: &HtmlCanvasElement, device_ratio: f64) -> (u32, u32) {
    let width = (canvas.client_width() as f64 * device_ratio).round().max(1.0) as u32;
    let height = (canvas.client_height() as f64 * device_ratio).round().max(1.0) as u32;
    (width, height)
}
