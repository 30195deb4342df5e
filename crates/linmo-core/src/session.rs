//! The tracing session: one character at a time, strokes inked onto the
//! surface, coverage checked against the reference, progress persisted
//! through the injected store.
//!
//! The session never reads a clock. Time enters as `now_ms` arguments on
//! [`TraceSession::apply`] and [`TraceSession::tick`], so every run of the
//! same event sequence lands in the same state.

use glam::Vec2;

use crate::config::TraceConfig;
use crate::corpus::Corpus;
use crate::glyphs::GlyphLibrary;
use crate::input::InputEvent;
use crate::layers::TraceSurface;
use crate::scorer;
use crate::store::{KeyValue, ProgressStore};

/// What the UI should show for the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    /// Coverage reached the active threshold.
    Success,
    /// An explicit check fell short.
    Retry,
}

/// Deadline for moving to the next character after a success. The session
/// holds at most one; scheduling over a live timer replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceTimer {
    pub fire_at_ms: f64,
}

/// Tracing state over a corpus, a glyph library, and a storage backend.
pub struct TraceSession<S: KeyValue> {
    config: TraceConfig,
    corpus: Corpus,
    library: GlyphLibrary,
    progress: ProgressStore<S>,
    surface: TraceSurface,
    cursor: usize,
    feedback: Feedback,
    drawing: bool,
    stroke_tail: Option<Vec2>,
    /// Whether the current character already earned its credit. Guards
    /// against a second award when the user keeps drawing after a success
    /// and passes the check again.
    credited: bool,
    advance: Option<AdvanceTimer>,
}

impl<S: KeyValue> TraceSession<S> {
    /// Opens a session on a surface of `width` by `height` pixels, resuming
    /// at the position saved in `store`.
    pub fn new(
        config: TraceConfig,
        corpus: Corpus,
        library: GlyphLibrary,
        store: S,
        width: u32,
        height: u32,
    ) -> Self {
        let config = config.sanitized();
        let progress = ProgressStore::new(store);
        let cursor = progress.load_cursor(corpus.len());
        let surface = render_surface(&config, &corpus, &library, cursor, width, height);
        log::info!(
            "tracing {} ({} characters), resuming at {}",
            corpus.title(),
            corpus.len(),
            cursor + 1
        );
        Self {
            config,
            corpus,
            library,
            progress,
            surface,
            cursor,
            feedback: Feedback::None,
            drawing: false,
            stroke_tail: None,
            credited: false,
            advance: None,
        }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_char(&self) -> Option<char> {
        self.corpus.char_at(self.cursor)
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn pending_advance(&self) -> Option<AdvanceTimer> {
        self.advance
    }

    pub fn surface(&self) -> &TraceSurface {
        &self.surface
    }

    pub fn progress(&self) -> &ProgressStore<S> {
        &self.progress
    }

    /// Fraction of the reference currently covered by ink.
    pub fn coverage(&self) -> f32 {
        scorer::coverage(self.surface.ink(), self.surface.reference())
    }

    /// Applies one input event. `now_ms` anchors any deadline the event
    /// schedules.
    pub fn apply(&mut self, event: InputEvent, now_ms: f64) {
        match event {
            InputEvent::PointerDown { x, y } => self.begin_stroke(x, y),
            InputEvent::PointerMove { x, y } => self.extend_stroke(x, y),
            InputEvent::PointerUp => self.end_stroke(now_ms),
            InputEvent::Validate => self.validate(now_ms),
            InputEvent::Clear => self.clear(),
            InputEvent::Skip => self.skip(),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Fires the advance deadline once it is due. Returns whether the
    /// cursor moved, so hosts know to repaint.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let due = match self.advance {
            Some(timer) => now_ms >= timer.fire_at_ms,
            None => return false,
        };
        if !due {
            return false;
        }
        self.advance = None;
        if self.cursor < self.corpus.last_index() {
            self.set_cursor(self.cursor + 1);
            true
        } else {
            false
        }
    }

    /// Starts a stroke. Records the anchor point without painting; ink
    /// appears once the pointer moves.
    fn begin_stroke(&mut self, x: f32, y: f32) {
        self.feedback = Feedback::None;
        self.drawing = true;
        self.stroke_tail = Some(Vec2::new(x, y));
    }

    fn extend_stroke(&mut self, x: f32, y: f32) {
        if !self.drawing {
            return;
        }
        let point = Vec2::new(x, y);
        if let Some(tail) = self.stroke_tail {
            self.surface.stroke_ink(tail, point);
        }
        self.stroke_tail = Some(point);
    }

    /// Ends the stroke and runs the automatic check. A miss stays silent;
    /// the user just keeps tracing.
    fn end_stroke(&mut self, now_ms: f64) {
        if !self.drawing {
            return;
        }
        self.drawing = false;
        self.stroke_tail = None;
        if self.feedback == Feedback::Success {
            return;
        }
        let score = self.coverage();
        log::debug!("stroke ended, coverage {score:.3}");
        if score >= self.config.auto_threshold {
            self.accept(now_ms);
        }
    }

    /// Explicit check at the lenient threshold. A miss shows retry
    /// feedback; a repeat request during a success window does nothing.
    fn validate(&mut self, now_ms: f64) {
        if self.feedback == Feedback::Success {
            return;
        }
        let score = self.coverage();
        log::debug!("check requested, coverage {score:.3}");
        if score >= self.config.manual_threshold {
            self.accept(now_ms);
        } else {
            self.feedback = Feedback::Retry;
        }
    }

    /// Wipes the ink and any pending advance so the character can be
    /// traced fresh. Credit already earned for it stays earned.
    fn clear(&mut self) {
        self.advance = None;
        self.surface.clear_ink();
        self.feedback = Feedback::None;
        self.drawing = false;
        self.stroke_tail = None;
    }

    /// Moves on without credit. At the last character this does nothing.
    fn skip(&mut self) {
        let next = (self.cursor + 1).min(self.corpus.last_index());
        if next != self.cursor {
            self.set_cursor(next);
        }
    }

    /// Rebuilds every layer at the new size. Ink in progress is lost, but
    /// feedback and a pending advance survive.
    fn resize(&mut self, width: u32, height: u32) {
        self.surface = render_surface(
            &self.config,
            &self.corpus,
            &self.library,
            self.cursor,
            width,
            height,
        );
        self.drawing = false;
        self.stroke_tail = None;
    }

    /// Replaces the glyph library and re-renders the current character.
    pub fn set_library(&mut self, library: GlyphLibrary) {
        self.library = library;
        self.surface = render_surface(
            &self.config,
            &self.corpus,
            &self.library,
            self.cursor,
            self.surface.width(),
            self.surface.height(),
        );
        self.drawing = false;
        self.stroke_tail = None;
    }

    fn accept(&mut self, now_ms: f64) {
        self.feedback = Feedback::Success;
        if !self.credited {
            self.progress.award_credit(self.config.credit_per_glyph);
            self.credited = true;
        }
        self.advance = Some(AdvanceTimer {
            fire_at_ms: now_ms + self.config.advance_delay_ms,
        });
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.advance = None;
        self.credited = false;
        self.feedback = Feedback::None;
        self.drawing = false;
        self.stroke_tail = None;
        self.progress.save_cursor(index);
        self.surface = render_surface(
            &self.config,
            &self.corpus,
            &self.library,
            self.cursor,
            self.surface.width(),
            self.surface.height(),
        );
        log::debug!("now at character {} of {}", index + 1, self.corpus.len());
    }
}

fn render_surface(
    config: &TraceConfig,
    corpus: &Corpus,
    library: &GlyphLibrary,
    cursor: usize,
    width: u32,
    height: u32,
) -> TraceSurface {
    let strokes = corpus.char_at(cursor).and_then(|ch| library.strokes(ch));
    TraceSurface::render(width, height, config, strokes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::store::{MemoryStore, CURSOR_KEY};

    const W: u32 = 120;
    const H: u32 = 120;

    fn session_with(store: MemoryStore) -> TraceSession<MemoryStore> {
        TraceSession::new(
            TraceConfig::default(),
            Corpus::practice(),
            GlyphLibrary::basic(),
            store,
            W,
            H,
        )
    }

    fn trace_current_glyph(session: &mut TraceSession<MemoryStore>, now_ms: f64) {
        let ch = session.current_char().unwrap();
        let library = GlyphLibrary::basic();
        let strokes = library.strokes(ch).unwrap().clone();
        let placement = session.surface().placement();
        for stroke in &strokes {
            let points: Vec<Vec2> = stroke
                .iter()
                .map(|p| placement.project(Vec2::new(p[0], p[1])))
                .collect();
            session.apply(
                InputEvent::PointerDown {
                    x: points[0].x,
                    y: points[0].y,
                },
                now_ms,
            );
            for p in &points[1..] {
                session.apply(InputEvent::PointerMove { x: p.x, y: p.y }, now_ms);
            }
            session.apply(InputEvent::PointerUp, now_ms);
        }
    }

    #[test]
    fn constructor_sanitizes_the_config() {
        let config = TraceConfig::default().with_thresholds(0.2, 0.5);
        let session = TraceSession::new(
            config,
            Corpus::practice(),
            GlyphLibrary::basic(),
            MemoryStore::new(),
            W,
            H,
        );
        assert_eq!(session.config().auto_threshold, 0.2);
        assert_eq!(session.config().manual_threshold, 0.2);
    }

    #[test]
    fn cursor_restores_from_the_store() {
        let mut store = MemoryStore::new();
        store.set(CURSOR_KEY, "3");
        let session = session_with(store);
        assert_eq!(session.cursor(), 3);
        assert_eq!(session.current_char(), Corpus::practice().char_at(3));
    }

    #[test]
    fn skip_stops_at_the_last_character() {
        let mut store = MemoryStore::new();
        let last = Corpus::practice().last_index();
        store.set(CURSOR_KEY, &last.to_string());
        let mut session = session_with(store);
        session.apply(InputEvent::Skip, 0.0);
        assert_eq!(session.cursor(), last);
    }

    #[test]
    fn clear_cancels_a_pending_advance() {
        let mut session = session_with(MemoryStore::new());
        trace_current_glyph(&mut session, 1_000.0);
        assert_eq!(session.feedback(), Feedback::Success);
        let timer = session.pending_advance().unwrap();
        assert_eq!(timer.fire_at_ms, 2_500.0);

        session.apply(InputEvent::Clear, 1_200.0);
        assert_eq!(session.feedback(), Feedback::None);
        assert!(session.pending_advance().is_none());
        assert!(session.surface().ink().pixels().iter().all(|p| p.a == 0));
        assert!(!session.tick(10_000.0));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn pointer_up_without_a_stroke_is_ignored() {
        let mut session = session_with(MemoryStore::new());
        session.apply(InputEvent::PointerUp, 0.0);
        session.apply(InputEvent::PointerMove { x: 60.0, y: 60.0 }, 0.0);
        assert_eq!(session.feedback(), Feedback::None);
        assert!(session.surface().ink().pixels().iter().all(|p| p.a == 0));
    }
}
