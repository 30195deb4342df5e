pub mod brush;
pub mod config;
pub mod corpus;
pub mod geometry;
pub mod glyphs;
pub mod input;
pub mod layers;
pub mod raster;
pub mod scorer;
pub mod session;
pub mod store;

mod glyph_data;

// Re-export key types at crate root for convenience
pub use brush::Brush;
pub use config::TraceConfig;
pub use corpus::{Corpus, HEART_SUTRA_TEXT, HEART_SUTRA_TITLE, PRACTICE_TEXT, PRACTICE_TITLE};
pub use geometry::Placement;
pub use glyphs::{GlyphLibrary, Strokes};
pub use input::{InputEvent, InputQueue};
pub use layers::TraceSurface;
pub use raster::{Raster, Rgba8};
pub use scorer::coverage;
pub use session::{AdvanceTimer, Feedback, TraceSession};
pub use store::{KeyValue, MemoryStore, Profile, ProgressStore, CURSOR_KEY, PROFILE_KEY};
