//! Baked glyph library: characters as stroke polylines in the unit square.
//! Shapes come from JSON so fuller sets can ship separately from the binary;
//! a starter set of simple hanzi is built in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::glyph_data;

/// Stroke list for one character: polylines with points in `[0,1]²`,
/// y growing downward.
pub type Strokes = Vec<Vec<[f32; 2]>>;

/// A named set of baked glyphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphLibrary {
    /// Human-readable set name.
    pub name: String,
    /// Character → strokes.
    #[serde(default)]
    pub glyphs: HashMap<char, Strokes>,
}

impl GlyphLibrary {
    /// Parse a library from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in starter set of simple hanzi.
    pub fn basic() -> Self {
        let mut glyphs = HashMap::new();
        for (ch, strokes) in glyph_data::BASIC {
            glyphs.insert(*ch, strokes.iter().map(|s| s.to_vec()).collect());
        }
        Self {
            name: "basic".to_string(),
            glyphs,
        }
    }

    pub fn strokes(&self, ch: char) -> Option<&Strokes> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Merge another library in; the incoming set wins on conflicts.
    pub fn extend(&mut self, other: GlyphLibrary) {
        self.glyphs.extend(other.glyphs);
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
