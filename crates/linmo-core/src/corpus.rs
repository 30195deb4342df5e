//! Practice texts and the cursor math over them.

/// Title shown over the copying surface for the built-in sutra corpus.
pub const HEART_SUTRA_TITLE: &str = "般若波罗蜜多心经";

/// The opening of the Heart Sutra, the text the copying ritual works through.
pub const HEART_SUTRA_TEXT: &str = "观自在菩萨行深般若波罗蜜多时照见五蕴皆空度一切苦厄舍利子色不异空空不异色色即是空空即是色受想行识亦复如是舍利子是诸法空相不生不灭不垢不净不增不减";

pub const PRACTICE_TITLE: &str = "基础练习";

/// Simple characters fully covered by the built-in glyph library.
pub const PRACTICE_TEXT: &str = "一二三十工土王口日中山川人大木";

/// An ordered, immutable sequence of characters to copy.
#[derive(Debug, Clone)]
pub struct Corpus {
    title: String,
    chars: Vec<char>,
}

impl Corpus {
    pub fn new(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            chars: text.chars().collect(),
        }
    }

    pub fn heart_sutra() -> Self {
        Self::new(HEART_SUTRA_TITLE, HEART_SUTRA_TEXT)
    }

    pub fn practice() -> Self {
        Self::new(PRACTICE_TITLE, PRACTICE_TEXT)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Largest valid index; 0 for an empty corpus.
    pub fn last_index(&self) -> usize {
        self.chars.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_sutra_shape() {
        let corpus = Corpus::heart_sutra();
        assert_eq!(corpus.len(), 72);
        assert_eq!(corpus.char_at(0), Some('观'));
        assert_eq!(corpus.char_at(72), None);
        assert_eq!(corpus.last_index(), 71);
    }

    #[test]
    fn practice_shape() {
        let corpus = Corpus::practice();
        assert_eq!(corpus.len(), 15);
        assert_eq!(corpus.char_at(14), Some('木'));
    }

    #[test]
    fn empty_corpus_is_harmless() {
        let corpus = Corpus::new("empty", "");
        assert!(corpus.is_empty());
        assert_eq!(corpus.char_at(0), None);
        assert_eq!(corpus.last_index(), 0);
    }
}
