use std::collections::HashMap;

use crate::compress::WordDictionary;

/// Names of multi-codepoint characters, such as emoji ZWJ sequences,
/// flags, and standardized variation sequences.
///
/// Besides the exact sequences it also knows emoji sequences with one or
/// more emoji variation selectors (`U+FE0F`) left out, which it maps back
/// to their fully-qualified form. Those never carry a name of their own.
#[derive(Debug, Clone, Default)]
pub struct SequenceTable {
    sequences: HashMap<String, String>,
    not_qualified: HashMap<String, String>,
    words: WordDictionary,
}

impl SequenceTable {
    pub fn new(
        sequences: HashMap<String, String>,
        not_qualified: HashMap<String, String>,
        words: WordDictionary,
    ) -> Self {
        Self {
            sequences,
            not_qualified,
            words,
        }
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn not_qualified_len(&self) -> usize {
        self.not_qualified.len()
    }

    /// Looks up the exact sequence only.
    pub fn qualified_name(&self, sequence: &str) -> Option<String> {
        self.sequences
            .get(sequence)
            .and_then(|compressed| self.words.expand(compressed))
    }

    /// Looks up the exact sequence, then its fully-qualified form.
    pub fn name(&self, sequence: &str) -> Option<String> {
        if let Some(compressed) = self.sequences.get(sequence) {
            return self.words.expand(compressed);
        }
        let qualified = self.not_qualified.get(sequence)?;
        self.qualified_name(qualified)
    }
}
