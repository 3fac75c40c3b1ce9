use std::collections::HashMap;

use crate::aliases::Aliases;
use crate::character::Subject;
use crate::compress::WordDictionary;
use crate::synth::{Jamo, RangeTable};

/// Names of single codepoints: the compressed name list, the formal
/// aliases, and the data behind the algorithmically-named blocks.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<String, String>,
    words: WordDictionary,
    aliases: HashMap<String, Aliases>,
    ranges: RangeTable,
    jamo: Jamo,
}

impl NameTable {
    pub fn new(
        names: HashMap<String, String>,
        words: WordDictionary,
        aliases: HashMap<String, Aliases>,
        ranges: RangeTable,
        jamo: Jamo,
    ) -> Self {
        Self {
            names,
            words,
            aliases,
            ranges,
            jamo,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }

    pub fn jamo(&self) -> &Jamo {
        &self.jamo
    }

    /// The listed name if there is one, otherwise a synthesized name for
    /// single codepoints in an ideograph-style range or the Hangul block.
    pub(crate) fn base_name(&self, subject: &Subject<'_>) -> Option<String> {
        if let Some(compressed) = subject.key().and_then(|key| self.names.get(key)) {
            return self.words.expand(compressed);
        }
        let codepoint = subject.codepoint()?;
        self.ranges
            .name(codepoint)
            .or_else(|| self.jamo.hangul_name(codepoint))
    }

    pub(crate) fn aliases(&self, subject: &Subject<'_>) -> Option<&Aliases> {
        self.aliases.get(subject.key()?)
    }
}
