/// The word list that compressed names refer into.
///
/// Compressed names store frequent words ("LETTER", "CAPITAL", ...) as
/// single scalars at or above `replace_base`; the scalar's distance from
/// `replace_base` is the index of the word in the dictionary. Everything
/// below `replace_base` is literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDictionary {
    words: Vec<String>,
    replace_base: u32,
}

impl WordDictionary {
    pub fn new(words: Vec<String>, replace_base: u32) -> Self {
        Self {
            words,
            replace_base,
        }
    }

    pub fn replace_base(&self) -> u32 {
        self.replace_base
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Expands a compressed name, replacing each word token by its word
    /// followed by a space and trimming the trailing space at the end.
    ///
    /// Returns `None` if a token points past the end of the dictionary.
    pub fn expand(&self, compressed: &str) -> Option<String> {
        let mut name = String::with_capacity(compressed.len() * 4);
        for c in compressed.chars() {
            let value = u32::from(c);
            if value < self.replace_base {
                name.push(c);
                continue;
            }
            let Some(word) = self.words.get((value - self.replace_base) as usize) else {
                tracing::debug!(
                    token = value,
                    replace_base = self.replace_base,
                    words = self.words.len(),
                    "compressed name refers past the word dictionary"
                );
                return None;
            };
            name.push_str(word);
            name.push(' ');
        }
        let trimmed = name.trim_end().len();
        name.truncate(trimmed);
        Some(name)
    }
}
