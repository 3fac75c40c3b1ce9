//! Resolves Unicode codepoints and codepoint sequences to the names the
//! [Unicode Character Database](https://www.unicode.org/reports/tr44/)
//! assigns them, with fallbacks for everything that has no name.
//!
//! [`NameDatabase`] is the main type in this library. Load one from the
//! name tables once, then ask it about characters as often as you like from
//! as many threads as you like; it never changes after construction.
//!
//! ```rust,ignore
//! let db = NameDatabase::load(&DataConfig::from_file("unicode-names.toml")?)?;
//! assert_eq!(db.base_name("A").as_deref(), Some("LATIN CAPITAL LETTER A"));
//! assert_eq!(db.readable_name(0x0000_u32).as_deref(), Some("NULL"));
//! assert_eq!(db.label(0x0000_u32).as_deref(), Some("<control-0000>"));
//! assert_eq!(db.name("\u{1F1FA}\u{1F1F3}").as_deref(), Some("FLAG: UNITED NATIONS"));
//! ```
//!
//! # Which name?
//!
//! Unicode has more than one notion of a character's name, and this
//! library exposes each of them separately:
//!
//! - [`NameDatabase::base_name`] is the formal `Name` property. It comes
//!   either from the name list or, for the big ideograph-style blocks and
//!   the Hangul syllables, from the algorithms in section 4.8 of the
//!   Unicode Standard. Many codepoints, such as the C0 controls, have none.
//!
//! - [`NameDatabase::correct_name`] replaces the formal name with its most
//!   recent correction alias, because formal names can never change even
//!   when they turn out to be wrong (`U+01A2` is formally `LATIN CAPITAL
//!   LETTER OI`, but is actually a GHA).
//!
//! - [`NameDatabase::label`] is the generic `<type-hex>` code point label
//!   from section 4.8, for controls, private use, surrogates,
//!   noncharacters, and reserved codepoints.
//!
//! - [`NameDatabase::readable_name`] picks the most helpful of the above
//!   for one codepoint: the corrected name, then the best alias, then the
//!   label.
//!
//! - [`NameDatabase::sequence_name`] names characters that are made of
//!   several codepoints, such as flags and emoji ZWJ sequences, including
//!   emoji that omit some of their `U+FE0F` variation selectors.
//!
//! - [`NameDatabase::name`] is what most callers want: the sequence name
//!   if the text is a named sequence, otherwise the readable name.
//!
//! # Input
//!
//! Every operation takes anything convertible into a [`Character`]: a
//! `u32` codepoint, a `char`, or a `&str`. Text holding more than one
//! scalar value is a sequence, which only the sequence operations (and
//! [`NameDatabase::name`]) can name. Surrogate codepoints can only be
//! passed as integers, since Rust strings cannot hold them.
//!
//! Invalid input (an empty string, an integer beyond `U+10FFFF`) is not an
//! error; like an unnamed codepoint it just yields `None`.
//!
//! # Data
//!
//! The tables are not part of this crate. They are generated from the
//! Unicode data files into three JSON documents (types, names, and
//! sequences), described along with their loading in [`DataConfig`] and
//! [`NameDatabase::from_json_str`]. Missing or damaged entries make lookups
//! return `None`; they never cause a panic.

use std::borrow::Cow;

mod aliases;
mod character;
mod classify;
mod compress;
mod config;
mod error;
mod load;
mod names;
mod sequence;
mod synth;

pub use aliases::{AliasKind, Aliases};
pub use character::{Character, MAX_CODEPOINT};
pub use classify::{RESERVED, TrieNode, TypeTrie};
pub use compress::WordDictionary;
pub use config::{DataConfig, OverlapPolicy};
pub use error::{Document, LoadError};
pub use names::NameTable;
pub use sequence::SequenceTable;
pub use synth::{HANGUL_END, HANGUL_START, Jamo, RangeTable, codepoint_hex};

use character::Subject;

/// Every table needed to name characters, and the operations that do so.
///
/// A `NameDatabase` is immutable once built. All operations are pure
/// functions of their input and the tables, so a single instance can be
/// shared between threads (for example behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct NameDatabase {
    types: TypeTrie,
    names: NameTable,
    sequences: SequenceTable,
}

impl NameDatabase {
    /// Assembles a database from tables that are already built.
    ///
    /// This performs none of the checks done when loading from JSON, so it
    /// is mostly useful for small hand-made tables.
    pub fn from_parts(types: TypeTrie, names: NameTable, sequences: SequenceTable) -> Self {
        NameDatabase {
            types,
            names,
            sequences,
        }
    }

    pub fn types(&self) -> &TypeTrie {
        &self.types
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn sequences(&self) -> &SequenceTable {
        &self.sequences
    }

    /// Returns the formal name of a single codepoint.
    ///
    /// Text with more than one scalar only matches if the name list
    /// happens to contain that exact text.
    pub fn base_name<'a>(&self, character: impl Into<Character<'a>>) -> Option<String> {
        let subject = Subject::new(character.into())?;
        self.names.base_name(&subject)
    }

    /// Returns the latest correction alias if the character has one, and
    /// otherwise its [base name](Self::base_name).
    pub fn correct_name<'a>(&self, character: impl Into<Character<'a>>) -> Option<Cow<'_, str>> {
        let subject = Subject::new(character.into())?;
        self.correct_name_of(&subject)
    }

    /// Returns every formal alias of the character, or `None` if it has
    /// none at all.
    pub fn aliases<'a>(&self, character: impl Into<Character<'a>>) -> Option<&Aliases> {
        let subject = Subject::new(character.into())?;
        self.names.aliases(&subject)
    }

    /// Returns the basic type of the character: one of "Graphic", "Format",
    /// "Control", "Private-use", "Surrogate", "Noncharacter", or "Reserved"
    /// (as named by the loaded tables).
    ///
    /// Text holding a sequence is classified by its first scalar.
    pub fn char_type<'a>(&self, character: impl Into<Character<'a>>) -> Option<&str> {
        let subject = Subject::new(character.into())?;
        Some(self.types.classify(subject.first_codepoint()))
    }

    /// Returns the code point label, such as `<control-0009>` or
    /// `<noncharacter-FFFFF>`, for single codepoints whose type is neither
    /// "Graphic" nor "Format".
    pub fn label<'a>(&self, character: impl Into<Character<'a>>) -> Option<String> {
        let subject = Subject::new(character.into())?;
        self.label_of(&subject)
    }

    /// Returns the most readable name of a single codepoint: its corrected
    /// name, else its best alias, else its label.
    ///
    /// Aliases are ranked control, figment, alternate, abbreviation.
    pub fn readable_name<'a>(&self, character: impl Into<Character<'a>>) -> Option<Cow<'_, str>> {
        let subject = Subject::new(character.into())?;
        self.readable_name_of(&subject)
    }

    /// Returns the name of a codepoint sequence, also recognizing emoji
    /// sequences that leave out some of their variation selectors.
    pub fn sequence_name(&self, sequence: &str) -> Option<String> {
        if sequence.is_empty() {
            return None;
        }
        self.sequences.name(sequence)
    }

    /// Like [`Self::sequence_name`], but only for fully-qualified
    /// sequences.
    pub fn qualified_sequence_name(&self, sequence: &str) -> Option<String> {
        if sequence.is_empty() {
            return None;
        }
        self.sequences.qualified_name(sequence)
    }

    /// Returns the best name for a character of one or more codepoints:
    /// its [sequence name](Self::sequence_name) if it has one, and
    /// otherwise its [readable name](Self::readable_name).
    pub fn name<'a>(&self, character: impl Into<Character<'a>>) -> Option<Cow<'_, str>> {
        let subject = Subject::new(character.into())?;
        if let Some(name) = subject.key().and_then(|key| self.sequences.name(key)) {
            return Some(Cow::Owned(name));
        }
        self.readable_name_of(&subject)
    }

    fn correct_name_of(&self, subject: &Subject<'_>) -> Option<Cow<'_, str>> {
        if let Some(correction) = self.names.aliases(subject).and_then(Aliases::correction) {
            return Some(Cow::Borrowed(correction));
        }
        self.names.base_name(subject).map(Cow::Owned)
    }

    fn label_of(&self, subject: &Subject<'_>) -> Option<String> {
        let codepoint = subject.codepoint()?;
        let char_type = self.types.classify(codepoint);
        // These always have a name, or are deliberately left nameless.
        if matches!(char_type, "Graphic" | "Format") {
            return None;
        }
        Some(format!(
            "<{}-{}>",
            char_type.to_lowercase(),
            codepoint_hex(codepoint)
        ))
    }

    fn readable_name_of(&self, subject: &Subject<'_>) -> Option<Cow<'_, str>> {
        if let Some(name) = self.correct_name_of(subject).filter(|name| !name.is_empty()) {
            return Some(name);
        }
        if let Some(alias) = self.names.aliases(subject).and_then(Aliases::readable) {
            return Some(Cow::Borrowed(alias));
        }
        self.label_of(subject).map(Cow::Owned)
    }
}

#[cfg(test)]
pub(crate) mod test_tables;
