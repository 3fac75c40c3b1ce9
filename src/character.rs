use u8char::u8char;

/// The highest codepoint Unicode will ever assign.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Anything a name can be asked for: a bare codepoint, or text holding a
/// single character or a sequence.
///
/// Codepoints are accepted as plain integers so that surrogates, which
/// cannot exist as a Rust [`char`], can still be classified and labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character<'a> {
    Codepoint(u32),
    Text(&'a str),
}

impl From<u32> for Character<'_> {
    fn from(codepoint: u32) -> Self {
        Character::Codepoint(codepoint)
    }
}

impl From<char> for Character<'_> {
    fn from(c: char) -> Self {
        Character::Codepoint(u32::from(c))
    }
}

impl<'a> From<&'a str> for Character<'a> {
    fn from(text: &'a str) -> Self {
        Character::Text(text)
    }
}

impl<'a> From<&'a String> for Character<'a> {
    fn from(text: &'a String) -> Self {
        Character::Text(text.as_str())
    }
}

/// The string used to look a character up in the string-keyed tables.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Key<'a> {
    Text(&'a str),
    Encoded(u8char),
}

impl Key<'_> {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Key::Text(text) => text,
            Key::Encoded(c) => c.as_str(),
        }
    }
}

/// A validated [`Character`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Subject<'a> {
    /// Exactly one codepoint. Surrogates have no key.
    Single {
        codepoint: u32,
        key: Option<Key<'a>>,
    },
    /// Text of two or more scalars, with its first one.
    Sequence { text: &'a str, first: u32 },
}

impl<'a> Subject<'a> {
    /// Returns `None` for empty text and for integers outside the
    /// Unicode codespace.
    pub(crate) fn new(character: Character<'a>) -> Option<Self> {
        match character {
            Character::Codepoint(codepoint) if codepoint > MAX_CODEPOINT => None,
            Character::Codepoint(codepoint) => Some(Subject::Single {
                codepoint,
                key: char::from_u32(codepoint).map(|c| Key::Encoded(u8char::from_char(c))),
            }),
            Character::Text(text) => {
                let mut chars = text.chars();
                let first = u32::from(chars.next()?);
                Some(match chars.next() {
                    None => Subject::Single {
                        codepoint: first,
                        key: Some(Key::Text(text)),
                    },
                    Some(_) => Subject::Sequence { text, first },
                })
            }
        }
    }

    pub(crate) fn key(&self) -> Option<&str> {
        match self {
            Subject::Single { key, .. } => key.as_ref().map(Key::as_str),
            Subject::Sequence { text, .. } => Some(*text),
        }
    }

    /// The codepoint, if this is a single character.
    pub(crate) fn codepoint(&self) -> Option<u32> {
        match self {
            Subject::Single { codepoint, .. } => Some(*codepoint),
            Subject::Sequence { .. } => None,
        }
    }

    pub(crate) fn first_codepoint(&self) -> u32 {
        match self {
            Subject::Single { codepoint, .. } => *codepoint,
            Subject::Sequence { first, .. } => *first,
        }
    }
}
