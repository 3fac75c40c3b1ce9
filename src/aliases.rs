use serde::Deserialize;

/// The reasons a formal alias can be assigned to a codepoint, as listed in
/// `NameAliases.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasKind {
    /// Corrects a serious problem in the character's original name.
    Correction,
    /// ISO 6429 names for C0 and C1 control functions.
    Control,
    /// A name that was documented but never actually standardized.
    Figment,
    /// A widely used alternate name.
    Alternate,
    /// A common abbreviation.
    Abbreviation,
}

impl AliasKind {
    /// The kinds consulted for a readable name, best first. Corrections are
    /// left out because they already take the place of the name itself.
    pub const READABLE_ORDER: [AliasKind; 4] = [
        AliasKind::Control,
        AliasKind::Figment,
        AliasKind::Alternate,
        AliasKind::Abbreviation,
    ];
}

/// Every alias of one codepoint, grouped by [`AliasKind`].
///
/// A kind without aliases has an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Aliases {
    pub correction: Vec<String>,
    pub control: Vec<String>,
    pub figment: Vec<String>,
    pub alternate: Vec<String>,
    pub abbreviation: Vec<String>,
}

impl Aliases {
    pub fn get(&self, kind: AliasKind) -> &[String] {
        match kind {
            AliasKind::Correction => &self.correction,
            AliasKind::Control => &self.control,
            AliasKind::Figment => &self.figment,
            AliasKind::Alternate => &self.alternate,
            AliasKind::Abbreviation => &self.abbreviation,
        }
    }

    /// The authoritative corrected name. Later corrections supersede
    /// earlier ones.
    pub fn correction(&self) -> Option<&str> {
        self.correction
            .last()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// The first alias of the best kind in [`AliasKind::READABLE_ORDER`].
    pub fn readable(&self) -> Option<&str> {
        AliasKind::READABLE_ORDER
            .into_iter()
            .filter_map(|kind| self.get(kind).first())
            .map(String::as_str)
            .find(|name| !name.is_empty())
    }
}
