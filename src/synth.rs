//! Algorithmic names for the blocks too large to list one by one.
//!
//! Two families exist: ideograph-style blocks whose names are a fixed
//! prefix followed by the codepoint in hex, and Hangul syllables whose
//! names are spelled out from their decomposition into jamo.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// First precomposed Hangul syllable, `U+AC00`.
pub const HANGUL_START: u32 = 0xAC00;
/// Last precomposed Hangul syllable, `U+D7A3`.
pub const HANGUL_END: u32 = 0xD7A3;
/// Syllables per initial consonant (medial count times final count).
const HANGUL_MEDIAL_MAX: u32 = 588;
/// Number of final-consonant slots, including "no final consonant".
const HANGUL_FINAL_MAX: u32 = 28;

const HANGUL_PREFIX: &str = "HANGUL SYLLABLE ";

/// Formats a codepoint as uppercase hex with at least four digits.
pub fn codepoint_hex(codepoint: u32) -> String {
    format!("{codepoint:04X}")
}

/// Name prefixes and the codepoint ranges they apply to, in source order.
///
/// Lookup is first-match-wins across prefixes, so the order in which the
/// prefixes were loaded is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    entries: Vec<(String, Vec<RangeInclusive<u32>>)>,
}

impl RangeTable {
    pub fn new(entries: Vec<(String, Vec<RangeInclusive<u32>>)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Vec<RangeInclusive<u32>>)] {
        &self.entries
    }

    /// Returns the prefix of the first entry with a range containing the
    /// codepoint.
    pub fn prefix_for(&self, codepoint: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, ranges)| ranges.iter().any(|range| range.contains(&codepoint)))
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Returns the prefix + hex name for the codepoint, if any range
    /// claims it.
    pub fn name(&self, codepoint: u32) -> Option<String> {
        let prefix = self.prefix_for(codepoint)?;
        Some(format!("{prefix}{}", codepoint_hex(codepoint)))
    }

    /// Finds the first codepoint claimed by two different prefixes.
    ///
    /// Returns the indices of the earlier and later entry together with
    /// the lowest codepoint both of the offending ranges contain.
    pub fn first_overlap(&self) -> Option<(usize, usize, u32)> {
        for (i, (_, earlier)) in self.entries.iter().enumerate() {
            for (j, (_, later)) in self.entries.iter().enumerate().skip(i + 1) {
                for a in earlier {
                    for b in later {
                        let low = *a.start().max(b.start());
                        let high = *a.end().min(b.end());
                        if low <= high {
                            return Some((i, j, low));
                        }
                    }
                }
            }
        }
        None
    }
}

impl<'de> Deserialize<'de> for RangeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RangeTableVisitor;

        impl<'de> Visitor<'de> for RangeTableVisitor {
            type Value = RangeTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from name prefix to a list of [low, high] ranges")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RangeTable, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((prefix, ranges)) = map.next_entry::<String, Vec<[u32; 2]>>()? {
                    let ranges = ranges.into_iter().map(|[low, high]| low..=high).collect();
                    entries.push((prefix, ranges));
                }
                Ok(RangeTable { entries })
            }
        }

        deserializer.deserialize_map(RangeTableVisitor)
    }
}

/// Short names of the conjoining jamo, by position within a syllable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Jamo {
    #[serde(rename = "INITIAL")]
    pub initial: Vec<String>,
    #[serde(rename = "MEDIAL")]
    pub medial: Vec<String>,
    #[serde(rename = "FINAL")]
    pub final_: Vec<String>,
}

impl Jamo {
    /// Returns the name of a precomposed Hangul syllable, or `None` outside
    /// `U+AC00..=U+D7A3` or when the jamo table lacks a needed entry.
    pub fn hangul_name(&self, codepoint: u32) -> Option<String> {
        if !(HANGUL_START..=HANGUL_END).contains(&codepoint) {
            return None;
        }
        let base = codepoint - HANGUL_START;
        let final_ = (base % HANGUL_FINAL_MAX) as usize;
        let medial = ((base % HANGUL_MEDIAL_MAX) / HANGUL_FINAL_MAX) as usize;
        let initial = (base / HANGUL_MEDIAL_MAX) as usize;

        let mut name = String::from(HANGUL_PREFIX);
        name.push_str(self.initial.get(initial)?);
        name.push_str(self.medial.get(medial)?);
        name.push_str(self.final_.get(final_)?);
        Some(name)
    }
}
