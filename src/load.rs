//! Building a [`NameDatabase`] from the JSON data documents.
//!
//! The tables come as three documents whose top-level keys are written in
//! upper case:
//!
//! - **types**: `TYPES` (the nested trie, as arrays of arrays whose leaves
//!   are category codes or `null`), `TYPE_NAMES`, and `OFFSETS`.
//! - **names**: `NAMES` (character → compressed name), `ALIASES`
//!   (character → alias lists keyed `correction`, `control`, `figment`,
//!   `alternate`, `abbreviation`), `CP_RANGES` (prefix → `[[low, high], ..]`,
//!   in priority order), `JAMO` (`INITIAL`, `MEDIAL`, `FINAL`),
//!   `COMMON_WORDS`, and `REPLACE_BASE`.
//! - **sequences**: `SEQUENCES` (sequence → compressed name),
//!   `EMOJI_NOT_QUALIFIED` (sequence → fully-qualified sequence),
//!   `COMMON_WORDS`, and `REPLACE_BASE`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::classify::{RESERVED, TrieNode, TypeTrie};
use crate::compress::WordDictionary;
use crate::config::{DataConfig, OverlapPolicy};
use crate::error::{Document, LoadError};
use crate::sequence::SequenceTable;
use crate::synth::{Jamo, RangeTable};
use crate::{Aliases, NameDatabase, NameTable};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct TypeDocument {
    types: TrieNode,
    type_names: Vec<String>,
    offsets: Vec<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct NameDocument {
    names: HashMap<String, String>,
    #[serde(default)]
    aliases: HashMap<String, Aliases>,
    #[serde(default)]
    cp_ranges: RangeTable,
    jamo: Jamo,
    common_words: Vec<String>,
    replace_base: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct SequenceDocument {
    sequences: HashMap<String, String>,
    #[serde(default)]
    emoji_not_qualified: HashMap<String, String>,
    common_words: Vec<String>,
    replace_base: u32,
}

impl NameDatabase {
    /// Builds a database from the three JSON documents held in memory,
    /// warning about overlapping prefix ranges.
    pub fn from_json_str(types: &str, names: &str, sequences: &str) -> Result<Self, LoadError> {
        build(
            parse_str(Document::Types, types)?,
            parse_str(Document::Names, names)?,
            parse_str(Document::Sequences, sequences)?,
            OverlapPolicy::default(),
        )
    }

    /// Builds a database by reading the three JSON documents.
    pub fn from_readers(
        types: impl Read,
        names: impl Read,
        sequences: impl Read,
        overlap: OverlapPolicy,
    ) -> Result<Self, LoadError> {
        build(
            parse_reader(Document::Types, types)?,
            parse_reader(Document::Names, names)?,
            parse_reader(Document::Sequences, sequences)?,
            overlap,
        )
    }

    /// Builds a database from the files named in the configuration.
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        tracing::debug!(
            types = %config.types.display(),
            names = %config.names.display(),
            sequences = %config.sequences.display(),
            "loading unicode name tables"
        );
        NameDatabase::from_readers(
            open(&config.types)?,
            open(&config.names)?,
            open(&config.sequences)?,
            config.range_overlap,
        )
    }
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_str<T: DeserializeOwned>(document: Document, json: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Json { document, source })
}

fn parse_reader<T: DeserializeOwned>(document: Document, reader: impl Read) -> Result<T, LoadError> {
    serde_json::from_reader(reader).map_err(|source| LoadError::Json { document, source })
}

fn build(
    types: TypeDocument,
    names: NameDocument,
    sequences: SequenceDocument,
    overlap: OverlapPolicy,
) -> Result<NameDatabase, LoadError> {
    check_offsets(&types.offsets)?;
    if types.type_names.first().map(String::as_str) != Some(RESERVED) {
        tracing::warn!(
            first = ?types.type_names.first(),
            "type code 0 is not named \"Reserved\""
        );
    }
    check_overlaps(&names.cp_ranges, overlap)?;

    let db = NameDatabase::from_parts(
        TypeTrie::new(types.types, types.offsets, types.type_names),
        NameTable::new(
            names.names,
            WordDictionary::new(names.common_words, names.replace_base),
            names.aliases,
            names.cp_ranges,
            names.jamo,
        ),
        SequenceTable::new(
            sequences.sequences,
            sequences.emoji_not_qualified,
            WordDictionary::new(sequences.common_words, sequences.replace_base),
        ),
    );
    tracing::info!(
        names = db.names().len(),
        aliases = db.names().alias_count(),
        prefixes = db.names().ranges().entries().len(),
        sequences = db.sequences().len(),
        not_qualified = db.sequences().not_qualified_len(),
        "loaded unicode name tables"
    );
    Ok(db)
}

/// Offsets must be non-zero and strictly descending for the trie descent
/// to terminate on the right leaf.
fn check_offsets(offsets: &[u32]) -> Result<(), LoadError> {
    if let Some(position) = offsets.iter().position(|&offset| offset == 0) {
        return Err(LoadError::InvalidOffsets {
            detail: format!("offset {position} is zero"),
        });
    }
    if let Some(pair) = offsets.windows(2).find(|pair| pair[0] <= pair[1]) {
        return Err(LoadError::InvalidOffsets {
            detail: format!("{} is followed by {}", pair[0], pair[1]),
        });
    }
    Ok(())
}

fn check_overlaps(ranges: &RangeTable, policy: OverlapPolicy) -> Result<(), LoadError> {
    if policy == OverlapPolicy::Ignore {
        return Ok(());
    }
    let Some((earlier, later, codepoint)) = ranges.first_overlap() else {
        return Ok(());
    };
    let entries = ranges.entries();
    let earlier = entries[earlier].0.clone();
    let later = entries[later].0.clone();
    match policy {
        OverlapPolicy::Reject => Err(LoadError::OverlappingRanges {
            earlier,
            later,
            codepoint,
        }),
        _ => {
            tracing::warn!(
                %earlier,
                %later,
                codepoint = %format!("U+{codepoint:04X}"),
                "name prefix ranges overlap; the earlier prefix wins"
            );
            Ok(())
        }
    }
}
