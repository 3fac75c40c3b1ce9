use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the name tables.
///
/// Resolving names never fails; once a [`NameDatabase`](crate::NameDatabase)
/// exists every lookup returns `None` for anything it cannot answer. Only
/// the one-time loading step can report problems.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A data or configuration file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON data document is malformed or has the wrong shape.
    #[error("malformed {document} table: {source}")]
    Json {
        document: Document,
        #[source]
        source: serde_json::Error,
    },

    /// The data source configuration is not valid TOML for [`DataConfig`](crate::DataConfig).
    #[error("invalid data configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The type trie offsets are unusable for descent by division.
    #[error("invalid type trie offsets: {detail}")]
    InvalidOffsets { detail: String },

    /// Two prefixes claim the same codepoint and overlaps were configured
    /// as fatal.
    #[error("range for '{later}' overlaps '{earlier}' at U+{codepoint:04X}")]
    OverlappingRanges {
        earlier: String,
        later: String,
        codepoint: u32,
    },
}

/// Identifies one of the three JSON documents that make up the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Types,
    Names,
    Sequences,
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Document::Types => "type",
            Document::Names => "name",
            Document::Sequences => "sequence",
        })
    }
}
