use serde::Deserialize;

/// The category label for codepoints the trie has no assigned type for.
pub const RESERVED: &str = "Reserved";

/// One node of the hierarchical type trie.
///
/// Densely populated stretches of the codespace collapse into a single
/// [`TrieNode::Leaf`] high up in the tree, while sparse areas expand into
/// deeper [`TrieNode::Branch`] levels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TrieNode {
    /// Children indexed by the quotient at this level's offset.
    Branch(Vec<TrieNode>),
    /// A category code covering the whole span of this node. `None` is a
    /// hole in the data and reads as code 0.
    Leaf(Option<u8>),
}

static HOLE: TrieNode = TrieNode::Leaf(None);

impl TrieNode {
    /// Shorthand for a leaf holding a category code.
    pub const fn leaf(code: u8) -> Self {
        TrieNode::Leaf(Some(code))
    }

    fn child(&self, index: u32) -> &TrieNode {
        match self {
            TrieNode::Branch(children) => children.get(index as usize).unwrap_or(&HOLE),
            TrieNode::Leaf(_) => &HOLE,
        }
    }

    /// The leaf code, treating branches and holes alike as code 0.
    fn code(&self) -> u8 {
        match self {
            TrieNode::Leaf(code) => code.unwrap_or(0),
            TrieNode::Branch(_) => 0,
        }
    }
}

/// Maps a codepoint to its basic type ("Graphic", "Control", ...) by
/// descending a [`TrieNode`] tree one division at a time.
#[derive(Debug, Clone)]
pub struct TypeTrie {
    root: TrieNode,
    offsets: Vec<u32>,
    type_names: Vec<String>,
}

impl TypeTrie {
    /// Builds a trie from its root node, its descending per-level offsets,
    /// and the names of the category codes stored in its leaves.
    ///
    /// The offsets are trusted here; [`crate::NameDatabase::from_json_str`]
    /// checks them when loading from data files.
    pub fn new(root: TrieNode, offsets: Vec<u32>, type_names: Vec<String>) -> Self {
        Self {
            root,
            offsets,
            type_names,
        }
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn type_names(&self) -> &[String] {
        &self.type_names
    }

    /// Returns the type label of the given codepoint, never failing.
    pub fn classify(&self, codepoint: u32) -> &str {
        let mut remaining = codepoint;
        let mut node = &self.root;
        for &offset in &self.offsets {
            let (Some(index), Some(rest)) =
                (remaining.checked_div(offset), remaining.checked_rem(offset))
            else {
                return RESERVED;
            };
            node = node.child(index);
            remaining = rest;
            if let TrieNode::Leaf(code) = node {
                return self.type_name(code.unwrap_or(0));
            }
        }
        self.type_name(node.child(remaining).code())
    }

    fn type_name(&self, code: u8) -> &str {
        self.type_names
            .get(usize::from(code))
            .map(String::as_str)
            .unwrap_or(RESERVED)
    }
}
