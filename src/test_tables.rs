//! A small synthetic table set shaped like the real Unicode data, used by
//! the tests throughout the crate.

use std::collections::HashMap;

use crate::classify::{TrieNode, TypeTrie};
use crate::compress::WordDictionary;
use crate::sequence::SequenceTable;
use crate::synth::{Jamo, RangeTable};
use crate::{Aliases, NameDatabase, NameTable};

pub(crate) const NAME_BASE: u32 = 0xF0000;
pub(crate) const SEQUENCE_BASE: u32 = 0xF8000;

pub(crate) const TYPE_NAMES: [&str; 7] = [
    "Reserved",
    "Graphic",
    "Format",
    "Control",
    "Private-use",
    "Surrogate",
    "Noncharacter",
];

const RESERVED: u8 = 0;
const GRAPHIC: u8 = 1;
const FORMAT: u8 = 2;
const CONTROL: u8 = 3;
const PRIVATE_USE: u8 = 4;
const SURROGATE: u8 = 5;
const NONCHARACTER: u8 = 6;

pub(crate) const OFFSETS: [u32; 4] = [0x10000, 0x1000, 0x100, 0x10];

fn leaf(code: u8) -> TrieNode {
    TrieNode::leaf(code)
}

/// Sixteen children, all `fill` except the listed overrides.
fn branch(fill: u8, overrides: Vec<(usize, TrieNode)>) -> TrieNode {
    let mut children: Vec<TrieNode> = (0..16).map(|_| leaf(fill)).collect();
    for (index, node) in overrides {
        children[index] = node;
    }
    TrieNode::Branch(children)
}

/// A final level of sixteen codes.
fn codes(codes: [u8; 16]) -> TrieNode {
    TrieNode::Branch(codes.into_iter().map(leaf).collect())
}

/// Planes 15 and 16: private use ending in two noncharacters.
fn private_use_plane() -> TrieNode {
    let mut tail = [PRIVATE_USE; 16];
    tail[14] = NONCHARACTER;
    tail[15] = NONCHARACTER;
    branch(
        PRIVATE_USE,
        vec![(
            0xF,
            branch(PRIVATE_USE, vec![(0xF, branch(PRIVATE_USE, vec![(0xF, codes(tail))]))]),
        )],
    )
}

pub(crate) fn type_root() -> TrieNode {
    let mut latin1 = [GRAPHIC; 16];
    latin1[0xD] = FORMAT;
    let mut ascii_tail = [GRAPHIC; 16];
    ascii_tail[0xF] = CONTROL;
    let block_0000 = branch(
        GRAPHIC,
        vec![(
            0x0,
            branch(
                GRAPHIC,
                vec![
                    (0x0, leaf(CONTROL)),
                    (0x1, leaf(CONTROL)),
                    (0x7, codes(ascii_tail)),
                    (0x8, leaf(CONTROL)),
                    (0x9, leaf(CONTROL)),
                    (0xA, codes(latin1)),
                ],
            ),
        )],
    );
    let block_d000 = branch(
        GRAPHIC,
        (0x8..0x10).map(|i| (i, leaf(SURROGATE))).collect(),
    );
    let mut specials = [RESERVED; 16];
    specials[0x9..0xC].fill(FORMAT);
    specials[0xC] = GRAPHIC;
    specials[0xD] = GRAPHIC;
    specials[0xE] = NONCHARACTER;
    specials[0xF] = NONCHARACTER;
    let mut bom = [GRAPHIC; 16];
    bom[0xF] = FORMAT;
    let block_f000 = branch(
        GRAPHIC,
        (0x0..0x9)
            .map(|i| (i, leaf(PRIVATE_USE)))
            .chain([
                (0xE, branch(GRAPHIC, vec![(0xF, codes(bom))])),
                (0xF, branch(GRAPHIC, vec![(0xF, codes(specials))])),
            ])
            .collect(),
    );
    let plane_0 = branch(
        GRAPHIC,
        vec![
            (0x0, block_0000),
            (0xD, block_d000),
            (0xE, leaf(PRIVATE_USE)),
            (0xF, block_f000),
        ],
    );
    let plane_1 = branch(
        GRAPHIC,
        vec![(
            0x0,
            branch(GRAPHIC, vec![(0xC, branch(GRAPHIC, vec![(0x5, leaf(RESERVED))]))]),
        )],
    );

    // Only seventeen planes; anything past the end reads as a hole.
    let mut planes: Vec<TrieNode> = (0..17).map(|_| leaf(RESERVED)).collect();
    planes[0x0] = plane_0;
    planes[0x1] = plane_1;
    planes[0x2] = leaf(GRAPHIC);
    planes[0xF] = private_use_plane();
    planes[0x10] = private_use_plane();
    TrieNode::Branch(planes)
}

pub(crate) fn type_trie() -> TypeTrie {
    TypeTrie::new(
        type_root(),
        OFFSETS.to_vec(),
        TYPE_NAMES.iter().map(|s| s.to_string()).collect(),
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn jamo() -> Jamo {
    Jamo {
        initial: strings(&[
            "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K",
            "T", "P", "H",
        ]),
        medial: strings(&[
            "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U",
            "WEO", "WE", "WI", "YU", "EU", "YI", "I",
        ]),
        final_: strings(&[
            "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP",
            "LH", "M", "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
        ]),
    }
}

pub(crate) fn ranges() -> RangeTable {
    RangeTable::new(vec![
        (
            "CJK UNIFIED IDEOGRAPH-".to_string(),
            vec![0x3400..=0x4DBF, 0x4E00..=0x9FFF, 0x20000..=0x2A6DF],
        ),
        ("EGYPTIAN HIEROGLYPH-".to_string(), vec![0x13460..=0x143FA]),
        (
            "TANGUT IDEOGRAPH-".to_string(),
            vec![0x17000..=0x187F7, 0x18D00..=0x18D08],
        ),
        (
            "KHITAN SMALL SCRIPT CHARACTER-".to_string(),
            vec![0x18B00..=0x18CD5],
        ),
        ("NUSHU CHARACTER-".to_string(), vec![0x1B170..=0x1B2FB]),
        (
            "CJK COMPATIBILITY IDEOGRAPH-".to_string(),
            vec![0xF900..=0xFA6D, 0xFA70..=0xFAD9, 0x2F800..=0x2FA1D],
        ),
    ])
}

/// Words of the name dictionary, addressed from [`NAME_BASE`].
pub(crate) const NAME_WORDS: [&str; 7] = [
    "LATIN",   // F0000
    "CAPITAL", // F0001
    "LETTER",  // F0002
    "CJK",     // F0003
    "UNIFIED", // F0004
    "SQUARED", // F0005
    "MARK",    // F0006
];

fn names() -> HashMap<String, String> {
    [
        ("A", "\u{F0000}\u{F0001}\u{F0002}A"),
        ("\u{1A2}", "\u{F0000}\u{F0001}\u{F0002}OI"),
        ("\u{AD}", "SOFT HYPHEN"),
        ("\u{203C}", "DOUBLE EXCLAMATION \u{F0006}"),
        ("\u{2118}", "SCRIPT CAPITAL P"),
        ("\u{FFFD}", "REPLACEMENT CHARACTER"),
        ("\u{1F236}", "\u{F0005}\u{F0003}\u{F0004}IDEOGRAPH-6709"),
        ("\u{1F6A1}", "AERIAL TRAMWAY"),
        // Dangling word token: degrades to no name.
        ("\u{2603}", "\u{F0042}"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn aliases() -> HashMap<String, Aliases> {
    let mut table = HashMap::new();
    table.insert(
        "\0".to_string(),
        Aliases {
            control: strings(&["NULL"]),
            abbreviation: strings(&["NUL"]),
            ..Aliases::default()
        },
    );
    table.insert(
        "\u{7F}".to_string(),
        Aliases {
            control: strings(&["DELETE"]),
            abbreviation: strings(&["DEL"]),
            ..Aliases::default()
        },
    );
    table.insert(
        "\u{80}".to_string(),
        Aliases {
            figment: strings(&["PADDING CHARACTER"]),
            abbreviation: strings(&["PAD"]),
            ..Aliases::default()
        },
    );
    table.insert(
        "\u{1A2}".to_string(),
        Aliases {
            correction: strings(&["LATIN CAPITAL LETTER GHA"]),
            ..Aliases::default()
        },
    );
    table.insert(
        "\u{2118}".to_string(),
        Aliases {
            correction: strings(&["WEIERSTRASS P", "WEIERSTRASS ELLIPTIC FUNCTION"]),
            ..Aliases::default()
        },
    );
    table.insert(
        "\u{FEFF}".to_string(),
        Aliases {
            alternate: strings(&["BYTE ORDER MARK"]),
            abbreviation: strings(&["BOM", "ZWNBSP"]),
            ..Aliases::default()
        },
    );
    table.insert(
        "\u{E000}".to_string(),
        Aliases {
            abbreviation: strings(&["PUA"]),
            ..Aliases::default()
        },
    );
    table
}

/// Words of the sequence dictionary, addressed from [`SEQUENCE_BASE`].
pub(crate) const SEQUENCE_WORDS: [&str; 6] = [
    "FLAG:",    // F8000
    "MAN",      // F8001
    "WOMAN",    // F8002
    "SKIN",     // F8003
    "TONE",     // F8004
    "BOUNCING", // F8005
];

pub(crate) const MAN_JUDGE: &str = "\u{1F468}\u{200D}\u{2696}\u{FE0F}";
pub(crate) const WOMAN_BOUNCING_BALL: &str = "\u{26F9}\u{FE0F}\u{200D}\u{2640}\u{FE0F}";

fn sequences() -> SequenceTable {
    let sequences = [
        ("\u{203C}\u{FE0E}", "DOUBLE EXCLAMATION MARK (text style)"),
        ("\u{2F81F}\u{FE00}", "CJK COMPATIBILITY IDEOGRAPH-2F81F"),
        ("\u{1F1FA}\u{1F1F3}", "\u{F8000}UNITED NATIONS"),
        ("\u{1F1E6}\u{1F1FD}", "\u{F8000}\u{C5}LAND ISLANDS"),
        (MAN_JUDGE, "\u{F8001}JUDGE"),
        (WOMAN_BOUNCING_BALL, "\u{F8002}\u{F8005}BALL"),
        ("\u{1F44B}\u{1F3FB}", "WAVING HAND: LIGHT \u{F8003}\u{F8004}"),
        ("\u{2764}\u{FE0F}\u{200D}\u{1F525}", "HEART ON FIRE"),
        // Keyed by a lone scalar: sequence lookup is exact, not arity-checked.
        ("\u{23F3}", "HOURGLASS (sequence)"),
    ];
    let not_qualified = [
        ("\u{1F468}\u{200D}\u{2696}", MAN_JUDGE),
        ("\u{26F9}\u{200D}\u{2640}\u{FE0F}", WOMAN_BOUNCING_BALL),
        ("\u{26F9}\u{FE0F}\u{200D}\u{2640}", WOMAN_BOUNCING_BALL),
        ("\u{26F9}\u{200D}\u{2640}", WOMAN_BOUNCING_BALL),
        // Points at a sequence the table does not have.
        ("\u{2764}\u{200D}\u{1FA79}", "\u{2764}\u{FE0F}\u{200D}\u{1FA79}"),
    ];
    SequenceTable::new(
        sequences
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        not_qualified
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        WordDictionary::new(strings(&SEQUENCE_WORDS), SEQUENCE_BASE),
    )
}

pub(crate) fn name_table() -> NameTable {
    NameTable::new(
        names(),
        WordDictionary::new(strings(&NAME_WORDS), NAME_BASE),
        aliases(),
        ranges(),
        jamo(),
    )
}

pub(crate) fn database() -> NameDatabase {
    NameDatabase::from_parts(type_trie(), name_table(), sequences())
}
