use lazy_static::lazy_static;
use std::collections::HashMap;

/// Compact integer code for a taxonomic rank label.
pub type RankCode = u8;

/// Code used for "no rank" and for any label not in the table.
pub const NO_RANK: RankCode = 0;

const RANKS: [(&str, RankCode); 44] = [
    ("biotype", 38),
    ("clade", 34),
    ("class", 21),
    ("cohort", 42),
    ("family", 12),
    ("forma", 1),
    ("forma specialis", 29),
    ("genotype", 36),
    ("genus", 8),
    ("infraclass", 19),
    ("infraorder", 15),
    ("isolate", 33),
    ("kingdom", 27),
    ("morph", 37),
    ("no rank", NO_RANK),
    ("order", 17),
    ("parvorder", 14),
    ("pathogroup", 40),
    ("phylum", 24),
    ("section", 35),
    ("series", 43),
    ("serogroup", 32),
    ("serotype", 31),
    ("species", 4),
    ("species group", 6),
    ("species subgroup", 5),
    ("strain", 30),
    ("subclass", 20),
    ("subcohort", 39),
    ("subfamily", 11),
    ("subgenus", 7),
    ("subkingdom", 26),
    ("suborder", 16),
    ("subphylum", 23),
    ("subsection", 41),
    ("subspecies", 3),
    ("subtribe", 9),
    ("superclass", 22),
    ("superfamily", 13),
    ("superkingdom", 28),
    ("superorder", 18),
    ("superphylum", 25),
    ("tribe", 10),
    ("varietas", 2),
];

lazy_static! {
    static ref RANK_CODES: HashMap<&'static str, RankCode> = RANKS.iter().copied().collect();
}

/// Looks up the code for a rank label, falling back to [`NO_RANK`].
pub fn rank_code(label: &str) -> RankCode {
    RANK_CODES.get(label).copied().unwrap_or(NO_RANK)
}

pub fn is_known_rank(label: &str) -> bool {
    RANK_CODES.contains_key(label)
}
