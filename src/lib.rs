//! Converts an NCBI taxonomy dump (`nodes.dmp` + `names.dmp`) into a single
//! compact JSON lookup keyed by tax id:
//!
//! ```text
//! {"9606":{"i":9606,"p":9605,"r":4,"n":"Homo sapiens"}, ...}
//! ```
//!
//! `i` is the tax id, `p` the parent tax id, `r` the rank code from
//! [`ranks`] and `n` the scientific name (empty if the dump has none).

pub mod config;
pub mod convert;
pub mod dmp;
pub mod errors;
pub mod names;
pub mod ranks;
pub mod taxonomy;

pub use config::ConvertConfig;
pub use convert::{convert, ConvertSummary};
pub use errors::{Stage, TaxdumpError};
pub use names::{parse_names, read_names_file, NameMap};
pub use ranks::{rank_code, RankCode};
pub use taxonomy::{read_table, write_table, NcbiTaxonomy, TaxonRecord, TaxonomyTable};
