use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::dmp::{for_each_record, open_dmp, require_fields, split_fields};
use crate::errors::{Result, Stage, TaxdumpError};
use crate::names::NameMap;
use crate::ranks::{is_known_rank, rank_code, RankCode};

/// One joined taxon as written to the output blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonRecord {
    #[serde(rename = "i")]
    pub id: i64,
    /// Equal to `id` (or 0) for the root
    #[serde(rename = "p")]
    pub parent_id: i64,
    #[serde(rename = "r")]
    pub rank: RankCode,
    /// Empty when the names file has no scientific name for this taxon
    #[serde(rename = "n")]
    pub name: String,
}

/// Identifier text to record.
pub type TaxonomyTable = HashMap<String, TaxonRecord>;

#[derive(Debug, Default)]
pub struct NcbiTaxonomy {
    pub records: TaxonomyTable,
    /// Rank labels seen in the nodes file that the rank table does not know
    pub unknown_ranks: BTreeSet<String>,
    /// Records built without a scientific name
    pub unnamed: usize,
}

impl NcbiTaxonomy {
    /// Builds the taxonomy from a nodes file and previously parsed names.
    ///
    /// # Arguments
    ///
    /// * `nodes_filename` - The path to the nodes file.
    /// * `names` - Scientific names keyed by identifier.
    pub fn new<P: AsRef<Path>>(nodes_filename: P, names: &NameMap) -> Result<Self> {
        let path = nodes_filename.as_ref();
        info!("reading nodes from {}", path.display());
        let taxonomy = Self::from_reader(open_dmp(path, Stage::Nodes)?, names)?;
        info!(
            "built {} taxon records ({} without a scientific name)",
            taxonomy.records.len(),
            taxonomy.unnamed
        );
        for label in &taxonomy.unknown_ranks {
            warn!("unrecognized rank '{}' recorded as no rank", label);
        }
        Ok(taxonomy)
    }

    /// Joins each `tax_id | parent_tax_id | rank | ...` record with its
    /// rank code and scientific name.
    pub fn from_reader<R: BufRead>(nodes_reader: R, names: &NameMap) -> Result<Self> {
        let mut taxonomy = NcbiTaxonomy::default();

        for_each_record(nodes_reader, Stage::Nodes, |line_no, line| {
            let fields = split_fields(line);
            require_fields(&fields, 3, Stage::Nodes, line_no)?;

            let (tax_id, parent_id, rank) = (fields[0], fields[1], fields[2]);
            let record = TaxonRecord {
                id: parse_id(tax_id, "tax id", line_no)?,
                parent_id: parse_id(parent_id, "parent tax id", line_no)?,
                rank: rank_code(rank),
                name: names.get(tax_id).cloned().unwrap_or_default(),
            };

            if !is_known_rank(rank) {
                taxonomy.unknown_ranks.insert(rank.to_string());
            }
            if record.name.is_empty() {
                taxonomy.unnamed += 1;
            }
            if taxonomy.records.insert(tax_id.to_string(), record).is_some() {
                debug!("line {}: tax id {} replaces an earlier record", line_no, tax_id);
            }
            Ok(())
        })?;

        Ok(taxonomy)
    }

    /// Writes the table as one compact JSON object to `filename`.
    ///
    /// The blob goes to a temporary file next to the destination first, so
    /// a failure never leaves a truncated output behind.
    pub fn write_to_disk<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let path = filename.as_ref();
        let write_err = |source: io::Error| TaxdumpError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = output_tempfile(dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            write_table(&self.records, &mut writer).map_err(|source| TaxdumpError::Json {
                path: path.to_path_buf(),
                source,
            })?;
            writer.flush().map_err(write_err)?;
        }
        tmp.persist(path).map_err(|e| write_err(e.error))?;

        info!("wrote {} records to {}", self.records.len(), path.display());
        Ok(())
    }
}

/// Temporary file for the output, created with the mode a plain
/// `File::create` would give it (0666 less the umask) instead of 0600.
#[cfg(unix)]
fn output_tempfile(dir: &Path) -> io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn output_tempfile(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

fn parse_id(value: &str, field: &'static str, line: usize) -> Result<i64> {
    value
        .parse()
        .map_err(|source| TaxdumpError::InvalidInteger {
            stage: Stage::Nodes,
            line,
            field,
            value: value.to_string(),
            source,
        })
}

/// Serializes `table` without whitespace; non-ASCII names stay literal.
pub fn write_table<W: Write>(table: &TaxonomyTable, writer: W) -> serde_json::Result<()> {
    serde_json::to_writer(writer, table)
}

/// Loads a table previously written by [`NcbiTaxonomy::write_to_disk`].
pub fn read_table<P: AsRef<Path>>(filename: P) -> Result<TaxonomyTable> {
    let path = filename.as_ref();
    let file = File::open(path).map_err(|source| TaxdumpError::Open {
        stage: Stage::Output,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| TaxdumpError::Json {
        path: path.to_path_buf(),
        source,
    })
}
