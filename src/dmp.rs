//! Reading NCBI taxdump-style `.dmp` files.
//!
//! Records are single lines of `|`-separated fields padded with tabs or
//! spaces, e.g. `9606\t|\t9605\t|\tspecies\t|`. Inputs may be gzip
//! compressed; a `.gz` extension selects the decoder.

use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::errors::{Result, Stage, TaxdumpError};

pub const FIELD_DELIMITER: char = '|';

/// Opens a dump file for line-oriented reading.
pub fn open_dmp(path: &Path, stage: Stage) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| TaxdumpError::Open {
        stage,
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn Read> = if path.extension().map_or(false, |ext| ext == "gz") {
        debug!("reading {} through gzip decoder", path.display());
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    Ok(Box::new(BufReader::new(reader)))
}

/// Splits a record on `|` and trims whitespace from every field.
///
/// The trailing `|` NCBI puts at the end of each record yields one extra
/// empty field, which callers never consult.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Fails unless `fields` holds at least `expected` entries.
pub fn require_fields(fields: &[&str], expected: usize, stage: Stage, line: usize) -> Result<()> {
    if fields.len() < expected {
        return Err(TaxdumpError::MissingFields {
            stage,
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Visits every line with its 1-based line number. Blank lines are passed
/// through so the caller's field check rejects them.
pub fn for_each_record<R, F>(reader: R, stage: Stage, mut visit: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| TaxdumpError::Read {
            stage,
            line: line_no,
            source,
        })?;
        visit(line_no, &line)?;
    }
    Ok(())
}
