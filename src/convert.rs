use log::info;

use crate::config::ConvertConfig;
use crate::errors::Result;
use crate::names::read_names_file;
use crate::taxonomy::NcbiTaxonomy;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub scientific_names: usize,
    pub records: usize,
    pub unnamed: usize,
    pub unknown_ranks: usize,
}

/// Reads the names file, joins the nodes file against it and writes the
/// JSON blob. Stops at the first error; the output is only created once
/// both inputs parsed completely.
pub fn convert(config: &ConvertConfig) -> Result<ConvertSummary> {
    let names = read_names_file(&config.names_path)?;
    let taxonomy = NcbiTaxonomy::new(&config.nodes_path, &names)?;
    taxonomy.write_to_disk(&config.output_path)?;

    let summary = ConvertSummary {
        scientific_names: names.len(),
        records: taxonomy.records.len(),
        unnamed: taxonomy.unnamed,
        unknown_ranks: taxonomy.unknown_ranks.len(),
    };
    info!(
        "converted {} taxa ({} scientific names, {} unnamed, {} unrecognized ranks)",
        summary.records, summary.scientific_names, summary.unnamed, summary.unknown_ranks
    );
    Ok(summary)
}
