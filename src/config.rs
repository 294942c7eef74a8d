use std::path::PathBuf;

pub const DEFAULT_NAMES_FILENAME: &str = "afesm_names.dmp";
pub const DEFAULT_NODES_FILENAME: &str = "afesm_nodes.dmp";
pub const DEFAULT_OUTPUT_FILENAME: &str = "ncbitaxonomy.json";

/// Input and output locations for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub names_path: PathBuf,
    pub nodes_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConvertConfig {
    pub fn new(
        names_path: impl Into<PathBuf>,
        nodes_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            names_path: names_path.into(),
            nodes_path: nodes_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_NAMES_FILENAME,
            DEFAULT_NODES_FILENAME,
            DEFAULT_OUTPUT_FILENAME,
        )
    }
}
