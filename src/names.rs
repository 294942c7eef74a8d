use log::{debug, info};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::dmp::{for_each_record, open_dmp, require_fields, split_fields};
use crate::errors::{Result, Stage};

pub const SCIENTIFIC_NAME: &str = "scientific name";

/// Identifier text to scientific name.
pub type NameMap = HashMap<String, String>;

/// Collects the scientific name of every taxon in a names file.
///
/// Each record is `tax_id | name_txt | unique_name | name_class | ...`.
/// Records of any other name class are dropped, and a later scientific
/// name for the same identifier replaces an earlier one.
pub fn parse_names<R: BufRead>(reader: R) -> Result<NameMap> {
    let mut names = NameMap::new();
    let mut skipped = 0usize;

    for_each_record(reader, Stage::Names, |line_no, line| {
        let fields = split_fields(line);
        require_fields(&fields, 4, Stage::Names, line_no)?;

        let (tax_id, name_txt, name_class) = (fields[0], fields[1], fields[3]);
        if name_class == SCIENTIFIC_NAME {
            names.insert(tax_id.to_string(), name_txt.to_string());
        } else {
            skipped += 1;
        }
        Ok(())
    })?;

    debug!("skipped {} non-scientific name records", skipped);
    Ok(names)
}

pub fn read_names_file<P: AsRef<Path>>(path: P) -> Result<NameMap> {
    let path = path.as_ref();
    info!("reading names from {}", path.display());
    let names = parse_names(open_dmp(path, Stage::Names)?)?;
    info!("kept {} scientific names", names.len());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TaxdumpError;
    use std::io::Cursor;

    const NAMES_DATA: &str = "1\t|\tall\t|\t\t|\tsynonym\t|
1\t|\troot\t|\t\t|\tscientific name\t|
2\t|\tBacteria\t|\tBacteria <bacteria>\t|\tscientific name\t|
2\t|\teubacteria\t|\t\t|\tgenbank common name\t|
3\t|\tAT-rich\t|\t\t|\tsynonym\t|";

    #[test]
    fn test_parse_names_keeps_only_scientific_names() {
        let names = parse_names(Cursor::new(NAMES_DATA)).unwrap();

        assert_eq!(names.len(), 2);
        assert_eq!(names["1"], "root");
        assert_eq!(names["2"], "Bacteria");
        assert!(!names.contains_key("3"));
    }

    #[test]
    fn test_parse_names_plain_pipes() {
        let data = "9|Homo sapiens|Homo sapiens <scientific name>|scientific name\n\
                    9|Human|h|genbank common name\n";
        let names = parse_names(Cursor::new(data)).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names["9"], "Homo sapiens");
    }

    #[test]
    fn test_parse_names_last_scientific_name_wins() {
        let data = "5|First|x|scientific name\n5|Second|y|scientific name\n";
        let names = parse_names(Cursor::new(data)).unwrap();
        assert_eq!(names["5"], "Second");
    }

    #[test]
    fn test_parse_names_rejects_short_line() {
        let data = "1|root||scientific name\n2|Bacteria|scientific name\n";
        let err = parse_names(Cursor::new(data)).unwrap_err();
        match err {
            TaxdumpError::MissingFields {
                stage,
                line,
                expected,
                found,
            } => {
                assert_eq!(stage, Stage::Names);
                assert_eq!(line, 2);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_names_rejects_blank_line() {
        let data = "9|Homo sapiens||scientific name\n\n   \n";
        let err = parse_names(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            TaxdumpError::MissingFields {
                stage: Stage::Names,
                line: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_names_class_must_match_exactly() {
        let data = "7|Foo||Scientific Name\n8|Bar||scientific name <x>\n";
        let names = parse_names(Cursor::new(data)).unwrap();
        assert!(names.is_empty());
    }
}
