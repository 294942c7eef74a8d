use std::collections::HashSet;
use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use taxdump2json::ranks::rank_code;
use taxdump2json::{read_names_file, read_table, NcbiTaxonomy};

const NODES_DATA: &str = "1\t|\t1\t|\tno rank\t|\t\t|\t8\t|
2\t|\t131567\t|\tsuperkingdom\t|\t\t|\t0\t|
131567\t|\t1\t|\tno rank\t|\t\t|\t8\t|
1224\t|\t2\t|\tphylum\t|\t\t|\t0\t|
561\t|\t543\t|\tgenus\t|\t\t|\t0\t|
562\t|\t561\t|\tspecies\t|\tEC\t|\t0\t|
";

const NAMES_DATA: &str = "1\t|\troot\t|\t\t|\tscientific name\t|
2\t|\tBacteria\t|\tBacteria <bacteria>\t|\tscientific name\t|
2\t|\teubacteria\t|\t\t|\tgenbank common name\t|
131567\t|\tcellular organisms\t|\t\t|\tscientific name\t|
1224\t|\tPseudomonadota\t|\t\t|\tscientific name\t|
1224\t|\tProteobacteria\t|\t\t|\tsynonym\t|
562\t|\tEscherichia coli\t|\t\t|\tscientific name\t|
562\t|\tE. coli\t|\t\t|\tcommon name\t|
";

fn load() -> (tempfile::TempDir, NcbiTaxonomy) {
    let dir = tempdir().unwrap();
    let names_path = dir.path().join("names.dmp");
    let nodes_path = dir.path().join("nodes.dmp");
    fs::write(&names_path, NAMES_DATA).unwrap();
    fs::write(&nodes_path, NODES_DATA).unwrap();

    let names = read_names_file(&names_path).unwrap();
    let taxonomy = NcbiTaxonomy::new(&nodes_path, &names).unwrap();
    (dir, taxonomy)
}

#[test]
fn test_join_matches_rank_table_and_names() {
    let (_dir, taxonomy) = load();
    let names = taxdump2json::parse_names(NAMES_DATA.as_bytes()).unwrap();

    for line in NODES_DATA.lines() {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let record = &taxonomy.records[fields[0]];
        assert_eq!(record.rank, rank_code(fields[2]));
        assert_eq!(
            record.name,
            names.get(fields[0]).cloned().unwrap_or_default()
        );
    }
    assert_eq!(taxonomy.records["561"].name, "");
    assert_eq!(taxonomy.records["1224"].name, "Pseudomonadota");
}

#[test]
fn test_round_trip_through_json() {
    let (dir, taxonomy) = load();
    let output = dir.path().join("ncbitaxonomy.json");
    taxonomy.write_to_disk(&output).unwrap();

    let decoded = read_table(&output).unwrap();
    assert_eq!(decoded, taxonomy.records);

    let value: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    let keys: HashSet<&str> = object.keys().map(String::as_str).collect();
    let expected: HashSet<&str> = taxonomy.records.keys().map(String::as_str).collect();
    assert_eq!(keys, expected);

    for (key, record) in &taxonomy.records {
        let entry = &object[key];
        assert_eq!(entry["i"], record.id);
        assert_eq!(entry["p"], record.parent_id);
        assert_eq!(entry["r"], record.rank);
        assert_eq!(entry["n"], record.name.as_str());
        assert_eq!(entry.as_object().unwrap().len(), 4);
    }
}
