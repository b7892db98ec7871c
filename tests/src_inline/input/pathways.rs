use super::*;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!(
        "kira_pathwayreport_pathways_{}_{}",
        std::process::id(),
        id
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const HEADER: &str = "\"\",\"ID\",\"Description\",\"setSize\",\"enrichmentScore\",\"NES\",\"pvalue\",\"p.adjust\",\"coreEnrichedGenes\",\"coreEntrezIDs\"\n";

#[test]
fn test_parse_rows_and_formatting() {
    let dir = make_temp_dir();
    let path = dir.join("table.csv");
    let body = format!(
        "{HEADER}\"1\",\"hsa04110\",\"Cell cycle\",124,0.612345678,2.00000,1.23456e-05,0.000987654,\"CDK1 CCNB1 MCM2\",\"983/891/4171\"\n\
         \"2\",\"hsa03030\",\"DNA replication\",36,-0.5,-1.75,0.0456789,NA,\"POLA1\",\"5422\"\n"
    );
    fs::write(&path, body).unwrap();

    let pathways = parse_pathway_table(&path).unwrap();
    assert_eq!(pathways.len(), 2);

    let p = &pathways[0];
    assert_eq!(p.id, "hsa04110");
    assert_eq!(p.name, "Cell cycle");
    assert_eq!(p.p_value, "1.23e-05");
    assert_eq!(p.p_adjusted, "0.000988");
    assert_eq!(p.enrichment_score, "0.612346");
    assert_eq!(p.normalized_enrichment_score, "2.0");
    assert_eq!(p.set_size, "124");
    assert_eq!(p.core_genes, vec!["CDK1", "CCNB1", "MCM2"]);
    assert_eq!(p.core_entrez_ids, vec!["983", "891", "4171"]);
    assert_eq!(p.leading_edge_size(), 3);

    assert_eq!(pathways[1].p_adjusted, "NA");
    assert_eq!(pathways[1].enrichment_score, "-0.5");
}

#[test]
fn test_symbol_and_entrez_lists_stay_aligned() {
    let dir = make_temp_dir();
    let path = dir.join("table.csv");
    fs::write(
        &path,
        format!("{HEADER}\"1\",\"hsa1\",\"P\",3,0.1,0.1,0.1,0.1,\"A B C\",\"1/2/3\"\n"),
    )
    .unwrap();
    let p = &parse_pathway_table(&path).unwrap()[0];
    let pairs: Vec<(&str, &str)> = p.entrez_to_symbol().collect();
    assert_eq!(pairs, vec![("1", "A"), ("2", "B"), ("3", "C")]);
}

#[test]
fn test_mismatched_lists_rejected() {
    let dir = make_temp_dir();
    let path = dir.join("table.csv");
    fs::write(
        &path,
        format!("{HEADER}\"1\",\"hsa1\",\"P\",3,0.1,0.1,0.1,0.1,\"A B\",\"1\"\n"),
    )
    .unwrap();
    let err = parse_pathway_table(&path).err().unwrap();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_missing_table_is_not_found() {
    let dir = make_temp_dir();
    let err = parse_pathway_table(&dir.join("KEGG").join("table.csv"))
        .err()
        .unwrap();
    assert!(err.is_not_found());
}

#[test]
fn test_parsing_is_repeatable() {
    let dir = make_temp_dir();
    let path = dir.join("table.csv");
    fs::write(
        &path,
        format!("{HEADER}\"1\",\"hsa1\",\"P\",3,0.1,0.1,0.1,0.1,\"A\",\"1\"\n"),
    )
    .unwrap();
    assert_eq!(
        parse_pathway_table(&path).unwrap(),
        parse_pathway_table(&path).unwrap()
    );
}
