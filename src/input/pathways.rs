use std::path::Path;

use crate::input::format::{P_VALUE_DIGITS, SCORE_DIGITS, format_cell};
use crate::input::{InputError, open_csv};
use crate::model::pathway::PathwayRecord;

const COLUMNS: [&str; 9] = [
    "ID",
    "Description",
    "pvalue",
    "p.adjust",
    "enrichmentScore",
    "NES",
    "setSize",
    "coreEnrichedGenes",
    "coreEntrezIDs",
];

/// Parses the enrichment table. A missing table surfaces as
/// `InputError::NotFound`; the script writes none when nothing is enriched.
pub fn parse_pathway_table(path: &Path) -> Result<Vec<PathwayRecord>, InputError> {
    let (mut reader, idx) = open_csv(path, &COLUMNS)?;
    let mut pathways = Vec::new();

    for (row_no, row) in reader.records().enumerate() {
        let row = row.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let field = |i: usize| row.get(idx[i]).unwrap_or("");

        let core_genes = split_list(field(7), ' ');
        let core_entrez_ids = split_list(field(8), '/');
        if core_genes.len() != core_entrez_ids.len() {
            return Err(InputError::Parse(format!(
                "pathway row {} ({}): {} core genes but {} Entrez ids",
                row_no + 1,
                field(0),
                core_genes.len(),
                core_entrez_ids.len()
            )));
        }

        pathways.push(PathwayRecord {
            id: field(0).to_string(),
            name: field(1).to_string(),
            p_value: format_cell(field(2), P_VALUE_DIGITS),
            p_adjusted: format_cell(field(3), P_VALUE_DIGITS),
            enrichment_score: format_cell(field(4), SCORE_DIGITS),
            normalized_enrichment_score: format_cell(field(5), SCORE_DIGITS),
            set_size: field(6).to_string(),
            core_genes,
            core_entrez_ids,
        });
    }

    tracing::info!(path = %path.display(), pathways = pathways.len(), "parsed pathway table");
    Ok(pathways)
}

fn split_list(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/pathways.rs"]
mod tests;
