use std::path::Path;

use crate::input::format::{FOLD_CHANGE_DIGITS, P_VALUE_DIGITS, format_cell};
use crate::input::{InputError, open_csv};
use crate::model::ContrastTable;

// The differential-expression workflow leaves the gene column unnamed.
const GENE_COLUMN: &str = "";

pub fn parse_contrast_csv(path: &Path) -> Result<ContrastTable, InputError> {
    let (mut reader, idx) = open_csv(path, &[GENE_COLUMN, "log2FoldChange", "pvalue", "padj"])?;
    let mut table = ContrastTable::new();
    let mut line_no = 1usize;

    for row in reader.records() {
        line_no += 1;
        let row = row.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let gene = row.get(idx[0]).unwrap_or("").trim();
        if gene.is_empty() {
            tracing::warn!(line = line_no, "contrast row has empty gene symbol; skipping");
            continue;
        }
        if table.contains_key(gene) {
            tracing::warn!(
                line = line_no,
                gene,
                "duplicate gene in contrast table; keeping first"
            );
            continue;
        }
        let values = [
            format_cell(row.get(idx[1]).unwrap_or(""), FOLD_CHANGE_DIGITS),
            format_cell(row.get(idx[2]).unwrap_or(""), P_VALUE_DIGITS),
            format_cell(row.get(idx[3]).unwrap_or(""), P_VALUE_DIGITS),
        ];
        table.insert(gene.to_string(), values);
    }

    tracing::info!(path = %path.display(), genes = table.len(), "parsed contrast table");
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/contrast.rs"]
mod tests;
