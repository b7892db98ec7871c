use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::model::GeneSetMapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    PathwayIds,
    EntrezIds,
    Names,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        if line.starts_with("PATHWAYIDS") {
            Some(Section::PathwayIds)
        } else if line.starts_with("ENTREZIDS") {
            Some(Section::EntrezIds)
        } else if line.starts_with("NAMES") {
            Some(Section::Names)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneSetFile {
    pub pathway_ids: Vec<String>,
    pub entrez_ids: Vec<Vec<String>>,
    pub gene_names: Vec<Vec<String>>,
}

impl GeneSetFile {
    /// Positional join of the three sections, restricted to `relevant` ids.
    /// Sections of unequal length are truncated to the shortest.
    pub fn into_mapping(self, relevant: &BTreeSet<&str>) -> GeneSetMapping {
        self.pathway_ids
            .into_iter()
            .zip(self.entrez_ids.into_iter().zip(self.gene_names))
            .filter(|(id, _)| relevant.contains(id.as_str()))
            .collect()
    }
}

/// Reads the PATHWAYIDS / ENTREZIDS / NAMES key-block file. Lines before the
/// first header are ignored; a blank line inside a list section is an empty
/// gene list so positions stay aligned.
pub fn parse_geneset_file(path: &Path) -> Result<GeneSetFile, InputError> {
    let reader = open_maybe_gz(path)?;
    parse_geneset_lines(reader)
}

pub fn parse_geneset_lines<R: BufRead>(mut reader: R) -> Result<GeneSetFile, InputError> {
    let mut out = GeneSetFile::default();
    let mut current: Option<Section> = None;
    let mut buf = String::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        if let Some(section) = Section::from_header(&buf) {
            current = Some(section);
            continue;
        }
        let data = buf.trim();
        match current {
            None => {}
            Some(Section::PathwayIds) => out.pathway_ids.push(data.to_string()),
            Some(Section::EntrezIds) => out.entrez_ids.push(split_tokens(data)),
            Some(Section::Names) => out.gene_names.push(split_tokens(data)),
        }
    }

    if out.pathway_ids.len() != out.entrez_ids.len() || out.pathway_ids.len() != out.gene_names.len()
    {
        tracing::warn!(
            pathways = out.pathway_ids.len(),
            entrez = out.entrez_ids.len(),
            names = out.gene_names.len(),
            "gene set sections differ in length; extra lines are ignored"
        );
    }
    Ok(out)
}

pub fn load_geneset_mapping(
    path: &Path,
    relevant: &BTreeSet<&str>,
) -> Result<GeneSetMapping, InputError> {
    let mapping = parse_geneset_file(path)?.into_mapping(relevant);
    tracing::info!(path = %path.display(), pathways = mapping.len(), "loaded gene sets");
    Ok(mapping)
}

fn split_tokens(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/genesets.rs"]
mod tests;
