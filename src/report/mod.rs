use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::annotation::GeneAnnotationGroup;
use crate::model::pathway::{PathwayRecord, PathwayView};
use crate::model::{ContrastTable, GeneSetMapping};

pub mod html;

/// Serializes `data` compactly with every `\` and `"` escaped so the text
/// can sit inside a double-quoted string in the report's script block and
/// decode back to the same JSON.
pub fn js_injectable<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(data)?
        .replace('\\', "\\\\")
        .replace('"', "\\\""))
}

/// Path-safe name: `/` always becomes `_`, spaces only when not kept.
pub fn slugify(value: &str, keep_spaces: bool) -> String {
    let value = value.replace('/', "_");
    if keep_spaces {
        value
    } else {
        value.replace(' ', "_")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pathview {
    pub id: String,
    pub path: String,
}

/// Pathway section of the report, every script-bound value pre-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwaySection {
    pub pathway_id_to_gene_sets: String,
    pub pathway_id_to_gene_groups: String,
    pub pathway_data: String,
    pub contrast_data: String,
    pub pathviews: Vec<Pathview>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    pub report_name: String,
    pub pathways: Option<PathwaySection>,
}

impl ReportData {
    pub fn without_pathways(report_name: &str) -> Self {
        ReportData {
            report_name: report_name.to_string(),
            pathways: None,
        }
    }

    pub fn show_pathways(&self) -> bool {
        self.pathways.is_some()
    }
}

pub struct SectionInputs<'a> {
    pub contrast: &'a ContrastTable,
    pub pathways: &'a [PathwayRecord],
    pub gene_groups: &'a BTreeMap<String, Vec<GeneAnnotationGroup>>,
    pub gene_sets: &'a GeneSetMapping,
    pub pathviews: Vec<Pathview>,
}

pub fn build_pathway_section(inputs: SectionInputs<'_>) -> serde_json::Result<PathwaySection> {
    let views: Vec<PathwayView<'_>> = inputs.pathways.iter().map(PathwayView::from).collect();
    Ok(PathwaySection {
        pathway_id_to_gene_sets: js_injectable(inputs.gene_sets)?,
        pathway_id_to_gene_groups: js_injectable(inputs.gene_groups)?,
        pathway_data: js_injectable(&views)?,
        contrast_data: js_injectable(inputs.contrast)?,
        pathviews: inputs.pathviews,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
