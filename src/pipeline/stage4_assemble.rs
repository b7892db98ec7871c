use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::input::genesets::load_geneset_mapping;
use crate::pipeline::PipelineError;
use crate::pipeline::stage2_tables::Stage2Output;
use crate::pipeline::stage3_annotations::GeneGroupsByPathway;
use crate::report::{Pathview, ReportData, SectionInputs, build_pathway_section, slugify};

pub const PATHVIEW_DIR: &str = "Pathview";

pub struct Stage4Input<'a> {
    pub report_name: &'a str,
    pub tables: &'a Stage2Output,
    pub gene_groups: GeneGroupsByPathway,
    pub genesets_path: &'a Path,
}

/// A diagram scheduled to move into the results dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramMove {
    pub pathway_id: String,
    pub relative_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Stage4Output {
    pub report: ReportData,
    pub diagrams: Vec<DiagramMove>,
}

pub fn pathview_relative_path(pathway_name: &str) -> PathBuf {
    Path::new(PATHVIEW_DIR).join(format!("{}.png", slugify(pathway_name, false)))
}

pub fn run_stage4(input: &Stage4Input<'_>) -> Result<Stage4Output, PipelineError> {
    let Some(tables) = &input.tables.tables else {
        return Ok(Stage4Output {
            report: ReportData::without_pathways(input.report_name),
            diagrams: Vec::new(),
        });
    };

    let mut diagrams = Vec::with_capacity(tables.pathways.len());
    let mut pathviews = Vec::with_capacity(tables.pathways.len());
    for pathway in &tables.pathways {
        let relative_path = pathview_relative_path(&pathway.name);
        pathviews.push(Pathview {
            id: pathway.id.clone(),
            path: format!("./{}/{}.png", PATHVIEW_DIR, slugify(&pathway.name, false)),
        });
        diagrams.push(DiagramMove {
            pathway_id: pathway.id.clone(),
            relative_path,
        });
    }

    let relevant: BTreeSet<&str> = tables.pathways.iter().map(|p| p.id.as_str()).collect();
    let gene_sets = load_geneset_mapping(input.genesets_path, &relevant)?;

    let section = build_pathway_section(SectionInputs {
        contrast: &tables.contrast,
        pathways: &tables.pathways,
        gene_groups: &input.gene_groups,
        gene_sets: &gene_sets,
        pathviews,
    })?;

    Ok(Stage4Output {
        report: ReportData {
            report_name: input.report_name.to_string(),
            pathways: Some(section),
        },
        diagrams,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_assemble.rs"]
mod tests;
