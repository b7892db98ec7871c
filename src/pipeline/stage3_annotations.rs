use std::collections::{BTreeMap, BTreeSet};

use crate::diagram::{DiagramContext, extract_gene_groups};
use crate::model::annotation::GeneAnnotationGroup;
use crate::model::species::Species;
use crate::pipeline::stage2_tables::Stage2Output;
use crate::pipeline::{PipelineError, WorkLayout};

pub type GeneGroupsByPathway = BTreeMap<String, Vec<GeneAnnotationGroup>>;

/// Annotation groups for every pathway. A missing diagram or sidecar aborts
/// the run.
pub fn run_stage3(
    stage2: &Stage2Output,
    species: Species,
    layout: &WorkLayout,
) -> Result<GeneGroupsByPathway, PipelineError> {
    let mut out = GeneGroupsByPathway::new();
    let Some(tables) = &stage2.tables else {
        return Ok(out);
    };

    let contrast_genes: BTreeSet<&str> = tables.contrast.keys().map(String::as_str).collect();
    let ctx = DiagramContext {
        contrast_genes: &contrast_genes,
        kegg_code: species.kegg_code(),
    };

    for pathway in &tables.pathways {
        let image = layout.diagram_image(&pathway.id);
        let groups = extract_gene_groups(pathway, &ctx, &image)?;
        tracing::info!(
            pathway = %pathway.id,
            groups = groups.len(),
            core = groups.iter().filter(|g| g.core).count(),
            "annotated pathway diagram"
        );
        out.insert(pathway.id.clone(), groups);
    }
    Ok(out)
}
