use std::io::Write;
use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::model::species::Species;
use crate::script::ScriptError;
use crate::script::messages::MessageSink;

pub mod stage1_enrichment;
pub mod stage2_tables;
pub mod stage3_annotations;
pub mod stage4_assemble;
pub mod stage5_output;

use stage1_enrichment::run_stage1;
use stage2_tables::run_stage2;
use stage3_annotations::run_stage3;
use stage4_assemble::{Stage4Input, run_stage4};
use stage5_output::{RunOutcome, run_stage5};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("output error at {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub contrast_csv: PathBuf,
    pub report_name: String,
    pub output_location: PathBuf,
    pub species: Species,
    pub number_of_pathways: u32,
    pub work_dir: PathBuf,
    pub interpreter: String,
    pub script: PathBuf,
    pub genesets: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub skip_script: bool,
}

/// Fixed locations the enrichment script reads and writes under the work dir.
#[derive(Debug, Clone)]
pub struct WorkLayout {
    pub work_dir: PathBuf,
}

impl WorkLayout {
    pub fn new(work_dir: &Path) -> Self {
        WorkLayout {
            work_dir: work_dir.to_path_buf(),
        }
    }

    pub fn results_dir(&self) -> PathBuf {
        self.work_dir.join("res")
    }

    pub fn pathway_table(&self) -> PathBuf {
        self.results_dir().join("KEGG").join("table.csv")
    }

    pub fn default_genesets(&self) -> PathBuf {
        self.work_dir.join("tempres").join("genesets.txt")
    }

    pub fn report_path(&self) -> PathBuf {
        self.results_dir().join("Report.html")
    }

    pub fn diagram_image(&self, pathway_id: &str) -> PathBuf {
        crate::diagram::diagram_image_path(&self.work_dir, pathway_id)
    }
}

pub fn run_pipeline(
    config: &RunConfig,
    sink: &mut dyn MessageSink,
    echo: &mut dyn Write,
) -> Result<RunOutcome, PipelineError> {
    let layout = WorkLayout::new(&config.work_dir);

    run_stage1(config, sink, echo)?;
    let tables = run_stage2(config, &layout)?;
    let groups = run_stage3(&tables, config.species, &layout)?;
    let genesets_path = config
        .genesets
        .clone()
        .unwrap_or_else(|| layout.default_genesets());
    let assembled = run_stage4(&Stage4Input {
        report_name: &config.report_name,
        tables: &tables,
        gene_groups: groups,
        genesets_path: &genesets_path,
    })?;
    run_stage5(config, &layout, &assembled)
}

pub(crate) fn output_err(path: &Path) -> impl FnOnce(std::io::Error) -> PipelineError + '_ {
    move |source| PipelineError::Output {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
