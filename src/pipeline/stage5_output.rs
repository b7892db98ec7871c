use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::stage4_assemble::Stage4Output;
use crate::pipeline::{PipelineError, RunConfig, WorkLayout, output_err};
use crate::report::html::{DEFAULT_TEMPLATE, render_report_html};
use crate::report::slugify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub report_dir: PathBuf,
    /// Copied files, relative to `report_dir`, sorted.
    pub files: Vec<PathBuf>,
}

pub fn load_template(path: Option<&Path>) -> Result<String, PipelineError> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(output_err(p)),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

pub fn run_stage5(
    config: &RunConfig,
    layout: &WorkLayout,
    assembled: &Stage4Output,
) -> Result<RunOutcome, PipelineError> {
    let results_dir = layout.results_dir();
    fs::create_dir_all(&results_dir).map_err(output_err(&results_dir))?;

    for diagram in &assembled.diagrams {
        let from = layout.diagram_image(&diagram.pathway_id);
        let to = results_dir.join(&diagram.relative_path);
        move_file(&from, &to)?;
    }

    let template = load_template(config.template.as_deref())?;
    let html = render_report_html(&template, &assembled.report)?;
    let report_path = layout.report_path();
    fs::write(&report_path, html).map_err(output_err(&report_path))?;
    tracing::info!(
        path = %report_path.display(),
        pathways = assembled.report.show_pathways(),
        "wrote report"
    );

    let report_dir = config
        .output_location
        .join(slugify(&config.report_name, true));
    let files = copy_dir_recursive(&results_dir, &report_dir)?;
    tracing::info!(
        dest = %report_dir.display(),
        files = files.len(),
        "copied results to output location"
    );
    Ok(RunOutcome { report_dir, files })
}

fn move_file(from: &Path, to: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(output_err(parent))?;
    }
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    // rename fails across filesystems
    fs::copy(from, to).map_err(output_err(from))?;
    fs::remove_file(from).map_err(output_err(from))
}

/// Copies `src` into `dest`, returning the copied files relative to `dest`.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut files = Vec::new();
    let mut pending = vec![PathBuf::new()];
    while let Some(rel) = pending.pop() {
        let dir = src.join(&rel);
        let target = dest.join(&rel);
        fs::create_dir_all(&target).map_err(output_err(&target))?;
        for entry in fs::read_dir(&dir).map_err(output_err(&dir))? {
            let entry = entry.map_err(output_err(&dir))?;
            let child = rel.join(entry.file_name());
            let file_type = entry.file_type().map_err(output_err(&dir))?;
            if file_type.is_dir() {
                pending.push(child);
            } else {
                let to = dest.join(&child);
                fs::copy(entry.path(), &to).map_err(output_err(&to))?;
                files.push(child);
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_output.rs"]
mod tests;
