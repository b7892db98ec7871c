use std::io::Write;

use crate::input::InputError;
use crate::pipeline::{PipelineError, RunConfig};
use crate::script::messages::MessageSink;
use crate::script::{ScriptInvocation, resolve_contrast_path, run_enrichment_script};

pub fn build_invocation(config: &RunConfig) -> Result<ScriptInvocation, InputError> {
    let contrast_csv = resolve_contrast_path(&config.contrast_csv).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InputError::NotFound(config.contrast_csv.clone())
        } else {
            InputError::Io(e)
        }
    })?;
    Ok(ScriptInvocation {
        interpreter: config.interpreter.clone(),
        script: config.script.clone(),
        contrast_csv,
        number_of_pathways: config.number_of_pathways,
        species: config.species,
        work_dir: config.work_dir.clone(),
    })
}

pub fn run_stage1(
    config: &RunConfig,
    sink: &mut dyn MessageSink,
    echo: &mut dyn Write,
) -> Result<(), PipelineError> {
    let invocation = build_invocation(config)?;
    if config.skip_script {
        tracing::info!("--skip-script set; reusing existing enrichment outputs");
        return Ok(());
    }
    run_enrichment_script(&invocation, sink, echo)?;
    Ok(())
}
