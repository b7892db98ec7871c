use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::model::species::Species;

pub mod messages;

use messages::{MessageSink, emit_messages};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("IO error while reading script output: {0}")]
    Io(#[from] std::io::Error),
    #[error("enrichment script failed with exit code '{code}'")]
    Failed { code: i32 },
    #[error("enrichment script was terminated before exiting")]
    Terminated,
}

#[derive(Debug, Clone)]
pub struct ScriptInvocation {
    pub interpreter: String,
    pub script: PathBuf,
    pub contrast_csv: PathBuf,
    pub number_of_pathways: u32,
    pub species: Species,
    pub work_dir: PathBuf,
}

impl ScriptInvocation {
    pub fn args(&self) -> Vec<String> {
        vec![
            self.script.display().to_string(),
            self.contrast_csv.display().to_string(),
            self.number_of_pathways.to_string(),
            self.species.msigdb_name().to_string(),
            self.species.go_annotation_db().to_string(),
            self.species.kegg_code().to_string(),
        ]
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.args(self.args())
            .current_dir(&self.work_dir)
            .stdin(Stdio::null());
        cmd
    }
}

#[derive(Debug)]
pub struct CapturedRun {
    pub status: ExitStatus,
    pub output: String,
}

/// Runs `command` to completion with stderr merged into stdout. Each line is
/// echoed to `echo` as it arrives and kept in the returned transcript.
pub fn run_and_capture_output(
    mut command: Command,
    echo: &mut dyn Write,
) -> Result<CapturedRun, ScriptError> {
    let program = command.get_program().to_string_lossy().into_owned();
    let (reader, writer) = std::io::pipe()?;
    command.stdout(writer.try_clone()?).stderr(writer);
    let mut child = command
        .spawn()
        .map_err(|source| ScriptError::Spawn { program, source })?;
    // The builder holds write ends of the pipe; release them so EOF arrives.
    drop(command);

    let mut reader = BufReader::new(reader);
    let mut output = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        echo.write_all(line.as_bytes())?;
        echo.flush()?;
        output.push_str(&line);
    }

    let status = child.wait()?;
    Ok(CapturedRun { status, output })
}

/// Runs the enrichment script, forwards its in-band messages, then gates on
/// the exit status.
pub fn run_enrichment_script(
    invocation: &ScriptInvocation,
    sink: &mut dyn MessageSink,
    echo: &mut dyn Write,
) -> Result<CapturedRun, ScriptError> {
    tracing::info!(
        interpreter = %invocation.interpreter,
        script = %invocation.script.display(),
        species = invocation.species.kegg_code(),
        pathways = invocation.number_of_pathways,
        "running enrichment script"
    );
    let run = run_and_capture_output(invocation.command(), echo)?;
    tracing::info!("enrichment script finished");

    let emitted = emit_messages(&run.output, sink);
    if emitted > 0 {
        tracing::debug!(messages = emitted, "forwarded script messages");
    }

    check_status(run.status)?;
    Ok(run)
}

pub fn check_status(status: ExitStatus) -> Result<(), ScriptError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(ScriptError::Failed { code }),
        None => Err(ScriptError::Terminated),
    }
}

pub fn resolve_contrast_path(path: &Path) -> std::io::Result<PathBuf> {
    std::fs::canonicalize(path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/script/tests.rs"]
mod tests;
