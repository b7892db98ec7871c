use super::*;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::script::messages::{MessageKind, ScriptMessage};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!(
        "kira_pathwayreport_script_{}_{}",
        std::process::id(),
        id
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn invocation(dir: &Path, body: &str) -> ScriptInvocation {
    let script = dir.join("fake.sh");
    fs::write(&script, body).unwrap();
    ScriptInvocation {
        interpreter: "sh".to_string(),
        script,
        contrast_csv: dir.join("contrast.csv"),
        number_of_pathways: 7,
        species: Species::Mouse,
        work_dir: dir.to_path_buf(),
    }
}

#[test]
fn test_args_carry_species_identifiers() {
    let dir = make_temp_dir();
    let inv = invocation(&dir, "");
    let args = inv.args();
    assert_eq!(args.len(), 6);
    assert_eq!(args[2], "7");
    assert_eq!(&args[3..], ["Mus musculus", "org.Mm.eg.db", "mmu"]);
}

#[test]
fn test_capture_merges_stdout_and_stderr() {
    let dir = make_temp_dir();
    let inv = invocation(&dir, "echo out-line\necho err-line 1>&2\necho \"args: $2 $5\"\n");
    let mut echo = Vec::new();
    let run = run_and_capture_output(inv.command(), &mut echo).unwrap();
    assert!(run.status.success());
    assert!(run.output.contains("out-line\n"));
    assert!(run.output.contains("err-line\n"));
    assert!(run.output.contains("args: 7 mmu\n"));
    assert_eq!(String::from_utf8(echo).unwrap(), run.output);
}

#[test]
fn test_script_runs_in_work_dir() {
    let dir = make_temp_dir();
    let inv = invocation(&dir, "mkdir -p res && echo ok > res/marker.txt\n");
    let mut sink: Vec<ScriptMessage> = Vec::new();
    run_enrichment_script(&inv, &mut sink, &mut std::io::sink()).unwrap();
    assert!(dir.join("res").join("marker.txt").is_file());
}

#[test]
fn test_nonzero_exit_is_fatal_with_code() {
    let dir = make_temp_dir();
    let inv = invocation(
        &dir,
        "echo '__LATCH_ERROR_START__no genes mapped__LATCH_ERROR_END__'\nexit 2\n",
    );
    let mut sink: Vec<ScriptMessage> = Vec::new();
    let err = run_enrichment_script(&inv, &mut sink, &mut std::io::sink())
        .err()
        .unwrap();
    assert!(matches!(err, ScriptError::Failed { code: 2 }));
    assert!(err.to_string().contains('2'));
    // messages are forwarded even when the run fails
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].kind, MessageKind::Error);
    assert_eq!(sink[0].body, "no genes mapped");
}

#[test]
fn test_warnings_do_not_halt() {
    let dir = make_temp_dir();
    let inv = invocation(
        &dir,
        "echo '__LATCH_WARNING_START__low counts__LATCH_WARNING_END__'\n",
    );
    let mut sink: Vec<ScriptMessage> = Vec::new();
    run_enrichment_script(&inv, &mut sink, &mut std::io::sink()).unwrap();
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].kind, MessageKind::Warning);
}

#[test]
fn test_missing_interpreter_is_spawn_error() {
    let dir = make_temp_dir();
    let mut inv = invocation(&dir, "");
    inv.interpreter = "kira-pathwayreport-no-such-interpreter".to_string();
    let err = run_and_capture_output(inv.command(), &mut std::io::sink())
        .err()
        .unwrap();
    assert!(matches!(err, ScriptError::Spawn { .. }));
}
