use super::*;

const TRANSCRIPT: &str = "Loading packages\n\
__LATCH_WARNING_START__Only 12 genes mapped\nto Entrez ids__LATCH_WARNING_END__\n\
running GSEA\n\
__LATCH_ERROR_START__KEGG unreachable__LATCH_ERROR_END__ trailing \
__LATCH_ERROR_START__second__LATCH_ERROR_END__\n\
__LATCH_WARNING_START__unterminated\n";

#[test]
fn test_extract_non_greedy_across_newlines() {
    let errors = extract_messages(MessageKind::Error, TRANSCRIPT);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].body, "KEGG unreachable");
    assert_eq!(errors[1].body, "second");
    assert_eq!(errors[0].title, "Pathway enrichment analysis error");

    let warnings = extract_messages(MessageKind::Warning, TRANSCRIPT);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].body, "Only 12 genes mapped\nto Entrez ids");
    assert_eq!(warnings[0].title, "Pathway enrichment analysis warning");
}

#[test]
fn test_emit_errors_before_warnings() {
    let mut sink: Vec<ScriptMessage> = Vec::new();
    let n = emit_messages(TRANSCRIPT, &mut sink);
    assert_eq!(n, 3);
    let kinds: Vec<MessageKind> = sink.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![MessageKind::Error, MessageKind::Error, MessageKind::Warning]
    );
}

#[test]
fn test_plain_output_has_no_messages() {
    let mut sink: Vec<ScriptMessage> = Vec::new();
    assert_eq!(emit_messages("all good\n", &mut sink), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_kinds_do_not_cross_match() {
    let text = "__LATCH_ERROR_START__x__LATCH_WARNING_END__";
    assert!(extract_messages(MessageKind::Error, text).is_empty());
    assert!(extract_messages(MessageKind::Warning, text).is_empty());
}
