use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Warning,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Warning => "warning",
        }
    }

    fn flag(self) -> &'static str {
        match self {
            MessageKind::Error => "ERROR",
            MessageKind::Warning => "WARNING",
        }
    }
}

pub fn message_pattern(kind: MessageKind) -> Result<Regex, regex::Error> {
    let flag = kind.flag();
    Regex::new(&format!(
        "(?s)__LATCH_{flag}_START__(.*?)__LATCH_{flag}_END__"
    ))
}

static ERROR_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| message_pattern(MessageKind::Error).ok());
static WARNING_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| message_pattern(MessageKind::Warning).ok());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMessage {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

/// Receives in-band messages reported by the enrichment script.
pub trait MessageSink {
    fn emit(&mut self, message: &ScriptMessage);
}

/// Default sink: forwards messages to the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn emit(&mut self, message: &ScriptMessage) {
        match message.kind {
            MessageKind::Error => {
                tracing::error!(title = %message.title, "{}", message.body)
            }
            MessageKind::Warning => {
                tracing::warn!(title = %message.title, "{}", message.body)
            }
        }
    }
}

impl MessageSink for Vec<ScriptMessage> {
    fn emit(&mut self, message: &ScriptMessage) {
        self.push(message.clone());
    }
}

pub fn extract_messages(kind: MessageKind, output: &str) -> Vec<ScriptMessage> {
    let pattern = match kind {
        MessageKind::Error => ERROR_PATTERN.as_ref(),
        MessageKind::Warning => WARNING_PATTERN.as_ref(),
    };
    let Some(pattern) = pattern else {
        return Vec::new();
    };
    pattern
        .captures_iter(output)
        .filter_map(|caps| caps.get(1))
        .map(|body| ScriptMessage {
            kind,
            title: format!("Pathway enrichment analysis {}", kind.as_str()),
            body: body.as_str().to_string(),
        })
        .collect()
}

/// Emits every error, then every warning, found in `output`.
pub fn emit_messages(output: &str, sink: &mut dyn MessageSink) -> usize {
    let mut count = 0usize;
    for kind in [MessageKind::Error, MessageKind::Warning] {
        for message in extract_messages(kind, output) {
            sink.emit(&message);
            count += 1;
        }
    }
    count
}

#[cfg(test)]
#[path = "../../tests/src_inline/script/messages.rs"]
mod tests;
