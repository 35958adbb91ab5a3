use serde::Serialize;

use crate::models::FileRecord;
use crate::operations::{QueueSummary, ScanRequest, SupportedResult};

/// How command results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Minified,
    Pretty,
    Text,
}

impl OutputFormat {
    /// Parse a format name; unknown names fall back to minified JSON.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "pretty" => OutputFormat::Pretty,
            "text" => OutputFormat::Text,
            _ => OutputFormat::Minified,
        }
    }
}

/// Queue listing printed by `check`, `list`, and the session.
#[derive(Debug, Serialize)]
pub struct QueueView<'a> {
    pub files: &'a [FileRecord],
    pub summary: QueueSummary,
}

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format_error(&e))
}

/// Format a result as indented JSON.
pub fn format_pretty<T: Serialize>(result: &T) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| format_error(&e))
}

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

/// One card per record, followed by the summary lines.
#[must_use]
pub fn render_queue(view: &QueueView<'_>) -> String {
    if view.files.is_empty() {
        return "queue is empty".to_string();
    }
    let mut out = String::new();
    for f in view.files {
        out.push_str(&render_card(f));
        out.push('\n');
    }
    out.push_str(&view.summary.headline);
    out.push('\n');
    out.push_str(&view.summary.detail);
    out
}

fn render_card(f: &FileRecord) -> String {
    let lang = f.language.map_or(String::new(), |l| format!(" [{}]", l.name));
    let lines = if f.lines > 0 {
        crate::intake::sniff::format_count(f.lines)
    } else {
        "—".to_string()
    };
    format!(
        "{:<7} {}{}\n        id: {}  lines: {}  size: {}\n        {}: {}",
        f.status.as_str(),
        f.source,
        lang,
        f.id,
        lines,
        f.size_formatted,
        f.status_label,
        f.message
    )
}

#[must_use]
pub fn render_scan(request: &ScanRequest) -> String {
    let mut out = request.announcement();
    for f in &request.files {
        out.push_str(&format!(
            "\n  {} | {} | {} lines | {}",
            f.language.map_or("?", |l| l.name),
            f.name,
            f.lines,
            f.size_formatted
        ));
    }
    out
}

#[must_use]
pub fn render_supported(result: &SupportedResult) -> String {
    result
        .extensions
        .iter()
        .map(|e| format!("{:<6} {:<11} {}", e.ext, e.lang, e.style))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use crate::operations::{list_supported, summarize_queue};
    use crate::queue::FileQueue;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn format_json_minified() {
        let data = TestData {
            name: "test".into(),
            value: 42,
        };
        let json = format_json(&data);
        assert!(!json.contains('\n'));
        assert!(json.contains("\"name\":\"test\""));
    }

    #[test]
    fn format_pretty_is_indented() {
        let data = TestData {
            name: "test".into(),
            value: 42,
        };
        assert!(format_pretty(&data).contains('\n'));
    }

    #[test]
    fn format_error_produces_json() {
        let err = "something \"went\" wrong";
        let json = format_error(&err);
        assert!(json.starts_with("{\"error\""));
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }

    #[test]
    fn format_error_escapes_backslashes_and_newlines() {
        let err = crate::error::ShieldError::FileNotFound {
            path: "C:\\work\\a.py".into(),
        };
        let json = format_error(&err);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "file not found: C:\\work\\a.py");

        let json = format_error(&"line1\nline2\tend");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "line1\nline2\tend");
    }

    #[test]
    fn output_format_parse() {
        assert_eq!(OutputFormat::parse("TEXT"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("pretty"), OutputFormat::Pretty);
        assert_eq!(OutputFormat::parse("whatever"), OutputFormat::Minified);
    }

    #[test]
    fn render_card_shows_dash_for_zero_lines() {
        let record = FileRecord::new("empty.py", "empty.py", 0).with_verdict(
            Status::Warning,
            "Empty",
            "This file is empty (0 bytes). Nothing to analyse.",
        );
        let card = render_card(&record);
        assert!(card.starts_with("warning empty.py"));
        assert!(card.contains("lines: —"));
        assert!(card.contains("size: 0 B"));
        assert!(card.contains("Empty: This file is empty"));
    }

    #[test]
    fn render_empty_queue() {
        let q = FileQueue::new();
        let view = QueueView {
            files: q.records(),
            summary: summarize_queue(&q),
        };
        assert_eq!(render_queue(&view), "queue is empty");
    }

    #[test]
    fn render_supported_lists_each_extension() {
        let text = render_supported(&list_supported());
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains(".java"));
    }
}
