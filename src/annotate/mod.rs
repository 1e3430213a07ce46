//! Diagnostic Annotator
//!
//! Maps raw compiler diagnostics back to lines of the submitted source and
//! attaches heuristic suggestions. Pure: a function of its two inputs, no
//! state, never fails on malformed input.

pub mod parser;
pub mod suggest;

pub use parser::{DiagnosticParser, IverilogDiagnostics, RawDiagnostic};
pub use suggest::LINE_NOT_FOUND;

use serde::{Deserialize, Serialize};

/// One annotated compiler diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// 1-based line number as reported by the compiler.
    pub line_number: usize,
    /// Diagnostic text following the line number, trimmed.
    pub message: String,
    /// Trimmed text of the referenced source line, or [`LINE_NOT_FOUND`]
    /// when the line number is out of range.
    pub source_line: String,
    /// Heuristic hints, in fixed rule order.
    pub suggestions: Vec<String>,
}

/// Annotate a compiler error stream against the source it was produced
/// from, using the Icarus Verilog diagnostic format.
///
/// Records come out in stream order, not line-number order.
pub fn annotate(diagnostic_stream: &str, source_text: &str) -> Vec<DiagnosticRecord> {
    annotate_with(&IverilogDiagnostics::new(), diagnostic_stream, source_text)
}

/// Annotate using an explicit parser implementation.
pub fn annotate_with(
    parser: &dyn DiagnosticParser,
    diagnostic_stream: &str,
    source_text: &str,
) -> Vec<DiagnosticRecord> {
    let lines: Vec<&str> = source_text.lines().collect();

    parser
        .parse(diagnostic_stream)
        .into_iter()
        .map(|raw| {
            // 1-based lookup; anything out of range gets the sentinel.
            let line = raw
                .line_number
                .checked_sub(1)
                .and_then(|idx| lines.get(idx).copied());

            // Heuristics see the untrimmed line so leading whitespace
            // still counts for the starts-with check.
            let suggestions = suggest::suggestions_for(line, &raw.message);

            DiagnosticRecord {
                line_number: raw.line_number,
                message: raw.message,
                source_line: line
                    .map(|text| text.trim().to_string())
                    .unwrap_or_else(|| LINE_NOT_FOUND.to_string()),
                suggestions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_empty_stream() {
        assert!(annotate("", "module m;\nendmodule").is_empty());
    }

    #[test]
    fn test_annotate_looks_up_source_line() {
        let source = "module m;\nwire w;\ninpu a;\nendmodule";
        let records = annotate("test.v:3: syntax error", source);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line_number, 3);
        assert_eq!(records[0].message, "syntax error");
        assert_eq!(records[0].source_line, "inpu a;");
    }

    #[test]
    fn test_annotate_out_of_range_line() {
        let source = "module m;\nendmodule";
        let records = annotate("test.v:10: syntax error", source);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_line, LINE_NOT_FOUND);
        assert!(records[0].suggestions.is_empty());
    }

    #[test]
    fn test_annotate_line_zero() {
        let records = annotate("test.v:0: weird", "module m;\nendmodule");
        assert_eq!(records[0].source_line, LINE_NOT_FOUND);
    }

    #[test]
    fn test_annotate_stores_trimmed_line() {
        let source = "module m;\n    wire a;\nendmodule";
        let records = annotate("test.v:2: something", source);
        assert_eq!(records[0].source_line, "wire a;");
    }

    #[test]
    fn test_annotate_is_deterministic() {
        let source = "module m;\nwire a\nendmodule";
        let stream = "test.v:2: syntax error\ntest.v:9: error: giving up.";
        assert_eq!(annotate(stream, source), annotate(stream, source));
    }
}
