//! Diagnostic Parsing
//!
//! Extraction of line-referenced diagnostics from a compiler's raw error
//! stream. The stream format is isolated behind [`DiagnosticParser`] so an
//! alternate compiler can be supported without touching the suggestion
//! logic.

use regex::Regex;

/// A diagnostic pulled out of the error stream, before source-line lookup
/// and suggestion attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDiagnostic {
    /// 1-based line number as reported by the compiler.
    pub line_number: usize,
    /// Trimmed message text following the line number.
    pub message: String,
}

/// Extracts diagnostics from one compiler's error-stream format.
pub trait DiagnosticParser {
    /// Return every diagnostic found in `stream`, in stream order.
    fn parse(&self, stream: &str) -> Vec<RawDiagnostic>;
}

/// Parser for Icarus Verilog style diagnostics.
///
/// The compiler reports errors as lines containing `<file>:<line>: <message>`;
/// only the `:<line>: <message>` tail is matched, so the file name is
/// irrelevant.
#[derive(Debug, Clone)]
pub struct IverilogDiagnostics {
    pattern: Regex,
}

impl Default for IverilogDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl IverilogDiagnostics {
    pub fn new() -> Self {
        Self {
            // Greedy tail: the message runs to the end of the matched line.
            pattern: Regex::new(r":(\d+): (.+)").expect("diagnostic pattern compiles"),
        }
    }
}

impl DiagnosticParser for IverilogDiagnostics {
    fn parse(&self, stream: &str) -> Vec<RawDiagnostic> {
        self.pattern
            .captures_iter(stream)
            .filter_map(|caps| {
                // A digit run too large for usize is not a real line number.
                let line_number = caps[1].parse().ok()?;
                Some(RawDiagnostic {
                    line_number,
                    message: caps[2].trim().to_string(),
                })
            })
            .collect()
    }
}
