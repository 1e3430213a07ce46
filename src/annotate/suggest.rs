//! Heuristic Suggestions
//!
//! Non-authoritative hints attached to diagnostics via line-oriented
//! substring checks. No grammar, no semantics; precision is best-effort
//! (a `;` inside a string literal suppresses the missing-semicolon rule,
//! for example).

/// Placeholder stored when a diagnostic references a line outside the
/// submitted source.
pub const LINE_NOT_FOUND: &str = "Line not found.";

/// Hint for a likely misspelling of the `input` keyword.
pub const HINT_INPUT_TYPO: &str = "Did you mean `input`?";

/// Hint for a statement that looks unterminated.
pub const HINT_MISSING_SEMICOLON: &str = "Possible missing semicolon (`;`) at the end.";

/// Hint for a failed module instantiation.
pub const HINT_MODULE_INSTANTIATION: &str =
    "Check if the module name or ports are declared correctly.";

/// Collect hints for one diagnostic, in fixed rule order.
///
/// `source_line` is the untrimmed line text, or `None` when the reported
/// line number falls outside the submitted source. Line-content rules are
/// skipped in that case, so the sentinel text can never trigger them; the
/// message rule is always evaluated. The rules are independent and every
/// one that fires contributes a hint.
pub fn suggestions_for(source_line: Option<&str>, message: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(line) = source_line {
        if line.contains("inpu") {
            suggestions.push(HINT_INPUT_TYPO.to_string());
        }

        let trimmed = line.trim();
        if !line.contains("endmodule")
            && !line.contains(';')
            && !trimmed.ends_with("begin")
            && !trimmed.starts_with("//")
        {
            suggestions.push(HINT_MISSING_SEMICOLON.to_string());
        }
    }

    if message.contains("Invalid module instantiation") {
        suggestions.push(HINT_MODULE_INSTANTIATION.to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspelled_input_fires_typo_hint() {
        let suggestions = suggestions_for(Some("inpu a;"), "syntax error");
        assert_eq!(suggestions, vec![HINT_INPUT_TYPO.to_string()]);
    }

    #[test]
    fn test_semicolon_suppresses_missing_semicolon() {
        let suggestions = suggestions_for(Some("wire a;"), "syntax error");
        assert!(!suggestions.contains(&HINT_MISSING_SEMICOLON.to_string()));
    }

    #[test]
    fn test_unterminated_statement_fires() {
        let suggestions = suggestions_for(Some("wire a"), "syntax error");
        assert_eq!(suggestions, vec![HINT_MISSING_SEMICOLON.to_string()]);
    }

    #[test]
    fn test_begin_line_does_not_fire() {
        let suggestions = suggestions_for(Some("if (x) begin"), "syntax error");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_comment_line_does_not_fire() {
        let suggestions = suggestions_for(Some("  // just a note"), "syntax error");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_endmodule_does_not_fire() {
        let suggestions = suggestions_for(Some("endmodule"), "syntax error");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_instantiation_hint_from_message() {
        let suggestions = suggestions_for(Some("foo f0(.a(b));"), "Invalid module instantiation");
        assert_eq!(suggestions, vec![HINT_MODULE_INSTANTIATION.to_string()]);
    }

    #[test]
    fn test_message_rule_fires_without_source_line() {
        let suggestions = suggestions_for(None, "Invalid module instantiation");
        assert_eq!(suggestions, vec![HINT_MODULE_INSTANTIATION.to_string()]);
    }

    #[test]
    fn test_no_source_line_skips_line_rules() {
        // The sentinel text itself contains no semicolon; line rules must
        // not run against an undefined line.
        let suggestions = suggestions_for(None, "syntax error");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_independent_rules_stack() {
        // `inpu x` has no terminator either, so both line rules fire.
        let suggestions = suggestions_for(Some("inpu x"), "Invalid module instantiation");
        assert_eq!(
            suggestions,
            vec![
                HINT_INPUT_TYPO.to_string(),
                HINT_MISSING_SEMICOLON.to_string(),
                HINT_MODULE_INSTANTIATION.to_string(),
            ]
        );
    }

    #[test]
    fn test_leading_whitespace_preserved_for_checks() {
        // Untrimmed text is what the rules see; the trimmed form is only
        // used for the begin/comment positional checks.
        let suggestions = suggestions_for(Some("    // indented comment"), "syntax error");
        assert!(suggestions.is_empty());
    }
}
