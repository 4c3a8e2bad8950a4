//! Turns the widget's current query/variables text into a pretty-printed
//! JSON snapshot and pushes it onto the clipboard.

use serde::Serialize;
use serde_json::Value;

use crate::clipboard::{self, CopyOutcome};
use crate::debug_log;
use crate::{toast, widget};

/// Serialized field order matches the original snapshot shape: variables
/// first, then the query.
#[derive(Serialize)]
struct CopySnapshot {
    variables: Value,
    query: String,
}

/// Build the snapshot text. Blank variables text means "no variables" and
/// maps to `{}` before any JSON parsing; anything non-blank must parse.
/// Query newlines collapse to double spaces so the result reads on one line.
pub fn build_copy_snapshot(
    query_text: &str,
    variables_text: &str,
) -> Result<String, serde_json::Error> {
    let variables = if variables_text.trim().is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_str(variables_text)?
    };

    let snapshot = CopySnapshot {
        variables,
        query: query_text.replace('\n', "  "),
    };
    serde_json::to_string_pretty(&snapshot)
}

/// Toolbar entry point: read the widget's current texts, copy, and tell the
/// user how it went. Clipboard trouble never propagates past this function.
pub fn copy_current_request() {
    let query_text = widget::current_query().unwrap_or_default();
    let variables_text = widget::current_variables().unwrap_or_default();

    let snapshot = match build_copy_snapshot(&query_text, &variables_text) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            toast::error(&format!("Variables are not valid JSON: {}", e));
            return;
        }
    };

    debug_log!("{}", snapshot);

    match clipboard::copy_to_clipboard(&snapshot) {
        CopyOutcome::Copied => toast::success("Request copied to clipboard"),
        CopyOutcome::CommandRejected => toast::error("Copy to clipboard failed"),
        // The prompt already showed the text; nothing more to report.
        CopyOutcome::ManualFallbackShown => {}
        CopyOutcome::Unsupported => toast::error("Clipboard is not available in this browser"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_variables_text_serializes_as_empty_object() {
        let snapshot = build_copy_snapshot("{ping}", "").unwrap();
        assert_eq!(
            snapshot,
            "{\n  \"variables\": {},\n  \"query\": \"{ping}\"\n}"
        );
    }

    #[test]
    fn whitespace_only_variables_count_as_empty() {
        let snapshot = build_copy_snapshot("{ping}", "  \n ").unwrap();
        assert!(snapshot.contains("\"variables\": {}"));
    }

    #[test]
    fn variables_json_is_embedded_not_quoted() {
        let snapshot = build_copy_snapshot("{ping}", r#"{"id": 7}"#).unwrap();
        assert!(snapshot.contains("\"id\": 7"));
    }

    #[test]
    fn newlines_collapse_to_double_spaces() {
        let snapshot = build_copy_snapshot("query {\n  ping\n}", "").unwrap();
        assert!(snapshot.contains("\"query\": \"query {    ping  }\""));
    }

    #[test]
    fn invalid_variables_json_is_an_error_not_a_panic() {
        assert!(build_copy_snapshot("{ping}", "{not json").is_err());
    }
}
