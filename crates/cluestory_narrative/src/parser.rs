//! Parsing of raw completions into stage texts and puzzle lists.

use cluestory_core::PuzzleItem;
use cluestory_error::{StoryError, StoryErrorKind};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Stage marker as matched on parse. Digits inside the marker are ignored.
pub const STAGE_DELIMITER_PATTERN: &str = r"(?i)===\s*STAGE\s*\d+\s*===";

static STAGE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STAGE_DELIMITER_PATTERN).expect("Valid stage delimiter regex"));

/// Split a narrative into trimmed stage texts, in input order.
///
/// Text before the first marker is treated as preamble and dropped. Empty
/// fragments are discarded. Without any marker the whole trimmed text is
/// returned as a single stage.
///
/// # Examples
///
/// ```
/// use cluestory_narrative::parse_stages;
///
/// let stages = parse_stages("=== STAGE 7 ===\nA cave.\n=== stage 2 ===\nA river.");
/// assert_eq!(stages, vec!["A cave.", "A river."]);
///
/// assert_eq!(parse_stages("  Just one part. "), vec!["Just one part."]);
/// ```
pub fn parse_stages(narrative: &str) -> Vec<String> {
    if !STAGE_DELIMITER.is_match(narrative) {
        tracing::warn!(
            "NoStageDelimitersFound: treating {} chars of narrative as one stage",
            narrative.len()
        );
        return vec![narrative.trim().to_string()];
    }

    let mut fragments = STAGE_DELIMITER.split(narrative);
    if let Some(preamble) = fragments.next()
        && !preamble.trim().is_empty()
    {
        tracing::debug!(chars = preamble.len(), "Dropping text before first stage marker");
    }

    let stages: Vec<String> = fragments
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    tracing::debug!(count = stages.len(), "Parsed narrative stages");
    stages
}

#[derive(Deserialize)]
struct PuzzlePayload {
    problems: Vec<PuzzleItem>,
}

/// Strictly decode a puzzle completion for one child.
///
/// A count mismatch against `expected` is logged, not rejected.
///
/// # Errors
///
/// Returns `MalformedPuzzleResponse` when the text is not JSON, lacks the
/// `problems` array, or holds an item without string `problem`/`solution`.
pub fn parse_puzzle_response(
    json_text: &str,
    alias: &str,
    expected: u32,
) -> Result<Vec<PuzzleItem>, StoryError> {
    let payload: PuzzlePayload = serde_json::from_str(json_text).map_err(|e| {
        StoryError::new(StoryErrorKind::MalformedPuzzleResponse {
            alias: alias.to_string(),
            message: e.to_string(),
        })
    })?;

    let count = payload.problems.len();
    let expected = expected as usize;
    if count < expected {
        tracing::warn!(alias, expected, count, "Puzzle shortfall");
    } else if count > expected {
        tracing::warn!(alias, expected, count, "Extra puzzles will be ignored");
    }
    Ok(payload.problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_delimiters_give_k_stages_in_order() {
        let text = "=== STAGE 1 ===\nFirst.\n\n=== STAGE 2 ===\nSecond.\n=== STAGE 3 ===\nThird.\n\nThe end.";
        let stages = parse_stages(text);
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0], "First.");
        assert_eq!(stages[1], "Second.");
        assert_eq!(stages[2], "Third.\n\nThe end.");
    }

    #[test]
    fn test_marker_numbers_and_case_ignored() {
        let text = "===STAGE 9===\nA\n=== Stage   4 ===\nB";
        assert_eq!(parse_stages(text), vec!["A", "B"]);
    }

    #[test]
    fn test_zero_delimiters_single_stage() {
        let text = "\n  Once upon a time, nothing was numbered.  \n";
        assert_eq!(parse_stages(text), vec![text.trim()]);
    }

    #[test]
    fn test_preamble_and_empty_fragments_dropped() {
        let text = "Here is your story!\n=== STAGE 1 ===\n\n=== STAGE 2 ===\nOnly this.";
        assert_eq!(parse_stages(text), vec!["Only this."]);
    }

    #[test]
    fn test_malformed_marker_is_not_a_delimiter() {
        assert_eq!(parse_stages("== STAGE 1 ==\nText"), vec!["== STAGE 1 ==\nText"]);
    }

    #[test]
    fn test_puzzle_response_decodes() {
        let json = r#"{"problems":[{"problem":"{name} has 3 keys","solution":"3"}]}"#;
        let items = parse_puzzle_response(json, "Alex", 1).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].solution, "3");
    }

    #[test]
    fn test_puzzle_shortfall_is_soft() {
        let json = r#"{"problems":[]}"#;
        assert!(parse_puzzle_response(json, "Alex", 3).unwrap().is_empty());
    }

    #[test]
    fn test_puzzle_response_rejects_bad_shapes() {
        for bad in [
            "not json",
            r#"{"questions":[]}"#,
            r#"{"problems":null}"#,
            r#"{"problems":[{"problem":"no solution"}]}"#,
        ] {
            let err = parse_puzzle_response(bad, "Bella", 1).unwrap_err();
            match err.kind {
                StoryErrorKind::MalformedPuzzleResponse { alias, .. } => {
                    assert_eq!(alias, "Bella")
                }
                other => panic!("unexpected {other:?} for {bad}"),
            }
        }
    }
}
