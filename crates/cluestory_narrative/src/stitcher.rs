//! Positional merge of narrative stages with per-child puzzles.

use crate::prompts::NAME_PLACEHOLDER;
use cluestory_core::{Child, ProblemContent, PuzzleItem, StoryStage};
use std::collections::HashMap;

/// Find a child's puzzles by alias.
///
/// Tries the exact alias, then its lowercase form, then a case-insensitive
/// scan of every key.
pub fn lookup_puzzles<'a>(
    puzzles_by_alias: &'a HashMap<String, Vec<PuzzleItem>>,
    alias: &str,
) -> Option<&'a Vec<PuzzleItem>> {
    if let Some(items) = puzzles_by_alias.get(alias) {
        return Some(items);
    }
    let lowered = alias.to_lowercase();
    let found = puzzles_by_alias.get(&lowered).or_else(|| {
        puzzles_by_alias
            .iter()
            .find(|(key, _)| key.to_lowercase() == lowered)
            .map(|(_, items)| items)
    });
    match found {
        Some(_) => tracing::debug!(alias, "Puzzles matched by case-insensitive fallback"),
        None => tracing::debug!(alias, "No puzzles found for alias"),
    }
    found
}

/// Build stages from stage texts, taking puzzle `i` of each child for stage `i`.
///
/// Stage count always equals `stage_texts.len()`. A child without a puzzle
/// for a stage is left out of that stage. `{name}` in puzzle text becomes
/// the child's alias.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use cluestory_core::{Child, DifficultyLevel, PuzzleItem};
/// use cluestory_narrative::combine;
///
/// let kid = Child::new("1", "Maya", "2".parse().unwrap(), DifficultyLevel::new(1).unwrap(), "Finn");
/// let mut puzzles = HashMap::new();
/// puzzles.insert("finn".to_string(), vec![PuzzleItem {
///     problem: "{name} finds 2 shells".into(),
///     solution: "2".into(),
/// }]);
///
/// let stages = combine(&["Beach".to_string(), "Cave".to_string()], &puzzles, &[kid]);
/// assert_eq!(stages[0].problems[0].text, "Finn finds 2 shells");
/// assert!(stages[1].problems.is_empty());
/// ```
pub fn combine(
    stage_texts: &[String],
    puzzles_by_alias: &HashMap<String, Vec<PuzzleItem>>,
    kids: &[Child],
) -> Vec<StoryStage> {
    stage_texts
        .iter()
        .enumerate()
        .map(|(index, content)| {
            let problems = kids
                .iter()
                .filter_map(|kid| {
                    let item = lookup_puzzles(puzzles_by_alias, &kid.alias)?.get(index)?;
                    Some(ProblemContent {
                        kid_alias: kid.alias.clone(),
                        kid_name: kid.name.clone(),
                        text: item.problem.replace(NAME_PLACEHOLDER, &kid.alias),
                        solution: item.solution.replace(NAME_PLACEHOLDER, &kid.alias),
                    })
                })
                .collect();
            StoryStage {
                stage_number: index as u32 + 1,
                content: content.clone(),
                problems,
            }
        })
        .collect()
}
