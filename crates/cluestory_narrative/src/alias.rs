//! Title generation and alias handling.

use cluestory_core::{Child, ProblemContent, Story, StoryStage};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

pub use cluestory_core::validate_aliases;

/// Aliases handed out to new children, in order.
pub const ALIAS_POOL: [&str; 20] = [
    "Alex", "Alice", "Ben", "Bella", "Charlie", "Claire", "David", "Diana", "Ethan", "Emma",
    "Finn", "Fiona", "George", "Grace", "Henry", "Hannah", "Isaac", "Ivy", "Jack", "Julia",
];

/// Display title for a story.
///
/// # Examples
///
/// ```
/// use cluestory_narrative::generate_title;
///
/// assert_eq!(generate_title("Cloud Kingdom", "Detectives"), "Detectives in Cloud Kingdom");
/// ```
pub fn generate_title(theme: &str, role: &str) -> String {
    format!("{} in {}", role.trim(), theme.trim())
}

/// First pool alias not in `used`, compared case-insensitively.
///
/// Once the pool runs out, `Alex2`, `Alex3` and so on are tried.
pub fn next_alias<S: AsRef<str>>(used: &[S]) -> String {
    let taken = |candidate: &str| {
        used.iter()
            .any(|u| u.as_ref().trim().eq_ignore_ascii_case(candidate))
    };

    if let Some(alias) = ALIAS_POOL.iter().find(|a| !taken(a)) {
        return (*alias).to_string();
    }
    (2u32..)
        .map(|n| format!("{}{}", ALIAS_POOL[0], n))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| ALIAS_POOL[0].to_string())
}

fn alias_matcher(kids: &[Child]) -> Option<Regex> {
    let mut aliases: Vec<&str> = kids
        .iter()
        .map(|k| k.alias.trim())
        .filter(|a| !a.is_empty())
        .collect();
    if aliases.is_empty() {
        return None;
    }
    aliases.sort_by_key(|a| std::cmp::Reverse(a.len()));

    let alternation = aliases
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");
    match RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, "Could not build alias pattern, leaving text unchanged");
            None
        }
    }
}

/// Replace every whole-word alias with the matching child's name.
///
/// Matching ignores case. All aliases are replaced in one pass, so the
/// order of `kids` does not matter and a name is never substituted again.
///
/// # Examples
///
/// ```
/// use cluestory_core::{Child, DifficultyLevel};
/// use cluestory_narrative::replace_aliases_with_names;
///
/// let ivy = Child::new("1", "Zoe", "4".parse().unwrap(), DifficultyLevel::new(3).unwrap(), "Ivy");
/// assert_eq!(
///     replace_aliases_with_names("ivy walked to Ivytown.", &[ivy]),
///     "Zoe walked to Ivytown."
/// );
/// ```
pub fn replace_aliases_with_names(text: &str, kids: &[Child]) -> String {
    let Some(matcher) = alias_matcher(kids) else {
        return text.to_string();
    };
    let names: HashMap<String, &str> = kids
        .iter()
        .map(|k| (k.alias.trim().to_lowercase(), k.name.as_str()))
        .collect();

    matcher
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let found = &caps[0];
            names
                .get(&found.to_lowercase())
                .map(|name| name.to_string())
                .unwrap_or_else(|| found.to_string())
        })
        .into_owned()
}

/// Stages of a stored story with aliases swapped for current names.
///
/// `kids` is the current child list, so renamed children show their new
/// name. Stored content is left untouched.
pub fn render_story(story: &Story, kids: &[Child]) -> Vec<StoryStage> {
    let current_name = |problem: &ProblemContent| {
        kids.iter()
            .find(|k| k.alias.eq_ignore_ascii_case(&problem.kid_alias))
            .map(|k| k.name.clone())
            .unwrap_or_else(|| problem.kid_name.clone())
    };

    story
        .stages()
        .iter()
        .map(|stage| StoryStage {
            stage_number: stage.stage_number,
            content: replace_aliases_with_names(&stage.content, kids),
            problems: stage
                .problems
                .iter()
                .map(|p| ProblemContent {
                    kid_alias: p.kid_alias.clone(),
                    kid_name: current_name(p),
                    text: replace_aliases_with_names(&p.text, kids),
                    solution: replace_aliases_with_names(&p.solution, kids),
                })
                .collect(),
        })
        .collect()
}
