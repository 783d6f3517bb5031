//! The stitched story document.

use crate::{Child, GenerationParams, StoryMode, Subject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One decoded puzzle from a per-child puzzle call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleItem {
    /// Word problem text
    pub problem: String,
    /// Worked solution
    pub solution: String,
}

/// One puzzle bound to one child within one stage.
///
/// `kid_alias` is the join key; `kid_name` is copied from the child record
/// for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemContent {
    /// Alias of the child this puzzle belongs to
    pub kid_alias: String,
    /// Real name of that child at generation time
    pub kid_name: String,
    /// Problem text, alias-laden
    pub text: String,
    /// Solution text, alias-laden
    pub solution: String,
}

/// One narrative beat, optionally paired with one puzzle per child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryStage {
    /// 1-based, contiguous
    pub stage_number: u32,
    /// Narrative text, alias-laden
    pub content: String,
    /// At most one entry per child; may be empty
    pub problems: Vec<ProblemContent>,
}

impl StoryStage {
    /// The problem for a given alias, compared case-insensitively.
    pub fn problem_for(&self, alias: &str) -> Option<&ProblemContent> {
        self.problems
            .iter()
            .find(|p| p.kid_alias.eq_ignore_ascii_case(alias))
    }
}

/// Output of one successful generation run, before it becomes a [`Story`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedStory {
    /// Stitched stages
    pub stages: Vec<StoryStage>,
    /// Audit copy of every raw completion, not authoritative
    pub raw_response: String,
}

/// A generated story, frozen at creation.
///
/// # Examples
///
/// ```
/// use cluestory_core::{GeneratedStory, GenerationParams, Story, StoryMode, Subject};
///
/// let params = GenerationParams {
///     subject: Subject::Reading,
///     mode: StoryMode::Plot,
///     role: "Detectives".into(),
///     theme: "Cloud Kingdom".into(),
///     questions_per_kid: 1,
///     kids: vec![],
/// };
/// let generated = GeneratedStory { stages: vec![], raw_response: String::new() };
/// let story = Story::from_generation("Detectives in Cloud Kingdom", &params, generated);
/// assert_eq!(story.title(), "Detectives in Cloud Kingdom");
/// assert_eq!(*story.subject(), Subject::Reading);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique identifier
    id: Uuid,
    /// Display title
    title: String,
    /// Puzzle subject
    subject: Subject,
    /// Outline or prose
    mode: StoryMode,
    /// Role of the children
    role: String,
    /// Setting
    theme: String,
    /// Children as they were at generation time
    kids: Vec<Child>,
    /// Stitched stages
    stages: Vec<StoryStage>,
    /// Audit copy of the raw completions
    #[serde(default, skip_serializing_if = "String::is_empty")]
    raw_response: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Story {
    /// Freeze a generation result into a story with a fresh id and timestamp.
    pub fn from_generation(
        title: impl Into<String>,
        params: &GenerationParams,
        generated: GeneratedStory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            subject: params.subject,
            mode: params.mode,
            role: params.role.clone(),
            theme: params.theme.clone(),
            kids: params.kids.clone(),
            stages: generated.stages,
            raw_response: generated.raw_response,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_for_ignores_case() {
        let stage = StoryStage {
            stage_number: 1,
            content: "A bridge".into(),
            problems: vec![ProblemContent {
                kid_alias: "Finn".into(),
                kid_name: "Oscar".into(),
                text: "Count the planks".into(),
                solution: "12".into(),
            }],
        };
        assert!(stage.problem_for("finn").is_some());
        assert!(stage.problem_for("Fiona").is_none());
    }

    #[test]
    fn test_stage_json_field_names() {
        let stage = StoryStage {
            stage_number: 2,
            content: String::new(),
            problems: vec![],
        };
        let json = serde_json::to_value(&stage).unwrap();
        assert_eq!(json["stageNumber"], 2);
        assert!(json["problems"].as_array().unwrap().is_empty());
    }
}
