//! Generation parameters and injected settings.

use crate::{Child, StoryMode, Subject, validate_aliases};
use cluestory_error::{StoryError, StoryErrorKind};
use serde::{Deserialize, Serialize};

/// Maximum children in one generation run.
pub const MAX_KIDS: usize = 5;

/// Maximum stages (and puzzles per child) in one generation run.
pub const MAX_QUESTIONS_PER_KID: u32 = 5;

/// Immutable input to one generation run.
///
/// `questions_per_kid` is both the stage count and the number of puzzles
/// requested per child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Puzzle subject
    pub subject: Subject,
    /// Outline or full prose
    pub mode: StoryMode,
    /// What the children are, e.g. "Detectives"
    pub role: String,
    /// Where the story happens, e.g. "Cloud Kingdom"
    pub theme: String,
    /// Stage count
    pub questions_per_kid: u32,
    /// Participating children, in canonical order
    pub kids: Vec<Child>,
}

impl GenerationParams {
    /// Check limits and alias uniqueness before any request is made.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.kids.is_empty() {
            return Err(StoryError::new(StoryErrorKind::NoChildren));
        }
        if self.kids.len() > MAX_KIDS {
            return Err(StoryError::new(StoryErrorKind::TooManyChildren {
                max: MAX_KIDS,
                actual: self.kids.len(),
            }));
        }
        if !(1..=MAX_QUESTIONS_PER_KID).contains(&self.questions_per_kid) {
            return Err(StoryError::new(StoryErrorKind::QuestionsPerKidOutOfRange {
                max: MAX_QUESTIONS_PER_KID,
                actual: self.questions_per_kid,
            }));
        }
        if self.role.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyField("role".into())));
        }
        if self.theme.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyField("theme".into())));
        }
        validate_aliases(&self.kids)
    }

    /// The child with the lowest grade; ties keep the earliest child.
    pub fn youngest(&self) -> Option<&Child> {
        self.kids
            .iter()
            .reduce(|min, kid| if kid.grade < min.grade { kid } else { min })
    }
}

/// Injected per-run configuration: region hint, model and token budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationSettings {
    /// ISO country code used for the grade-system hint
    #[serde(default)]
    country_code: Option<String>,
    /// Model identifier
    model: String,
    /// Narrative budget in plot mode
    #[serde(default = "default_plot_tokens")]
    narrative_max_tokens_plot: u32,
    /// Narrative budget in story mode
    #[serde(default = "default_story_tokens")]
    narrative_max_tokens_story: u32,
    /// Budget of each per-child puzzle call
    #[serde(default = "default_puzzle_tokens")]
    puzzle_max_tokens: u32,
}

fn default_plot_tokens() -> u32 {
    2500
}

fn default_story_tokens() -> u32 {
    5000
}

fn default_puzzle_tokens() -> u32 {
    2000
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            country_code: None,
            model: "gpt-4o-mini".to_string(),
            narrative_max_tokens_plot: default_plot_tokens(),
            narrative_max_tokens_story: default_story_tokens(),
            puzzle_max_tokens: default_puzzle_tokens(),
        }
    }
}

impl GenerationSettings {
    /// Settings for a model with default budgets.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set the region hint.
    pub fn with_country_code(mut self, code: Option<String>) -> Self {
        self.country_code = code;
        self
    }

    /// Override token budgets.
    pub fn with_token_budgets(mut self, plot: u32, story: u32, puzzle: u32) -> Self {
        self.narrative_max_tokens_plot = plot;
        self.narrative_max_tokens_story = story;
        self.puzzle_max_tokens = puzzle;
        self
    }

    /// Narrative budget for the given mode.
    pub fn narrative_max_tokens(&self, mode: StoryMode) -> u32 {
        match mode {
            StoryMode::Plot => self.narrative_max_tokens_plot,
            StoryMode::Story => self.narrative_max_tokens_story,
        }
    }
}
