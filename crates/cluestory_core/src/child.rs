//! Child records supplied by the caller.

use crate::{DifficultyLevel, Grade};
use cluestory_error::{StoryError, StoryErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A child taking part in a story.
///
/// The `alias` is the only identifier that ever reaches the model; `name`
/// stays local and is substituted back at render time.
///
/// # Examples
///
/// ```
/// use cluestory_core::{Child, DifficultyLevel, Grade};
///
/// let kid = Child::new("kid-1", "Maya", Grade::from_number(2).unwrap(),
///     DifficultyLevel::new(3).unwrap(), "Ivy");
/// assert_eq!(kid.alias, "Ivy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    /// Caller-assigned identifier
    pub id: String,
    /// Real name, never sent to the model
    pub name: String,
    /// School grade
    pub grade: Grade,
    /// Puzzle difficulty, 1-5
    pub difficulty_level: DifficultyLevel,
    /// De-identified token used in all model-visible text
    pub alias: String,
}

impl Child {
    /// Create a child record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grade: Grade,
        difficulty_level: DifficultyLevel,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade,
            difficulty_level,
            alias: alias.into(),
        }
    }
}

/// Check that every alias is non-blank and unique ignoring case.
///
/// Whole-word alias substitution and the stitcher's case-insensitive lookup
/// are only unambiguous when this holds.
///
/// # Errors
///
/// `EmptyField` for a blank alias, `DuplicateAlias` for a collision.
pub fn validate_aliases(kids: &[Child]) -> Result<(), StoryError> {
    let mut seen = HashSet::with_capacity(kids.len());
    for kid in kids {
        let alias = kid.alias.trim();
        if alias.is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyField(format!(
                "alias of child '{}'",
                kid.id
            ))));
        }
        if !seen.insert(alias.to_lowercase()) {
            return Err(StoryError::new(StoryErrorKind::DuplicateAlias(
                alias.to_string(),
            )));
        }
    }
    Ok(())
}
