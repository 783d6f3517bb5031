//! Subject and presentation mode of a story.

use serde::{Deserialize, Serialize};

/// Educational subject the puzzles are drawn from.
///
/// # Examples
///
/// ```
/// use cluestory_core::Subject;
/// use std::str::FromStr;
///
/// assert_eq!(Subject::from_str("Math").unwrap(), Subject::Math);
/// assert_eq!(Subject::Reading.to_string(), "reading");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Subject {
    /// Math word problems
    Math,
    /// Reading and language puzzles
    Reading,
}

/// How much prose the narrative call should produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoryMode {
    /// Terse bullet outlines a parent improvises from
    Plot,
    /// Full prose, 2-3 paragraphs per stage
    Story,
}
