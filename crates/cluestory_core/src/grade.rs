//! School grade and difficulty level newtypes.

use cluestory_error::{StoryError, StoryErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A school grade: kindergarten (`K`) or 1 through 12.
///
/// Grades are ordered, with kindergarten lowest.
///
/// # Examples
///
/// ```
/// use cluestory_core::Grade;
///
/// let k: Grade = "K".parse().unwrap();
/// let third: Grade = " 3 ".parse().unwrap();
/// assert!(k < third);
/// assert_eq!(k.as_number(), 0);
/// assert_eq!(third.to_string(), "3");
/// assert!("13".parse::<Grade>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grade(u8);

impl Grade {
    /// Kindergarten.
    pub const KINDERGARTEN: Grade = Grade(0);

    /// Highest supported grade.
    pub const MAX: u8 = 12;

    /// Build a grade from its numeric form, where 0 is kindergarten.
    pub fn from_number(number: u8) -> Result<Self, StoryError> {
        if number <= Self::MAX {
            Ok(Self(number))
        } else {
            Err(StoryError::new(StoryErrorKind::InvalidGrade(number.to_string())))
        }
    }

    /// Numeric form, kindergarten is 0.
    pub fn as_number(&self) -> u8 {
        self.0
    }

    /// True for kindergarten.
    pub fn is_kindergarten(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Grade {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("k") {
            return Ok(Self::KINDERGARTEN);
        }
        match trimmed.parse::<u8>() {
            Ok(n) if (1..=Self::MAX).contains(&n) => Ok(Self(n)),
            _ => Err(StoryError::new(StoryErrorKind::InvalidGrade(s.to_string()))),
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = StoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_kindergarten() {
            write!(f, "K")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Puzzle difficulty on a 1-5 scale.
///
/// # Examples
///
/// ```
/// use cluestory_core::DifficultyLevel;
///
/// assert_eq!(DifficultyLevel::new(3).unwrap().value(), 3);
/// assert!(DifficultyLevel::new(0).is_err());
/// assert!(DifficultyLevel::new(6).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    /// Lowest difficulty.
    pub const MIN: u8 = 1;
    /// Highest difficulty.
    pub const MAX: u8 = 5;

    /// Validate and wrap a difficulty value.
    pub fn new(value: u8) -> Result<Self, StoryError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StoryError::new(StoryErrorKind::InvalidDifficulty(value)))
        }
    }

    /// The raw 1-5 value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = StoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> Self {
        level.0
    }
}
