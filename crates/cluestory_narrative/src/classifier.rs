//! Grade and difficulty guidance embedded in puzzle prompts.
//!
//! Pure lookups: the rubric and concept texts are fixed, not configurable.

use cluestory_core::{DifficultyLevel, Grade, Subject};

/// Fixed grade breakpoints used to pick a concept list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum GradeBand {
    /// Kindergarten through grade 2
    #[strum(serialize = "K-2")]
    EarlyElementary,
    /// Grades 3-4
    #[strum(serialize = "3-4")]
    UpperElementary,
    /// Grades 5-6
    #[strum(serialize = "5-6")]
    MiddleSchoolPrep,
    /// Grade 7 and up
    #[strum(serialize = "7+")]
    Secondary,
}

/// Band for a grade, with kindergarten counted as 0.
///
/// # Examples
///
/// ```
/// use cluestory_core::Grade;
/// use cluestory_narrative::{GradeBand, grade_band};
///
/// assert_eq!(grade_band(Grade::KINDERGARTEN), GradeBand::EarlyElementary);
/// assert_eq!(grade_band("5".parse().unwrap()), GradeBand::MiddleSchoolPrep);
/// ```
pub fn grade_band(grade: Grade) -> GradeBand {
    match grade.as_number() {
        0..=2 => GradeBand::EarlyElementary,
        3..=4 => GradeBand::UpperElementary,
        5..=6 => GradeBand::MiddleSchoolPrep,
        _ => GradeBand::Secondary,
    }
}

/// Rubric line for a difficulty level.
pub fn difficulty_description(level: DifficultyLevel) -> &'static str {
    match level.value() {
        1 => {
            "Difficulty 1/5: Easy but engaging - basic concepts with straightforward application. Should still require some thinking."
        }
        2 => {
            "Difficulty 2/5: Moderate - requires understanding of concepts and 1-2 step problem solving. Not trivial."
        }
        4 => {
            "Difficulty 4/5: Hard - complex problems that push the boundaries of grade-level understanding."
        }
        5 => {
            "Difficulty 5/5: Very challenging - problems at the edge of or slightly beyond grade level. Requires advanced reasoning."
        }
        _ => {
            "Difficulty 3/5: Challenging - multi-step problems requiring careful reasoning. Should make the child think hard."
        }
    }
}

/// Age reference included in every puzzle prompt.
pub const GRADE_LEVEL_REFERENCE: &str = "GRADE LEVELS (Reference):
- Grade K = Kindergarten (age 5-6)
- Grade 1-2 = Early elementary (age 6-8)
- Grade 3-4 = Upper elementary (age 8-10)
- Grade 5-6 = Middle school prep (age 10-12)
- Grade 7-8 = Middle school (age 12-14)
- Grade 9-12 = High school (age 14-18)";

/// Concept list for a subject at a grade, headed for prompt embedding.
pub fn concepts_for(subject: Subject, grade: Grade) -> &'static str {
    match (subject, grade_band(grade)) {
        (Subject::Math, GradeBand::EarlyElementary) => {
            "MATH CONCEPTS FOR THIS GRADE:
- Counting objects (up to 100 for grade 2)
- Basic addition (single digits, sums up to 20)
- Basic subtraction (single digits)
- Skip counting by 2s, 5s, 10s
- Comparing numbers (greater than, less than)
- Simple patterns
- Telling time (hours, half hours)
- Basic shapes recognition"
        }
        (Subject::Math, GradeBand::UpperElementary) => {
            "MATH CONCEPTS FOR THIS GRADE:
- Multiplication facts (up to 12x12)
- Division with and without remainders
- Simple fractions (1/2, 1/3, 1/4, comparing fractions)
- Adding and subtracting fractions with same denominator
- Multi-digit addition and subtraction (with regrouping)
- Introduction to area and perimeter
- Word problems with multiple steps
- Rounding numbers
- Basic measurement conversions"
        }
        (Subject::Math, GradeBand::MiddleSchoolPrep) => {
            "MATH CONCEPTS FOR THIS GRADE:
- All fraction operations (add, subtract, multiply, divide fractions)
- Decimal operations (add, subtract, multiply, divide)
- Converting between fractions, decimals, and percentages
- Area and perimeter of complex shapes (triangles, parallelograms)
- Volume of rectangular prisms and cylinders
- Order of operations (PEMDAS/BODMAS)
- Introduction to negative numbers
- Ratio and proportion
- Mean, median, mode
- Coordinate graphing basics"
        }
        (Subject::Math, GradeBand::Secondary) => {
            "MATH CONCEPTS FOR THIS GRADE:
- Percentages and percentage change (discounts, interest, tax)
- Ratios and proportional reasoning
- Basic algebra (solving for x, simplifying expressions)
- Linear equations and graphing
- Geometry (angle relationships, triangle properties, circle calculations)
- Probability and statistics
- Exponents and scientific notation
- Pythagorean theorem
- Systems of equations (basic)
- Surface area and volume of 3D shapes"
        }
        (Subject::Reading, GradeBand::EarlyElementary) => {
            "READING CONCEPTS FOR THIS GRADE:
- Letter sounds and simple phonics
- Rhyming words
- Sight words and short vowel words
- Counting syllables
- Opposites
- Putting story events in order
- Identifying characters and setting
- Completing simple sentences"
        }
        (Subject::Reading, GradeBand::UpperElementary) => {
            "READING CONCEPTS FOR THIS GRADE:
- Prefixes and suffixes
- Synonyms and antonyms
- Compound words
- Homophones (their/there, knight/night)
- Using context clues for unfamiliar words
- Finding the main idea
- Cause and effect
- Simple riddles with wordplay"
        }
        (Subject::Reading, GradeBand::MiddleSchoolPrep) => {
            "READING CONCEPTS FOR THIS GRADE:
- Similes and metaphors
- Greek and Latin root words
- Word analogies
- Multiple-meaning words
- Drawing inferences from clues
- Point of view
- Summarizing a short passage
- Logic riddles"
        }
        (Subject::Reading, GradeBand::Secondary) => {
            "READING CONCEPTS FOR THIS GRADE:
- Inference and deduction from a passage
- Connotation versus denotation
- Advanced analogies
- Idioms and allusions
- Theme and author's purpose
- Anagrams and cryptic wordplay
- Logical reasoning puzzles
- Evaluating arguments and evidence"
        }
    }
}
