//! Story generation pipeline for ClueStory.
//!
//! This crate turns [`GenerationParams`](cluestory_core::GenerationParams)
//! into a stitched story:
//!
//! - **Classifier**: grade bands, difficulty rubric and concept lists
//! - **Prompts**: one narrative prompt plus one puzzle prompt per child
//! - **Parser**: stage splitting and strict puzzle JSON decoding
//! - **Stitcher**: positional merge of stages with per-child puzzles
//! - **Aliases**: title generation and alias/name substitution
//! - **Generator**: concurrent fan-out over a [`CompletionDriver`](cluestory_interface::CompletionDriver)
//!
//! # Example
//!
//! ```rust,ignore
//! use cluestory_narrative::StoryGenerator;
//! use cluestory_models::OpenAiCompatibleClient;
//!
//! let client = OpenAiCompatibleClient::openai(Duration::from_secs(120))?;
//! let generator = StoryGenerator::new(client, GenerationSettings::default());
//! let story = generator.create_story(&params, &ApiKey::new(key)).await?;
//! println!("{} stages", story.stages().len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alias;
mod classifier;
mod generator;
mod parser;
mod prompts;
mod region;
mod stitcher;

pub use alias::{
    ALIAS_POOL, generate_title, next_alias, render_story, replace_aliases_with_names,
    validate_aliases,
};
pub use classifier::{
    GRADE_LEVEL_REFERENCE, GradeBand, concepts_for, difficulty_description, grade_band,
};
pub use generator::{StoryGenerator, generate_story};
pub use parser::{STAGE_DELIMITER_PATTERN, parse_puzzle_response, parse_stages};
pub use prompts::{
    NAME_PLACEHOLDER, PUZZLE_SYSTEM_PREAMBLE, build_narrative_prompt, build_puzzle_prompt,
    narrative_system_preamble,
};
pub use region::{DEFAULT_GRADE_SYSTEM_NOTE, grade_system_note};
pub use stitcher::{combine, lookup_puzzles};
