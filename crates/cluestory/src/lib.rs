//! ClueStory: personalized multi-stage children's stories with puzzles.
//!
//! This crate re-exports the pipeline crates and adds the configuration
//! loader used by the `cluestory` binary.
//!
//! # Example
//!
//! ```no_run
//! use cluestory::{ClueStoryConfig, StoryGenerator, api_key_from_env};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let params: cluestory::GenerationParams = unimplemented!();
//! let config = ClueStoryConfig::load()?;
//! let generator = StoryGenerator::new(config.client()?, config.generation_settings());
//! let story = generator.create_story(&params, &api_key_from_env()?).await?;
//! println!("{}", story.title());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    API_KEY_ENV, ClueStoryConfig, CompletionConfig, GenerationConfig, api_key_from_env,
};

// Re-export pipeline crates
pub use cluestory_core::*;
pub use cluestory_error::*;
pub use cluestory_interface::*;
pub use cluestory_models::{OPENAI_CHAT_COMPLETIONS_URL, OpenAiCompatibleClient, TokenLimitField};
// validate_aliases comes from cluestory_core
pub use cluestory_narrative::{
    ALIAS_POOL, GradeBand, StoryGenerator, build_narrative_prompt, build_puzzle_prompt, combine,
    generate_story, generate_title, grade_band, grade_system_note, next_alias,
    parse_puzzle_response, parse_stages, render_story, replace_aliases_with_names,
};
