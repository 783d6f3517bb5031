//! Command-line interface for the cluestory binary.

mod alias;
mod commands;
mod generate;
mod render;

pub use alias::print_next_alias;
pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use render::render_story_file;
