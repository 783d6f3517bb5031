//! Trait definitions for the ClueStory pipeline.
//!
//! The completion invoker is the only seam between the pipeline and the
//! network; everything upstream of it is pure.

mod traits;

pub use traits::CompletionDriver;
