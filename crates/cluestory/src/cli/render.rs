//! Story rendering command.

use cluestory::{ClueStoryResult, ConfigError, JsonError, Story, render_story};
use std::fmt::Write;
use std::path::Path;

/// Human-readable story text with current names.
fn format_story(story: &Story) -> String {
    let mut out = format!("{}\n", story.title());
    for stage in render_story(story, story.kids()) {
        let _ = write!(out, "\n--- Stage {} ---\n{}\n", stage.stage_number, stage.content);
        if stage.problems.is_empty() {
            out.push_str("\n(no challenge)\n");
        }
        for problem in &stage.problems {
            let _ = write!(
                out,
                "\n{}'s challenge: {}\n  Solution: {}\n",
                problem.kid_name, problem.text, problem.solution
            );
        }
    }
    out
}

/// Print a stored story file.
pub fn render_story_file(path: &Path) -> ClueStoryResult<()> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!("Failed to read story {}: {}", path.display(), e))
    })?;
    let story: Story = serde_json::from_str(&text)
        .map_err(|e| JsonError::new(path.display().to_string(), e.to_string()))?;
    print!("{}", format_story(&story));
    Ok(())
}
