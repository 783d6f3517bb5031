//! Configuration loading tests.

use cluestory::{ClueStoryConfig, ClueStoryErrorKind, StoryMode, TokenLimitField};
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = ClueStoryConfig::bundled()?;

    assert_eq!(config.completion.model, "gpt-4o-mini");
    assert_eq!(config.completion.timeout_secs, 120);
    assert_eq!(config.completion.token_limit_field, TokenLimitField::MaxTokens);
    assert!(config.completion.endpoint.starts_with("https://"));
    assert_eq!(config.generation.country_code, None);

    let settings = config.generation_settings();
    assert_eq!(settings.narrative_max_tokens(StoryMode::Plot), 2500);
    assert_eq!(settings.narrative_max_tokens(StoryMode::Story), 5000);
    assert_eq!(*settings.puzzle_max_tokens(), 2000);
    Ok(())
}

#[test]
fn test_file_overrides_merge_with_defaults() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        r#"
[completion]
model = "gpt-5-mini"
token_limit_field = "max_completion_tokens"

[generation]
country_code = "AU"
puzzle_max_tokens = 1500
"#
    )?;
    temp_file.flush()?;

    let config = ClueStoryConfig::from_file(temp_file.path())?;

    assert_eq!(config.completion.model, "gpt-5-mini");
    assert_eq!(
        config.completion.token_limit_field,
        TokenLimitField::MaxCompletionTokens
    );
    assert_eq!(config.completion.timeout_secs, 120);
    assert_eq!(config.generation.country_code.as_deref(), Some("AU"));
    assert_eq!(config.generation.narrative_max_tokens_story, 5000);

    let settings = config.generation_settings();
    assert_eq!(settings.model(), "gpt-5-mini");
    assert_eq!(*settings.puzzle_max_tokens(), 1500);
    Ok(())
}

#[test]
fn test_client_uses_configured_endpoint() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        "[completion]\nendpoint = \"http://localhost:8080/v1/chat/completions\""
    )?;
    temp_file.flush()?;

    let client = ClueStoryConfig::from_file(temp_file.path())?.client()?;
    assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let err = ClueStoryConfig::from_file("/nonexistent/cluestory.toml").unwrap_err();
    assert!(matches!(err.kind(), ClueStoryErrorKind::Config(_)));
}

#[test]
fn test_invalid_value_is_config_error() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(temp_file, "[completion]\ntoken_limit_field = \"tokens_please\"")?;
    temp_file.flush()?;

    let err = ClueStoryConfig::from_file(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse configuration"));
    Ok(())
}
