//! Story generation command.

use super::commands::GenerateArgs;
use cluestory::{
    Child, ClueStoryConfig, ClueStoryResult, ConfigError, DifficultyLevel, GenerationParams,
    GenerationSettings, Grade, JsonError, StoryGenerator, StoryMode, Subject, api_key_from_env,
    next_alias,
};
use serde::Deserialize;
use std::path::Path;

/// Request file layout.
///
/// ```toml
/// subject = "math"
/// mode = "story"
/// role = "Detectives"
/// theme = "Cloud Kingdom"
/// questions_per_kid = 3
///
/// [[kids]]
/// name = "Maya"
/// grade = "3"
/// difficulty_level = 2
/// ```
#[derive(Debug, Deserialize)]
struct StoryRequest {
    subject: Subject,
    mode: StoryMode,
    role: String,
    theme: String,
    questions_per_kid: u32,
    kids: Vec<KidEntry>,
}

#[derive(Debug, Deserialize)]
struct KidEntry {
    #[serde(default)]
    id: Option<String>,
    name: String,
    grade: Grade,
    difficulty_level: DifficultyLevel,
    #[serde(default)]
    alias: Option<String>,
}

impl StoryRequest {
    /// Kids without an alias get the next free one from the pool.
    fn into_params(self) -> GenerationParams {
        let mut used: Vec<String> = self.kids.iter().filter_map(|k| k.alias.clone()).collect();
        let kids = self
            .kids
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let alias = entry.alias.unwrap_or_else(|| {
                    let alias = next_alias(&used);
                    used.push(alias.clone());
                    alias
                });
                let id = entry.id.unwrap_or_else(|| format!("kid-{}", index + 1));
                Child::new(id, entry.name, entry.grade, entry.difficulty_level, alias)
            })
            .collect();

        GenerationParams {
            subject: self.subject,
            mode: self.mode,
            role: self.role,
            theme: self.theme,
            questions_per_kid: self.questions_per_kid,
            kids,
        }
    }
}

fn parse_request(text: &str) -> ClueStoryResult<GenerationParams> {
    let request: StoryRequest = toml::from_str(text)
        .map_err(|e| ConfigError::new(format!("Failed to parse request: {}", e)))?;
    Ok(request.into_params())
}

fn load_request(path: &Path) -> ClueStoryResult<GenerationParams> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!("Failed to read request {}: {}", path.display(), e))
    })?;
    parse_request(&text)
}

fn settings_for(config: &ClueStoryConfig, args: &GenerateArgs) -> GenerationSettings {
    let mut settings = config.generation_settings();
    if let Some(model) = &args.model {
        settings = GenerationSettings::for_model(model)
            .with_country_code(settings.country_code().clone())
            .with_token_budgets(
                *settings.narrative_max_tokens_plot(),
                *settings.narrative_max_tokens_story(),
                *settings.puzzle_max_tokens(),
            );
    }
    if let Some(country) = &args.country {
        settings = settings.with_country_code(Some(country.clone()));
    }
    settings
}

/// Generate a story and write it as JSON.
#[tracing::instrument(skip(args), fields(request = %args.request.display()))]
pub async fn run_generate(args: GenerateArgs) -> ClueStoryResult<()> {
    let config = ClueStoryConfig::load()?;
    let params = load_request(&args.request)?;
    let credential = api_key_from_env()?;

    let generator = StoryGenerator::new(config.client()?, settings_for(&config, &args));
    let story = generator.create_story(&params, &credential).await?;

    if args.raw {
        eprintln!("{}", story.raw_response());
    }

    let json = serde_json::to_string_pretty(&story)
        .map_err(|e| JsonError::new("story", e.to_string()))?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| {
                ConfigError::new(format!("Failed to write {}: {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), "Story written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const REQUEST: &str = r#"
subject = "reading"
mode = "plot"
role = "Pirates"
theme = "Sunken Ship"
questions_per_kid = 2

[[kids]]
name = "Maya"
grade = "K"
difficulty_level = 1
alias = "Alex"

[[kids]]
name = "Leo"
grade = "4"
difficulty_level = 3
"#;

    fn args() -> GenerateArgs {
        GenerateArgs {
            request: PathBuf::from("req.toml"),
            output: None,
            country: None,
            model: None,
            raw: false,
        }
    }

    #[test]
    fn test_request_assigns_missing_aliases() {
        let params = parse_request(REQUEST).unwrap();
        assert_eq!(params.subject, Subject::Reading);
        assert_eq!(params.mode, StoryMode::Plot);
        assert_eq!(params.kids[0].alias, "Alex");
        assert_eq!(params.kids[1].alias, "Alice");
        assert_eq!(params.kids[1].id, "kid-2");
        assert!(params.kids[0].grade.is_kindergarten());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_bad_request_is_config_error() {
        let err = parse_request("subject = \"art\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse request"));
    }

    #[test]
    fn test_cli_overrides_settings() {
        let config = ClueStoryConfig::bundled().unwrap();
        let mut overridden = args();
        overridden.model = Some("gpt-4.1".into());
        overridden.country = Some("IE".into());

        let settings = settings_for(&config, &overridden);
        assert_eq!(settings.model(), "gpt-4.1");
        assert_eq!(settings.country_code().as_deref(), Some("IE"));
        assert_eq!(*settings.puzzle_max_tokens(), 2000);

        let plain = settings_for(&config, &args());
        assert_eq!(plain.model(), "gpt-4o-mini");
    }
}
