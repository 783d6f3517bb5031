//! Layered configuration for the completion endpoint and generation budgets.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`cluestory.toml` shipped with the crate)
//! 2. `~/.config/cluestory/cluestory.toml`
//! 3. `./cluestory.toml`
//! 4. `CLUESTORY__SECTION__KEY` environment variables

use cluestory_core::{ApiKey, GenerationSettings};
use cluestory_error::{ClueStoryError, ClueStoryResult, ConfigError};
use cluestory_models::{OpenAiCompatibleClient, TokenLimitField};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../cluestory.toml");

/// Environment variable holding the completion API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// `[completion]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompletionConfig {
    /// Chat-completions URL
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Request field carrying the token budget
    #[serde(default)]
    pub token_limit_field: TokenLimitField,
}

/// `[generation]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// ISO country code for grade-system hints
    #[serde(default)]
    pub country_code: Option<String>,
    /// Narrative budget in plot mode
    pub narrative_max_tokens_plot: u32,
    /// Narrative budget in story mode
    pub narrative_max_tokens_story: u32,
    /// Budget per puzzle call
    pub puzzle_max_tokens: u32,
}

/// Top-level ClueStory configuration.
///
/// # Example
///
/// ```no_run
/// use cluestory::ClueStoryConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClueStoryConfig::load()?;
/// println!("model: {}", config.completion.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClueStoryConfig {
    /// Completion endpoint settings
    pub completion: CompletionConfig,
    /// Generation budgets and region hint
    pub generation: GenerationConfig,
}

impl ClueStoryConfig {
    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> ClueStoryResult<Self> {
        Self::build(Self::defaults())
    }

    /// Bundled defaults overridden by one specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ClueStoryResult<Self> {
        debug!("Loading configuration from file");
        Self::build(Self::defaults().add_source(File::from(path.as_ref())))
    }

    /// Load with precedence: env > current dir > home dir > bundled defaults.
    ///
    /// Missing user files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source cannot be parsed.
    #[instrument]
    pub fn load() -> ClueStoryResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder = Self::defaults();
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/cluestory/cluestory.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }
        builder = builder
            .add_source(File::with_name("cluestory").required(false))
            .add_source(
                Environment::with_prefix("CLUESTORY")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> ClueStoryResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ClueStoryError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ClueStoryError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Per-run settings for the generator.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::for_model(&self.completion.model)
            .with_country_code(self.generation.country_code.clone())
            .with_token_budgets(
                self.generation.narrative_max_tokens_plot,
                self.generation.narrative_max_tokens_story,
                self.generation.puzzle_max_tokens,
            )
    }

    /// HTTP client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self) -> ClueStoryResult<OpenAiCompatibleClient> {
        let client = OpenAiCompatibleClient::new(
            &self.completion.endpoint,
            Duration::from_secs(self.completion.timeout_secs),
            "openai",
        )?
        .with_token_limit_field(self.completion.token_limit_field);
        Ok(client)
    }
}

/// Read the API key from the environment, loading `.env` first.
///
/// # Errors
///
/// Returns a configuration error when the variable is unset or blank.
pub fn api_key_from_env() -> ClueStoryResult<ApiKey> {
    dotenvy::dotenv().ok();
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(ApiKey::new(key.trim())),
        _ => Err(ConfigError::missing_env(API_KEY_ENV).into()),
    }
}
