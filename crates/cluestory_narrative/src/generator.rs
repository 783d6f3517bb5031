//! The generation pipeline: prompts, concurrent completions, parse, stitch.

use crate::alias::generate_title;
use crate::parser::{parse_puzzle_response, parse_stages};
use crate::prompts::{
    PUZZLE_SYSTEM_PREAMBLE, build_narrative_prompt, build_puzzle_prompt,
    narrative_system_preamble,
};
use crate::stitcher::combine;
use cluestory_core::{
    ApiKey, Child, CompletionOptions, CompletionRequest, GeneratedStory, GenerationParams,
    GenerationPhase, GenerationSettings, PuzzleItem, Story,
};
use cluestory_error::{ClueStoryResult, CompletionError, CompletionErrorKind};
use cluestory_interface::CompletionDriver;
use futures::future::try_join_all;
use std::collections::HashMap;

/// Raw completion and decoded puzzles for one child.
struct ChildPuzzles {
    alias: String,
    raw: String,
    items: Vec<PuzzleItem>,
}

/// Runs generation against a completion driver with fixed settings.
///
/// The narrative call and one puzzle call per child are issued
/// concurrently. The first failure aborts the run and no partial story is
/// returned.
pub struct StoryGenerator<D: CompletionDriver> {
    driver: D,
    settings: GenerationSettings,
}

impl<D: CompletionDriver> StoryGenerator<D> {
    /// Create a generator.
    pub fn new(driver: D, settings: GenerationSettings) -> Self {
        Self { driver, settings }
    }

    /// The driver used for completions.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The injected settings.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generate stitched stages plus the raw audit text.
    ///
    /// # Errors
    ///
    /// Invalid parameters, any completion failure, or a malformed puzzle
    /// payload.
    pub async fn generate_story(
        &self,
        params: &GenerationParams,
        credential: &ApiKey,
    ) -> ClueStoryResult<GeneratedStory> {
        run(&self.driver, &self.settings, params, credential).await
    }

    /// Generate and freeze a [`Story`] with a title, id and timestamp.
    ///
    /// # Errors
    ///
    /// Same as [`generate_story`](Self::generate_story).
    pub async fn create_story(
        &self,
        params: &GenerationParams,
        credential: &ApiKey,
    ) -> ClueStoryResult<Story> {
        let generated = self.generate_story(params, credential).await?;
        let title = generate_title(&params.theme, &params.role);
        let story = Story::from_generation(title, params, generated);
        tracing::info!(story_id = %story.id(), title = %story.title(), "Story created");
        Ok(story)
    }
}

/// Generate a story with an explicit region hint and model.
///
/// # Errors
///
/// Same as [`StoryGenerator::generate_story`].
pub async fn generate_story<D: CompletionDriver + ?Sized>(
    driver: &D,
    params: &GenerationParams,
    credential: &ApiKey,
    region_hint: Option<&str>,
    model_id: &str,
) -> ClueStoryResult<GeneratedStory> {
    let settings =
        GenerationSettings::for_model(model_id).with_country_code(region_hint.map(String::from));
    run(driver, &settings, params, credential).await
}

#[tracing::instrument(
    skip_all,
    fields(
        provider = driver.provider_name(),
        model = %settings.model(),
        mode = %params.mode,
        kids = params.kids.len(),
        stages = params.questions_per_kid,
    )
)]
async fn run<D: CompletionDriver + ?Sized>(
    driver: &D,
    settings: &GenerationSettings,
    params: &GenerationParams,
    credential: &ApiKey,
) -> ClueStoryResult<GeneratedStory> {
    match pipeline(driver, settings, params, credential).await {
        Ok(generated) => {
            tracing::info!(
                phase = %GenerationPhase::Complete,
                stages = generated.stages.len(),
                "Generation finished"
            );
            Ok(generated)
        }
        Err(e) => {
            tracing::error!(phase = %GenerationPhase::Failed, error = %e, "Generation aborted");
            Err(e)
        }
    }
}

async fn pipeline<D: CompletionDriver + ?Sized>(
    driver: &D,
    settings: &GenerationSettings,
    params: &GenerationParams,
    credential: &ApiKey,
) -> ClueStoryResult<GeneratedStory> {
    params.validate()?;

    let narrative_request = CompletionRequest::prompt(
        settings.model(),
        narrative_system_preamble(params.mode),
        build_narrative_prompt(params),
        CompletionOptions::text(settings.narrative_max_tokens(params.mode)),
    );
    tracing::debug!(phase = %GenerationPhase::RequestingNarrative, "Requesting narrative");
    let narrative = driver.complete(credential, &narrative_request);

    tracing::debug!(phase = %GenerationPhase::RequestingPuzzles, "Requesting puzzles");
    let puzzles = try_join_all(
        params
            .kids
            .iter()
            .map(|kid| puzzles_for(driver, settings, params, kid, credential)),
    );

    let (narrative_text, puzzle_sets) = futures::try_join!(narrative, puzzles)?;

    tracing::debug!(phase = %GenerationPhase::Parsing, "Parsing narrative");
    let stage_texts = parse_stages(&narrative_text);
    if stage_texts.is_empty() {
        return Err(CompletionError::new(CompletionErrorKind::EmptyResponse(
            "narrative contained no stage text".to_string(),
        ))
        .into());
    }
    if stage_texts.len() != params.questions_per_kid as usize {
        tracing::warn!(
            requested = params.questions_per_kid,
            parsed = stage_texts.len(),
            "Stage count differs from request"
        );
    }

    tracing::debug!(phase = %GenerationPhase::Stitching, "Stitching stages");
    let raw_response = audit_text(&narrative_text, &puzzle_sets);
    let by_alias: HashMap<String, Vec<PuzzleItem>> = puzzle_sets
        .into_iter()
        .map(|set| (set.alias, set.items))
        .collect();
    let stages = combine(&stage_texts, &by_alias, &params.kids);

    Ok(GeneratedStory {
        stages,
        raw_response,
    })
}

#[tracing::instrument(skip_all, fields(alias = %kid.alias))]
async fn puzzles_for<D: CompletionDriver + ?Sized>(
    driver: &D,
    settings: &GenerationSettings,
    params: &GenerationParams,
    kid: &Child,
    credential: &ApiKey,
) -> ClueStoryResult<ChildPuzzles> {
    let prompt = build_puzzle_prompt(
        params.subject,
        kid,
        &params.kids,
        params.questions_per_kid,
        settings.country_code().as_deref(),
    );
    let request = CompletionRequest::prompt(
        settings.model(),
        PUZZLE_SYSTEM_PREAMBLE,
        prompt,
        CompletionOptions::json(*settings.puzzle_max_tokens()),
    );

    let raw = driver.complete(credential, &request).await?;
    let items = parse_puzzle_response(&raw, &kid.alias, params.questions_per_kid)?;
    tracing::debug!(count = items.len(), "Puzzles decoded");

    Ok(ChildPuzzles {
        alias: kid.alias.clone(),
        raw,
        items,
    })
}

fn audit_text(narrative: &str, puzzle_sets: &[ChildPuzzles]) -> String {
    let mut raw = narrative.to_string();
    for set in puzzle_sets {
        raw.push_str(&format!("\n\n--- puzzles for {} ---\n{}", set.alias, set.raw));
    }
    raw
}
