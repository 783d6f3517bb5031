//! Shared helpers for generator tests.

#![allow(dead_code)]

use async_trait::async_trait;
use cluestory_core::{ApiKey, Child, CompletionRequest, DifficultyLevel, GenerationParams, StoryMode, Subject};
use cluestory_error::ClueStoryResult;
use cluestory_interface::CompletionDriver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = dyn Fn(&CompletionRequest) -> ClueStoryResult<String> + Send + Sync;

/// Driver that answers from a closure and records every request.
pub struct MockDriver {
    responder: Box<Responder>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockDriver {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> ClueStoryResult<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            delay: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Hold every call open for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(
        &self,
        _credential: &ApiKey,
        request: &CompletionRequest,
    ) -> ClueStoryResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        (self.responder)(request)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Alias a puzzle request was built for, read from its prompt.
pub fn puzzle_alias(request: &CompletionRequest) -> Option<String> {
    if !*request.json_mode() {
        return None;
    }
    request
        .user_prompt()?
        .lines()
        .find_map(|line| line.trim().strip_prefix("- Character: "))
        .map(|alias| alias.trim().to_string())
}

/// Puzzle JSON with `count` numbered problems for `alias`.
pub fn puzzle_json(alias: &str, count: usize) -> String {
    let problems: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "problem": format!("{{name}} solves riddle {i} for {alias}"),
                "solution": format!("answer {i}"),
            })
        })
        .collect();
    serde_json::json!({ "problems": problems }).to_string()
}

/// Narrative text with `count` stage markers.
pub fn narrative(count: usize) -> String {
    (1..=count)
        .map(|i| format!("=== STAGE {i} ===\nStage {i} of the adventure."))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn kid(name: &str, alias: &str, grade: &str) -> Child {
    Child::new(
        alias.to_lowercase(),
        name,
        grade.parse().unwrap(),
        DifficultyLevel::new(3).unwrap(),
        alias,
    )
}

pub fn params(kids: Vec<Child>, questions_per_kid: u32) -> GenerationParams {
    GenerationParams {
        subject: Subject::Math,
        mode: StoryMode::Story,
        role: "Detectives".into(),
        theme: "Cloud Kingdom".into(),
        questions_per_kid,
        kids,
    }
}

pub fn credential() -> ApiKey {
    ApiKey::new("sk-test")
}

pub fn shared(driver: MockDriver) -> Arc<MockDriver> {
    Arc::new(driver)
}
