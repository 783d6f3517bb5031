//! Wire shape of the documents exchanged with storage and display layers.

use cluestory_core::{
    GeneratedStory, GenerationParams, GenerationStatus, ProblemContent, Story, StoryMode,
    StoryStage, Subject,
};

const PARAMS_JSON: &str = r#"{
    "subject": "math",
    "mode": "story",
    "role": "Detectives",
    "theme": "Cloud Kingdom",
    "questionsPerKid": 2,
    "kids": [
        {"id": "k1", "name": "Maya", "grade": "K", "difficultyLevel": 2, "alias": "Alex"},
        {"id": "k2", "name": "Leo", "grade": "7", "difficultyLevel": 5, "alias": "Bella"}
    ]
}"#;

fn generated() -> GeneratedStory {
    GeneratedStory {
        stages: vec![StoryStage {
            stage_number: 1,
            content: "Alex and Bella climb the beanstalk.".into(),
            problems: vec![ProblemContent {
                kid_alias: "Alex".into(),
                kid_name: "Maya".into(),
                text: "Alex sees 3 birds".into(),
                solution: "3".into(),
            }],
        }],
        raw_response: "=== STAGE 1 ===".into(),
    }
}

#[test]
fn test_params_decode_from_camel_case() {
    let params: GenerationParams = serde_json::from_str(PARAMS_JSON).unwrap();
    assert_eq!(params.subject, Subject::Math);
    assert_eq!(params.mode, StoryMode::Story);
    assert_eq!(params.questions_per_kid, 2);
    assert!(params.kids[0].grade.is_kindergarten());
    assert_eq!(params.kids[1].difficulty_level.value(), 5);
    assert!(params.validate().is_ok());
    assert_eq!(params.youngest().map(|k| k.alias.as_str()), Some("Alex"));
}

#[test]
fn test_invalid_grade_rejected_on_decode() {
    let bad = PARAMS_JSON.replace(r#""grade": "7""#, r#""grade": "13""#);
    assert!(serde_json::from_str::<GenerationParams>(&bad).is_err());
}

#[test]
fn test_story_serializes_with_camel_case_keys() {
    let params: GenerationParams = serde_json::from_str(PARAMS_JSON).unwrap();
    let story = Story::from_generation("Detectives in Cloud Kingdom", &params, generated());

    let value = serde_json::to_value(&story).unwrap();
    assert_eq!(value["title"], "Detectives in Cloud Kingdom");
    assert_eq!(value["stages"][0]["stageNumber"], 1);
    assert_eq!(value["stages"][0]["problems"][0]["kidAlias"], "Alex");
    assert_eq!(value["stages"][0]["problems"][0]["kidName"], "Maya");
    assert!(value["createdAt"].is_string());
    assert_eq!(value["kids"][0]["grade"], "K");

    let back: Story = serde_json::from_value(value).unwrap();
    assert_eq!(back, story);
}

#[test]
fn test_status_projection() {
    let params: GenerationParams = serde_json::from_str(PARAMS_JSON).unwrap();
    let story = Story::from_generation("t", &params, generated());

    let status = GenerationStatus::from_result(Ok(story));
    assert!(status.story().is_some());
    let value = serde_json::to_value(&status).unwrap();
    assert_eq!(value["status"], "success");

    let pending = serde_json::to_value(GenerationStatus::Pending).unwrap();
    assert_eq!(pending["status"], "pending");
}
