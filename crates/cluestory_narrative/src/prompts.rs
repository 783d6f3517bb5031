//! Prompt builders for the narrative call and the per-child puzzle calls.
//!
//! Builders are pure: identical inputs give identical prompts, and every
//! child passed in appears in the output. Only aliases are ever written
//! into a prompt.

use crate::classifier::{GRADE_LEVEL_REFERENCE, concepts_for, difficulty_description};
use crate::region::grade_system_note;
use cluestory_core::{Child, GenerationParams, StoryMode, Subject};

/// Placeholder the puzzle model writes in place of the target child.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// System preamble for every puzzle call.
pub const PUZZLE_SYSTEM_PREAMBLE: &str = "Generate educational puzzles for children. Respond only with valid JSON. Make problems appropriately challenging - do not make them too easy.";

/// System preamble for the narrative call.
pub fn narrative_system_preamble(mode: StoryMode) -> &'static str {
    match mode {
        StoryMode::Plot => "You create brief story outlines for parents. Follow formatting exactly.",
        StoryMode::Story => "You write children's adventure stories. Follow formatting exactly.",
    }
}

fn alias_list(kids: &[Child]) -> String {
    kids.iter()
        .map(|k| k.alias.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt for the narrative call.
///
/// Requests exactly `questions_per_kid` sections, each opened by a
/// `=== STAGE n ===` marker, followed by a conclusion.
///
/// # Examples
///
/// ```
/// use cluestory_core::{Child, DifficultyLevel, GenerationParams, StoryMode, Subject};
/// use cluestory_narrative::build_narrative_prompt;
///
/// let kid = Child::new("1", "Maya", "3".parse().unwrap(), DifficultyLevel::new(2).unwrap(), "Alex");
/// let params = GenerationParams {
///     subject: Subject::Math,
///     mode: StoryMode::Story,
///     role: "Detectives".into(),
///     theme: "Cloud Kingdom".into(),
///     questions_per_kid: 3,
///     kids: vec![kid],
/// };
/// let prompt = build_narrative_prompt(&params);
/// assert!(prompt.contains("EXACTLY 3 stages"));
/// assert!(prompt.contains("Alex"));
/// assert!(!prompt.contains("Maya"));
/// ```
pub fn build_narrative_prompt(params: &GenerationParams) -> String {
    let aliases = alias_list(&params.kids);
    let total = params.questions_per_kid;

    match params.mode {
        StoryMode::Plot => format!(
            "You are helping a parent tell a bedtime story.

Create EXACTLY {total} stage outlines. Each stage should lead naturally to the next.

CHARACTERS: {aliases}
SETTING: {theme}
ROLE: The children are {role}

For each stage, provide a BRIEF plot outline with these elements:
- Setting/Location for this stage
- What the children encounter (magical character, obstacle, discovery)
- The challenge setup (what blocks their progress)

FORMAT:
=== STAGE X ===
• Setting: [where they are]
• Encounter: [who/what they meet]
• Challenge: [what blocks their progress]

Do NOT write any puzzles or questions. Puzzles are provided separately.

After stage {total}, add a brief conclusion.",
            theme = params.theme,
            role = params.role,
        ),
        StoryMode::Story => {
            let youngest = params
                .youngest()
                .map(|k| k.grade.to_string())
                .unwrap_or_else(|| "K".to_string());
            format!(
                "You are a children's bedtime story writer.

Create a story with EXACTLY {total} stages.

CHARACTERS: {aliases} ({count} children who are the heroes)

STORY:
- The children are {role} exploring {theme}
- Each stage they encounter a magical character (wizard, fairy, talking animal, etc.)
- The magical character blocks their path and says each child must solve a puzzle to pass
- Make it exciting and adventurous

FORMAT:
- Start each stage with: === STAGE X ===
- Write 2-3 paragraphs describing the adventure and encounter
- End each stage with the magical character announcing that each child must solve their own puzzle
- Do NOT write the actual puzzles - just set up that puzzles are needed
- After stage {total}, write a brief happy conclusion

EXAMPLE STAGE ENDING:
\"The wise owl hooted softly. 'To cross this bridge, each of you must answer my riddle,' she said, looking at {aliases} in turn.\"

Keep language appropriate for Grade {youngest}.",
                count = params.kids.len(),
                role = params.role,
                theme = params.theme,
            )
        }
    }
}

/// Prompt for one child's puzzle call.
///
/// `peers` is the full child list; the target child is excluded from the
/// social-problem hint. `country_code` adds a grade-system note when set.
pub fn build_puzzle_prompt(
    subject: Subject,
    child: &Child,
    peers: &[Child],
    count: u32,
    country_code: Option<&str>,
) -> String {
    let subject_type = match subject {
        Subject::Math => "math word problems",
        Subject::Reading => "reading/language problems",
    };

    let country_context = country_code
        .filter(|c| !c.trim().is_empty())
        .map(|c| {
            format!(
                "\nNOTE: This child is in the {}. Adjust problem context appropriately.",
                grade_system_note(c)
            )
        })
        .unwrap_or_default();

    let others: Vec<&Child> = peers
        .iter()
        .filter(|k| !k.alias.eq_ignore_ascii_case(&child.alias))
        .collect();
    let name_instruction = match others.first() {
        Some(first) => {
            let names = others
                .iter()
                .map(|k| k.alias.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "- IMPORTANT: Use \"{NAME_PLACEHOLDER}\" as a placeholder for the main character in the problems. You may also include other children: {names} to make problems more social/interactive (e.g., \"{NAME_PLACEHOLDER} and {} are sharing cookies...\")",
                first.alias
            )
        }
        None => format!(
            "- IMPORTANT: Use \"{NAME_PLACEHOLDER}\" as a placeholder for the child's name in the problems to make them personal (e.g., \"{NAME_PLACEHOLDER} has 5 apples...\")"
        ),
    };

    format!(
        "Generate {count} {subject_type} for a child.

CHILD INFO:
- Character: {alias}
- Grade: {grade}
- Difficulty: {level}/5
{country_context}

{rubric}

{GRADE_LEVEL_REFERENCE}

{concepts}

CRITICAL REQUIREMENTS:
- All problems must be WORD PROBLEMS with a fun, engaging story context
{name_instruction}
- Do NOT use raw arithmetic like \"5+3=\" or \"342+89\"
- Problems should feel like mini-adventures or puzzles within a story
- Each problem should be different and creative
- The difficulty should GENUINELY match the specified level - do NOT make problems too easy
- For difficulty 3+ include problems that require multiple steps or careful reasoning
- Challenge the child appropriately - easy problems waste their potential

Respond with JSON:
{{
  \"problems\": [
    {{ \"problem\": \"...\", \"solution\": \"...\" }}
  ]
}}",
        alias = child.alias,
        grade = child.grade,
        level = child.difficulty_level.value(),
        rubric = difficulty_description(child.difficulty_level),
        concepts = concepts_for(subject, child.grade),
    )
}
