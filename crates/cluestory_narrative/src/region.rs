//! Country grade-system hints for puzzle prompts.

/// Note used for unknown countries.
pub const DEFAULT_GRADE_SYSTEM_NOTE: &str = "Using US grade equivalents as reference";

const GRADE_SYSTEM_NOTES: &[(&str, &str)] = &[
    ("US", "US grades K-12 system"),
    (
        "GB",
        "UK system: Reception, Years 1-13. Year 1 ≈ US Grade K, Year 7 ≈ US Grade 6",
    ),
    ("CA", "Canadian grades similar to US K-12 system"),
    ("AU", "Australian system: Prep/Foundation, Years 1-12"),
    (
        "IN",
        "Indian system: Classes/Standards 1-12, LKG/UKG for kindergarten",
    ),
    ("SG", "Singapore: Primary 1-6, Secondary 1-4"),
    ("NZ", "NZ: Years 1-13, Year 1 starts at age 5"),
    (
        "IE",
        "Irish system: Junior/Senior Infants, 1st-6th class (primary), 1st-6th year (secondary)",
    ),
    ("PH", "Philippine K-12 system similar to US"),
    ("ZA", "South African Grades R-12 (R = Reception)"),
];

/// Grade-system note for an ISO country code, case-insensitive.
///
/// # Examples
///
/// ```
/// use cluestory_narrative::{DEFAULT_GRADE_SYSTEM_NOTE, grade_system_note};
///
/// assert!(grade_system_note("gb").starts_with("UK system"));
/// assert_eq!(grade_system_note("OTHER"), DEFAULT_GRADE_SYSTEM_NOTE);
/// ```
pub fn grade_system_note(country_code: &str) -> &'static str {
    let code = country_code.trim();
    GRADE_SYSTEM_NOTES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, note)| *note)
        .unwrap_or(DEFAULT_GRADE_SYSTEM_NOTE)
}
