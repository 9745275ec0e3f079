use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

pub const MAX_SKILL_TAGS: usize = 5;

// Capitalized word heuristic; not word-bounded, so "iPhone" yields "Phone".
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-zA-Z]+").expect("static skill pattern"));

/// Capitalized tokens from a description, first occurrence order, at most [`MAX_SKILL_TAGS`].
pub fn extract_skills(description: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    CAPITALIZED_WORD
        .find_iter(description)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .take(MAX_SKILL_TAGS)
        .map(ToOwned::to_owned)
        .collect()
}
