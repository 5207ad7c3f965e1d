//! Rubric vocabulary and literal phrase matching.
//!
//! Matching is plain substring containment over lowercased, whitespace-collapsed text. There is
//! no tokenisation and no word-boundary check: a short phrase such as "r" or "sql" will also hit
//! inside unrelated words. That is the contract every extractor relies on.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::rubric::{lowered, Rubric};

/// Category-level phrase sets flattened across every role in the rubric.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Vocabulary {
    pub skills: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub projects: BTreeSet<String>,
    pub certifications: BTreeSet<String>,
    pub roles: BTreeSet<String>,
    pub majors: BTreeSet<String>,
}

impl Vocabulary {
    /// Role-agnostic: a profile is matched against all roles' phrases at once.
    pub fn collect(rubric: &Rubric) -> Self {
        let mut vocab = Vocabulary::default();
        for role in rubric.values() {
            vocab.skills.extend(lowered(&role.skills.must));
            vocab.skills.extend(lowered(&role.skills.nice));
            vocab.tools.extend(lowered(&role.tools.core));
            vocab.tools.extend(lowered(&role.tools.optional));
            vocab.projects.extend(lowered(&role.signals.projects));
            vocab.certifications.extend(lowered(&role.signals.certifications));
            vocab.roles.extend(lowered(&role.experience.roles));
            vocab.majors.extend(lowered(&role.education.preferred_majors));
            vocab.majors.extend(lowered(&role.education.optional_majors));
        }
        vocab
    }
}

/// Lowercase and collapse every whitespace run (including newlines) to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Phrases from `phrases` that occur as substrings of the already-normalised `text`.
pub fn find_phrases<'a, I>(normalized_text: &str, phrases: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    phrases
        .into_iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty() && normalized_text.contains(p.as_str()))
        .collect()
}
