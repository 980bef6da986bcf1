use std::collections::HashSet;

use crate::core::experience::normalize_experience;
use crate::models::StructuredResume;

/// Lower-case every entry of a keyword list
pub fn lowercase_all<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_lowercase()).collect()
}

/// Check that every required skill appears in the candidate's skills
///
/// `required` must already be lower-cased. An empty requirement list passes.
#[inline]
pub fn matches_skills(resume: &StructuredResume, required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }

    let skills: HashSet<String> = resume.skills().iter().map(|s| s.to_lowercase()).collect();

    required.iter().all(|skill| skills.contains(skill))
}

/// Check the candidate's normalized experience against a minimum in months
#[inline]
pub fn matches_experience(resume: &StructuredResume, min_months: u32) -> bool {
    normalize_experience(resume.total_experience()) >= min_months
}

/// Check that at least one keyword occurs in the candidate's education
///
/// `keywords` must already be lower-cased. An empty keyword list never passes.
#[inline]
pub fn matches_education(resume: &StructuredResume, keywords: &[String]) -> bool {
    let education = resume.education().to_lowercase();

    keywords.iter().any(|keyword| education.contains(keyword.as_str()))
}
