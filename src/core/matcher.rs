use crate::core::filters::{lowercase_all, matches_education, matches_experience, matches_skills};
use crate::models::{Candidate, FlowChecks, FlowDefinition, MatchResult, StructuredResume};

/// Evaluates candidates against a single flow
///
/// Keyword lists are lower-cased once when the matcher is built, so one
/// `FlowMatcher` can be reused across any number of candidates. Evaluation is
/// pure: there is no shared state and no I/O.
///
/// # Rules
/// 1. Every required skill is among the candidate's skills
/// 2. Normalized experience is at least the flow minimum
/// 3. At least one education keyword occurs in the candidate's education
#[derive(Debug, Clone)]
pub struct FlowMatcher {
    required_skills: Vec<String>,
    min_months: u32,
    education_keywords: Vec<String>,
}

impl FlowMatcher {
    pub fn new(flow: &FlowDefinition) -> Self {
        Self {
            required_skills: lowercase_all(&flow.required_skills),
            min_months: flow.min_months(),
            education_keywords: lowercase_all(&flow.education_keywords),
        }
    }

    /// Run all three rules against one resume
    pub fn check(&self, resume: &StructuredResume) -> FlowChecks {
        FlowChecks {
            skills: matches_skills(resume, &self.required_skills),
            experience: matches_experience(resume, self.min_months),
            education: matches_education(resume, &self.education_keywords),
        }
    }

    /// Evaluate a candidate, treating missing data as an empty resume
    pub fn is_match<I>(&self, candidate: &Candidate<I>) -> bool {
        match &candidate.data {
            Some(resume) => self.check(resume).passed(),
            None => self.check(&StructuredResume::default()).passed(),
        }
    }

    /// Verdict for every candidate, in input order
    pub fn evaluate<I: Clone>(&self, candidates: &[Candidate<I>]) -> Vec<MatchResult<I>> {
        candidates
            .iter()
            .map(|candidate| MatchResult {
                id: candidate.id.clone(),
                matched: self.is_match(candidate),
            })
            .collect()
    }

    /// Ids of the matching candidates, in input order
    pub fn matching_ids<I: Clone>(&self, candidates: &[Candidate<I>]) -> Vec<I> {
        candidates
            .iter()
            .filter(|candidate| self.is_match(candidate))
            .map(|candidate| candidate.id.clone())
            .collect()
    }
}

/// Ids of all candidates satisfying `flow`, in input order
pub fn match_flow<I: Clone>(flow: &FlowDefinition, candidates: &[Candidate<I>]) -> Vec<I> {
    FlowMatcher::new(flow).matching_ids(candidates)
}
