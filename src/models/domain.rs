use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::StructuredResume;

/// Rule set used to filter stored resumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowDefinition {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_experience_months: i32,
    #[serde(default)]
    pub education_keywords: Vec<String>,
}

impl FlowDefinition {
    /// Minimum experience with negative values clamped to zero
    pub fn min_months(&self) -> u32 {
        self.min_experience_months.max(0) as u32
    }
}

/// A stored, named flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFlow {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub definition: FlowDefinition,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Flow fields supplied when creating a new flow
#[derive(Debug, Clone)]
pub struct NewFlow {
    pub name: String,
    pub definition: FlowDefinition,
}

/// A stored resume with both the extracted and the user-corrected data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub original_text: String,
    pub parsed_data: StructuredResume,
    pub corrected_data: Option<StructuredResume>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A resume as seen by the matcher: an opaque id plus its corrected data
#[derive(Debug, Clone)]
pub struct Candidate<I = Uuid> {
    pub id: I,
    pub data: Option<StructuredResume>,
}

impl<I> Candidate<I> {
    pub fn new(id: I, data: Option<StructuredResume>) -> Self {
        Self { id, data }
    }
}

/// Outcome of evaluating one candidate against a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowChecks {
    pub skills: bool,
    pub experience: bool,
    pub education: bool,
}

impl FlowChecks {
    pub fn passed(&self) -> bool {
        self.skills && self.experience && self.education
    }
}

/// Per-candidate match verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<I = Uuid> {
    pub id: I,
    pub matched: bool,
}
