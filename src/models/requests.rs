use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{FlowDefinition, NewFlow};
use crate::models::resume::StructuredResume;

/// Pasted resume text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResumeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Request to fetch several resumes at once
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ManyResumesRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub ids: Vec<Uuid>,
}

/// Replacement for a resume's corrected data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCorrectedDataRequest {
    #[serde(default)]
    pub corrected_data: Option<StructuredResume>,
}

/// Request to create a new analysis flow
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFlowRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    // Upper bound is 999 years, the normalizer's saturation point.
    #[validate(range(min = 0, max = 11988))]
    #[serde(default)]
    pub min_experience_months: i32,
    #[serde(default)]
    pub education_keywords: Vec<String>,
}

impl From<CreateFlowRequest> for NewFlow {
    fn from(req: CreateFlowRequest) -> Self {
        NewFlow {
            name: req.name,
            definition: FlowDefinition {
                required_skills: req.required_skills,
                min_experience_months: req.min_experience_months,
                education_keywords: req.education_keywords,
            },
        }
    }
}
