// Model exports
pub mod domain;
pub mod requests;
pub mod resume;
pub mod responses;

pub use domain::{AnalysisFlow, Candidate, FlowChecks, FlowDefinition, MatchResult, NewFlow, ResumeRecord};
pub use requests::{CreateFlowRequest, ManyResumesRequest, UpdateCorrectedDataRequest, UploadResumeRequest};
pub use resume::{RawResume, ResumeFields, StructuredResume};
pub use responses::{ErrorResponse, HealthResponse};
