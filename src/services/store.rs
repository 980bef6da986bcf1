use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AnalysisFlow, Candidate, NewFlow, ResumeRecord, StructuredResume};

/// Errors that can occur when reading or writing stored records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Persistence for resumes and analysis flows
///
/// Handlers only see this trait; the PostgreSQL client is the production
/// implementation.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Store a new resume; the corrected data starts as a copy of `parsed`
    async fn insert_resume(
        &self,
        original_text: &str,
        parsed: &StructuredResume,
    ) -> Result<ResumeRecord, StoreError>;

    async fn get_resume(&self, id: Uuid) -> Result<ResumeRecord, StoreError>;

    /// All resumes, newest first
    async fn list_resumes(&self) -> Result<Vec<ResumeRecord>, StoreError>;

    /// Resumes whose id is in `ids`; unknown ids are skipped
    async fn get_resumes(&self, ids: &[Uuid]) -> Result<Vec<ResumeRecord>, StoreError>;

    async fn update_corrected_data(
        &self,
        id: Uuid,
        corrected: Option<&StructuredResume>,
    ) -> Result<ResumeRecord, StoreError>;

    /// Every resume as a matcher candidate carrying its corrected data
    async fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError>;

    async fn insert_flow(&self, flow: &NewFlow) -> Result<AnalysisFlow, StoreError>;

    async fn get_flow(&self, id: Uuid) -> Result<AnalysisFlow, StoreError>;

    /// All flows, newest first
    async fn list_flows(&self) -> Result<Vec<AnalysisFlow>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
