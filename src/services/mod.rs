// Service exports
pub mod cache;
pub mod extraction;
pub mod postgres;
pub mod store;

pub use cache::FlowCache;
pub use extraction::{ExtractionError, OpenAiExtractor, ResumeExtractor};
pub use postgres::PostgresClient;
pub use store::{ResumeStore, StoreError};
