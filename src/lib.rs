//! Resumatch - resume intake and rule-based candidate matching
//!
//! Resumes are turned into structured fields by an external extraction service
//! and stored alongside user corrections. Analysis flows (required skills,
//! minimum experience, education keywords) are evaluated against the corrected
//! data by a pure matcher in [`core`].

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use actix_web::web;

// Re-export commonly used types
pub use crate::core::{match_flow, normalize_experience, FlowMatcher};
pub use models::{Candidate, FlowDefinition, StructuredResume};

/// Register the request extractor configs used by every handler
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(error::handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(error::handle_path_error));
}
