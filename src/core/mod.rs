// Core matching exports
pub mod experience;
pub mod filters;
pub mod matcher;

pub use experience::{normalize_experience, MAX_EXPERIENCE_MONTHS, MAX_EXPERIENCE_YEARS};
pub use filters::{matches_education, matches_experience, matches_skills};
pub use matcher::{match_flow, FlowMatcher};
