//! Leadership-transition assessment scoring.
//!
//! A session composes a question set for the subject's role, aggregates the chosen options
//! into per-domain scores, ranks the strongest and weakest domains, classifies behavior tags
//! into a situational archetype and failure patterns, and selects localized coaching content.
//! Every step is a pure function over the submission and a read-only [`ContentCatalog`].

pub mod classify;
pub mod config;
pub mod content;
pub mod domain;
mod engine;
pub mod insights;
pub mod questions;
pub mod recommend;
pub mod report;
pub mod router;
pub mod scoring;
mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use config::{
    AssessmentVariant, DenominatorMode, DomainOrder, InsightPolicy, LevelThresholds,
    RecommendationLimits, ScoringConfig, UnknownVariant, VariantId,
};
pub use content::{ContentCatalog, ContentError};
pub use domain::{
    AnswerMap, AnswerOption, Archetype, BilingualText, Domain, Level, Locale, OptionId, Question,
    QuestionId, RoleId,
};
pub use engine::{AssessmentEngine, AssessmentSubmission};
pub use report::{AssessmentResult, QuestionSet};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
pub use validation::CatalogValidationError;
