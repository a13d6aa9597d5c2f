use std::sync::Arc;

use tracing::info;

use super::config::{AssessmentVariant, UnknownVariant, VariantId};
use super::content::ContentCatalog;
use super::domain::{Locale, RoleId};
use super::engine::{AssessmentEngine, AssessmentSubmission};
use super::report::{AssessmentResult, QuestionSet};
use super::validation::CatalogValidationError;

/// Service holding one engine per variant over a single shared catalog.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    essentials: AssessmentEngine,
    transition: AssessmentEngine,
    default_variant: VariantId,
}

impl AssessmentService {
    /// Validate `catalog` against every variant and build the engines.
    pub fn new(
        catalog: Arc<ContentCatalog>,
        default_variant: VariantId,
    ) -> Result<Self, CatalogValidationError> {
        let essentials =
            AssessmentEngine::new(catalog.clone(), AssessmentVariant::essentials())?;
        let transition = AssessmentEngine::new(catalog, AssessmentVariant::transition())?;

        Ok(Self {
            essentials,
            transition,
            default_variant,
        })
    }

    pub fn default_variant(&self) -> VariantId {
        self.default_variant
    }

    pub fn engine(&self, variant: VariantId) -> &AssessmentEngine {
        match variant {
            VariantId::Essentials => &self.essentials,
            VariantId::Transition => &self.transition,
        }
    }

    /// Parse a caller-supplied variant name, using the default when none is given.
    pub fn resolve_variant(
        &self,
        requested: Option<&str>,
    ) -> Result<VariantId, AssessmentServiceError> {
        match requested.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Ok(value.parse()?),
            None => Ok(self.default_variant),
        }
    }

    pub fn questions(
        &self,
        role: &RoleId,
        locale: Locale,
        variant: Option<&str>,
    ) -> Result<QuestionSet, AssessmentServiceError> {
        let variant = self.resolve_variant(variant)?;
        Ok(self.engine(variant).question_set(role, locale))
    }

    pub fn assess(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let variant = self.resolve_variant(submission.variant.as_deref())?;
        let result = self.engine(variant).assess(
            &submission.role_id,
            &submission.answers,
            submission.locale,
        );

        info!(
            %variant,
            role = %submission.role_id,
            locale = submission.locale.code(),
            overall = result.overall_score,
            "assessment submitted"
        );
        Ok(result)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),
}
