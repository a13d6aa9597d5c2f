use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::domain::BilingualText;
use super::super::validation::CatalogValidationError;

/// Named detrimental behavior signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailurePattern {
    pub id: String,
    pub name: BilingualText,
    pub trigger_tags: BTreeSet<String>,
    pub threshold: u32,
    pub message: BilingualText,
    pub icon: String,
}

impl FailurePattern {
    /// Occurrences of trigger tags in `tags`, counting repeats.
    pub fn matches(&self, tags: &[&str]) -> u32 {
        let count = tags
            .iter()
            .filter(|tag| self.trigger_tags.contains(**tag))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.threshold == 0 {
            return Err(CatalogValidationError::ZeroPatternThreshold(
                self.id.clone(),
            ));
        }
        if self.trigger_tags.is_empty() {
            return Err(CatalogValidationError::EmptyPatternTriggers(
                self.id.clone(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedPattern<'a> {
    pub pattern: &'a FailurePattern,
    pub matched: u32,
}

/// Every pattern whose match count reaches its threshold, in catalog order.
pub fn detect_failure_patterns<'a>(
    tags: &[&str],
    catalog: &'a [FailurePattern],
) -> Vec<DetectedPattern<'a>> {
    catalog
        .iter()
        .filter_map(|pattern| {
            let matched = pattern.matches(tags);
            (matched >= pattern.threshold).then_some(DetectedPattern { pattern, matched })
        })
        .collect()
}
