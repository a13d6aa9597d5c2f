use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{Domain, Level};
use super::validation::CatalogValidationError;

/// Non-empty list of domains in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOrder {
    domains: Vec<Domain>,
}

impl DomainOrder {
    pub fn new(domains: Vec<Domain>) -> Result<Self, CatalogValidationError> {
        if domains.is_empty() {
            return Err(CatalogValidationError::EmptyDomainOrder);
        }

        for pair in domains.windows(2) {
            if pair[0] == pair[1] {
                return Err(CatalogValidationError::DuplicateDomain(pair[1]));
            }
            if pair[0] > pair[1] {
                return Err(CatalogValidationError::DomainOutOfOrder(pair[1]));
            }
        }

        Ok(Self { domains })
    }

    pub fn lead(&self) -> Domain {
        self.domains[0]
    }

    pub fn as_slice(&self) -> &[Domain] {
        &self.domains
    }

    pub fn iter(&self) -> impl Iterator<Item = Domain> + '_ {
        self.domains.iter().copied()
    }

    pub fn contains(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// How `DomainScore::max` is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenominatorMode {
    /// `questions_per_domain × max_option_score`, regardless of how many were answered.
    Fixed,
    /// `max_option_score` per answered question only.
    Dynamic,
}

/// Level cutoffs. Each scheme compares a different quantity, so the two are not
/// interchangeable: 10/7 out of 12 is roughly 83%/58%, not 75%/50%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scheme")]
pub enum LevelThresholds {
    Percentage { strength: u8, developing: u8 },
    RawScore { strength: u32, developing: u32 },
}

impl LevelThresholds {
    pub fn classify(&self, score: u32, percentage: u8) -> Level {
        let (value, strength, developing) = match *self {
            Self::Percentage {
                strength,
                developing,
            } => (
                u32::from(percentage),
                u32::from(strength),
                u32::from(developing),
            ),
            Self::RawScore {
                strength,
                developing,
            } => (score, strength, developing),
        };

        if value >= strength {
            Level::Strength
        } else if value >= developing {
            Level::Developing
        } else {
            Level::GrowthArea
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogValidationError> {
        let (strength, developing) = match *self {
            Self::Percentage {
                strength,
                developing,
            } => {
                if strength > 100 {
                    return Err(CatalogValidationError::PercentageOutOfRange(strength));
                }
                (u32::from(strength), u32::from(developing))
            }
            Self::RawScore {
                strength,
                developing,
            } => (strength, developing),
        };

        if developing > strength {
            return Err(CatalogValidationError::ThresholdOrder {
                strength,
                developing,
            });
        }
        Ok(())
    }
}

/// Single parameterization object distinguishing engine variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub domains: DomainOrder,
    pub questions_per_domain: usize,
    pub max_option_score: u8,
    pub thresholds: LevelThresholds,
    pub denominator: DenominatorMode,
    /// Domain whose tags drive archetype inference; `None` disables inference.
    pub archetype_domain: Option<Domain>,
}

impl ScoringConfig {
    /// Universal questions drawn per domain before the role-specific slot.
    pub fn universal_count(&self) -> usize {
        self.questions_per_domain.saturating_sub(1)
    }

    pub fn fixed_max(&self) -> u32 {
        let questions = u32::try_from(self.questions_per_domain).unwrap_or(u32::MAX);
        questions.saturating_mul(u32::from(self.max_option_score))
    }

    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.questions_per_domain == 0 {
            return Err(CatalogValidationError::ZeroQuestionsPerDomain);
        }
        if self.max_option_score == 0 {
            return Err(CatalogValidationError::ZeroMaxOptionScore);
        }
        self.thresholds.validate()?;
        if let Some(domain) = self.archetype_domain {
            if !self.domains.contains(domain) {
                return Err(CatalogValidationError::ArchetypeDomainMissing(domain));
            }
        }
        Ok(())
    }
}

/// Rules for the narrative insight lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightPolicy {
    pub max_strengths: Option<usize>,
    pub max_growth_areas: Option<usize>,
    /// Append the first step of the second-lowest domain.
    pub secondary_next_step: bool,
    /// Append the catalog's cross-cutting call to action.
    pub call_to_action: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationLimits {
    pub actions: usize,
    pub techniques: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantId {
    Essentials,
    Transition,
}

impl VariantId {
    pub const fn ordered() -> [Self; 2] {
        [Self::Essentials, Self::Transition]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Essentials => "essentials",
            Self::Transition => "transition",
        }
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assessment variant '{0}' (expected essentials or transition)")]
pub struct UnknownVariant(pub String);

impl FromStr for VariantId {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "essentials" | "core" => Ok(Self::Essentials),
            "transition" | "full" => Ok(Self::Transition),
            _ => Err(UnknownVariant(value.to_string())),
        }
    }
}

/// Everything that distinguishes one assessment product from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentVariant {
    pub id: VariantId,
    pub scoring: ScoringConfig,
    pub insights: InsightPolicy,
    pub recommendations: RecommendationLimits,
}

impl AssessmentVariant {
    pub fn for_id(id: VariantId) -> Self {
        match id {
            VariantId::Essentials => Self::essentials(),
            VariantId::Transition => Self::transition(),
        }
    }

    /// Four-domain questionnaire scored against a fixed 12-point denominator with raw-score
    /// cutoffs.
    pub fn essentials() -> Self {
        Self {
            id: VariantId::Essentials,
            scoring: ScoringConfig {
                domains: DomainOrder {
                    domains: vec![
                        Domain::Mission,
                        Domain::People,
                        Domain::Execution,
                        Domain::Growth,
                    ],
                },
                questions_per_domain: 3,
                max_option_score: 4,
                thresholds: LevelThresholds::RawScore {
                    strength: 10,
                    developing: 7,
                },
                denominator: DenominatorMode::Fixed,
                archetype_domain: None,
            },
            insights: InsightPolicy {
                max_strengths: Some(3),
                max_growth_areas: Some(3),
                secondary_next_step: false,
                call_to_action: false,
            },
            recommendations: RecommendationLimits {
                actions: 3,
                techniques: 2,
            },
        }
    }

    /// Five-domain questionnaire with archetype inference on the transition domain.
    pub fn transition() -> Self {
        Self {
            id: VariantId::Transition,
            scoring: ScoringConfig {
                domains: DomainOrder {
                    domains: Domain::ordered().to_vec(),
                },
                questions_per_domain: 3,
                max_option_score: 4,
                thresholds: LevelThresholds::Percentage {
                    strength: 75,
                    developing: 50,
                },
                denominator: DenominatorMode::Dynamic,
                archetype_domain: Some(Domain::Transition),
            },
            insights: InsightPolicy {
                max_strengths: None,
                max_growth_areas: None,
                secondary_next_step: true,
                call_to_action: true,
            },
            recommendations: RecommendationLimits {
                actions: 4,
                techniques: 3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_order_rejects_duplicates_and_non_canonical_lists() {
        assert_eq!(
            DomainOrder::new(Vec::new()),
            Err(CatalogValidationError::EmptyDomainOrder)
        );
        assert_eq!(
            DomainOrder::new(vec![Domain::People, Domain::People]),
            Err(CatalogValidationError::DuplicateDomain(Domain::People))
        );
        assert_eq!(
            DomainOrder::new(vec![Domain::Growth, Domain::Mission]),
            Err(CatalogValidationError::DomainOutOfOrder(Domain::Mission))
        );

        let order = DomainOrder::new(vec![Domain::People, Domain::Growth]).expect("valid order");
        assert_eq!(order.lead(), Domain::People);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn raw_score_cutoffs_compare_the_raw_score() {
        let thresholds = LevelThresholds::RawScore {
            strength: 10,
            developing: 7,
        };
        assert_eq!(thresholds.classify(10, 0), Level::Strength);
        assert_eq!(thresholds.classify(9, 100), Level::Developing);
        assert_eq!(thresholds.classify(7, 58), Level::Developing);
        assert_eq!(thresholds.classify(6, 50), Level::GrowthArea);
    }

    #[test]
    fn percentage_cutoffs_compare_the_percentage() {
        let thresholds = LevelThresholds::Percentage {
            strength: 75,
            developing: 50,
        };
        assert_eq!(thresholds.classify(0, 75), Level::Strength);
        assert_eq!(thresholds.classify(12, 74), Level::Developing);
        assert_eq!(thresholds.classify(12, 50), Level::Developing);
        assert_eq!(thresholds.classify(12, 49), Level::GrowthArea);
    }

    #[test]
    fn the_two_schemes_disagree_on_the_same_score() {
        let raw = LevelThresholds::RawScore {
            strength: 10,
            developing: 7,
        };
        let pct = LevelThresholds::Percentage {
            strength: 75,
            developing: 50,
        };
        // 9 of 12 is 75%.
        assert_eq!(raw.classify(9, 75), Level::Developing);
        assert_eq!(pct.classify(9, 75), Level::Strength);
    }

    #[test]
    fn presets_validate() {
        for id in VariantId::ordered() {
            let variant = AssessmentVariant::for_id(id);
            assert_eq!(variant.id, id);
            variant.scoring.validate().expect("preset is valid");
        }
        assert_eq!(AssessmentVariant::essentials().scoring.fixed_max(), 12);
        assert_eq!(AssessmentVariant::essentials().scoring.universal_count(), 2);
    }

    #[test]
    fn validation_rejects_inverted_thresholds_and_foreign_archetype_domain() {
        let mut config = AssessmentVariant::transition().scoring;
        config.thresholds = LevelThresholds::Percentage {
            strength: 40,
            developing: 60,
        };
        assert!(matches!(
            config.validate(),
            Err(CatalogValidationError::ThresholdOrder { .. })
        ));

        let mut config = AssessmentVariant::essentials().scoring;
        config.archetype_domain = Some(Domain::Transition);
        assert_eq!(
            config.validate(),
            Err(CatalogValidationError::ArchetypeDomainMissing(
                Domain::Transition
            ))
        );
    }

    #[test]
    fn variant_ids_parse_leniently() {
        assert_eq!("Essentials".parse::<VariantId>(), Ok(VariantId::Essentials));
        assert_eq!(" transition ".parse::<VariantId>(), Ok(VariantId::Transition));
        assert!("deluxe".parse::<VariantId>().is_err());
    }
}
