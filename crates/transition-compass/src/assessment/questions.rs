use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::domain::{Domain, Question, RoleId};
use super::validation::CatalogValidationError;

/// Question tailored to one role within one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleQuestion {
    pub role: RoleId,
    pub question: Question,
}

/// Universal and role-specific question pools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    universal: BTreeMap<Domain, Vec<Question>>,
    #[serde(default)]
    role_specific: Vec<RoleQuestion>,
}

impl QuestionBank {
    pub fn new(
        universal: BTreeMap<Domain, Vec<Question>>,
        role_specific: Vec<RoleQuestion>,
    ) -> Self {
        Self {
            universal,
            role_specific,
        }
    }

    pub fn universal(&self, domain: Domain) -> &[Question] {
        self.universal
            .get(&domain)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn role_question(&self, role: &RoleId, domain: Domain) -> Option<&Question> {
        self.role_specific
            .iter()
            .find(|entry| &entry.role == role && entry.question.domain == domain)
            .map(|entry| &entry.question)
    }

    /// Roles that have at least one tailored question, in first-seen order.
    pub fn roles(&self) -> Vec<&RoleId> {
        let mut seen = HashSet::new();
        self.role_specific
            .iter()
            .map(|entry| &entry.role)
            .filter(|role| seen.insert(*role))
            .collect()
    }

    fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.universal
            .values()
            .flatten()
            .chain(self.role_specific.iter().map(|entry| &entry.question))
    }

    pub(crate) fn validate(&self, max_option_score: u8) -> Result<(), CatalogValidationError> {
        for (domain, pool) in &self.universal {
            if let Some(question) = pool.iter().find(|question| question.domain != *domain) {
                return Err(CatalogValidationError::DomainMismatch {
                    question: question.id.clone(),
                    expected: *domain,
                    actual: question.domain,
                });
            }
        }

        let mut pairings = HashSet::new();
        for entry in &self.role_specific {
            if !pairings.insert((&entry.role, entry.question.domain)) {
                return Err(CatalogValidationError::DuplicateRoleQuestion {
                    role: entry.role.clone(),
                    domain: entry.question.domain,
                });
            }
        }

        let mut question_ids = HashSet::new();
        for question in self.all_questions() {
            if !question_ids.insert(&question.id) {
                return Err(CatalogValidationError::DuplicateQuestion(
                    question.id.clone(),
                ));
            }
            if question.options.is_empty() {
                return Err(CatalogValidationError::QuestionWithoutOptions(
                    question.id.clone(),
                ));
            }

            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(&option.id) {
                    return Err(CatalogValidationError::DuplicateOption {
                        question: question.id.clone(),
                        option: option.id.clone(),
                    });
                }
                if option.score == 0 || option.score > max_option_score {
                    return Err(CatalogValidationError::OptionScoreOutOfRange {
                        question: question.id.clone(),
                        option: option.id.clone(),
                        score: option.score,
                        max: max_option_score,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Build the ordered question list for one session.
///
/// Each configured domain contributes its first `universal_count` universal questions
/// followed by the role's tailored question, or the next unused universal question when the
/// role has none. Short pools yield fewer questions instead of failing.
pub fn compose_questions<'a>(
    bank: &'a QuestionBank,
    role: &RoleId,
    config: &ScoringConfig,
) -> Vec<&'a Question> {
    let universal_count = config.universal_count();
    let mut composed = Vec::with_capacity(config.domains.len() * config.questions_per_domain);

    for domain in config.domains.iter() {
        let pool = bank.universal(domain);
        composed.extend(pool.iter().take(universal_count));

        match bank.role_question(role, domain) {
            Some(question) => composed.push(question),
            None => {
                if let Some(question) = pool.get(universal_count) {
                    composed.push(question);
                }
            }
        }
    }

    composed
}
