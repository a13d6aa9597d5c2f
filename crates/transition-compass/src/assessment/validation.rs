use super::domain::{Domain, OptionId, QuestionId, RoleId};

/// Structural problems in a variant or content catalog, surfaced once at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogValidationError {
    #[error("a variant must declare at least one domain")]
    EmptyDomainOrder,
    #[error("domain {0} is declared twice")]
    DuplicateDomain(Domain),
    #[error("domain {0} is declared out of canonical order")]
    DomainOutOfOrder(Domain),
    #[error("questions per domain must be at least 1")]
    ZeroQuestionsPerDomain,
    #[error("max option score must be at least 1")]
    ZeroMaxOptionScore,
    #[error("percentage threshold {0} exceeds 100")]
    PercentageOutOfRange(u8),
    #[error("developing threshold {developing} exceeds strength threshold {strength}")]
    ThresholdOrder { strength: u32, developing: u32 },
    #[error("archetype domain {0} is not part of the variant")]
    ArchetypeDomainMissing(Domain),
    #[error("no universal questions for domain {0}")]
    MissingUniversalPool(Domain),
    #[error("question {question} is filed under {expected} but declares {actual}")]
    DomainMismatch {
        question: QuestionId,
        expected: Domain,
        actual: Domain,
    },
    #[error("question id {0} is used more than once")]
    DuplicateQuestion(QuestionId),
    #[error("question {0} has no answer options")]
    QuestionWithoutOptions(QuestionId),
    #[error("question {question} repeats option id {option}")]
    DuplicateOption {
        question: QuestionId,
        option: OptionId,
    },
    #[error("option {option} of question {question} scores {score}, outside 1..={max}")]
    OptionScoreOutOfRange {
        question: QuestionId,
        option: OptionId,
        score: u8,
        max: u8,
    },
    #[error("role {role} has more than one question for domain {domain}")]
    DuplicateRoleQuestion { role: RoleId, domain: Domain },
    #[error("failure pattern {0} has a zero threshold")]
    ZeroPatternThreshold(String),
    #[error("failure pattern {0} has no trigger tags")]
    EmptyPatternTriggers(String),
    #[error("{catalog} catalog repeats entry id {id}")]
    DuplicateCatalogEntry { catalog: &'static str, id: String },
}
