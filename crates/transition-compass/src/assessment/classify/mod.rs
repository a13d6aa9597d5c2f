mod archetype;
mod failure;

pub use archetype::{
    infer_archetype, ArchetypeInference, ArchetypeProfile, ArchetypeTable, DEFAULT_ARCHETYPE,
};
pub use failure::{detect_failure_patterns, DetectedPattern, FailurePattern};

use super::domain::{AnswerMap, Domain, Question};

/// Behavior tag picked by the subject, with the domain of the question it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedTag<'q> {
    pub domain: Domain,
    pub tag: &'q str,
}

/// Tags of every answered question, in question order.
pub fn selected_tags<'q>(answers: &AnswerMap, questions: &[&'q Question]) -> Vec<SelectedTag<'q>> {
    questions
        .iter()
        .filter_map(|question| {
            answers.selected(question).map(|option| SelectedTag {
                domain: question.domain,
                tag: option.tag.as_str(),
            })
        })
        .collect()
}
