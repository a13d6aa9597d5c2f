mod ranking;

pub use ranking::{resolve_ranking, Ranking};

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::{DenominatorMode, ScoringConfig};
use super::domain::{AnswerMap, Domain, Level, Question};

/// Aggregated result for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainScore {
    pub score: u32,
    pub max: u32,
    pub percentage: u8,
    pub level: Level,
}

/// One score per configured domain, keyed and iterated in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainScores(BTreeMap<Domain, DomainScore>);

impl DomainScores {
    pub fn get(&self, domain: Domain) -> Option<&DomainScore> {
        self.0.get(&domain)
    }

    /// Raw score for `domain`, zero when the domain was not scored.
    pub fn raw(&self, domain: Domain) -> u32 {
        self.get(domain).map(|score| score.score).unwrap_or(0)
    }

    pub fn percentage(&self, domain: Domain) -> u8 {
        self.get(domain).map(|score| score.percentage).unwrap_or(0)
    }

    pub fn level(&self, domain: Domain) -> Option<Level> {
        self.get(domain).map(|score| score.level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Domain, &DomainScore)> {
        self.0.iter().map(|(domain, score)| (*domain, score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `round(Σscore ÷ Σmax × 100)` across every domain.
    pub fn overall_percentage(&self) -> u8 {
        let (score, max) = self
            .0
            .values()
            .fold((0u32, 0u32), |(score, max), entry| {
                (score.saturating_add(entry.score), max.saturating_add(entry.max))
            });
        percentage(score, max)
    }
}

impl FromIterator<(Domain, DomainScore)> for DomainScores {
    fn from_iter<T: IntoIterator<Item = (Domain, DomainScore)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    score: u32,
    answered: u32,
}

/// Sum the chosen option scores per domain and derive percentage and level.
///
/// Unanswered questions, and answers naming an option the question does not offer, contribute
/// nothing. Questions for domains outside the config are ignored.
pub fn aggregate(
    answers: &AnswerMap,
    questions: &[&Question],
    config: &ScoringConfig,
) -> DomainScores {
    let mut tallies: BTreeMap<Domain, Tally> = config
        .domains
        .iter()
        .map(|domain| (domain, Tally::default()))
        .collect();

    for question in questions {
        let Some(tally) = tallies.get_mut(&question.domain) else {
            continue;
        };
        let Some(option) = answers.selected(question) else {
            continue;
        };

        tally.score = tally.score.saturating_add(u32::from(option.score));
        tally.answered += 1;
    }

    tallies
        .into_iter()
        .map(|(domain, tally)| {
            let max = match config.denominator {
                DenominatorMode::Fixed => config.fixed_max(),
                DenominatorMode::Dynamic => tally
                    .answered
                    .saturating_mul(u32::from(config.max_option_score)),
            };
            let percentage = percentage(tally.score, max);
            let level = config.thresholds.classify(tally.score, percentage);

            (
                domain,
                DomainScore {
                    score: tally.score,
                    max,
                    percentage,
                    level,
                },
            )
        })
        .collect()
}

fn percentage(score: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let ratio = f64::from(score) / f64::from(max) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}
