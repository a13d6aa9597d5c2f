use super::common::*;

use crate::assessment::domain::{Domain, Level};
use crate::assessment::recommend::{
    domains_by_percentage, select_actions, select_techniques, CatalogEntry,
};
use crate::assessment::scoring::DomainScores;

const FOUR: [Domain; 4] = [
    Domain::Mission,
    Domain::People,
    Domain::Execution,
    Domain::Growth,
];

fn spread_scores() -> DomainScores {
    scores(&[
        (Domain::Mission, 2, 20, Level::GrowthArea),
        (Domain::People, 11, 90, Level::Strength),
        (Domain::Execution, 1, 10, Level::GrowthArea),
        (Domain::Growth, 8, 70, Level::Developing),
    ])
}

fn tied_scores() -> DomainScores {
    let rows: Vec<_> = FOUR
        .iter()
        .map(|domain| (*domain, 6, 50, Level::Developing))
        .collect();
    scores(&rows)
}

fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.clone()).collect()
}

#[test]
fn weakest_domains_come_first_with_canonical_tie_break() {
    assert_eq!(
        domains_by_percentage(&spread_scores(), &order(&FOUR)),
        vec![Domain::Execution, Domain::Mission, Domain::Growth, Domain::People]
    );
    assert_eq!(
        domains_by_percentage(&tied_scores(), &order(&FOUR)),
        FOUR.to_vec()
    );
}

#[test]
fn techniques_rank_by_overlap_with_the_two_weakest_domains() {
    let catalog = recommendations(vec![
        entry("x", &[Domain::Execution]),
        entry("y", &[Domain::Mission, Domain::Execution]),
    ]);

    let picked = select_techniques(&spread_scores(), &order(&FOUR), &catalog, 2);
    assert_eq!(ids(&picked), vec!["y", "x"]);
}

#[test]
fn irrelevant_techniques_stay_eligible_after_relevant_ones() {
    let catalog = recommendations(vec![
        entry("p", &[Domain::People]),
        entry("x", &[Domain::Execution]),
        entry("y", &[Domain::Mission, Domain::Execution]),
        entry("g", &[Domain::Growth]),
    ]);

    let picked = select_techniques(&spread_scores(), &order(&FOUR), &catalog, 3);
    assert_eq!(ids(&picked), vec!["y", "x", "p"]);
}

#[test]
fn actions_walk_domains_weakest_first_and_skip_duplicates() {
    let catalog = recommendations(vec![
        entry("x", &[Domain::Execution]),
        entry("y", &[Domain::Mission, Domain::Execution]),
        entry("z", &[Domain::People]),
        entry("w", &[Domain::Growth]),
    ]);

    let picked = select_actions(&spread_scores(), &order(&FOUR), &catalog, 3);
    assert_eq!(ids(&picked), vec!["x", "y", "w"]);

    let everything = select_actions(&spread_scores(), &order(&FOUR), &catalog, 10);
    assert_eq!(ids(&everything), vec!["x", "y", "w", "z"]);

    assert!(select_actions(&spread_scores(), &order(&FOUR), &catalog, 0).is_empty());
}

#[test]
fn the_two_strategies_can_disagree_on_tied_input() {
    let catalog = recommendations(vec![
        entry("a", &[Domain::People]),
        entry("b", &[Domain::Mission]),
    ]);

    let actions = select_actions(&tied_scores(), &order(&FOUR), &catalog, 2);
    let techniques = select_techniques(&tied_scores(), &order(&FOUR), &catalog, 2);

    assert_eq!(ids(&actions), vec!["b", "a"]);
    assert_eq!(ids(&techniques), vec!["a", "b"]);
}
