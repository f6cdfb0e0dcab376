//! The clauses which hold at the start of every game, before any event is observed.
use clue_cnf::Clause;
use clue_cnf::Literal;

use super::cardinality::at_least_one;
use super::cardinality::pairwise_at_most_one;
use crate::basic_types::Category;
use crate::basic_types::Holder;
use crate::config::GameConfig;

/// The rule set of a game, in four families:
/// 1. for every card, some holder holds it;
/// 2. for every card and every pair of holders, not both hold it;
/// 3. for every category, the case file holds one of its cards;
/// 4. for every category and every pair of its cards, the case file does not hold both.
///
/// All clauses of a family are emitted before the next family starts, and within a family the
/// clauses follow the card order.
pub fn initial_clauses(config: &GameConfig) -> Vec<Clause> {
    let space = config.literal_space();

    let holders_of_card: Vec<Vec<Literal>> = config
        .cards()
        .map(|card| {
            space
                .holders()
                .map(|holder| space.literal(holder, card))
                .collect()
        })
        .collect();

    let case_file_by_category: Vec<Vec<Literal>> = Category::ALL
        .iter()
        .map(|&category| {
            config
                .cards_in(category)
                .iter()
                .map(|&card| space.literal(Holder::CaseFile, card))
                .collect()
        })
        .collect();

    let mut clauses = vec![];

    clauses.extend(
        holders_of_card
            .iter()
            .map(|literals| at_least_one(literals.iter().copied())),
    );
    clauses.extend(
        holders_of_card
            .iter()
            .flat_map(|literals| pairwise_at_most_one(literals)),
    );
    clauses.extend(
        case_file_by_category
            .iter()
            .map(|literals| at_least_one(literals.iter().copied())),
    );
    clauses.extend(
        case_file_by_category
            .iter()
            .flat_map(|literals| pairwise_at_most_one(literals)),
    );

    clauses
}

/// The number of clauses [`initial_clauses`] produces for `config`.
pub fn num_initial_clauses(config: &GameConfig) -> usize {
    let num_holders = config.num_players() + 1;
    let pairs = |n: usize| n * n.saturating_sub(1) / 2;

    let per_category: usize = Category::ALL
        .iter()
        .map(|&category| 1 + pairs(config.cards_in(category).len()))
        .sum();

    config.num_cards() * (1 + pairs(num_holders)) + per_category
}
