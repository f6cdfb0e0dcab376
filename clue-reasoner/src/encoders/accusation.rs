use clue_cnf::Clause;
use itertools::Itertools;

use super::Accusation;
use crate::basic_types::Holder;
use crate::config::GameConfig;
use crate::result::EventKind;
use crate::result::ReasonerError;
use crate::result::ReasonerResult;

/// A correct accusation fixes the contents of the case file; an incorrect one rules out that
/// exact combination. Either way the accuser is assumed not to hold any of the accused cards.
pub fn encode_accusation(
    config: &GameConfig,
    accusation: &Accusation,
) -> ReasonerResult<Vec<Clause>> {
    config.check_player(accusation.accuser)?;
    for &card in &accusation.cards {
        config.check_card(card)?;
    }

    if !accusation.cards.iter().all_unique() {
        return Err(ReasonerError::invalid_event(
            EventKind::Accusation,
            "the three accused cards must be distinct",
        ));
    }

    let space = config.literal_space();
    let case_file = accusation
        .cards
        .map(|card| space.literal(Holder::CaseFile, card));

    let mut clauses = if accusation.correct {
        case_file.into_iter().map(Clause::unit).collect()
    } else {
        vec![Clause::new(case_file.map(|literal| !literal))
            .expect("accused cards are distinct")]
    };

    let accuser = Holder::Player(accusation.accuser);
    clauses.extend(
        accusation
            .cards
            .iter()
            .map(|&card| Clause::unit(!space.literal(accuser, card))),
    );

    Ok(clauses)
}
