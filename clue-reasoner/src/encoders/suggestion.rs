use clue_cnf::Clause;
use itertools::Itertools;
use log::warn;

use super::cardinality::at_least_one;
use super::seating::classify_seats;
use super::seating::SeatRole;
use super::Suggestion;
use crate::basic_types::Holder;
use crate::basic_types::PlayerId;
use crate::config::GameConfig;
use crate::result::EventKind;
use crate::result::ReasonerError;
use crate::result::ReasonerResult;

/// Clauses for the outcome of a suggestion, emitted per seat in seating order:
/// - the refuter holds the shown card, or at least one of the suggested cards if the shown card
///   is unknown;
/// - every seat which passed holds none of the suggested cards.
///
/// A shown card without a refuter carries no information and is ignored.
pub fn encode_suggestion(
    config: &GameConfig,
    suggestion: &Suggestion,
) -> ReasonerResult<Vec<Clause>> {
    validate(config, suggestion)?;

    let shown = match (suggestion.refuter, suggestion.shown) {
        (None, Some(card)) => {
            warn!(
                "Ignoring shown card '{}' of a suggestion by '{}' which nobody refuted",
                config.card_name(card),
                config.player_name(suggestion.suggester),
            );
            None
        }
        (_, shown) => shown,
    };

    let space = config.literal_space();
    let roles = classify_seats(
        config.num_players(),
        suggestion.suggester.seat(),
        suggestion.refuter.map(PlayerId::seat),
        config.no_refuter_policy(),
    );

    let mut clauses = vec![];
    for (seat, role) in roles.into_iter().enumerate() {
        let holder = Holder::Player(PlayerId::new(seat));

        match role {
            SeatRole::Refuter => match shown {
                Some(card) => clauses.push(Clause::unit(space.literal(holder, card))),
                None => clauses.push(at_least_one(
                    suggestion
                        .cards
                        .iter()
                        .map(|&card| space.literal(holder, card)),
                )),
            },
            SeatRole::Passed => clauses.extend(
                suggestion
                    .cards
                    .iter()
                    .map(|&card| Clause::unit(!space.literal(holder, card))),
            ),
            SeatRole::Suggester | SeatRole::NotReached => {}
        }
    }

    Ok(clauses)
}

fn validate(config: &GameConfig, suggestion: &Suggestion) -> ReasonerResult<()> {
    config.check_player(suggestion.suggester)?;
    for &card in &suggestion.cards {
        config.check_card(card)?;
    }

    if !suggestion.cards.iter().all_unique() {
        return Err(ReasonerError::invalid_event(
            EventKind::Suggestion,
            "the three suggested cards must be distinct",
        ));
    }

    if let Some(refuter) = suggestion.refuter {
        config.check_player(refuter)?;

        if refuter == suggestion.suggester {
            return Err(ReasonerError::invalid_event(
                EventKind::Suggestion,
                format!(
                    "'{}' cannot refute their own suggestion",
                    config.player_name(refuter)
                ),
            ));
        }
    }

    if let Some(shown) = suggestion.shown {
        config.check_card(shown)?;

        if !suggestion.cards.contains(&shown) {
            return Err(ReasonerError::invalid_event(
                EventKind::Suggestion,
                format!(
                    "the shown card '{}' is not one of the suggested cards",
                    config.card_name(shown)
                ),
            ));
        }
    }

    Ok(())
}
