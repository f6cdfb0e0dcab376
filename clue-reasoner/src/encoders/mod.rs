//! Translation of the game rules and of observed events into clauses.
//!
//! Every encoder is a pure function of the [`GameConfig`] and its input. Events are validated
//! before any clause is produced, so an invalid event never yields a partial encoding.
pub mod cardinality;
pub mod rules;
pub mod seating;

mod accusation;
mod event;
mod hand;
mod suggestion;

pub use accusation::encode_accusation;
use clue_cnf::Clause;
pub use event::*;
pub use hand::encode_hand;
pub use suggestion::encode_suggestion;

use crate::config::GameConfig;
use crate::result::ReasonerResult;

/// Encode any [`GameEvent`] with the matching encoder.
pub fn encode_event(config: &GameConfig, event: &GameEvent) -> ReasonerResult<Vec<Clause>> {
    match event {
        GameEvent::Hand(hand) => encode_hand(config, hand),
        GameEvent::Suggestion(suggestion) => encode_suggestion(config, suggestion),
        GameEvent::Accusation(accusation) => encode_accusation(config, accusation),
    }
}
