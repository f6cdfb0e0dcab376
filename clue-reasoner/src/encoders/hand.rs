use clue_cnf::Clause;

use super::Hand;
use crate::basic_types::Holder;
use crate::config::GameConfig;
use crate::result::ReasonerResult;

/// The player holds every card of the hand, and therefore the case file holds none of them.
///
/// The case file clauses follow from the rule set, but stating them directly lets a query settle
/// them by propagation alone.
pub fn encode_hand(config: &GameConfig, hand: &Hand) -> ReasonerResult<Vec<Clause>> {
    config.check_player(hand.player)?;
    for &card in &hand.cards {
        config.check_card(card)?;
    }

    let space = config.literal_space();
    let holder = Holder::Player(hand.player);

    let in_hand = hand
        .cards
        .iter()
        .map(|&card| Clause::unit(space.literal(holder, card)));
    let not_in_case_file = hand
        .cards
        .iter()
        .map(|&card| Clause::unit(!space.literal(Holder::CaseFile, card)));

    Ok(in_hand.chain(not_in_case_file).collect())
}
