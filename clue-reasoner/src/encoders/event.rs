use crate::basic_types::CardId;
use crate::basic_types::PlayerId;
use crate::config::GameConfig;
use crate::result::EventKind;
use crate::result::ReasonerResult;

/// Something observed during play which adds to the knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Hand(Hand),
    Suggestion(Suggestion),
    Accusation(Accusation),
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Hand(_) => EventKind::Hand,
            GameEvent::Suggestion(_) => EventKind::Suggestion,
            GameEvent::Accusation(_) => EventKind::Accusation,
        }
    }
}

impl From<Hand> for GameEvent {
    fn from(hand: Hand) -> Self {
        GameEvent::Hand(hand)
    }
}

impl From<Suggestion> for GameEvent {
    fn from(suggestion: Suggestion) -> Self {
        GameEvent::Suggestion(suggestion)
    }
}

impl From<Accusation> for GameEvent {
    fn from(accusation: Accusation) -> Self {
        GameEvent::Accusation(accusation)
    }
}

/// A player reveals every card in their hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    pub player: PlayerId,
    pub cards: Vec<CardId>,
}

impl Hand {
    pub fn new(player: PlayerId, cards: impl IntoIterator<Item = CardId>) -> Hand {
        Hand {
            player,
            cards: cards.into_iter().collect(),
        }
    }

    pub fn from_names<S: AsRef<str>>(
        config: &GameConfig,
        player: &str,
        cards: impl IntoIterator<Item = S>,
    ) -> ReasonerResult<Hand> {
        Ok(Hand {
            player: config.player(player)?,
            cards: cards
                .into_iter()
                .map(|name| config.card(name.as_ref()))
                .collect::<ReasonerResult<_>>()?,
        })
    }
}

/// A player names three cards; the players after them in seating order are asked in turn until
/// one of them shows a card.
///
/// `shown` is only known to the player who made the suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub suggester: PlayerId,
    pub cards: [CardId; 3],
    pub refuter: Option<PlayerId>,
    pub shown: Option<CardId>,
}

impl Suggestion {
    pub fn from_names(
        config: &GameConfig,
        suggester: &str,
        cards: [&str; 3],
        refuter: Option<&str>,
        shown: Option<&str>,
    ) -> ReasonerResult<Suggestion> {
        Ok(Suggestion {
            suggester: config.player(suggester)?,
            cards: resolve_triple(config, cards)?,
            refuter: refuter.map(|name| config.player(name)).transpose()?,
            shown: shown.map(|name| config.card(name)).transpose()?,
        })
    }
}

/// A player's final guess at the contents of the case file, together with whether it was right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accusation {
    pub accuser: PlayerId,
    pub cards: [CardId; 3],
    pub correct: bool,
}

impl Accusation {
    pub fn from_names(
        config: &GameConfig,
        accuser: &str,
        cards: [&str; 3],
        correct: bool,
    ) -> ReasonerResult<Accusation> {
        Ok(Accusation {
            accuser: config.player(accuser)?,
            cards: resolve_triple(config, cards)?,
            correct,
        })
    }
}

fn resolve_triple(
    config: &GameConfig,
    [first, second, third]: [&str; 3],
) -> ReasonerResult<[CardId; 3]> {
    Ok([config.card(first)?, config.card(second)?, config.card(third)?])
}
