//! The fixed configuration of one game: who sits where, which cards exist, and how suggestions
//! without a refuter are interpreted.
//!
//! A [`GameConfig`] is immutable once built and is passed to every component that needs one of
//! the fixed orderings; nothing in the crate keeps them as ambient state.
mod builder;

use std::fmt::Display;

pub use builder::GameConfigBuilder;
use enum_map::EnumMap;
use fnv::FnvHashMap;
use thiserror::Error;

use crate::basic_types::CardId;
use crate::basic_types::Category;
use crate::basic_types::Holder;
use crate::basic_types::PlayerId;
use crate::literal_space::LiteralSpace;
use crate::result::IdentifierKind;
use crate::result::ReasonerError;
use crate::result::ReasonerResult;

/// The name of the case file holder when none is configured.
pub const DEFAULT_CASE_FILE_NAME: &str = "cf";

/// How to interpret a suggestion which nobody refuted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NoRefuterPolicy {
    /// No seat is considered to have passed, so nothing is learned about the other players.
    #[default]
    NotReached,
    /// Every seat other than the suggester passed, and so holds none of the suggested cards.
    AllPassed,
}

impl Display for NoRefuterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoRefuterPolicy::NotReached => write!(f, "not-reached"),
            NoRefuterPolicy::AllPassed => write!(f, "all-passed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("player '{0}' is seated more than once")]
    DuplicatePlayer(String),

    #[error("the case file name '{0}' is also the name of a player")]
    CaseFileNameClash(String),

    #[error("card '{0}' is declared more than once")]
    DuplicateCard(String),

    #[error("no {0} cards were declared")]
    EmptyCategory(Category),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CardInfo {
    name: String,
    category: Category,
}

/// The players in seating order, the case file, and the cards grouped by category.
///
/// Cards are ranked suspects first, then weapons, then rooms, each in the order they were added
/// to the [`GameConfigBuilder`]. Holders are ranked by seat, with the case file last.
#[derive(Clone, Debug)]
pub struct GameConfig {
    players: Vec<String>,
    case_file: String,
    cards: Vec<CardInfo>,
    cards_by_category: EnumMap<Category, Vec<CardId>>,
    player_lookup: FnvHashMap<String, PlayerId>,
    card_lookup: FnvHashMap<String, CardId>,
    no_refuter_policy: NoRefuterPolicy,
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// The standard six-player game.
    pub fn classic() -> GameConfig {
        GameConfig::builder()
            .players(["sc", "mu", "wh", "gr", "pe", "pl"])
            .suspects(["mu", "pl", "gr", "pe", "sc", "wh"])
            .weapons(["kn", "ca", "re", "ro", "pi", "wr"])
            .rooms(["ha", "lo", "di", "ki", "ba", "co", "bi", "li", "st"])
            .build()
            .expect("the classic game is a valid configuration")
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    /// The players in seating order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).map(PlayerId::new)
    }

    /// All cards in rank order.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        (0..self.cards.len()).map(CardId::new)
    }

    /// The players in seating order followed by the case file.
    pub fn holders(&self) -> impl Iterator<Item = Holder> + '_ {
        self.players()
            .map(Holder::Player)
            .chain(std::iter::once(Holder::CaseFile))
    }

    pub fn cards_in(&self, category: Category) -> &[CardId] {
        &self.cards_by_category[category]
    }

    pub fn no_refuter_policy(&self) -> NoRefuterPolicy {
        self.no_refuter_policy
    }

    pub fn literal_space(&self) -> LiteralSpace {
        LiteralSpace::new(self.num_players(), self.num_cards())
    }

    pub fn case_file_name(&self) -> &str {
        &self.case_file
    }

    /// # Panics
    /// If `player` is not seated in this game.
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.players[player.seat()]
    }

    /// # Panics
    /// If `card` is not part of this game.
    pub fn card_name(&self, card: CardId) -> &str {
        &self.cards[card.rank()].name
    }

    /// # Panics
    /// If `card` is not part of this game.
    pub fn category_of(&self, card: CardId) -> Category {
        self.cards[card.rank()].category
    }

    /// # Panics
    /// If `holder` is a player not seated in this game.
    pub fn holder_name(&self, holder: Holder) -> &str {
        match holder {
            Holder::Player(player) => self.player_name(player),
            Holder::CaseFile => &self.case_file,
        }
    }

    pub fn player(&self, name: &str) -> ReasonerResult<PlayerId> {
        self.player_lookup
            .get(name)
            .copied()
            .ok_or_else(|| ReasonerError::invalid_identifier(IdentifierKind::Player, name))
    }

    pub fn card(&self, name: &str) -> ReasonerResult<CardId> {
        self.card_lookup
            .get(name)
            .copied()
            .ok_or_else(|| ReasonerError::invalid_identifier(IdentifierKind::Card, name))
    }

    /// Resolve a player name or the case file name.
    pub fn holder(&self, name: &str) -> ReasonerResult<Holder> {
        if name == self.case_file {
            return Ok(Holder::CaseFile);
        }

        self.player_lookup
            .get(name)
            .map(|&player| Holder::Player(player))
            .ok_or_else(|| ReasonerError::invalid_identifier(IdentifierKind::Holder, name))
    }

    pub(crate) fn check_player(&self, player: PlayerId) -> ReasonerResult<()> {
        if player.seat() < self.num_players() {
            Ok(())
        } else {
            Err(ReasonerError::invalid_identifier(
                IdentifierKind::Player,
                player,
            ))
        }
    }

    pub(crate) fn check_card(&self, card: CardId) -> ReasonerResult<()> {
        if card.rank() < self.num_cards() {
            Ok(())
        } else {
            Err(ReasonerError::invalid_identifier(IdentifierKind::Card, card))
        }
    }

    pub(crate) fn check_holder(&self, holder: Holder) -> ReasonerResult<()> {
        match holder {
            Holder::Player(player) if player.seat() >= self.num_players() => Err(
                ReasonerError::invalid_identifier(IdentifierKind::Holder, holder),
            ),
            Holder::Player(_) | Holder::CaseFile => Ok(()),
        }
    }
}
