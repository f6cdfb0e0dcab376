use enum_map::EnumMap;
use fnv::FnvHashMap;
use fnv::FnvHashSet;

use super::CardInfo;
use super::ConfigError;
use super::GameConfig;
use super::NoRefuterPolicy;
use super::DEFAULT_CASE_FILE_NAME;
use crate::basic_types::CardId;
use crate::basic_types::Category;
use crate::basic_types::PlayerId;

/// Collects the names of a game before validating them into a [`GameConfig`].
///
/// ```
/// use clue_reasoner::Category;
/// use clue_reasoner::GameConfig;
///
/// let config = GameConfig::builder()
///     .players(["ann", "bob", "cat"])
///     .suspects(["s1", "s2"])
///     .weapons(["w1", "w2"])
///     .rooms(["r1", "r2"])
///     .build()
///     .unwrap();
///
/// assert_eq!(3, config.num_players());
/// assert_eq!(2, config.cards_in(Category::Weapon).len());
/// ```
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    players: Vec<String>,
    case_file: String,
    cards: EnumMap<Category, Vec<String>>,
    no_refuter_policy: NoRefuterPolicy,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        GameConfigBuilder {
            players: vec![],
            case_file: DEFAULT_CASE_FILE_NAME.to_owned(),
            cards: EnumMap::default(),
            no_refuter_policy: NoRefuterPolicy::default(),
        }
    }
}

impl GameConfigBuilder {
    /// Seat the next player; the first player added sits in seat 0.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    pub fn players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn case_file(mut self, name: impl Into<String>) -> Self {
        self.case_file = name.into();
        self
    }

    pub fn card(mut self, category: Category, name: impl Into<String>) -> Self {
        self.cards[category].push(name.into());
        self
    }

    pub fn suspects<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Self {
        self.cards_of(Category::Suspect, names)
    }

    pub fn weapons<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Self {
        self.cards_of(Category::Weapon, names)
    }

    pub fn rooms<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Self {
        self.cards_of(Category::Room, names)
    }

    pub fn no_refuter_policy(mut self, policy: NoRefuterPolicy) -> Self {
        self.no_refuter_policy = policy;
        self
    }

    fn cards_of<S: Into<String>>(
        mut self,
        category: Category,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.cards[category].extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }

        let mut player_lookup = FnvHashMap::default();
        for (seat, name) in self.players.iter().enumerate() {
            if player_lookup.insert(name.clone(), PlayerId::new(seat)).is_some() {
                return Err(ConfigError::DuplicatePlayer(name.clone()));
            }
        }

        if player_lookup.contains_key(&self.case_file) {
            return Err(ConfigError::CaseFileNameClash(self.case_file));
        }

        let mut seen = FnvHashSet::default();
        let mut cards = vec![];
        let mut card_lookup = FnvHashMap::default();
        let mut cards_by_category: EnumMap<Category, Vec<CardId>> = EnumMap::default();

        for category in Category::ALL {
            if self.cards[category].is_empty() {
                return Err(ConfigError::EmptyCategory(category));
            }

            for name in &self.cards[category] {
                if !seen.insert(name.as_str()) {
                    return Err(ConfigError::DuplicateCard(name.clone()));
                }

                let card = CardId::new(cards.len());
                let _ = card_lookup.insert(name.clone(), card);
                cards_by_category[category].push(card);
                cards.push(CardInfo {
                    name: name.clone(),
                    category,
                });
            }
        }

        Ok(GameConfig {
            players: self.players,
            case_file: self.case_file,
            cards,
            cards_by_category,
            player_lookup,
            card_lookup,
            no_refuter_policy: self.no_refuter_policy,
        })
    }
}
