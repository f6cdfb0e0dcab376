use std::fmt::Display;

use clue_cnf::LiteralValue;
use enum_map::EnumMap;

use crate::basic_types::CardId;
use crate::basic_types::Category;
use crate::basic_types::Holder;
use crate::config::GameConfig;

/// The answer to every (holder, card) query at one moment, laid out like a detective's notepad:
/// one row per card, one column per holder.
///
/// The [`Display`] implementation prints the table tab-separated, with `Y`, `N` and `-` for
/// [`LiteralValue::True`], [`LiteralValue::False`] and [`LiteralValue::Undetermined`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notepad {
    holders: Vec<String>,
    cards: Vec<String>,
    cards_by_category: EnumMap<Category, Vec<CardId>>,
    /// Row-major: the value for card `c` and holder rank `h` is at `c * holders.len() + h`.
    values: Vec<LiteralValue>,
}

impl Notepad {
    pub(crate) fn fill(
        config: &GameConfig,
        mut evaluate: impl FnMut(Holder, CardId) -> LiteralValue,
    ) -> Notepad {
        let holders: Vec<Holder> = config.holders().collect();

        let values = config
            .cards()
            .flat_map(|card| holders.iter().map(move |&holder| (holder, card)))
            .map(|(holder, card)| evaluate(holder, card))
            .collect();

        Notepad {
            holders: holders
                .iter()
                .map(|&holder| config.holder_name(holder).to_owned())
                .collect(),
            cards: config
                .cards()
                .map(|card| config.card_name(card).to_owned())
                .collect(),
            cards_by_category: EnumMap::from_fn(|category| config.cards_in(category).to_vec()),
            values,
        }
    }

    /// # Panics
    /// If `holder` or `card` is not part of the game.
    pub fn get(&self, holder: Holder, card: CardId) -> LiteralValue {
        // The case file occupies the last column.
        let num_players = self.holders.len() - 1;
        let rank = match holder {
            Holder::Player(player) => {
                assert!(player.seat() < num_players, "{holder} is not part of the game");
                player.seat()
            }
            Holder::CaseFile => num_players,
        };
        assert!(card.rank() < self.cards.len(), "{card} is not part of the game");

        self.values[card.rank() * self.holders.len() + rank]
    }

    /// The case file card of `category`, if the notepad has settled it.
    pub fn solution(&self, category: Category) -> Option<CardId> {
        self.cards_by_category[category]
            .iter()
            .copied()
            .find(|&card| self.get(Holder::CaseFile, card) == LiteralValue::True)
    }
}

impl Display for Notepad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for holder in &self.holders {
            write!(f, "\t{holder}")?;
        }
        writeln!(f)?;

        for (name, row) in self.cards.iter().zip(self.values.chunks(self.holders.len())) {
            write!(f, "{name}")?;
            for value in row {
                write!(f, "\t{value}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
