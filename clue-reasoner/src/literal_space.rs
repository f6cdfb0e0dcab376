use std::num::NonZeroU32;

use clue_cnf::Literal;

use crate::basic_types::CardId;
use crate::basic_types::Holder;
use crate::basic_types::PlayerId;

/// The bijection between (holder, card) pairs and propositional variables.
///
/// The variable for "`holder` holds `card`" is `holder_rank * num_cards + card_rank + 1`, where the
/// holder rank of a player is its seat and the case file ranks after every player. The variables
/// therefore form the dense range `1..=num_holders * num_cards`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LiteralSpace {
    num_players: usize,
    num_cards: usize,
}

impl LiteralSpace {
    pub fn new(num_players: usize, num_cards: usize) -> LiteralSpace {
        LiteralSpace {
            num_players,
            num_cards,
        }
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn num_cards(&self) -> usize {
        self.num_cards
    }

    /// The players plus the case file.
    pub fn num_holders(&self) -> usize {
        self.num_players + 1
    }

    pub fn num_variables(&self) -> u32 {
        u32::try_from(self.num_holders() * self.num_cards)
            .expect("the number of variables exceeds u32::MAX")
    }

    pub fn holder_rank(&self, holder: Holder) -> usize {
        match holder {
            Holder::Player(player) => player.seat(),
            Holder::CaseFile => self.num_players,
        }
    }

    /// The positive literal meaning "`holder` holds `card`".
    ///
    /// # Panics
    /// If the holder or the card lies outside this space.
    pub fn literal(&self, holder: Holder, card: CardId) -> Literal {
        self.try_literal(holder, card).unwrap_or_else(|| {
            panic!(
                "({holder}, {card}) is outside a space of {} players and {} cards",
                self.num_players, self.num_cards
            )
        })
    }

    /// Like [`LiteralSpace::literal`], but returns `None` for ids outside this space.
    pub fn try_literal(&self, holder: Holder, card: CardId) -> Option<Literal> {
        if let Holder::Player(player) = holder {
            if player.seat() >= self.num_players {
                return None;
            }
        }
        if card.rank() >= self.num_cards {
            return None;
        }

        let holder_rank = self.holder_rank(holder);

        let index = holder_rank * self.num_cards + card.rank() + 1;
        let variable = u32::try_from(index).ok().and_then(NonZeroU32::new)?;
        Some(Literal::positive(variable))
    }

    /// The (holder, card) pair of a variable, ignoring the polarity of `literal`.
    pub fn decode(&self, literal: Literal) -> Option<(Holder, CardId)> {
        let index = literal.variable().get() as usize - 1;
        if self.num_cards == 0 || index >= self.num_holders() * self.num_cards {
            return None;
        }

        let holder_rank = index / self.num_cards;
        let holder = if holder_rank == self.num_players {
            Holder::CaseFile
        } else {
            Holder::Player(PlayerId::new(holder_rank))
        };

        Some((holder, CardId::new(index % self.num_cards)))
    }

    /// All holders in rank order.
    pub fn holders(&self) -> impl Iterator<Item = Holder> {
        (0..self.num_players)
            .map(|seat| Holder::Player(PlayerId::new(seat)))
            .chain(std::iter::once(Holder::CaseFile))
    }
}
