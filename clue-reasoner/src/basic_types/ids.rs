use std::fmt::Display;

/// A player, identified by their seat. Seats are numbered from 0 in playing order; the seat after
/// the last one is seat 0 again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(seat: usize) -> PlayerId {
        PlayerId(u32::try_from(seat).expect("seat index exceeds u32::MAX"))
    }

    pub fn seat(self) -> usize {
        self.0 as usize
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// A card, identified by its rank in the card ordering of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u32);

impl CardId {
    pub fn new(rank: usize) -> CardId {
        CardId(u32::try_from(rank).expect("card rank exceeds u32::MAX"))
    }

    pub fn rank(self) -> usize {
        self.0 as usize
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {}", self.0)
    }
}

/// Anything a card can be assigned to: one of the players, or the case file holding the solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Holder {
    Player(PlayerId),
    CaseFile,
}

impl From<PlayerId> for Holder {
    fn from(player: PlayerId) -> Self {
        Holder::Player(player)
    }
}

impl Display for Holder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holder::Player(player) => write!(f, "{player}"),
            Holder::CaseFile => write!(f, "case file"),
        }
    }
}
