use std::fmt::Display;

use enum_map::Enum;

/// The three disjoint kinds of cards. The case file holds exactly one card of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    /// All categories, in card numbering order.
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Room];
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Suspect => "suspect",
            Category::Weapon => "weapon",
            Category::Room => "room",
        };

        write!(f, "{name}")
    }
}
