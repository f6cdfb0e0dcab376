//! A propositional reasoner for the board game Clue.
//!
//! Everything a player can know about the cards is expressed as clauses over the variables
//! "holder `h` has card `c`", where a holder is one of the players or the case file holding the
//! solution. A [`Reasoner`] starts from the rules of the game and appends the clauses of every
//! observed [`GameEvent`]: revealed hands, suggestions and the cards shown to refute them, and
//! accusations. Asking whether a holder has a card is then an entailment question answered by a
//! [`SatOracle`].
//!
//! # Example
//! ```
//! use clue_reasoner::Category;
//! use clue_reasoner::GameConfig;
//! use clue_reasoner::LiteralValue;
//! use clue_reasoner::Reasoner;
//!
//! let config = GameConfig::builder()
//!     .players(["ann", "bob", "cat"])
//!     .suspects(["plum", "green"])
//!     .weapons(["rope"])
//!     .rooms(["hall"])
//!     .build()
//!     .unwrap();
//!
//! let mut reasoner = Reasoner::new(config);
//! let _ = reasoner.hand("ann", ["plum"]).unwrap();
//!
//! // Only one suspect is left for the case file.
//! assert_eq!(LiteralValue::True, reasoner.query_names("cf", "green").unwrap());
//! assert_eq!(LiteralValue::False, reasoner.query_names("bob", "plum").unwrap());
//!
//! let notepad = reasoner.notepad();
//! let green = reasoner.config().card("green").unwrap();
//! assert_eq!(Some(green), notepad.solution(Category::Suspect));
//! ```
pub(crate) mod basic_types;
pub mod config;
pub mod encoders;
pub(crate) mod knowledge_base;
pub(crate) mod literal_space;
pub(crate) mod reasoner;
pub(crate) mod result;

pub use clue_cnf;
pub use clue_cnf::Clause;
pub use clue_cnf::DpllOracle;
pub use clue_cnf::Literal;
pub use clue_cnf::LiteralValue;
pub use clue_cnf::SatOracle;

pub use crate::basic_types::*;
pub use crate::config::ConfigError;
pub use crate::config::GameConfig;
pub use crate::config::GameConfigBuilder;
pub use crate::config::NoRefuterPolicy;
pub use crate::encoders::Accusation;
pub use crate::encoders::GameEvent;
pub use crate::encoders::Hand;
pub use crate::encoders::Suggestion;
pub use crate::knowledge_base::KnowledgeBase;
pub use crate::literal_space::LiteralSpace;
pub use crate::reasoner::*;
pub use crate::result::*;
