//! The query interface over a growing knowledge base.
mod notepad;
mod shared;

use std::io::Write;

use clue_cnf::Clause;
use clue_cnf::DpllOracle;
use clue_cnf::LiteralValue;
use clue_cnf::SatOracle;
use log::debug;
use log::info;
pub use notepad::Notepad;
pub use shared::SharedReasoner;

use crate::basic_types::CardId;
use crate::basic_types::Holder;
use crate::config::GameConfig;
use crate::config::GameConfigBuilder;
use crate::encoders::encode_event;
use crate::encoders::rules::initial_clauses;
use crate::encoders::Accusation;
use crate::encoders::GameEvent;
use crate::encoders::Hand;
use crate::encoders::Suggestion;
use crate::knowledge_base::KnowledgeBase;
use crate::literal_space::LiteralSpace;
use crate::result::ReasonerError;
use crate::result::ReasonerResult;

/// Keeps the knowledge base of one game and answers which holder has which card.
///
/// A new reasoner starts out with the rule set of its game. Observed events only ever add clauses,
/// so a card that is known to be somewhere stays known there. Every query hands the full
/// knowledge base to the [`SatOracle`]; queries never modify it.
///
/// ```
/// use clue_reasoner::GameConfig;
/// use clue_reasoner::LiteralValue;
/// use clue_reasoner::Reasoner;
///
/// let mut reasoner = Reasoner::new(GameConfig::classic());
/// let _ = reasoner.hand("sc", ["wh", "li", "st"]).unwrap();
///
/// assert_eq!(LiteralValue::True, reasoner.query_names("sc", "li").unwrap());
/// assert_eq!(LiteralValue::False, reasoner.query_names("cf", "li").unwrap());
/// assert_eq!(LiteralValue::Undetermined, reasoner.query_names("cf", "kn").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Reasoner<O = DpllOracle> {
    config: GameConfig,
    space: LiteralSpace,
    knowledge_base: KnowledgeBase,
    oracle: O,
}

impl Reasoner<DpllOracle> {
    /// A reasoner for a fresh game which uses the bundled [`DpllOracle`].
    pub fn new(config: GameConfig) -> Self {
        Reasoner::with_oracle(config, DpllOracle)
    }

    /// Validate `builder` and start a fresh game with the resulting configuration.
    pub fn from_builder(builder: GameConfigBuilder) -> ReasonerResult<Self> {
        let config = builder.build()?;
        Ok(Reasoner::new(config))
    }
}

impl<O: SatOracle> Reasoner<O> {
    /// A reasoner for a fresh game which consults `oracle`.
    pub fn with_oracle(config: GameConfig, oracle: O) -> Self {
        let knowledge_base: KnowledgeBase = initial_clauses(&config).into_iter().collect();

        info!(
            "Created reasoner for {} players and {} cards with {} rule clauses",
            config.num_players(),
            config.num_cards(),
            knowledge_base.len()
        );

        Reasoner {
            space: config.literal_space(),
            config,
            knowledge_base,
            oracle,
        }
    }

    /// Resume a game from a knowledge base built earlier, e.g. one read back with
    /// [`KnowledgeBase::read_dimacs`]. The clauses are taken as they are; the rule set is not added
    /// again.
    pub fn from_knowledge_base(
        config: GameConfig,
        knowledge_base: KnowledgeBase,
        oracle: O,
    ) -> ReasonerResult<Self> {
        let space = config.literal_space();
        let variable = knowledge_base.max_variable();

        if variable > space.num_variables() {
            return Err(ReasonerError::ForeignKnowledgeBase {
                variable,
                num_variables: space.num_variables(),
            });
        }

        info!(
            "Resumed reasoner for {} players and {} cards from {} clauses",
            config.num_players(),
            config.num_cards(),
            knowledge_base.len()
        );

        Ok(Reasoner {
            config,
            space,
            knowledge_base,
            oracle,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn literal_space(&self) -> LiteralSpace {
        self.space
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn into_knowledge_base(self) -> KnowledgeBase {
        self.knowledge_base
    }

    /// Encode `event` and append its clauses to the knowledge base.
    ///
    /// Returns the appended clauses. An invalid event is rejected before anything is appended.
    pub fn observe(&mut self, event: &GameEvent) -> ReasonerResult<&[Clause]> {
        let clauses = encode_event(&self.config, event)?;
        let appended = self.knowledge_base.extend(clauses);

        debug!(
            "Observed {}: appended {} clauses, knowledge base now holds {}",
            event.kind(),
            appended.len(),
            self.knowledge_base.len()
        );

        Ok(&self.knowledge_base.clauses()[appended])
    }

    /// Observe that `player` holds exactly `cards`.
    pub fn hand<S: AsRef<str>>(
        &mut self,
        player: &str,
        cards: impl IntoIterator<Item = S>,
    ) -> ReasonerResult<&[Clause]> {
        let hand = Hand::from_names(&self.config, player, cards)?;
        self.observe(&GameEvent::Hand(hand))
    }

    /// Observe a suggestion by `suggester`, refuted by `refuter` if anybody refuted, showing
    /// `shown` if the shown card was seen.
    pub fn suggest(
        &mut self,
        suggester: &str,
        cards: [&str; 3],
        refuter: Option<&str>,
        shown: Option<&str>,
    ) -> ReasonerResult<&[Clause]> {
        let suggestion = Suggestion::from_names(&self.config, suggester, cards, refuter, shown)?;
        self.observe(&GameEvent::Suggestion(suggestion))
    }

    /// Observe an accusation by `accuser`.
    pub fn accuse(
        &mut self,
        accuser: &str,
        cards: [&str; 3],
        correct: bool,
    ) -> ReasonerResult<&[Clause]> {
        let accusation = Accusation::from_names(&self.config, accuser, cards, correct)?;
        self.observe(&GameEvent::Accusation(accusation))
    }

    /// Whether the knowledge base entails that `holder` has `card`, entails that it does not, or
    /// neither.
    ///
    /// On an unsatisfiable knowledge base every query answers [`LiteralValue::True`]; check
    /// [`Reasoner::is_satisfiable`] to recognise contradictory observations.
    pub fn query(&self, holder: Holder, card: CardId) -> ReasonerResult<LiteralValue> {
        self.config.check_holder(holder)?;
        self.config.check_card(card)?;

        let literal = self.space.literal(holder, card);
        Ok(self
            .oracle
            .evaluate_literal(literal, self.knowledge_base.clauses()))
    }

    /// [`Reasoner::query`] by holder and card name.
    pub fn query_names(&self, holder: &str, card: &str) -> ReasonerResult<LiteralValue> {
        self.query(self.config.holder(holder)?, self.config.card(card)?)
    }

    /// Whether the observations so far are consistent with the rules of the game.
    pub fn is_satisfiable(&self) -> bool {
        self.oracle.is_satisfiable(self.knowledge_base.clauses())
    }

    /// Query every (holder, card) pair.
    pub fn notepad(&self) -> Notepad {
        let clauses = self.knowledge_base.clauses();

        Notepad::fill(&self.config, |holder, card| {
            self.oracle
                .evaluate_literal(self.space.literal(holder, card), clauses)
        })
    }

    /// Write the knowledge base as DIMACS CNF over all variables of the game.
    pub fn write_dimacs(&self, sink: impl Write) -> ReasonerResult<()> {
        self.knowledge_base
            .write_dimacs(self.space.num_variables(), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::PlayerId;
    use crate::config::ConfigError;
    use crate::result::EventKind;
    use crate::result::IdentifierKind;

    #[test]
    fn starts_with_the_rule_set() {
        let reasoner = Reasoner::new(GameConfig::classic());

        assert_eq!(531, reasoner.knowledge_base().len());
        assert!(reasoner.is_satisfiable());
    }

    #[test]
    fn builder_errors_surface_as_config_errors() {
        let result = Reasoner::from_builder(GameConfig::builder().suspects(["s"]));
        assert!(matches!(
            result,
            Err(ReasonerError::Config(ConfigError::NoPlayers))
        ));

        let reasoner = Reasoner::from_builder(
            GameConfig::builder()
                .players(["a", "b"])
                .suspects(["s"])
                .weapons(["w"])
                .rooms(["r"]),
        )
        .unwrap();
        assert_eq!(2, reasoner.config().num_players());
        assert!(reasoner.is_satisfiable());
    }

    #[test]
    fn observe_returns_exactly_the_appended_clauses() {
        let mut reasoner = Reasoner::new(GameConfig::classic());

        let appended: Vec<Vec<i32>> = reasoner
            .accuse("sc", ["pe", "pi", "bi"], false)
            .unwrap()
            .iter()
            .cloned()
            .map(Vec::from)
            .collect();

        assert_eq!(
            vec![vec![-130, -137, -145], vec![-4], vec![-11], vec![-19]],
            appended
        );
        assert_eq!(535, reasoner.knowledge_base().len());
    }

    #[test]
    fn invalid_event_appends_nothing() {
        let mut reasoner = Reasoner::new(GameConfig::classic());

        let result = reasoner.suggest("sc", ["mu", "mu", "ha"], Some("wh"), None);
        assert!(matches!(
            result,
            Err(ReasonerError::InvalidEvent {
                event: EventKind::Suggestion,
                ..
            })
        ));

        let result = reasoner.hand("sc", ["wh", "nowhere"]);
        assert!(matches!(
            result,
            Err(ReasonerError::InvalidIdentifier {
                kind: IdentifierKind::Card,
                ..
            })
        ));

        assert_eq!(531, reasoner.knowledge_base().len());
    }

    #[test]
    fn query_rejects_ids_outside_the_game() {
        let reasoner = Reasoner::new(GameConfig::classic());

        assert!(reasoner
            .query(Holder::Player(PlayerId::new(6)), CardId::new(0))
            .is_err());
        assert!(reasoner.query(Holder::CaseFile, CardId::new(21)).is_err());
        assert!(reasoner.query_names("cf", "candlestick").is_err());
    }

    #[test]
    fn resuming_checks_the_variables() {
        let config = GameConfig::builder()
            .players(["a", "b"])
            .suspects(["s"])
            .weapons(["w"])
            .rooms(["r"])
            .build()
            .unwrap();

        let foreign = Reasoner::new(GameConfig::classic()).into_knowledge_base();
        let result = Reasoner::from_knowledge_base(config.clone(), foreign, DpllOracle);
        assert!(matches!(
            result,
            Err(ReasonerError::ForeignKnowledgeBase {
                variable: 147,
                num_variables: 9
            })
        ));

        let own = Reasoner::new(config.clone()).into_knowledge_base();
        let resumed = Reasoner::from_knowledge_base(config, own, DpllOracle).unwrap();
        assert_eq!(
            LiteralValue::True,
            resumed.query_names("cf", "s").unwrap()
        );
    }
}
