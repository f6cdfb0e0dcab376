use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use clue_cnf::Clause;
use clue_cnf::DpllOracle;
use clue_cnf::LiteralValue;
use clue_cnf::SatOracle;

use super::Notepad;
use super::Reasoner;
use crate::basic_types::CardId;
use crate::basic_types::Holder;
use crate::encoders::GameEvent;
use crate::knowledge_base::KnowledgeBase;
use crate::result::ReasonerResult;

/// A [`Reasoner`] which can be observed and queried from several threads at once.
///
/// Observing an event holds the write lock while the event is encoded and appended, so appends
/// are serialised and never interleave. Queries hold the read lock and therefore run against a
/// knowledge base which contains each observed event either completely or not at all.
#[derive(Debug)]
pub struct SharedReasoner<O = DpllOracle> {
    inner: RwLock<Reasoner<O>>,
}

impl<O: SatOracle> SharedReasoner<O> {
    pub fn new(reasoner: Reasoner<O>) -> Self {
        SharedReasoner {
            inner: RwLock::new(reasoner),
        }
    }

    /// See [`Reasoner::observe`]. The appended clauses are returned by value since the lock is
    /// released on return.
    pub fn observe(&self, event: &GameEvent) -> ReasonerResult<Vec<Clause>> {
        let mut reasoner = self.write();
        let appended = reasoner.observe(event)?.to_vec();
        Ok(appended)
    }

    pub fn query(&self, holder: Holder, card: CardId) -> ReasonerResult<LiteralValue> {
        self.read().query(holder, card)
    }

    pub fn query_names(&self, holder: &str, card: &str) -> ReasonerResult<LiteralValue> {
        self.read().query_names(holder, card)
    }

    pub fn is_satisfiable(&self) -> bool {
        self.read().is_satisfiable()
    }

    pub fn notepad(&self) -> Notepad {
        self.read().notepad()
    }

    /// A copy of the knowledge base as it is right now.
    pub fn snapshot(&self) -> KnowledgeBase {
        self.read().knowledge_base().clone()
    }

    pub fn into_inner(self) -> Reasoner<O> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // Only a panicking writer poisons the lock. Appends are a single `Vec::extend` of already
    // encoded clauses, so such a panic cannot leave a partially observed event behind.
    fn read(&self) -> RwLockReadGuard<'_, Reasoner<O>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Reasoner<O>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O: SatOracle> From<Reasoner<O>> for SharedReasoner<O> {
    fn from(reasoner: Reasoner<O>) -> Self {
        SharedReasoner::new(reasoner)
    }
}
