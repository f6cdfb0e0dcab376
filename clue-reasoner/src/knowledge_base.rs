use std::io::Read;
use std::io::Write;
use std::ops::Range;

use clue_cnf::dimacs::parse_cnf;
use clue_cnf::dimacs::write_cnf;
use clue_cnf::Clause;

use crate::result::ReasonerResult;

/// The clauses known so far, in the order they were added.
///
/// Clauses can only be appended; nothing is ever removed, rewritten or deduplicated. Starting over
/// means creating a new knowledge base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
}

impl KnowledgeBase {
    pub fn new() -> KnowledgeBase {
        KnowledgeBase::default()
    }

    /// Append `clauses`, returning the positions they now occupy.
    pub fn extend(&mut self, clauses: impl IntoIterator<Item = Clause>) -> Range<usize> {
        let start = self.clauses.len();
        self.clauses.extend(clauses);
        start..self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// The largest variable in any clause, or 0 for a base without literals.
    pub fn max_variable(&self) -> u32 {
        self.clauses
            .iter()
            .map(Clause::max_variable)
            .max()
            .unwrap_or(0)
    }

    /// Write the clauses as DIMACS CNF, declaring `num_variables` variables in the header.
    pub fn write_dimacs(&self, num_variables: u32, sink: impl Write) -> ReasonerResult<()> {
        write_cnf(&self.clauses, num_variables, sink)?;
        Ok(())
    }

    /// Read a knowledge base written by [`KnowledgeBase::write_dimacs`], keeping the clause order.
    pub fn read_dimacs(source: impl Read) -> ReasonerResult<KnowledgeBase> {
        let formula = parse_cnf(source)?;
        Ok(KnowledgeBase {
            clauses: formula.clauses,
        })
    }
}

impl FromIterator<Clause> for KnowledgeBase {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        KnowledgeBase {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
