//! The satisfiability oracle contract.
//!
//! An oracle only has to decide whether a list of clauses, possibly strengthened with a set of
//! assumed literals, has a model. Entailment of a single literal is derived from that through
//! [`SatOracle::evaluate_literal`].
mod dpll;

use std::fmt::Display;

pub use dpll::DpllOracle;

use crate::Clause;
use crate::Literal;

/// The status of a literal with respect to a set of clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    /// The clauses entail the literal.
    True,
    /// The clauses entail the negation of the literal.
    False,
    /// The clauses are satisfiable with the literal assigned either way.
    Undetermined,
}

impl LiteralValue {
    pub fn is_determined(self) -> bool {
        self != LiteralValue::Undetermined
    }

    /// `Some(value)` for a determined literal, `None` otherwise.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            LiteralValue::True => Some(true),
            LiteralValue::False => Some(false),
            LiteralValue::Undetermined => None,
        }
    }
}

/// Uses the notepad convention: `Y`, `N` and `-`.
impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            LiteralValue::True => "Y",
            LiteralValue::False => "N",
            LiteralValue::Undetermined => "-",
        };

        write!(f, "{symbol}")
    }
}

/// A procedure which decides satisfiability of a conjunction of clauses.
///
/// Implementations must be complete: `is_satisfiable_under` always terminates with the correct
/// answer. The clauses are borrowed for the duration of one call only; an oracle is not expected
/// to keep state between calls.
pub trait SatOracle {
    /// Decide whether `clauses` together with every literal in `assumptions` is satisfiable.
    fn is_satisfiable_under(&self, clauses: &[Clause], assumptions: &[Literal]) -> bool;

    /// Decide whether `clauses` is satisfiable.
    fn is_satisfiable(&self, clauses: &[Clause]) -> bool {
        self.is_satisfiable_under(clauses, &[])
    }

    /// Determine whether `clauses` entails `literal`, entails its negation, or neither.
    ///
    /// The negation is tested first. As a consequence, every literal evaluates to
    /// [`LiteralValue::True`] on an unsatisfiable set of clauses; use
    /// [`SatOracle::is_satisfiable`] to tell the two situations apart.
    fn evaluate_literal(&self, literal: Literal, clauses: &[Clause]) -> LiteralValue {
        if !self.is_satisfiable_under(clauses, &[!literal]) {
            LiteralValue::True
        } else if !self.is_satisfiable_under(clauses, &[literal]) {
            LiteralValue::False
        } else {
            LiteralValue::Undetermined
        }
    }
}

impl<O: SatOracle + ?Sized> SatOracle for &O {
    fn is_satisfiable_under(&self, clauses: &[Clause], assumptions: &[Literal]) -> bool {
        (**self).is_satisfiable_under(clauses, assumptions)
    }
}

impl<O: SatOracle + ?Sized> SatOracle for Box<O> {
    fn is_satisfiable_under(&self, clauses: &[Clause], assumptions: &[Literal]) -> bool {
        (**self).is_satisfiable_under(clauses, assumptions)
    }
}
