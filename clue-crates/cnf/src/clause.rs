use std::fmt::Display;
use std::ops::Deref;

use crate::Literal;

/// A disjunction of [`Literal`]s.
///
/// The order of the literals is kept as given. A clause never mentions the same variable twice,
/// which also means it can never be a tautology. The empty clause is allowed and is trivially
/// unsatisfiable.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

/// Raised when literals do not form a valid [`Clause`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClauseError {
    #[error("variable {0} occurs more than once in the clause")]
    DuplicateVariable(u32),
}

impl Clause {
    /// Create a clause from the given literals.
    ///
    /// Fails if any variable occurs more than once, regardless of polarity.
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Result<Clause, ClauseError> {
        let literals: Vec<Literal> = literals.into_iter().collect();

        for (position, literal) in literals.iter().enumerate() {
            if literals[..position]
                .iter()
                .any(|other| other.variable() == literal.variable())
            {
                return Err(ClauseError::DuplicateVariable(literal.variable().get()));
            }
        }

        Ok(Clause { literals })
    }

    /// A clause consisting of a single literal.
    pub fn unit(literal: Literal) -> Clause {
        Clause {
            literals: vec![literal],
        }
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn as_slice(&self) -> &[Literal] {
        &self.literals
    }

    /// The largest variable index mentioned by this clause, or 0 for the empty clause.
    pub fn max_variable(&self) -> u32 {
        self.literals
            .iter()
            .map(|literal| literal.variable().get())
            .max()
            .unwrap_or(0)
    }
}

impl Deref for Clause {
    type Target = [Literal];

    fn deref(&self) -> &Self::Target {
        &self.literals
    }
}

impl IntoIterator for Clause {
    type Item = Literal;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;

    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause::unit(literal)
    }
}

impl From<Clause> for Vec<i32> {
    fn from(clause: Clause) -> Vec<i32> {
        clause.literals.into_iter().map(Literal::get).collect()
    }
}

/// Prints the clause as a DIMACS line, including the terminating `0`.
impl Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for literal in &self.literals {
            write!(f, "{literal} ")?;
        }

        write!(f, "0")
    }
}

impl std::fmt::Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.literals.iter().map(|l| l.get())).finish()
    }
}
