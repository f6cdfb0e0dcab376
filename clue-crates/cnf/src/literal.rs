use std::fmt::Display;
use std::num::NonZeroI32;
use std::num::NonZeroU32;
use std::ops::Not;

/// A signed reference to a propositional variable. Variables are numbered from 1, as in DIMACS.
///
/// A positive literal states that the variable is true, a negative literal that it is false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(NonZeroI32);

impl Literal {
    /// Create a literal from its signed DIMACS code. Returns `None` for `0`, and for
    /// [`i32::MIN`] which has no negation.
    pub fn new(code: i32) -> Option<Literal> {
        if code == i32::MIN {
            return None;
        }

        NonZeroI32::new(code).map(Literal)
    }

    /// The positive literal over `variable`.
    ///
    /// # Panics
    /// If `variable` does not fit in an `i32`.
    pub fn positive(variable: NonZeroU32) -> Literal {
        let code = i32::try_from(variable.get()).expect("variable index exceeds i32::MAX");
        Literal(NonZeroI32::new(code).expect("non-zero by construction"))
    }

    /// The variable this literal refers to.
    pub fn variable(self) -> NonZeroU32 {
        self.0.unsigned_abs()
    }

    pub fn is_positive(self) -> bool {
        self.0.get() > 0
    }

    /// The signed DIMACS code of this literal.
    pub fn get(self) -> i32 {
        self.0.get()
    }

    /// The variable as a zero-based index, useful for indexing assignment vectors.
    pub(crate) fn index(self) -> usize {
        self.variable().get() as usize - 1
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal(-self.0)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Literal> for i32 {
    fn from(literal: Literal) -> i32 {
        literal.get()
    }
}
