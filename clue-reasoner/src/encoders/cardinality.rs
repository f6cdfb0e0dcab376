//! The two halves of the exactly-one pattern over a set of literals.
use clue_cnf::Clause;
use clue_cnf::Literal;
use itertools::Itertools;

/// The clause stating that at least one of `literals` is true.
///
/// # Panics
/// If two of the literals share a variable.
pub fn at_least_one(literals: impl IntoIterator<Item = Literal>) -> Clause {
    Clause::new(literals).expect("at-least-one constraints range over distinct variables")
}

/// For every unordered pair of `literals`, the clause stating that not both are true. The pairs
/// are produced in lexicographic order of their positions.
pub fn pairwise_at_most_one(literals: &[Literal]) -> impl Iterator<Item = Clause> + '_ {
    literals
        .iter()
        .tuple_combinations()
        .map(|(&first, &second)| {
            Clause::new([!first, !second])
                .expect("at-most-one constraints range over distinct variables")
        })
}
