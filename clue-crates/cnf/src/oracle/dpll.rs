use log::trace;

use super::SatOracle;
use crate::Clause;
use crate::Literal;

/// A complete DPLL search: unit propagation to a fixpoint, chronological backtracking, and
/// branching on a positive literal of the open clause with the fewest unassigned positive
/// literals.
///
/// Once no open clause has an unassigned positive literal left, assigning every remaining
/// variable to false satisfies the formula, so the search stops there. For the exactly-one
/// structure of a Clue knowledge base this behaves like most-constrained-first search.
///
/// The oracle keeps no state between calls, so one instance can be shared freely between
/// threads. It is aimed at the few hundred variables and clauses of a game of Clue; no clause
/// learning is performed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DpllOracle;

impl SatOracle for DpllOracle {
    fn is_satisfiable_under(&self, clauses: &[Clause], assumptions: &[Literal]) -> bool {
        let num_variables = clauses
            .iter()
            .map(Clause::max_variable)
            .chain(assumptions.iter().map(|literal| literal.variable().get()))
            .max()
            .unwrap_or(0);

        let mut search = Search::new(clauses, num_variables as usize);
        let satisfiable = search.run(assumptions);

        trace!(
            "dpll: {} clauses, {} variables, {} assumptions, {} decisions, {} conflicts -> {}",
            clauses.len(),
            num_variables,
            assumptions.len(),
            search.num_decisions,
            search.num_conflicts,
            if satisfiable { "SAT" } else { "UNSAT" },
        );

        satisfiable
    }
}

/// Outcome of running unit propagation to a fixpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Propagation {
    Fixpoint,
    Conflict,
}

/// The state of a clause under the current partial assignment.
#[derive(Clone, Copy, Debug)]
enum ClauseStatus {
    Satisfied,
    Falsified,
    Unit(Literal),
    /// At least two literals are unassigned. `first_positive` is the first unassigned positive
    /// literal, if any, and `num_positive` the number of unassigned positive literals.
    Open {
        num_positive: usize,
        first_positive: Option<Literal>,
    },
}

/// A decision on the trail. `trail_position` is the length of the trail just before the decision
/// was assigned, which is where backtracking returns to.
#[derive(Clone, Copy, Debug)]
struct Decision {
    trail_position: usize,
    literal: Literal,
    flipped: bool,
}

#[derive(Debug)]
struct Search<'clauses> {
    clauses: &'clauses [Clause],
    values: Vec<Option<bool>>,
    trail: Vec<Literal>,
    decisions: Vec<Decision>,
    num_decisions: u64,
    num_conflicts: u64,
}

impl<'clauses> Search<'clauses> {
    fn new(clauses: &'clauses [Clause], num_variables: usize) -> Self {
        Search {
            clauses,
            values: vec![None; num_variables],
            trail: vec![],
            decisions: vec![],
            num_decisions: 0,
            num_conflicts: 0,
        }
    }

    fn run(&mut self, assumptions: &[Literal]) -> bool {
        // Assumptions are assigned below the first decision, so backtracking never undoes them.
        for &assumption in assumptions {
            match self.value(assumption) {
                Some(true) => {}
                Some(false) => return false,
                None => self.assign(assumption),
            }
        }

        loop {
            if self.propagate() == Propagation::Conflict {
                self.num_conflicts += 1;

                if !self.backtrack() {
                    return false;
                }

                continue;
            }

            match self.pick_branching_literal() {
                None => return true,
                Some(literal) => {
                    self.num_decisions += 1;
                    self.decisions.push(Decision {
                        trail_position: self.trail.len(),
                        literal,
                        flipped: false,
                    });
                    self.assign(literal);
                }
            }
        }
    }

    fn value(&self, literal: Literal) -> Option<bool> {
        self.values[literal.index()].map(|value| value == literal.is_positive())
    }

    fn assign(&mut self, literal: Literal) {
        self.values[literal.index()] = Some(literal.is_positive());
        self.trail.push(literal);
    }

    fn undo_to(&mut self, trail_position: usize) {
        for literal in self.trail.drain(trail_position..) {
            self.values[literal.index()] = None;
        }
    }

    /// Undo the most recent decision which has not yet been flipped and assign its negation.
    /// Returns `false` when no such decision exists, i.e. the search space is exhausted.
    fn backtrack(&mut self) -> bool {
        while let Some(decision) = self.decisions.pop() {
            self.undo_to(decision.trail_position);

            if !decision.flipped {
                self.decisions.push(Decision {
                    trail_position: decision.trail_position,
                    literal: !decision.literal,
                    flipped: true,
                });
                self.assign(!decision.literal);
                return true;
            }
        }

        false
    }

    fn status(&self, clause: &Clause) -> ClauseStatus {
        let mut num_unassigned = 0;
        let mut first = None;
        let mut num_positive = 0;
        let mut first_positive = None;

        for &literal in clause {
            match self.value(literal) {
                Some(true) => return ClauseStatus::Satisfied,
                Some(false) => {}
                None => {
                    num_unassigned += 1;
                    if first.is_none() {
                        first = Some(literal);
                    }

                    if literal.is_positive() {
                        num_positive += 1;
                        if first_positive.is_none() {
                            first_positive = Some(literal);
                        }
                    }
                }
            }
        }

        match (num_unassigned, first) {
            (_, None) => ClauseStatus::Falsified,
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            (_, Some(_)) => ClauseStatus::Open {
                num_positive,
                first_positive,
            },
        }
    }

    fn propagate(&mut self) -> Propagation {
        let mut changed = true;

        while changed {
            changed = false;

            for clause in self.clauses {
                match self.status(clause) {
                    ClauseStatus::Falsified => return Propagation::Conflict,
                    ClauseStatus::Unit(literal) => {
                        self.assign(literal);
                        changed = true;
                    }
                    ClauseStatus::Satisfied | ClauseStatus::Open { .. } => {}
                }
            }
        }

        Propagation::Fixpoint
    }

    /// Returns `None` if assigning false to every unassigned variable satisfies all clauses.
    fn pick_branching_literal(&self) -> Option<Literal> {
        let mut best: Option<(usize, Literal)> = None;

        for clause in self.clauses {
            if let ClauseStatus::Open {
                num_positive,
                first_positive: Some(literal),
            } = self.status(clause)
            {
                if best.map_or(true, |(size, _)| num_positive < size) {
                    best = Some((num_positive, literal));
                }
            }
        }

        best.map(|(_, literal)| literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LiteralValue;

    fn clauses(raw: &[&[i32]]) -> Vec<Clause> {
        raw.iter()
            .map(|codes| {
                Clause::new(codes.iter().map(|&code| Literal::new(code).unwrap())).unwrap()
            })
            .collect()
    }

    fn lit(code: i32) -> Literal {
        Literal::new(code).unwrap()
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        assert!(DpllOracle.is_satisfiable(&[]));
    }

    #[test]
    fn empty_clause_is_unsatisfiable() {
        assert!(!DpllOracle.is_satisfiable(&[Clause::default()]));
    }

    #[test]
    fn contradicting_units_are_unsatisfiable() {
        assert!(!DpllOracle.is_satisfiable(&clauses(&[&[1], &[-1]])));
    }

    #[test]
    fn contradicting_assumption_is_unsatisfiable() {
        let formula = clauses(&[&[1, 2], &[-2]]);
        assert!(DpllOracle.is_satisfiable(&formula));
        assert!(!DpllOracle.is_satisfiable_under(&formula, &[lit(-1)]));
        assert!(!DpllOracle.is_satisfiable_under(&[], &[lit(3), lit(-3)]));
    }

    #[test]
    fn all_two_variable_clauses_are_unsatisfiable() {
        let formula = clauses(&[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]]);
        assert!(!DpllOracle.is_satisfiable(&formula));
    }

    #[test]
    fn requires_backtracking_over_several_decisions() {
        // Pigeonhole: three pigeons (p1..p3) in two holes (h1, h2), variable 2 * (p - 1) + h.
        let formula = clauses(&[
            &[1, 2],
            &[3, 4],
            &[5, 6],
            &[-1, -3],
            &[-1, -5],
            &[-3, -5],
            &[-2, -4],
            &[-2, -6],
            &[-4, -6],
        ]);
        assert!(!DpllOracle.is_satisfiable(&formula));

        // Two pigeons fit.
        assert!(DpllOracle.is_satisfiable(&formula[..2]));
    }

    #[test]
    fn truth_teller_puzzle() {
        // Amy (1), Bob (2) and Cal (3), each either a truth-teller or a liar.
        let formula = clauses(&[&[-1, 3], &[-2, -3], &[2, 3], &[-1, 2, -3], &[-2, 3], &[1, 3]]);

        assert!(DpllOracle.is_satisfiable(&formula));
        assert_eq!(LiteralValue::False, DpllOracle.evaluate_literal(lit(1), &formula));
        assert_eq!(LiteralValue::False, DpllOracle.evaluate_literal(lit(2), &formula));
        assert_eq!(LiteralValue::True, DpllOracle.evaluate_literal(lit(3), &formula));
    }

    #[test]
    fn unconstrained_variable_is_undetermined() {
        let formula = clauses(&[&[1, 2]]);
        assert_eq!(
            LiteralValue::Undetermined,
            DpllOracle.evaluate_literal(lit(1), &formula)
        );
        assert_eq!(
            LiteralValue::Undetermined,
            DpllOracle.evaluate_literal(lit(7), &formula)
        );
    }
}
