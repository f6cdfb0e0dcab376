#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024
//! Cross-checks the DPLL oracle against exhaustive enumeration on small formulas.

use clue_cnf::Clause;
use clue_cnf::DpllOracle;
use clue_cnf::Literal;
use clue_cnf::LiteralValue;
use clue_cnf::SatOracle;

/// Decide satisfiability by trying every assignment of `num_variables` variables.
fn brute_force(clauses: &[Clause], num_variables: u32) -> bool {
    (0..1_u32 << num_variables).any(|assignment| {
        clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                let bit = (assignment >> (literal.variable().get() - 1)) & 1 == 1;
                bit == literal.is_positive()
            })
        })
    })
}

/// A deterministic pseudo-random generator, so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn random_formula(rng: &mut Lcg, num_variables: u32, num_clauses: usize) -> Vec<Clause> {
    (0..num_clauses)
        .map(|_| {
            let width = 1 + rng.below(3) as usize;
            let mut literals: Vec<Literal> = Vec::new();

            while literals.len() < width {
                let variable = 1 + rng.below(u64::from(num_variables)) as i32;
                if literals.iter().any(|l| l.variable().get() as i32 == variable) {
                    continue;
                }

                let code = if rng.below(2) == 0 { variable } else { -variable };
                literals.push(Literal::new(code).unwrap());
            }

            Clause::new(literals).unwrap()
        })
        .collect()
}

#[test]
fn agrees_with_enumeration_on_random_formulas() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = Lcg(0x5eed);
    let num_variables = 6;

    for round in 0..300 {
        let num_clauses = 1 + (round % 24);
        let formula = random_formula(&mut rng, num_variables, num_clauses);

        assert_eq!(
            brute_force(&formula, num_variables),
            DpllOracle.is_satisfiable(&formula),
            "disagreement on {formula:?}"
        );
    }
}

#[test]
fn literal_evaluation_agrees_with_enumeration() {
    let mut rng = Lcg(42);
    let num_variables = 5;

    for round in 0..100 {
        let formula = random_formula(&mut rng, num_variables, 3 + round % 10);
        if !brute_force(&formula, num_variables) {
            continue;
        }

        for variable in 1..=num_variables as i32 {
            let literal = Literal::new(variable).unwrap();

            let mut with_negation = formula.clone();
            with_negation.push(Clause::unit(!literal));
            let mut with_literal = formula.clone();
            with_literal.push(Clause::unit(literal));

            let expected = if !brute_force(&with_negation, num_variables) {
                LiteralValue::True
            } else if !brute_force(&with_literal, num_variables) {
                LiteralValue::False
            } else {
                LiteralValue::Undetermined
            };

            assert_eq!(
                expected,
                DpllOracle.evaluate_literal(literal, &formula),
                "literal {literal} on {formula:?}"
            );
        }
    }
}
