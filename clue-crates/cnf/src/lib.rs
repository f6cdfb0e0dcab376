//! This crate contains the propositional building blocks used by the Clue reasoner: signed
//! [`Literal`]s, duplicate-free [`Clause`]s, the [`SatOracle`] contract which answers
//! satisfiability questions over a sequence of clauses, and reading/writing of clause lists in the
//! DIMACS CNF format.
//!
//! The crate ships one oracle, [`DpllOracle`], which is sufficient for the small formulas that
//! arise from a game of Clue. Any other procedure can be plugged in by implementing
//! [`SatOracle`].
//!
//! # Example
//! ```
//! use clue_cnf::Clause;
//! use clue_cnf::DpllOracle;
//! use clue_cnf::Literal;
//! use clue_cnf::LiteralValue;
//! use clue_cnf::SatOracle;
//!
//! let amy = Literal::new(1).unwrap();
//! let bob = Literal::new(2).unwrap();
//!
//! // Amy or Bob is lying, but not both.
//! let clauses = vec![
//!     Clause::new([amy, bob]).unwrap(),
//!     Clause::new([!amy, !bob]).unwrap(),
//!     Clause::unit(!bob),
//! ];
//!
//! assert!(DpllOracle.is_satisfiable(&clauses));
//! assert_eq!(LiteralValue::True, DpllOracle.evaluate_literal(amy, &clauses));
//! ```

mod clause;
mod literal;
mod oracle;

pub mod dimacs;

pub use clause::*;
pub use literal::*;
pub use oracle::*;
