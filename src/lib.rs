//! A CDCL (Conflict-Driven Clause Learning) SAT solver.
//!
//! Decides the satisfiability of a propositional formula in conjunctive
//! normal form: unit propagation, first-UIP conflict analysis, learned-clause
//! accumulation, non-chronological backtracking, and a frequency/polarity
//! decision heuristic with periodic decay.

pub mod analyze;
pub mod cnf;
pub mod dimacs;
pub mod error;
pub mod heuristic;
pub mod propagate;
pub mod solver;
pub mod trail;

pub use cnf::CnfFormula;
pub use error::DimacsError;
pub use solver::{SolveResult, Solver};
