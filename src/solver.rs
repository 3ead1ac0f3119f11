//! The driver: sequences propagation, conflict analysis and backjumping, and
//! decision-making into the CDCL loop.

use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::analyze::analyze_and_backjump;
use crate::cnf::{Clause, CnfFormula};
use crate::heuristic::Heuristic;
use crate::propagate::{propagate, PropagateResult};
use crate::trail::Trail;

/// The outcome of a solve: either a satisfying model or a certification of
/// unsatisfiability.
pub enum SolveResult {
    Sat(Vec<bool>),
    Unsat,
}

/// Owns the whole data model and drives the CDCL loop.
pub struct Solver<R: Rng> {
    trail: Trail,
    clauses: Vec<Clause>,
    heuristic: Heuristic,
    rng: R,
    already_unsat: bool,
}

impl Solver<ThreadRng> {
    /// Builds a solver from a parsed formula, using the system RNG for the
    /// decision heuristic's random-mode draws.
    pub fn new(formula: CnfFormula, already_unsat: bool) -> Solver<ThreadRng> {
        Solver::with_rng(formula, already_unsat, rand::thread_rng())
    }
}

impl<R: Rng> Solver<R> {
    /// Builds a solver with an explicit RNG, for deterministic tests.
    pub fn with_rng(formula: CnfFormula, already_unsat: bool, rng: R) -> Solver<R> {
        let var_count = formula.var_count();
        let mut trail = Trail::new(var_count);

        for clause in formula.clauses() {
            for &lit in clause.literals() {
                let idx = lit.var().index();
                trail.frequency[idx] += 1;
                trail.original_frequency[idx] += 1;
                if lit.is_positive() {
                    trail.polarity[idx] += 1;
                } else {
                    trail.polarity[idx] -= 1;
                }
            }
        }

        Solver {
            trail,
            clauses: formula.clauses().to_vec(),
            heuristic: Heuristic::new(),
            rng,
            already_unsat,
        }
    }

    /// Runs the CDCL loop to completion.
    pub fn solve(self) -> SolveResult {
        self.solve_keeping_clauses().0
    }

    /// Like [`Solver::solve`], but also returns the final clause store
    /// (originals followed by every learned clause), since a plain `solve`
    /// call has no way to get at the learned clauses afterwards (the solver
    /// is consumed).
    pub fn solve_keeping_clauses(mut self) -> (SolveResult, Vec<Clause>) {
        let result = self.run();
        (result, self.clauses)
    }

    fn run(&mut self) -> SolveResult {
        if self.already_unsat {
            return SolveResult::Unsat;
        }

        if matches!(propagate(&mut self.trail, &self.clauses, 0), PropagateResult::Conflict(_)) {
            return SolveResult::Unsat;
        }

        let mut level = 0;

        while !self.trail.all_assigned() {
            let lit = self.heuristic.pick(&mut self.trail, &mut self.rng);
            level += 1;
            debug!("decision: {lit} at level {level}");
            self.trail.assign(lit, level, None);

            loop {
                match propagate(&mut self.trail, &self.clauses, level) {
                    PropagateResult::Ok => break,
                    PropagateResult::Conflict(conflict) => {
                        debug!("conflict in clause {}", conflict.0);
                        if level == 0 {
                            return SolveResult::Unsat;
                        }
                        level = analyze_and_backjump(
                            &mut self.trail,
                            &mut self.clauses,
                            conflict,
                            level,
                        );
                        debug!("backjumped to level {level}");
                    }
                }
            }
        }

        SolveResult::Sat(self.trail.model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::Lit;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn clause(lits: &[i64]) -> Clause {
        Clause::new(lits.iter().map(|&l| Lit::from_dimacs(l)).collect())
    }

    fn deterministic_solver(formula: CnfFormula, already_unsat: bool) -> Solver<StdRng> {
        Solver::with_rng(formula, already_unsat, StdRng::seed_from_u64(1))
    }

    #[test]
    fn single_unit_clause_is_sat_with_true() {
        let formula = CnfFormula::new(1, vec![clause(&[1])]);
        match deterministic_solver(formula, false).solve() {
            SolveResult::Sat(model) => assert_eq!(model, vec![true]),
            SolveResult::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn direct_contradiction_is_unsat() {
        let formula = CnfFormula::new(1, vec![clause(&[1]), clause(&[-1])]);
        assert!(matches!(
            deterministic_solver(formula, false).solve(),
            SolveResult::Unsat
        ));
    }

    #[test]
    fn zero_clauses_is_sat_with_all_true() {
        let formula = CnfFormula::new(4, vec![]);
        match deterministic_solver(formula, false).solve() {
            SolveResult::Sat(model) => assert_eq!(model, vec![true, true, true, true]),
            SolveResult::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn already_unsat_short_circuits() {
        let formula = CnfFormula::new(1, vec![]);
        assert!(matches!(
            deterministic_solver(formula, true).solve(),
            SolveResult::Unsat
        ));
    }

    #[test]
    fn learns_and_finds_a_model_after_conflicts() {
        // p cnf 3 3 / 1 2 0 / -1 2 0 / -2 3 0
        let formula = CnfFormula::new(
            3,
            vec![clause(&[1, 2]), clause(&[-1, 2]), clause(&[-2, 3])],
        );
        match deterministic_solver(formula, false).solve() {
            SolveResult::Sat(model) => {
                assert!(model[1]);
                assert!(model[2]);
            }
            SolveResult::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn unsatisfiable_full_assignment_space_is_unsat() {
        // p cnf 2 4 / 1 2 / 1 -2 / -1 2 / -1 -2
        let formula = CnfFormula::new(
            2,
            vec![
                clause(&[1, 2]),
                clause(&[1, -2]),
                clause(&[-1, 2]),
                clause(&[-1, -2]),
            ],
        );
        assert!(matches!(
            deterministic_solver(formula, false).solve(),
            SolveResult::Unsat
        ));
    }
}
