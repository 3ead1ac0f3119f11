//! Conflict analysis: first-UIP clause learning and non-chronological
//! backjump computation.

use crate::cnf::{Clause, ClauseIdx, Lit};
use crate::trail::{Trail, SUPPRESSED};

/// Binary resolution of `clause` against the antecedent of `var`'s
/// assignment, eliminating `var`.
///
/// Concatenates the two clauses, drops every literal over `var`, and
/// deduplicates by signed literal value.
fn resolve(clause: &[Lit], antecedent: &Clause, var: crate::cnf::Var) -> Vec<Lit> {
    let mut merged: Vec<Lit> = clause
        .iter()
        .chain(antecedent.literals().iter())
        .copied()
        .filter(|lit| lit.var() != var)
        .collect();

    merged.sort_by_key(|lit| lit.to_dimacs());
    merged.dedup_by_key(|lit| lit.to_dimacs());
    merged
}

/// Derives a first-UIP learned clause from the clause that falsified at
/// `conflict_level`, appends it to `clauses`, rolls the trail back, and
/// returns the backjump level.
///
/// Preconditions: `conflict_level > 0` (a level-0 conflict is immediate
/// UNSAT and should not reach this function).
pub fn analyze_and_backjump(
    trail: &mut Trail,
    clauses: &mut Vec<Clause>,
    conflict: ClauseIdx,
    conflict_level: usize,
) -> usize {
    let mut learnt: Vec<Lit> = clauses[conflict.0].literals().to_vec();

    loop {
        let this_level_count = learnt
            .iter()
            .filter(|&&lit| trail.level(lit.var()) == Some(conflict_level))
            .count();

        if this_level_count == 1 {
            break;
        }

        let resolving_var = learnt
            .iter()
            .find(|&&lit| {
                trail.level(lit.var()) == Some(conflict_level)
                    && trail.antecedent(lit.var()).is_some()
            })
            .map(|lit| lit.var())
            .expect("conflict clause beyond the first UIP must contain a non-decision literal at the conflict level");

        let antecedent_idx = trail.antecedent(resolving_var).unwrap();
        learnt = resolve(&learnt, &clauses[antecedent_idx.0], resolving_var);
    }

    for &lit in &learnt {
        let var = lit.var();
        let idx = var.index();
        if lit.is_positive() {
            trail.polarity[idx] += 1;
        } else {
            trail.polarity[idx] -= 1;
        }
        if trail.frequency[idx] != SUPPRESSED {
            trail.frequency[idx] += 1;
        }
        trail.original_frequency[idx] += 1;
    }

    let backjump = learnt
        .iter()
        .filter_map(|&lit| {
            let level = trail.level(lit.var()).unwrap();
            if level != conflict_level {
                Some(level)
            } else {
                None
            }
        })
        .max()
        .unwrap_or(0);

    clauses.push(Clause::new(learnt));
    trail.rollback_above(backjump);

    backjump
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(lits: &[i64]) -> Clause {
        Clause::new(lits.iter().map(|&l| Lit::from_dimacs(l)).collect())
    }

    #[test]
    fn resolve_cancels_the_pivot_and_dedupes() {
        let a = [Lit::from_dimacs(1), Lit::from_dimacs(2)];
        let b = clause(&[-2, 3]);

        let result = resolve(&a, &b, Lit::from_dimacs(2).var());
        let mut dimacs: Vec<i64> = result.iter().map(|l| l.to_dimacs()).collect();
        dimacs.sort();

        assert_eq!(dimacs, vec![1, 3]);
    }

    #[test]
    fn learns_unit_clause_and_backjumps_to_root() {
        // Decision x1=true at level 1 forces (via antecedent clause 1) x2=true
        // at level 1, which conflicts with clause 2 (-x2). The first UIP is
        // x1 itself (the decision), so the learned clause is (-x1) and the
        // backjump level is 0.
        let mut trail = Trail::new(2);
        let mut clauses = vec![clause(&[-1, 2]), clause(&[-2])];

        trail.assign(Lit::from_dimacs(1), 1, None);
        trail.assign(Lit::from_dimacs(2), 1, Some(ClauseIdx(0)));

        let backjump = analyze_and_backjump(&mut trail, &mut clauses, ClauseIdx(1), 1);

        assert_eq!(backjump, 0);
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[2].literals(), &[Lit::from_dimacs(-1)]);
        assert!(trail.is_unassigned(Lit::from_dimacs(1)));
        assert!(trail.is_unassigned(Lit::from_dimacs(2)));
    }
}
