//! Unit propagation: repeatedly sweeps the clause store, deriving forced
//! assignments or detecting a conflict.

use crate::cnf::{Clause, ClauseIdx};
use crate::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagateResult {
    Ok,
    Conflict(ClauseIdx),
}

/// Classification of a clause under the current partial assignment.
enum ClauseStatus {
    Satisfied,
    Unit(usize),
    Conflict,
    Pending,
}

fn classify(trail: &Trail, clause: &Clause) -> ClauseStatus {
    let mut false_count = 0;
    let mut unassigned_index = None;
    let mut unset_count = 0;

    for (i, &lit) in clause.literals().iter().enumerate() {
        if trail.is_true(lit) {
            return ClauseStatus::Satisfied;
        }
        if trail.is_false(lit) {
            false_count += 1;
        } else {
            unset_count += 1;
            unassigned_index = Some(i);
        }
    }

    if unset_count == 1 {
        ClauseStatus::Unit(unassigned_index.unwrap())
    } else if false_count == clause.len() {
        ClauseStatus::Conflict
    } else {
        ClauseStatus::Pending
    }
}

/// Runs unit propagation to fixpoint at `current_level`, sweeping `clauses`
/// (originals followed by any learned clauses) from index 0 each time a unit
/// assignment is made.
pub fn propagate(trail: &mut Trail, clauses: &[Clause], current_level: usize) -> PropagateResult {
    loop {
        let mut made_assignment = false;

        for (idx, clause) in clauses.iter().enumerate() {
            match classify(trail, clause) {
                ClauseStatus::Satisfied | ClauseStatus::Pending => continue,
                ClauseStatus::Unit(lit_idx) => {
                    let lit = clause.literals()[lit_idx];
                    trail.assign(lit, current_level, Some(ClauseIdx(idx)));
                    made_assignment = true;
                    break;
                }
                ClauseStatus::Conflict => {
                    return PropagateResult::Conflict(ClauseIdx(idx));
                }
            }
        }

        if !made_assignment {
            return PropagateResult::Ok;
        }
    }
}
