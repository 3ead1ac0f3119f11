//! The decision heuristic: frequency and polarity picking with periodic
//! decay and occasional random exploration.

use rand::Rng;

use crate::cnf::{Lit, Var};
use crate::trail::{Trail, SUPPRESSED};

/// Bookkeeping the heuristic owns in addition to the Trail's per-variable
/// frequency/polarity tables: the pick counter driving decay.
pub struct Heuristic {
    pick_counter: usize,
}

impl Heuristic {
    pub fn new() -> Heuristic {
        Heuristic { pick_counter: 0 }
    }

    /// Picks the next decision literal. Precondition: at least one variable
    /// is unassigned.
    ///
    /// The frequency arm always returns outright; the random arm either
    /// returns or forces the frequency arm on the next iteration.
    pub fn pick(&mut self, trail: &mut Trail, rng: &mut impl Rng) -> Lit {
        let mut force_frequency = false;

        loop {
            let roll: u32 = rng.gen_range(1..=10);
            let use_frequency = roll > 4
                || trail.assigned_literal_count() < trail.var_count() / 2
                || force_frequency;

            if use_frequency {
                return self.pick_by_frequency(trail);
            }

            match self.try_random(trail, rng) {
                Some(lit) => return lit,
                None => {
                    force_frequency = true;
                    continue;
                }
            }
        }
    }

    fn pick_by_frequency(&mut self, trail: &mut Trail) -> Lit {
        self.pick_counter += 1;
        if self.pick_counter == 20 * trail.var_count() {
            decay(trail);
            self.pick_counter = 0;
        }

        let var = argmax_unassigned_frequency(trail)
            .expect("pick() precondition: at least one variable is unassigned");
        signed_literal(trail, var)
    }

    fn try_random(&self, trail: &Trail, rng: &mut impl Rng) -> Option<Lit> {
        let attempts = 10 * trail.var_count();
        for _ in 0..attempts {
            let idx = rng.gen_range(0..trail.var_count());
            let var = Var(idx);
            if trail.frequency[idx] != SUPPRESSED {
                return Some(signed_literal(trail, var));
            }
        }
        None
    }
}

impl Default for Heuristic {
    fn default() -> Heuristic {
        Heuristic::new()
    }
}

/// Halves `original_frequency` for every variable, and `frequency` for every
/// currently unassigned variable.
fn decay(trail: &mut Trail) {
    for idx in 0..trail.var_count() {
        trail.original_frequency[idx] /= 2;
        if trail.frequency[idx] != SUPPRESSED {
            trail.frequency[idx] /= 2;
        }
    }
}

/// The unassigned variable with the highest frequency. First index wins on
/// ties.
fn argmax_unassigned_frequency(trail: &Trail) -> Option<Var> {
    (0..trail.var_count())
        .filter(|&idx| trail.frequency[idx] != SUPPRESSED)
        .max_by_key(|&idx| (trail.frequency[idx], std::cmp::Reverse(idx)))
        .map(Var)
}

fn signed_literal(trail: &Trail, var: Var) -> Lit {
    Lit::new(var, trail.polarity[var.index()] >= 0)
}
