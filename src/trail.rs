//! The assignment trail: per-variable state and the only sanctioned
//! mutations of it, `assign` and `unassign`.

use crate::cnf::{ClauseIdx, Lit, Var};

/// Sentinel frequency value marking a variable as currently assigned, so it
/// is never picked again until it is unassigned.
pub const SUPPRESSED: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarValue {
    Unassigned,
    True,
    False,
}

/// Per-variable bookkeeping: truth value, decision level, antecedent clause,
/// and the frequency/polarity counters the decision heuristic reads.
pub struct Trail {
    value: Vec<VarValue>,
    level: Vec<Option<usize>>,
    antecedent: Vec<Option<ClauseIdx>>,
    pub frequency: Vec<i64>,
    pub polarity: Vec<i64>,
    pub original_frequency: Vec<i64>,
    assigned_literal_count: usize,
    var_count: usize,
}

impl Trail {
    pub fn new(var_count: usize) -> Trail {
        Trail {
            value: vec![VarValue::Unassigned; var_count],
            level: vec![None; var_count],
            antecedent: vec![None; var_count],
            frequency: vec![0; var_count],
            polarity: vec![0; var_count],
            original_frequency: vec![0; var_count],
            assigned_literal_count: 0,
            var_count,
        }
    }

    pub fn var_count(&self) -> usize {
        self.var_count
    }

    pub fn value(&self, var: Var) -> VarValue {
        self.value[var.index()]
    }

    pub fn level(&self, var: Var) -> Option<usize> {
        self.level[var.index()]
    }

    pub fn antecedent(&self, var: Var) -> Option<ClauseIdx> {
        self.antecedent[var.index()]
    }

    pub fn assigned_literal_count(&self) -> usize {
        self.assigned_literal_count
    }

    pub fn all_assigned(&self) -> bool {
        self.assigned_literal_count == self.var_count
    }

    /// Whether `literal` evaluates to true under the current assignment.
    pub fn is_true(&self, literal: Lit) -> bool {
        match self.value(literal.var()) {
            VarValue::Unassigned => false,
            VarValue::True => literal.is_positive(),
            VarValue::False => !literal.is_positive(),
        }
    }

    /// Whether `literal` evaluates to false under the current assignment.
    pub fn is_false(&self, literal: Lit) -> bool {
        match self.value(literal.var()) {
            VarValue::Unassigned => false,
            VarValue::True => !literal.is_positive(),
            VarValue::False => literal.is_positive(),
        }
    }

    pub fn is_unassigned(&self, literal: Lit) -> bool {
        self.value(literal.var()) == VarValue::Unassigned
    }

    /// Assigns `literal` at `level` with the given antecedent. The literal's
    /// variable must currently be unassigned.
    pub fn assign(&mut self, literal: Lit, level: usize, antecedent: Option<ClauseIdx>) {
        let idx = literal.var().index();
        debug_assert_eq!(self.value[idx], VarValue::Unassigned);

        self.value[idx] = if literal.is_positive() {
            VarValue::True
        } else {
            VarValue::False
        };
        self.level[idx] = Some(level);
        self.antecedent[idx] = antecedent;
        self.frequency[idx] = SUPPRESSED;
        self.assigned_literal_count += 1;
    }

    /// Clears `var`'s assignment, restoring its frequency from the backup
    /// taken when it was last unassigned or initialized.
    pub fn unassign(&mut self, var: Var) {
        let idx = var.index();
        self.value[idx] = VarValue::Unassigned;
        self.level[idx] = None;
        self.antecedent[idx] = None;
        self.frequency[idx] = self.original_frequency[idx];
        self.assigned_literal_count -= 1;
    }

    /// Unassigns every variable currently assigned at a level strictly above
    /// `backjump_level`.
    pub fn rollback_above(&mut self, backjump_level: usize) {
        for idx in 0..self.var_count {
            if let Some(level) = self.level[idx] {
                if level > backjump_level {
                    self.unassign(Var(idx));
                }
            }
        }
    }

    /// Reads the final model: a variable is true iff it was assigned true,
    /// and also true if it was left unassigned.
    pub fn model(&self) -> Vec<bool> {
        self.value
            .iter()
            .map(|v| !matches!(v, VarValue::False))
            .collect()
    }
}
