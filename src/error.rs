//! Error types for malformed DIMACS input.

use thiserror::Error;

/// Errors produced while parsing a DIMACS CNF document.
///
/// All variants carry the 1-indexed input line at which the problem was
/// detected.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("line {line}: expected a 'p cnf <vars> <clauses>' header, found: {found}")]
    MissingHeader { line: usize, found: String },

    #[error("line {line}: malformed header, expected 'p cnf <vars> <clauses>': {header}")]
    InvalidHeader { line: usize, header: String },

    #[error("line {line}: expected an integer token, found: {found}")]
    NotAnInteger { line: usize, found: String },

    #[error("line {line}: literal {literal} has variable index out of range 1..={var_count}")]
    LiteralOutOfRange {
        line: usize,
        literal: i64,
        var_count: usize,
    },

    #[error("unexpected end of input while reading clause {clause_index} of {clause_count}")]
    UnterminatedClause {
        clause_index: usize,
        clause_count: usize,
    },
}
