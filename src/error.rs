use thiserror::Error;

use crate::relation::Relation;
use crate::types::{DimExpr, Dtype, Type};

/// Failures reported by a relation call.
///
/// A relation never recovers from these itself: they abort the call and are returned to the
/// solver, which decides how to report them against the offending operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// A shape slot was not an integer constant
    #[error("malformed dimension: {0} is not an integer constant")]
    MalformedDimension(DimExpr),

    /// Two dimensions could not be matched by broadcasting or concatenation
    #[error("dimension mismatch: {0} and {1}")]
    DimensionMismatch(i64, i64),

    /// Tensors which must have the same rank did not
    #[error("rank mismatch: expected rank {expected}, got rank {got}")]
    RankMismatch { expected: usize, got: usize },

    /// Operand dtypes differ; there is no implicit promotion
    #[error("dtype mismatch: {0} and {1}")]
    DtypeMismatch(Dtype, Dtype),

    /// A structural precondition of the relation was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A direction of inference the relation does not implement
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Wrong number of argument types for a relation
    #[error("{relation} expects {expected} arguments, got {got}")]
    Arity {
        relation: Relation,
        expected: usize,
        got: usize,
    },

    /// Wrong number of inputs declared for a relation
    #[error("{relation} expects {expected} inputs, got {got}")]
    Inputs {
        relation: Relation,
        expected: usize,
        got: usize,
    },

    /// A relation derived a type for an already-concrete slot which disagrees with it
    #[error("conflicting types for argument {index}: known {existing}, derived {derived}")]
    Conflict {
        index: usize,
        existing: Type,
        derived: Type,
    },
}

pub type Result<T> = std::result::Result<T, RelationError>;
