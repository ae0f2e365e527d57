//! Evaluation of shape-dimension expressions.
//!
//! Only integer constants evaluate. Symbolic variables and arithmetic are rejected with
//! [`RelationError::MalformedDimension`] rather than coerced; callers propagate the error.
use crate::error::{RelationError, Result};
use crate::types::DimExpr;

/// Evaluate a dimension to a concrete integer
pub fn evaluate(dim: &DimExpr) -> Result<i64> {
    match dim {
        DimExpr::Constant(n) => Ok(*n),
        _ => Err(RelationError::MalformedDimension(dim.clone())),
    }
}

/// Evaluate every dimension of a shape, failing on the first non-constant
pub fn evaluate_shape(shape: &[DimExpr]) -> Result<Vec<i64>> {
    shape.iter().map(evaluate).collect()
}
