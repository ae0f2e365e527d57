//! NumPy-style broadcasting of two concrete shapes.
use super::dim::evaluate;
use crate::error::{RelationError, Result};
use crate::types::{DimExpr, Dtype, TensorType};

/// Compute the broadcast of two shapes.
///
/// Trailing dimensions are aligned; each aligned pair must be equal or contain a 1, and the
/// output takes the larger of the pair. Leading dimensions of the longer shape pass through
/// unchanged.
pub fn broadcast_shape(lhs: &[DimExpr], rhs: &[DimExpr]) -> Result<Vec<DimExpr>> {
    if lhs.is_empty() && rhs.is_empty() {
        return Ok(vec![]);
    }

    // Check the aligned suffix from the right, e.g.
    //      lhs = (8  1  6  1)
    //      rhs =    (7  1  5)
    //                ^-- only the last three dims are compared
    for (d1, d2) in lhs.iter().rev().zip(rhs.iter().rev()) {
        let (d1, d2) = (evaluate(d1)?, evaluate(d2)?);
        if d1 != d2 && d1 != 1 && d2 != 1 {
            return Err(RelationError::DimensionMismatch(d1, d2));
        }
    }

    // Dims of the longer shape beyond the aligned suffix are kept as they are
    let (longer, shorter) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let prefix_len = longer.len() - shorter.len();
    let prefix = longer[..prefix_len]
        .iter()
        .map(|d| -> Result<DimExpr> { Ok(DimExpr::Constant(evaluate(d)?)) });

    let suffix = lhs[lhs.len() - shorter.len()..]
        .iter()
        .zip(&rhs[rhs.len() - shorter.len()..])
        .map(|(d1, d2)| -> Result<DimExpr> {
            Ok(DimExpr::Constant(evaluate(d1)?.max(evaluate(d2)?)))
        });

    prefix.chain(suffix).collect()
}

/// Broadcast two tensor types, producing a tensor of `dtype`
pub fn concrete_broadcast(t1: &TensorType, t2: &TensorType, dtype: Dtype) -> Result<TensorType> {
    log::debug!("concrete_broadcast: t1={t1} t2={t2}");
    let shape = broadcast_shape(&t1.shape, &t2.shape)?;
    Ok(TensorType::new(dtype, shape))
}
