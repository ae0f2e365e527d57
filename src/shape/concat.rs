//! Shape of concatenating a tuple of tensors along axis 0.
//!
//! Only the leading axis is supported. The resolver computes forward only, from a known tuple
//! to the output tensor.
use super::dim::{evaluate, evaluate_shape};
use crate::error::{RelationError, Result};
use crate::types::{DimExpr, TensorType, TupleType, Type};

/// Concatenate the fields of `tuple` along axis 0.
///
/// Every field must be a tensor of rank at least 1 with the same dtype, the same rank, and the
/// same non-axis dimensions as the first field.
pub fn concrete_concat(tuple: &TupleType) -> Result<TensorType> {
    log::debug!("concrete_concat: {tuple}");
    if tuple.len() < 2 {
        return Err(RelationError::InvalidArgument(
            "concat requires at least two tensors".to_string(),
        ));
    }

    let fields = tuple
        .fields
        .iter()
        .map(to_field)
        .collect::<Result<Vec<_>>>()?;

    let first = fields[0];
    let dtype = first.dtype;
    let suffix = evaluate_shape(&first.shape[1..])?;

    let mut axis_dim: i64 = 0;
    for field in fields {
        if field.dtype != dtype {
            return Err(RelationError::DtypeMismatch(dtype, field.dtype));
        }
        if field.rank() != first.rank() {
            return Err(RelationError::RankMismatch {
                expected: first.rank(),
                got: field.rank(),
            });
        }

        // compare non-axis dimensions positionally against the first field
        for (expected, dim) in suffix.iter().zip(&field.shape[1..]) {
            let dim = evaluate(dim)?;
            if *expected != dim {
                return Err(RelationError::DimensionMismatch(*expected, dim));
            }
        }

        axis_dim = axis_dim.checked_add(evaluate(&field.shape[0])?).ok_or_else(|| {
            RelationError::InvalidArgument("concat axis 0 dimension overflows".to_string())
        })?;
    }

    let shape = std::iter::once(axis_dim)
        .chain(suffix)
        .map(DimExpr::Constant)
        .collect();
    Ok(TensorType::new(dtype, shape))
}

// Each field of a concat tuple is a tensor with an axis 0
fn to_field(field: &Type) -> Result<&TensorType> {
    match field {
        Type::Tensor(t) if t.rank() > 0 => Ok(t),
        Type::Tensor(t) => Err(RelationError::InvalidArgument(format!(
            "cannot concatenate rank 0 tensor {t} along axis 0"
        ))),
        _ => Err(RelationError::InvalidArgument(format!(
            "concat fields must be tensors, got {field}"
        ))),
    }
}
