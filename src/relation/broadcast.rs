use super::util::{get_exact_arity, refine};
use super::{Relation, RelationResult};
use crate::error::RelationError;
use crate::shape::concrete_broadcast;
use crate::types::{Dtype, Type};

/// Broadcast two tensors of the same dtype.
///
/// Defers until both inputs are concrete tensors. The dtypes must match exactly.
pub fn broadcast_rel(args: &[Type], num_inputs: usize) -> RelationResult {
    let [lhs, rhs, out] = get_exact_arity::<3>(Relation::Broadcast, args, num_inputs)?;
    let (Some(t1), Some(t2)) = (lhs.as_tensor(), rhs.as_tensor()) else {
        log::trace!("broadcast: deferring on ({lhs}, {rhs})");
        return Ok(args.to_vec());
    };

    if t1.dtype != t2.dtype {
        return Err(RelationError::DtypeMismatch(t1.dtype, t2.dtype));
    }

    let derived = concrete_broadcast(t1, t2, t1.dtype)?;
    Ok(vec![lhs.clone(), rhs.clone(), refine(2, out, derived.into())?])
}

/// Broadcast two tensors, producing a bool tensor.
///
/// Unlike [`broadcast_rel`], the input dtypes are not required to match.
// TODO: decide whether comparison operators should reject mixed-dtype operands like
// broadcast_rel does.
pub fn broadcast_to_bool_rel(args: &[Type], num_inputs: usize) -> RelationResult {
    let [lhs, rhs, out] = get_exact_arity::<3>(Relation::BroadcastToBool, args, num_inputs)?;
    let (Some(t1), Some(t2)) = (lhs.as_tensor(), rhs.as_tensor()) else {
        log::trace!("broadcast_to_bool: deferring on ({lhs}, {rhs})");
        return Ok(args.to_vec());
    };

    let derived = concrete_broadcast(t1, t2, Dtype::Bool)?;
    Ok(vec![lhs.clone(), rhs.clone(), refine(2, out, derived.into())?])
}
