use super::util::get_exact_arity;
use super::{Relation, RelationResult};
use crate::types::Type;

/// Propagate a concrete input tensor type to an incomplete output.
pub fn identity_rel(args: &[Type], num_inputs: usize) -> RelationResult {
    let [input, output] = get_exact_arity::<2>(Relation::Identity, args, num_inputs)?;
    match (input, output) {
        (Type::Tensor(_), Type::Incomplete(_)) => Ok(vec![input.clone(), input.clone()]),
        _ => {
            log::trace!("identity: deferring on ({input}, {output})");
            Ok(args.to_vec())
        }
    }
}
