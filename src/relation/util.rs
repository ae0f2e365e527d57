use super::Relation;
use crate::error::{RelationError, Result};
use crate::types::Type;

/// Make sure a relation was called with exactly its declared arity and number of inputs
pub(crate) fn get_exact_arity<'a, const N: usize>(
    relation: Relation,
    args: &'a [Type],
    num_inputs: usize,
) -> Result<&'a [Type; N]> {
    let (inputs, _) = relation.profile();
    if num_inputs != inputs {
        return Err(RelationError::Inputs {
            relation,
            expected: inputs,
            got: num_inputs,
        });
    }

    args.try_into().map_err(|_| RelationError::Arity {
        relation,
        expected: N,
        got: args.len(),
    })
}

/// Refine slot `index` with a derived type.
///
/// An incomplete slot takes the derived type; a concrete slot must already agree with it.
pub(crate) fn refine(index: usize, existing: &Type, derived: Type) -> Result<Type> {
    match existing {
        Type::Incomplete(_) => Ok(derived),
        t if *t == derived => Ok(derived),
        t => Err(RelationError::Conflict {
            index,
            existing: t.clone(),
            derived,
        }),
    }
}
