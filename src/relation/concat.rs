use super::util::{get_exact_arity, refine};
use super::{Relation, RelationResult};
use crate::error::RelationError;
use crate::shape::concrete_concat;
use crate::types::Type;

/// Concatenate a tuple of tensors along axis 0.
///
/// Inference runs forward only: a known tuple determines the output. A known output with an
/// unknown tuple is rejected as unsupported.
pub fn concat_rel(args: &[Type], num_inputs: usize) -> RelationResult {
    let [input, output] = get_exact_arity::<2>(Relation::Concat, args, num_inputs)?;
    match (input, output) {
        // nothing known yet
        (Type::Incomplete(_), Type::Incomplete(_)) => {
            log::trace!("concat: deferring on ({input}, {output})");
            Ok(args.to_vec())
        }

        // reverse inference: the tuple cannot be recovered from the result
        (Type::Incomplete(_), _) => Err(RelationError::Unsupported(format!(
            "cannot infer the tuple shape of concat from its result type {output}"
        ))),

        // forward inference; a known output must agree with the derived one
        (Type::Tuple(tuple), _) => {
            let derived = concrete_concat(tuple)?;
            Ok(vec![input.clone(), refine(1, output, derived.into())?])
        }

        (Type::Tensor(_), Type::Incomplete(_)) => Err(RelationError::InvalidArgument(format!(
            "concat can only be used with a tuple as its argument, got {input}"
        ))),

        // a tensor input with a known output: no relationship can be deduced
        (Type::Tensor(_), _) => Err(RelationError::Unsupported(format!(
            "cannot deduce a relationship between concat input {input} and output {output}"
        ))),
    }
}
