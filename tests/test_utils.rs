use typerel::prelude::*;

pub fn tensor(dtype: Dtype, dims: &[i64]) -> Type {
    TensorType::from_dims(dtype, dims).into()
}

pub fn f32s(dims: &[i64]) -> Type {
    tensor(Dtype::F32, dims)
}

pub fn tuple(fields: Vec<Type>) -> Type {
    TupleType::new(fields).into()
}

pub fn unknown(id: usize) -> Type {
    TypeVar(id).into()
}

/// A single operator instance as the solver sees it: a relation and the slots of its arguments
/// in a shared type environment.
pub struct Constraint {
    pub relation: Relation,
    pub slots: Vec<usize>,
}

/// Repeatedly apply relations to a type environment until a round makes no progress.
/// Returns the final environment and the number of rounds which changed something.
pub fn solve(mut env: Vec<Type>, constraints: &[Constraint]) -> Result<(Vec<Type>, usize)> {
    let mut rounds = 0;
    loop {
        let mut changed = false;
        for Constraint { relation, slots } in constraints {
            let args: Vec<Type> = slots.iter().map(|&i| env[i].clone()).collect();
            let (inputs, _) = relation.profile();
            let refined = relation.apply(&args, inputs)?;
            assert_eq!(refined.len(), args.len());

            for (&slot, ty) in slots.iter().zip(refined) {
                if env[slot] != ty {
                    // concrete slots are never retracted or replaced
                    assert!(env[slot].is_incomplete(), "slot {slot} changed from {}", env[slot]);
                    env[slot] = ty;
                    changed = true;
                }
            }
        }
        if !changed {
            return Ok((env, rounds));
        }
        rounds += 1;
    }
}
