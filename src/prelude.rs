pub use crate::error::{RelationError, Result};
pub use crate::relation::{
    Relation, RelationFn, RelationResult, broadcast_rel, broadcast_to_bool_rel, concat_rel,
    identity_rel,
};
pub use crate::types::{DimExpr, Dtype, TensorType, TupleType, Type, TypeVar};
