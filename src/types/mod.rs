//! The closed set of types which participate in relations.
//!
//! Types are immutable values: relations borrow them and build fresh ones for any slot they
//! refine.
use derive_more::From;

mod display;

/// Element kinds of a tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F16,
    F32,
    F64,
}

impl Dtype {
    pub fn is_bool(&self) -> bool {
        matches!(self, Dtype::Bool)
    }
}

/// A shape-dimension expression.
///
/// Only constants can be evaluated (see [`crate::shape::dim`]); symbolic forms are kept so they
/// can be represented and rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DimExpr {
    Constant(i64),
    Var(usize),
    Add(Vec<DimExpr>),
    Mul(Vec<DimExpr>),
}

impl DimExpr {
    pub fn constant(n: i64) -> Self {
        DimExpr::Constant(n)
    }
}

impl From<i64> for DimExpr {
    fn from(n: i64) -> Self {
        DimExpr::Constant(n)
    }
}

/// A tensor of known rank: one dimension expression per axis, plus a dtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TensorType {
    pub dtype: Dtype,
    pub shape: Vec<DimExpr>,
}

impl TensorType {
    pub fn new(dtype: Dtype, shape: Vec<DimExpr>) -> Self {
        TensorType { dtype, shape }
    }

    /// A rank-0 tensor
    pub fn scalar(dtype: Dtype) -> Self {
        TensorType::new(dtype, vec![])
    }

    /// A tensor whose dimensions are all constants
    pub fn from_dims(dtype: Dtype, dims: &[i64]) -> Self {
        TensorType::new(dtype, dims.iter().copied().map(DimExpr::Constant).collect())
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}

/// An ordered bundle of component types, used as the argument to concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleType {
    pub fields: Vec<Type>,
}

impl TupleType {
    pub fn new(fields: Vec<Type>) -> Self {
        TupleType { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An incomplete type is identified by its variable: two distinct variables are never unified
/// by a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVar(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum Type {
    /// A concrete tensor type
    Tensor(TensorType),

    /// A tuple of types
    Tuple(TupleType),

    /// Not yet known
    Incomplete(TypeVar),
}

impl Type {
    pub fn is_tensor(&self) -> bool {
        matches!(self, Type::Tensor(_))
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Type::Tuple(_))
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Type::Incomplete(_))
    }

    pub fn as_tensor(&self) -> Option<&TensorType> {
        match self {
            Type::Tensor(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&TupleType> {
        match self {
            Type::Tuple(t) => Some(t),
            _ => None,
        }
    }
}
