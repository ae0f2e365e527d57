use typerel::prelude::*;
use typerel::shape::{broadcast_shape, concrete_broadcast, concrete_concat, evaluate};

pub mod test_utils;
use test_utils::{f32s, unknown};

fn dims(ds: &[i64]) -> Vec<DimExpr> {
    ds.iter().copied().map(DimExpr::constant).collect()
}

#[test]
fn test_identical_shapes_unchanged() {
    let shapes: [&[i64]; 4] = [&[], &[1], &[4, 4], &[2, 3, 5, 7]];
    for shape in shapes {
        let s = dims(shape);
        assert_eq!(broadcast_shape(&s, &s), Ok(s));
    }
}

#[test]
fn test_rank0_is_neutral() {
    let shapes: [&[i64]; 3] = [&[1], &[0, 3], &[2, 1, 9]];
    for shape in shapes {
        let s = dims(shape);
        assert_eq!(broadcast_shape(&s, &[]), Ok(s.clone()));
        assert_eq!(broadcast_shape(&[], &s), Ok(s));
    }
}

#[test]
fn test_broadcast_is_symmetric_in_shape() {
    let (a, b) = (dims(&[8, 1, 6, 1]), dims(&[7, 1, 5]));
    assert_eq!(broadcast_shape(&a, &b), broadcast_shape(&b, &a));
    assert_eq!(broadcast_shape(&a, &b), Ok(dims(&[8, 7, 6, 5])));
}

#[test]
fn test_broadcast_examples() {
    assert_eq!(broadcast_shape(&dims(&[3, 4]), &dims(&[4])), Ok(dims(&[3, 4])));
    assert_eq!(broadcast_shape(&dims(&[5, 1]), &dims(&[1, 6])), Ok(dims(&[5, 6])));
    assert_eq!(
        broadcast_shape(&dims(&[3, 4]), &dims(&[2, 4])),
        Err(RelationError::DimensionMismatch(3, 2))
    );
}

#[test]
fn test_broadcast_keeps_requested_dtype() {
    let t1 = TensorType::from_dims(Dtype::U8, &[2]);
    let t2 = TensorType::from_dims(Dtype::U8, &[1]);
    let out = concrete_broadcast(&t1, &t2, Dtype::U8).unwrap();
    assert_eq!(out, TensorType::from_dims(Dtype::U8, &[2]));
}

#[test]
fn test_symbolic_dimension_rejected() {
    let sym = DimExpr::Mul(vec![DimExpr::Var(0), DimExpr::constant(2)]);
    assert_eq!(
        evaluate(&sym),
        Err(RelationError::MalformedDimension(sym.clone()))
    );
    assert_eq!(
        broadcast_shape(&[sym.clone()], &dims(&[1])),
        Err(RelationError::MalformedDimension(sym))
    );
}

#[test]
fn test_concat_examples() {
    let ok = TupleType::new(vec![f32s(&[2, 5]), f32s(&[3, 5])]);
    assert_eq!(
        concrete_concat(&ok),
        Ok(TensorType::from_dims(Dtype::F32, &[5, 5]))
    );

    let bad = TupleType::new(vec![f32s(&[2, 5]), f32s(&[3, 6])]);
    assert!(matches!(
        concrete_concat(&bad),
        Err(RelationError::DimensionMismatch(_, _))
    ));
}

#[test]
fn test_concat_incomplete_field() {
    let t = TupleType::new(vec![f32s(&[2, 5]), unknown(0)]);
    assert!(matches!(
        concrete_concat(&t),
        Err(RelationError::InvalidArgument(_))
    ));
}
