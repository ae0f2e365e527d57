use std::fmt::{Display, Formatter, Result as FmtResult};

use super::*;

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Type::Tensor(t) => write!(f, "{t}"),
            Type::Tuple(t) => write!(f, "{t}"),
            Type::Incomplete(v) => write!(f, "{v}"),
        }
    }
}

impl Display for TypeVar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "v{}", self.0)
    }
}

impl Display for TensorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}[", self.dtype)?;
        for (i, dim) in self.shape.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dim}")?;
        }
        write!(f, "]")
    }
}

impl Display for TupleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, ")")
    }
}

impl Display for DimExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DimExpr::Var(n) => write!(f, "v{n}"),
            DimExpr::Constant(c) => write!(f, "{c}"),
            DimExpr::Mul(terms) => fmt_terms(f, terms, "*", "1"),
            DimExpr::Add(terms) => fmt_terms(f, terms, "+", "0"),
        }
    }
}

fn fmt_terms(f: &mut Formatter<'_>, terms: &[DimExpr], op: &str, unit: &str) -> FmtResult {
    match terms {
        [] => write!(f, "{unit}"),
        [term] => write!(f, "{term}"),
        _ => {
            write!(f, "(")?;
            for (i, term) in terms.iter().enumerate() {
                if i > 0 {
                    write!(f, "{op}")?;
                }
                write!(f, "{term}")?;
            }
            write!(f, ")")
        }
    }
}

impl Display for Dtype {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Dtype::Bool => "bool",
            Dtype::I8 => "i8",
            Dtype::I16 => "i16",
            Dtype::I32 => "i32",
            Dtype::I64 => "i64",
            Dtype::U8 => "u8",
            Dtype::U16 => "u16",
            Dtype::U32 => "u32",
            Dtype::U64 => "u64",
            Dtype::F16 => "f16",
            Dtype::F32 => "f32",
            Dtype::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_types() {
        let t = TensorType::from_dims(Dtype::I32, &[4, 5]);
        assert_eq!(t.to_string(), "i32[4, 5]");
        assert_eq!(TensorType::scalar(Dtype::Bool).to_string(), "bool[]");

        let tuple = TupleType::new(vec![t.into(), TypeVar(3).into()]);
        assert_eq!(tuple.to_string(), "(i32[4, 5], v3)");
    }

    #[test]
    fn test_display_dims() {
        let d = DimExpr::Add(vec![
            DimExpr::Var(0),
            DimExpr::Mul(vec![DimExpr::Constant(2), DimExpr::Var(1)]),
        ]);
        assert_eq!(d.to_string(), "(v0+(2*v1))");
        assert_eq!(DimExpr::Mul(vec![]).to_string(), "1");
        assert_eq!(DimExpr::Add(vec![DimExpr::Var(2)]).to_string(), "v2");
    }
}
