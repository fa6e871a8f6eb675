use crate::functions::{BaseType, FormatTypeFuncs, Scalar};
use crate::registry::Def;

pub struct RustFormatTypeFunc;

impl FormatTypeFuncs for RustFormatTypeFunc {
    fn format_kind_list(&self, representation: &str) -> String {
        format!("Vec<{}>", representation)
    }

    fn format_kind_nullable(&self, representation: &str, base: &BaseType) -> String {
        match base {
            BaseType::Object(_) => format!("Option<Box<{}>>", representation),
            BaseType::Scalar(_) => format!("Option<{}>", representation),
        }
    }

    fn format_kind_scalar(&self, scalar: Scalar, _non_null: bool) -> String {
        match scalar {
            Scalar::Int => "i64",
            Scalar::Float => "f64",
            Scalar::String | Scalar::Id => "String",
            Scalar::Boolean => "bool",
        }
        .to_string()
    }

    fn format_kind_object(&self, def: &Def) -> String {
        def.ident()
    }
}
