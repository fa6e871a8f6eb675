use crate::functions::{BaseType, FormatTypeFuncs, Scalar};
use crate::registry::Def;

pub struct ProtoFormatTypeFunc;

impl ProtoFormatTypeFunc {
    /// Well known wrapper standing in for a nullable scalar.
    pub fn wrapper(scalar: Scalar) -> &'static str {
        match scalar {
            Scalar::Int => "google.protobuf.Int64Value",
            Scalar::Float => "google.protobuf.DoubleValue",
            Scalar::String | Scalar::Id => "google.protobuf.StringValue",
            Scalar::Boolean => "google.protobuf.BoolValue",
        }
    }
}

impl FormatTypeFuncs for ProtoFormatTypeFunc {
    fn format_kind_list(&self, representation: &str) -> String {
        format!("repeated {}", representation)
    }

    // Wrappers are picked per scalar and messages carry presence already.
    fn format_kind_nullable(&self, representation: &str, _base: &BaseType) -> String {
        representation.to_string()
    }

    fn format_kind_scalar(&self, scalar: Scalar, non_null: bool) -> String {
        if !non_null {
            return Self::wrapper(scalar).to_string();
        }

        match scalar {
            Scalar::Int => "int64",
            Scalar::Float => "double",
            Scalar::String | Scalar::Id => "string",
            Scalar::Boolean => "bool",
        }
        .to_string()
    }

    fn format_kind_object(&self, def: &Def) -> String {
        def.name.clone()
    }
}
