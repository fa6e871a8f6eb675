use std::sync::Arc;

use gqlstruct_core::schema::{TypeRef, __TypeKind};

use crate::registry::{Def, Registry};

/// Target specific spelling of resolved types.
pub trait FormatTypeFuncs {
    fn format_kind_list(&self, representation: &str) -> String;
    fn format_kind_nullable(&self, representation: &str, base: &BaseType) -> String;
    fn format_kind_scalar(&self, scalar: Scalar, non_null: bool) -> String;
    fn format_kind_object(&self, def: &Def) -> String;
}

pub type DynFormatTypeFuncs = Arc<dyn FormatTypeFuncs + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scalar {
    Int,
    Float,
    String,
    Boolean,
    Id,
}

impl Scalar {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Scalar::Int),
            "Float" => Some(Scalar::Float),
            "String" => Some(Scalar::String),
            "Boolean" => Some(Scalar::Boolean),
            "ID" => Some(Scalar::Id),
            _ => None,
        }
    }
}

pub enum BaseType<'r> {
    Scalar(Scalar),
    Object(&'r Def),
}

/// Resolution result for one field type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldType {
    pub is_list: bool,
    pub is_non_null: bool,
    pub gql_type: String,
    pub native_type: String,
    pub wire_type: String,
}

impl FieldType {
    /// Empty native type means the named type could not be resolved.
    pub fn is_resolved(&self) -> bool {
        !self.native_type.is_empty()
    }
}

pub struct CommonFunctions {
    native_funcs: DynFormatTypeFuncs,
    wire_funcs: DynFormatTypeFuncs,
}

impl CommonFunctions {
    pub fn new(native_funcs: DynFormatTypeFuncs, wire_funcs: DynFormatTypeFuncs) -> Self {
        Self {
            native_funcs,
            wire_funcs,
        }
    }

    /// Unwraps list and non-null wrappers and resolves the named type
    /// against the builtin scalars and the structs known to `registry`.
    pub fn resolve_type(&self, registry: &Registry, t: &TypeRef) -> FieldType {
        let mut field_type = unwrap_type(t);

        let base = Scalar::from_name(&field_type.gql_type)
            .map(BaseType::Scalar)
            .or_else(|| {
                registry
                    .structs
                    .get(&field_type.gql_type)
                    .map(BaseType::Object)
            });

        match base {
            Some(base) => {
                field_type.native_type = compose(self.native_funcs.as_ref(), &field_type, &base);
                field_type.wire_type = compose(self.wire_funcs.as_ref(), &field_type, &base);
            }
            None => {
                tracing::warn!(
                    gql_type = field_type.gql_type.as_str(),
                    "could not resolve type, leaving it empty"
                );
            }
        }

        field_type
    }
}

/// Strips list and non-null wrappers, leaving the native and wire types empty.
pub fn unwrap_type(t: &TypeRef) -> FieldType {
    let mut field_type = FieldType::default();
    collect_wrappers(t, &mut field_type);
    field_type
}

// Nested wrappers collapse into the two flags.
fn collect_wrappers(t: &TypeRef, field_type: &mut FieldType) {
    match (&t.kind, &t.of_type) {
        (Some(__TypeKind::LIST), Some(inner)) => {
            field_type.is_list = true;
            collect_wrappers(inner, field_type)
        }
        (Some(__TypeKind::NON_NULL), Some(inner)) => {
            field_type.is_non_null = true;
            collect_wrappers(inner, field_type)
        }
        _ => {
            if let Some(name) = &t.name {
                field_type.gql_type = name.clone();
            }
        }
    }
}

fn compose(funcs: &(dyn FormatTypeFuncs + Send + Sync), t: &FieldType, base: &BaseType) -> String {
    let mut representation = match base {
        BaseType::Scalar(scalar) => funcs.format_kind_scalar(*scalar, t.is_non_null),
        BaseType::Object(def) => funcs.format_kind_object(def),
    };

    if !t.is_non_null {
        representation = funcs.format_kind_nullable(&representation, base);
    }
    if t.is_list {
        representation = funcs.format_kind_list(&representation);
    }

    representation
}
