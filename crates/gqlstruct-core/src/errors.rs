use thiserror::Error;

use crate::schema::__TypeKind;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("failed to parse schema document")]
    Parse(#[source] serde_json::Error),
    #[error("type {0} is declared more than once")]
    DuplicateType(String),
    #[error("cannot extend undeclared type {0}")]
    UnknownExtensionTarget(String),
    #[error("extension of {name} is {found:?} but the type is declared as {declared:?}")]
    ExtensionKindMismatch {
        name: String,
        declared: __TypeKind,
        found: __TypeKind,
    },
    #[error("field {field} is declared more than once in {type_name}")]
    DuplicateField { type_name: String, field: String },
    #[error("{operation} root type is declared as both {first} and {second}")]
    ConflictingRootType {
        operation: &'static str,
        first: String,
        second: String,
    },
    #[error("{operation} root type {name} is not a declared object type")]
    UnknownRootType {
        operation: &'static str,
        name: String,
    },
}
