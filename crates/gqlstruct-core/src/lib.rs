//! Schema graph model and executable schema construction.
//!
//! This crate plays the part of the parser and schema builder: it holds the
//! parsed documents, merges `extend type` fragments onto their declarations,
//! resolves the root operation types and dispatches object directives to a
//! [`schema::SchemaDirectiveVisitor`].

pub mod errors;
pub mod logging;
pub mod schema;
