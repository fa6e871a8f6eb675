//! Compiles a schema annotated with `@struct` into a [`registry::Registry`]
//! and renders it as Rust structs and proto3 services.

pub mod annotation;
pub mod config;
pub mod functions;
mod generator;
pub mod proto;
pub mod registry;
pub mod rust;
pub mod template_funcs;
pub mod visitor;

use std::sync::Arc;

use eyre::Context;
use gqlstruct_core::schema::{ExecutableSchema, SchemaDocument};

use self::annotation::STRUCT_DIRECTIVE_NAME;
use self::config::GeneratorConfig;
use self::functions::CommonFunctions;
use self::proto::format::ProtoFormatTypeFunc;
use self::proto::ProtoGenerator;
use self::registry::Registry;
use self::rust::format::RustFormatTypeFunc;
use self::rust::RustGenerator;
use self::visitor::{CompileSession, DeclareVisitor, Diagnostic, StructDirectiveVisitor};

pub use self::annotation::STRUCT_DIRECTIVE_TYPEDEF;
pub use self::generator::{DynGenerator, Generator};

/// Builds the schema and runs the declaration and compile passes, returning
/// the finalized session.
pub fn compile(documents: Vec<SchemaDocument>) -> eyre::Result<CompileSession> {
    let schema = ExecutableSchema::build(documents).context("could not build executable schema")?;

    let funcs = Arc::new(CommonFunctions::new(
        Arc::new(RustFormatTypeFunc),
        Arc::new(ProtoFormatTypeFunc),
    ));

    let mut session = CompileSession::new();

    tracing::info!("declaring struct types");
    schema.visit_objects(STRUCT_DIRECTIVE_NAME, &DeclareVisitor, &mut session);

    tracing::info!("compiling struct fields and services");
    schema.visit_objects(
        STRUCT_DIRECTIVE_NAME,
        &StructDirectiveVisitor::new(funcs),
        &mut session,
    );

    session.registry.finalize(schema.root_types());

    tracing::info!(
        structs = session.registry.structs.len(),
        services = session.registry.services.len(),
        diagnostics = session.diagnostics.len(),
        "compiled registry"
    );

    Ok(session)
}

pub struct GeneratedOutput {
    pub structs: String,
    pub services: String,
    pub registry: Registry,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedOutput {
    /// Pretty printed registry, for debugging the resolution.
    pub fn registry_json(&self) -> eyre::Result<String> {
        serde_json::to_string_pretty(&self.registry).context("could not serialize registry")
    }
}

pub fn generate(
    documents: Vec<SchemaDocument>,
    config: &GeneratorConfig,
) -> eyre::Result<GeneratedOutput> {
    let session = compile(documents)?;

    let structs_generator: DynGenerator = Arc::new(RustGenerator::new(config.clone()));
    let services_generator: DynGenerator = Arc::new(ProtoGenerator::new(config.clone()));

    tracing::info!("rendering structs");
    let structs = structs_generator.generate(&session.registry)?;
    tracing::info!("rendering services");
    let services = services_generator.generate(&session.registry)?;

    Ok(GeneratedOutput {
        structs,
        services,
        registry: session.registry,
        diagnostics: session.diagnostics,
    })
}
