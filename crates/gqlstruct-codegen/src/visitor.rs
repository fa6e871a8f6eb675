use std::sync::Arc;

use gqlstruct_core::schema::{SchemaDirectiveVisitor, VisitObjectParams};
use serde::Serialize;

use crate::annotation::{AnnotationError, StructArgs};
use crate::functions::{unwrap_type, CommonFunctions};
use crate::registry::{FieldDef, Registry, ServiceMethod};
use crate::template_funcs::method_name;

/// Compile scoped state handed to every visitor call.
#[derive(Debug, Default)]
pub struct CompileSession {
    pub registry: Registry,
    pub diagnostics: Vec<Diagnostic>,
}

/// A recoverable problem found while compiling one type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    pub type_name: String,
    pub field: Option<String>,
    pub message: String,
}

impl CompileSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn report_decode(&mut self, type_name: &str, field: Option<&str>, error: &AnnotationError) {
        tracing::warn!(
            type_name = type_name,
            field = field,
            error = %error,
            "failed to decode @struct arguments, skipping remaining fields"
        );

        self.push_diagnostic(type_name, field, error.to_string());
    }

    fn report_collision(&mut self, type_name: &str, field: &str, existing: &str, ident: &str) {
        tracing::warn!(
            type_name = type_name,
            field = field,
            existing = existing,
            ident = ident,
            "field identifier collides with another field, skipping it"
        );

        self.push_diagnostic(
            type_name,
            Some(field),
            format!("identifier `{ident}` is already used by field `{existing}`"),
        );
    }

    fn push_diagnostic(&mut self, type_name: &str, field: Option<&str>, message: String) {
        self.diagnostics.push(Diagnostic {
            type_name: type_name.to_string(),
            field: field.map(str::to_string),
            message,
        });
    }
}

/// First pass: creates a `Def` shell for every object type so fields can
/// reference types declared later in the schema.
pub struct DeclareVisitor;

impl SchemaDirectiveVisitor<CompileSession> for DeclareVisitor {
    fn visit_object(&self, params: VisitObjectParams<'_, CompileSession>) {
        match StructArgs::decode(params.args) {
            Ok(args) => {
                params.context.registry.get_or_insert_def(params.name, &args);
            }
            Err(e) => {
                tracing::debug!(type_name = params.name, error = %e, "not declaring type");
            }
        }
    }
}

/// Second pass: materializes fields and infers services.
pub struct StructDirectiveVisitor {
    funcs: Arc<CommonFunctions>,
}

impl StructDirectiveVisitor {
    pub fn new(funcs: Arc<CommonFunctions>) -> Self {
        Self { funcs }
    }
}

impl SchemaDirectiveVisitor<CompileSession> for StructDirectiveVisitor {
    fn visit_object(&self, params: VisitObjectParams<'_, CompileSession>) {
        let session = params.context;
        let name = params.name;

        let type_args = match StructArgs::decode(params.args) {
            Ok(args) => args,
            Err(e) => {
                session.report_decode(name, None, &e);
                return;
            }
        };

        tracing::debug!(
            type_name = name,
            extension = params.is_extension,
            fields = params.node.fields.len(),
            "visiting object"
        );

        let private = session.registry.get_or_insert_def(name, &type_args).private;

        for field in &params.node.fields {
            let args = match StructArgs::from_directives(&field.directives) {
                Ok(args) => args,
                Err(e) => {
                    session.report_decode(name, Some(&field.name), &e);
                    return;
                }
            };

            // Services are registered even for omitted fields.
            if !args.service.is_empty() {
                let response = unwrap_type(&field.type_).gql_type;
                session
                    .registry
                    .get_or_insert_service(&args.service)
                    .upsert_method(ServiceMethod {
                        name: method_name(&field.name),
                        request: None,
                        response,
                    });
            }

            if args.omit {
                continue;
            }

            let field_type = self.funcs.resolve_type(&session.registry, &field.type_);
            let native_type = if args.type_.is_empty() {
                field_type.native_type
            } else {
                args.type_
            };
            let wire_type = if args.prototype.is_empty() {
                field_type.wire_type
            } else {
                args.prototype
            };

            let field_def = FieldDef {
                r#ref: field.name.clone(),
                name: field.name.clone(),
                gql_type: field_type.gql_type,
                native_type,
                wire_type,
                tags: args.tags,
                private: private || args.private,
                explicit_name: args.name,
            };

            let ident = field_def.ident();
            let fields = &mut session.registry.get_or_insert_def(name, &type_args).fields;

            // Revisiting the same key overwrites, a different key with the same
            // identifier would not compile.
            let existing = fields
                .values()
                .find(|other| other.r#ref != field_def.r#ref && other.ident() == ident)
                .map(|other| other.r#ref.clone());

            match existing {
                Some(existing) => session.report_collision(name, &field.name, &existing, &ident),
                None => {
                    fields.insert(field.name.clone(), field_def);
                }
            }
        }
    }
}
