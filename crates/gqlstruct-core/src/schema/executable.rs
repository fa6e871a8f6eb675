use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

use super::{ArgumentBag, SchemaDefinition, SchemaDocument, TypeDefinition, __TypeKind};

/// The names of the query, mutation and subscription entry points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl RootTypes {
    pub fn contains(&self, name: &str) -> bool {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .flatten()
            .any(|root| root == name)
    }
}

pub struct VisitObjectParams<'a, C> {
    /// Declared type name.
    pub name: &'a str,
    /// The declaration or extension fragment being visited, with only its own fields.
    pub node: &'a TypeDefinition,
    /// Arguments of the type level directive, empty when the directive is absent.
    pub args: &'a ArgumentBag,
    pub is_extension: bool,
    pub context: &'a mut C,
}

/// Called once per object declaration and once per extension fragment.
pub trait SchemaDirectiveVisitor<C> {
    fn visit_object(&self, params: VisitObjectParams<'_, C>);
}

struct TypeEntry {
    declaration: usize,
    extensions: Vec<usize>,
}

/// A merged, validated set of schema documents.
pub struct ExecutableSchema {
    fragments: Vec<TypeDefinition>,
    types: HashMap<String, TypeEntry>,
    roots: RootTypes,
}

impl ExecutableSchema {
    pub fn build(documents: Vec<SchemaDocument>) -> Result<Self, SchemaError> {
        let mut fragments = Vec::new();
        let mut schema_definitions = Vec::new();

        for document in documents {
            schema_definitions.extend(document.schema);
            fragments.extend(document.definitions);
        }

        let mut types: HashMap<String, TypeEntry> = HashMap::new();
        for (index, fragment) in fragments.iter().enumerate() {
            if fragment.extension {
                continue;
            }
            if types.contains_key(&fragment.name) {
                return Err(SchemaError::DuplicateType(fragment.name.clone()));
            }
            types.insert(
                fragment.name.clone(),
                TypeEntry {
                    declaration: index,
                    extensions: Vec::new(),
                },
            );
        }

        for (index, fragment) in fragments.iter().enumerate() {
            check_unique_fields(fragment)?;

            if !fragment.extension {
                continue;
            }
            let entry = types
                .get_mut(&fragment.name)
                .ok_or_else(|| SchemaError::UnknownExtensionTarget(fragment.name.clone()))?;

            let declared = &fragments[entry.declaration].kind;
            if declared != &fragment.kind {
                return Err(SchemaError::ExtensionKindMismatch {
                    name: fragment.name.clone(),
                    declared: declared.clone(),
                    found: fragment.kind.clone(),
                });
            }
            entry.extensions.push(index);
        }

        let mut schema = Self {
            fragments,
            types,
            roots: RootTypes::default(),
        };
        schema.roots = schema.resolve_roots(&schema_definitions)?;

        tracing::debug!(
            types = schema.types.len(),
            fragments = schema.fragments.len(),
            "built executable schema"
        );

        Ok(schema)
    }

    pub fn root_types(&self) -> &RootTypes {
        &self.roots
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types
            .get(name)
            .map(|entry| &self.fragments[entry.declaration])
    }

    /// Visits every object type in ascending name order: the declaration
    /// first, then its extension fragments in document order.
    pub fn visit_objects<C, V>(&self, directive: &str, visitor: &V, context: &mut C)
    where
        V: SchemaDirectiveVisitor<C> + ?Sized,
    {
        let empty = ArgumentBag::new();

        let objects = self
            .types
            .iter()
            .filter(|(name, _)| !name.starts_with("__"))
            .filter(|(_, entry)| self.fragments[entry.declaration].kind == __TypeKind::OBJECT)
            .sorted_by(|a, b| a.0.cmp(b.0));

        for (name, entry) in objects {
            let fragments = std::iter::once(entry.declaration).chain(entry.extensions.iter().copied());

            for index in fragments {
                let node = &self.fragments[index];
                let args = node
                    .directive(directive)
                    .map(|d| &d.arguments)
                    .unwrap_or(&empty);

                visitor.visit_object(VisitObjectParams {
                    name,
                    node,
                    args,
                    is_extension: node.extension,
                    context: &mut *context,
                });
            }
        }
    }

    fn resolve_roots(&self, definitions: &[SchemaDefinition]) -> Result<RootTypes, SchemaError> {
        let query = self.resolve_root(
            "query",
            definitions.iter().map(|d| d.query.as_ref()),
            "Query",
        )?;
        let mutation = self.resolve_root(
            "mutation",
            definitions.iter().map(|d| d.mutation.as_ref()),
            "Mutation",
        )?;
        let subscription = self.resolve_root(
            "subscription",
            definitions.iter().map(|d| d.subscription.as_ref()),
            "Subscription",
        )?;

        Ok(RootTypes {
            query,
            mutation,
            subscription,
        })
    }

    fn resolve_root<'a>(
        &self,
        operation: &'static str,
        declared: impl Iterator<Item = Option<&'a String>>,
        default_name: &str,
    ) -> Result<Option<String>, SchemaError> {
        let mut explicit: Option<&String> = None;
        for name in declared.flatten() {
            match explicit {
                Some(first) if first != name => {
                    return Err(SchemaError::ConflictingRootType {
                        operation,
                        first: first.clone(),
                        second: name.clone(),
                    })
                }
                _ => explicit = Some(name),
            }
        }

        match explicit {
            Some(name) => {
                if !self.is_object(name) {
                    return Err(SchemaError::UnknownRootType {
                        operation,
                        name: name.clone(),
                    });
                }
                Ok(Some(name.clone()))
            }
            None if self.is_object(default_name) => Ok(Some(default_name.to_string())),
            None => Ok(None),
        }
    }

    fn is_object(&self, name: &str) -> bool {
        self.get_type(name)
            .map(|t| t.kind == __TypeKind::OBJECT)
            .unwrap_or(false)
    }
}

fn check_unique_fields(fragment: &TypeDefinition) -> Result<(), SchemaError> {
    if let Some(field) = fragment.fields.iter().map(|f| &f.name).duplicates().next() {
        return Err(SchemaError::DuplicateField {
            type_name: fragment.name.clone(),
            field: field.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::errors::SchemaError;
    use crate::schema::{
        Directive, FieldDefinition, SchemaDefinition, SchemaDocument, TypeDefinition, TypeRef,
        __TypeKind,
    };

    use super::{ExecutableSchema, SchemaDirectiveVisitor, VisitObjectParams};

    fn object(name: &str, extension: bool, fields: &[&str]) -> TypeDefinition {
        TypeDefinition {
            kind: __TypeKind::OBJECT,
            name: name.to_string(),
            extension,
            description: None,
            directives: vec![],
            fields: fields
                .iter()
                .map(|f| FieldDefinition {
                    name: f.to_string(),
                    description: None,
                    type_: TypeRef::named("String"),
                    directives: vec![],
                })
                .collect(),
        }
    }

    fn document(definitions: Vec<TypeDefinition>) -> SchemaDocument {
        SchemaDocument {
            schema: None,
            definitions,
        }
    }

    struct Recorder;

    impl SchemaDirectiveVisitor<Vec<String>> for Recorder {
        fn visit_object(&self, params: VisitObjectParams<'_, Vec<String>>) {
            let fields = params.node.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
            params.context.push(format!(
                "{}{}:{}:{}",
                if params.is_extension { "extend " } else { "" },
                params.name,
                fields.join(","),
                params.args.len()
            ));
        }
    }

    #[test]
    fn visits_declarations_before_extensions_in_name_order() {
        let mut bar = object("Bar", false, &["b"]);
        bar.directives.push(Directive {
            name: "struct".into(),
            arguments: serde_json::json!({ "private": true })
                .as_object()
                .cloned()
                .unwrap(),
        });

        let schema = ExecutableSchema::build(vec![
            document(vec![object("Query", true, &["list"]), object("Query", false, &["read"])]),
            document(vec![bar, object("Query", true, &["create"]), object("__Type", false, &["x"])]),
        ])
        .unwrap();

        let mut visited = Vec::new();
        schema.visit_objects("struct", &Recorder, &mut visited);

        assert_eq!(
            visited,
            vec![
                "Bar:b:1".to_string(),
                "Query:read:0".to_string(),
                "extend Query:list:0".to_string(),
                "extend Query:create:0".to_string(),
            ]
        );
    }

    #[test]
    fn default_roots_are_used_when_declared() {
        let schema = ExecutableSchema::build(vec![document(vec![
            object("Query", false, &["a"]),
            object("Mutation", false, &["b"]),
        ])])
        .unwrap();

        assert_eq!(schema.root_types().query.as_deref(), Some("Query"));
        assert_eq!(schema.root_types().mutation.as_deref(), Some("Mutation"));
        assert_eq!(schema.root_types().subscription, None);
        assert_eq!(schema.root_types().contains("Mutation"), true);
        assert_eq!(schema.root_types().contains("Foo"), false);
    }

    #[test]
    fn explicit_roots_override_defaults() {
        let mut doc = document(vec![object("Query", false, &["a"]), object("Root", false, &["b"])]);
        doc.schema = Some(SchemaDefinition {
            query: Some("Root".into()),
            mutation: None,
            subscription: None,
        });

        let schema = ExecutableSchema::build(vec![doc]).unwrap();

        assert_eq!(schema.root_types().query.as_deref(), Some("Root"));
    }

    #[test]
    fn duplicate_declaration_is_fatal() {
        let result = ExecutableSchema::build(vec![document(vec![
            object("Foo", false, &["a"]),
            object("Foo", false, &["b"]),
        ])]);

        assert!(matches!(result, Err(SchemaError::DuplicateType(name)) if name == "Foo"));
    }

    #[test]
    fn extension_of_undeclared_type_is_fatal() {
        let result = ExecutableSchema::build(vec![document(vec![object("Foo", true, &["a"])])]);

        assert!(matches!(result, Err(SchemaError::UnknownExtensionTarget(name)) if name == "Foo"));
    }

    #[test]
    fn duplicate_field_in_fragment_is_fatal() {
        let result = ExecutableSchema::build(vec![document(vec![object("Foo", false, &["a", "a"])])]);

        assert!(matches!(result, Err(SchemaError::DuplicateField { field, .. }) if field == "a"));
    }

    #[test]
    fn unknown_root_is_fatal() {
        let mut doc = document(vec![object("Foo", false, &["a"])]);
        doc.schema = Some(SchemaDefinition {
            query: Some("Missing".into()),
            mutation: None,
            subscription: None,
        });

        let result = ExecutableSchema::build(vec![doc]);

        assert!(matches!(result, Err(SchemaError::UnknownRootType { name, .. }) if name == "Missing"));
    }

    #[test]
    fn conflicting_roots_are_fatal() {
        let mut first = document(vec![object("A", false, &["a"]), object("B", false, &["b"])]);
        first.schema = Some(SchemaDefinition {
            query: Some("A".into()),
            mutation: None,
            subscription: None,
        });
        let mut second = document(vec![]);
        second.schema = Some(SchemaDefinition {
            query: Some("B".into()),
            mutation: None,
            subscription: None,
        });

        let result = ExecutableSchema::build(vec![first, second]);

        assert!(matches!(result, Err(SchemaError::ConflictingRootType { .. })));
    }
}
