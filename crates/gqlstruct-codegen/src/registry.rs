use std::collections::BTreeMap;

use gqlstruct_core::schema::RootTypes;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::annotation::StructArgs;
use crate::template_funcs::object_name;

/// Everything resolved during one compile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub services: BTreeMap<String, Service>,
    pub structs: BTreeMap<String, Def>,
    pub root_query: Option<String>,
    pub root_mutation: Option<String>,
    pub root_subscription: Option<String>,
    #[serde(skip)]
    finalized: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `Def` for `name`, creating it from the type level
    /// annotation when it does not exist yet.
    pub fn get_or_insert_def(&mut self, name: &str, args: &StructArgs) -> &mut Def {
        self.structs
            .entry(name.to_string())
            .or_insert_with(|| Def::new(name, args))
    }

    pub fn get_or_insert_service(&mut self, name: &str) -> &mut Service {
        self.services
            .entry(name.to_string())
            .or_insert_with(|| Service::new(name))
    }

    /// Structs ordered by their schema name.
    pub fn sorted_structs(&self) -> Vec<&Def> {
        self.structs
            .values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    pub fn sorted_services(&self) -> Vec<&Service> {
        self.services
            .values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Marks the root types and appends the serialization tag to every
    /// field. Runs once; later calls leave the registry untouched.
    pub fn finalize(&mut self, roots: &RootTypes) {
        if self.finalized {
            return;
        }

        self.root_query = roots.query.clone();
        self.root_mutation = roots.mutation.clone();
        self.root_subscription = roots.subscription.clone();

        for def in self.structs.values_mut() {
            def.is_root = roots.contains(&def.name);

            for (key, field) in def.fields.iter_mut() {
                field.tags.push(serialization_tag(key));
            }
        }

        self.finalized = true;
    }
}

/// Tag keeping the emitted identifier tied to the schema field name.
pub fn serialization_tag(key: &str) -> String {
    format!("serde(rename = \"{key}\")")
}

/// A resolved record type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Def {
    pub name: String,
    pub fields: BTreeMap<String, FieldDef>,
    pub private: bool,
    pub explicit_name: String,
    pub is_root: bool,
}

impl Def {
    pub fn new(name: &str, args: &StructArgs) -> Self {
        Self {
            name: name.to_string(),
            fields: BTreeMap::new(),
            private: args.private,
            explicit_name: args.name.clone(),
            is_root: false,
        }
    }

    /// The identifier emitted for this type in native code.
    pub fn ident(&self) -> String {
        object_name(&self.name, &self.explicit_name, self.private)
    }

    /// Fields ordered by their stable schema name, never by display name.
    pub fn sorted_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .values()
            .sorted_by(|a, b| a.r#ref.cmp(&b.r#ref))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Original schema field name. Sort key and serialization name.
    pub r#ref: String,
    pub name: String,
    pub gql_type: String,
    pub native_type: String,
    pub wire_type: String,
    pub tags: Vec<String>,
    pub private: bool,
    pub explicit_name: String,
}

impl FieldDef {
    pub fn ident(&self) -> String {
        object_name(&self.name, &self.explicit_name, self.private)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub methods: BTreeMap<String, ServiceMethod>,
}

impl Service {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            methods: BTreeMap::new(),
        }
    }

    /// Inserts or replaces the method with the same name.
    pub fn upsert_method(&mut self, method: ServiceMethod) {
        self.methods.insert(method.name.clone(), method);
    }

    pub fn sorted_methods(&self) -> Vec<&ServiceMethod> {
        self.methods
            .values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceMethod {
    pub name: String,
    /// Request message. Never inferred from field arguments, so it stays
    /// `None` unless filled in after compilation.
    pub request: Option<String>,
    pub response: String,
}
