use genco::prelude::rust;
use genco::tokens::static_literal;
use genco::{quote, quote_in};

use crate::config::GeneratorConfig;
use crate::registry::{Def, FieldDef};
use crate::template_funcs::serialize_tags;

pub fn render_struct(def: &Def, config: &GeneratorConfig) -> eyre::Result<rust::Tokens> {
    let serialize = rust::import("serde", "Serialize");
    let deserialize = rust::import("serde", "Deserialize");

    let derives = ["Debug", "Clone", "PartialEq"]
        .into_iter()
        .map(str::to_string)
        .chain(config.extra_derives.iter().cloned())
        .collect::<Vec<_>>()
        .join(", ");

    // Line breaks are explicit, quote! cannot see source layout on stable.
    let mut tokens = rust::Tokens::new();
    quote_in! { tokens =>
        #[derive($serialize, $deserialize, $derives)]$['\r']
        #[allow(non_camel_case_types, non_snake_case)]$['\r']
        $(format!("{}struct {} {{", visibility(def.private), def.ident()))
    }

    tokens.indent();
    for field in def.sorted_fields() {
        tokens.append(render_field(field));
        tokens.push();
    }
    tokens.unindent();
    tokens.append(static_literal("}"));

    Ok(tokens)
}

fn render_field(field: &FieldDef) -> rust::Tokens {
    let tags: Option<rust::Tokens> = serialize_tags(&field.tags).map(|tags| quote!($tags$['\r']));

    quote! {
        $tags
        $(format!(
            "{}{}: {},",
            visibility(field.private),
            field.ident(),
            field.native_type
        ))
    }
}

fn visibility(private: bool) -> &'static str {
    if private {
        ""
    } else {
        "pub "
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use genco::prelude::rust;
    use pretty_assertions::assert_eq;

    use crate::config::GeneratorConfig;
    use crate::registry::{Def, FieldDef};

    use super::render_struct;

    fn field(key: &str, native_type: &str, tags: &[&str]) -> FieldDef {
        FieldDef {
            r#ref: key.to_string(),
            name: key.to_string(),
            gql_type: String::new(),
            native_type: native_type.to_string(),
            wire_type: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            private: false,
            explicit_name: String::new(),
        }
    }

    #[test]
    fn renders_public_struct() {
        let mut fields = BTreeMap::new();
        fields.insert(
            "foo_value".to_string(),
            field("foo_value", "Foo", &["serde(rename = \"foo_value\")"]),
        );
        let def = Def {
            name: "Bar".into(),
            fields,
            private: false,
            explicit_name: String::new(),
            is_root: false,
        };

        let tokens: rust::Tokens = render_struct(&def, &GeneratorConfig::default()).unwrap();
        let output = tokens.to_file_string().unwrap();

        assert_eq!(output.contains("use serde::"), true);
        assert_eq!(output.contains("#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]"), true);
        assert_eq!(output.contains("pub struct Bar {"), true);
        assert_eq!(output.contains("#[serde(rename = \"foo_value\")]"), true);
        assert_eq!(output.contains("pub FooValue: Foo,"), true);
    }

    #[test]
    fn renders_one_item_per_line() {
        let mut fields = BTreeMap::new();
        fields.insert(
            "foo_value".to_string(),
            field("foo_value", "Foo", &["serde(rename = \"foo_value\")"]),
        );
        fields.insert("name".to_string(), field("name", "String", &[]));
        let def = Def {
            name: "Bar".into(),
            fields,
            private: false,
            explicit_name: String::new(),
            is_root: false,
        };

        let output = render_struct(&def, &GeneratorConfig::default())
            .unwrap()
            .to_file_string()
            .unwrap();
        let lines = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("use "))
            .collect::<Vec<_>>();

        assert_eq!(
            lines,
            vec![
                "#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]",
                "#[allow(non_camel_case_types, non_snake_case)]",
                "pub struct Bar {",
                "#[serde(rename = \"foo_value\")]",
                "pub FooValue: Foo,",
                "pub Name: String,",
                "}",
            ]
        );
        assert_eq!(output.contains("    pub Name: String,"), true);
    }

    #[test]
    fn renders_private_struct_with_extra_derives() {
        let mut private_field = field("name", "String", &[]);
        private_field.private = true;
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), private_field);
        let def = Def {
            name: "Foo".into(),
            fields,
            private: true,
            explicit_name: String::new(),
            is_root: false,
        };
        let config = GeneratorConfig {
            extra_derives: vec!["Eq".into()],
            ..Default::default()
        };

        let output = render_struct(&def, &config).unwrap().to_file_string().unwrap();

        assert_eq!(output.contains("PartialEq, Eq)]"), true);
        assert_eq!(output.contains("struct foo {"), true);
        assert_eq!(output.contains("pub struct"), false);
        assert_eq!(output.contains("name: String,"), true);
        assert_eq!(output.contains("#[serde"), false);
    }
}
