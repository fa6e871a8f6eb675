use gqlstruct_core::schema::ArgumentBag;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const STRUCT_DIRECTIVE_NAME: &str = "struct";

/// Type definition that has to be registered with the schema so `@struct`
/// validates. Argument names and defaults must match [`StructArgs`].
pub const STRUCT_DIRECTIVE_TYPEDEF: &str = r#"directive @struct(
  private: Boolean = false
  omit: Boolean = false
  name: String
  service: String
  type: String
  prototype: String
  tags: [String!]
) on FIELD_DEFINITION | OBJECT"#;

#[derive(Error, Debug, PartialEq)]
pub enum AnnotationError {
    #[error("argument `{argument}` expects {expected}, got {found}")]
    UnexpectedValue {
        argument: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("argument `tags` contains a null item at position {0}")]
    NullTag(usize),
}

/// Decoded `@struct` arguments, used for both type and field annotations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StructArgs {
    pub private: bool,
    pub omit: bool,
    pub name: String,
    pub service: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub prototype: String,
    pub tags: Vec<String>,
}

impl StructArgs {
    pub fn decode(args: &ArgumentBag) -> Result<Self, AnnotationError> {
        Ok(Self {
            private: bool_arg(args, "private")?,
            omit: bool_arg(args, "omit")?,
            name: string_arg(args, "name")?,
            service: string_arg(args, "service")?,
            type_: string_arg(args, "type")?,
            prototype: string_arg(args, "prototype")?,
            tags: string_list_arg(args, "tags")?,
        })
    }

    /// Decodes the first `@struct` directive in `directives`, or the defaults
    /// when there is none.
    pub fn from_directives(
        directives: &[gqlstruct_core::schema::Directive],
    ) -> Result<Self, AnnotationError> {
        match directives.iter().find(|d| d.name == STRUCT_DIRECTIVE_NAME) {
            Some(directive) => Self::decode(&directive.arguments),
            None => Ok(Self::default()),
        }
    }
}

fn bool_arg(args: &ArgumentBag, argument: &'static str) -> Result<bool, AnnotationError> {
    match args.get(argument) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(other) => Err(unexpected(argument, "a boolean", other)),
    }
}

fn string_arg(args: &ArgumentBag, argument: &'static str) -> Result<String, AnnotationError> {
    match args.get(argument) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(unexpected(argument, "a string", other)),
    }
}

// A single string is accepted for a list, as GraphQL input coercion does.
fn string_list_arg(
    args: &ArgumentBag,
    argument: &'static str,
) -> Result<Vec<String>, AnnotationError> {
    match args.get(argument) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(value)) => Ok(vec![value.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(position, item)| match item {
                Value::String(value) => Ok(value.clone()),
                Value::Null => Err(AnnotationError::NullTag(position)),
                other => Err(unexpected(argument, "a list of strings", other)),
            })
            .collect(),
        Some(other) => Err(unexpected(argument, "a list of strings", other)),
    }
}

fn unexpected(argument: &'static str, expected: &'static str, found: &Value) -> AnnotationError {
    AnnotationError::UnexpectedValue {
        argument,
        expected,
        found: found.to_string(),
    }
}

#[cfg(test)]
mod test {
    use gqlstruct_core::schema::{ArgumentBag, Directive};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{AnnotationError, StructArgs};

    fn bag(value: serde_json::Value) -> ArgumentBag {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_bag_decodes_to_defaults() {
        let output = StructArgs::decode(&ArgumentBag::new()).unwrap();

        assert_eq!(output, StructArgs::default());
        assert_eq!(output.private, false);
        assert_eq!(output.tags.is_empty(), true);
    }

    #[test]
    fn decodes_every_argument() {
        let input = bag(json!({
            "private": true,
            "omit": true,
            "name": "abcDescription",
            "service": "Foo",
            "type": "chrono::DateTime<chrono::Utc>",
            "prototype": "google.protobuf.Timestamp",
            "tags": ["serde(default)", "doc(hidden)"],
        }));

        let output = StructArgs::decode(&input).unwrap();

        assert_eq!(
            output,
            StructArgs {
                private: true,
                omit: true,
                name: "abcDescription".into(),
                service: "Foo".into(),
                type_: "chrono::DateTime<chrono::Utc>".into(),
                prototype: "google.protobuf.Timestamp".into(),
                tags: vec!["serde(default)".into(), "doc(hidden)".into()],
            }
        );
    }

    #[test]
    fn nulls_take_defaults() {
        let input = bag(json!({ "private": null, "name": null, "tags": null }));

        let output = StructArgs::decode(&input).unwrap();

        assert_eq!(output, StructArgs::default());
    }

    #[test]
    fn single_tag_is_coerced_to_list() {
        let output = StructArgs::decode(&bag(json!({ "tags": "serde(default)" }))).unwrap();

        assert_eq!(output.tags, vec!["serde(default)".to_string()]);
    }

    #[test]
    fn wrong_kind_is_an_error() {
        let output = StructArgs::decode(&bag(json!({ "private": "yes" })));

        assert_eq!(
            output,
            Err(AnnotationError::UnexpectedValue {
                argument: "private",
                expected: "a boolean",
                found: "\"yes\"".into(),
            })
        );
    }

    #[test]
    fn null_tag_is_an_error() {
        let output = StructArgs::decode(&bag(json!({ "tags": ["a", null] })));

        assert_eq!(output, Err(AnnotationError::NullTag(1)));
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let output = StructArgs::decode(&bag(json!({ "color": "blue" }))).unwrap();

        assert_eq!(output, StructArgs::default());
    }

    #[test]
    fn picks_the_struct_directive() {
        let directives = vec![
            Directive {
                name: "deprecated".into(),
                arguments: bag(json!({ "reason": "old" })),
            },
            Directive {
                name: "struct".into(),
                arguments: bag(json!({ "omit": true })),
            },
        ];

        let output = StructArgs::from_directives(&directives).unwrap();

        assert_eq!(output.omit, true);
        assert_eq!(StructArgs::from_directives(&[]).unwrap(), StructArgs::default());
    }
}
