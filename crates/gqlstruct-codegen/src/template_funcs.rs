use convert_case::{Case, Casing};

/// Emitted identifier for a type or field. An explicit name always wins;
/// otherwise private names are lower camel and public names camel case.
pub fn object_name(name: &str, explicit_name: &str, private: bool) -> String {
    let ident = if !explicit_name.is_empty() {
        explicit_name.to_string()
    } else if private {
        name.to_case(Case::Camel)
    } else {
        name.to_case(Case::Pascal)
    };

    escape_keyword(ident)
}

/// RPC method name derived from a field name, `read_foo` becomes `ReadFoo`.
pub fn method_name(field_name: &str) -> String {
    field_name.to_case(Case::Pascal)
}

/// Renders tags as one line of space separated attributes, or nothing when
/// there are no tags.
pub fn serialize_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }

    Some(
        tags.iter()
            .map(|tag| format!("#[{tag}]"))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn escape_keyword(ident: String) -> String {
    match ident.as_str() {
        // Not usable as raw identifiers.
        "self" | "Self" | "super" | "crate" => format!("{ident}_"),
        "as" | "break" | "const" | "continue" | "else" | "enum" | "extern" | "false" | "fn"
        | "for" | "if" | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut"
        | "pub" | "ref" | "return" | "static" | "struct" | "trait" | "true" | "type"
        | "unsafe" | "use" | "where" | "while" | "async" | "await" | "dyn" | "abstract"
        | "become" | "box" | "do" | "final" | "macro" | "override" | "priv" | "typeof"
        | "unsized" | "virtual" | "yield" | "try" => format!("r#{ident}"),
        _ => ident,
    }
}
