pub mod message_tmpl;
pub mod proto_tmpl;
pub mod service_tmpl;

use genco::tokens::static_literal;
use genco::Tokens;

/// `<keyword> <name> {` followed by one indented line per entry.
pub fn render_block(keyword: &str, name: &str, lines: Vec<String>) -> Tokens {
    let mut tokens = Tokens::new();
    tokens.append(format!("{keyword} {name} {{"));

    tokens.indent();
    for line in lines {
        tokens.append(line);
        tokens.push();
    }
    tokens.unindent();
    tokens.append(static_literal("}"));

    tokens
}
