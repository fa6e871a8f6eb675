use genco::Tokens;

use crate::registry::{Def, FieldDef};

use super::render_block;

pub fn render_message(def: &Def) -> Tokens {
    let fields = numbered_fields(def)
        .into_iter()
        .map(|(number, field)| format!("{} {} = {};", field.wire_type, field.r#ref, number))
        .collect::<Vec<_>>();

    render_block("message", &def.name, fields)
}

/// Field numbers are 1-based positions in the sorted field list.
// TODO: persist assigned numbers between runs so adding a field does not
// renumber the ones sorted after it.
pub fn numbered_fields(def: &Def) -> Vec<(usize, &FieldDef)> {
    def.sorted_fields()
        .into_iter()
        .enumerate()
        .map(|(index, field)| (index + 1, field))
        .collect()
}
