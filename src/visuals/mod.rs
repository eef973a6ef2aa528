use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::form::spec::{OPTIONS, OptionKind};

/// Print the option reference table: every form option, its flag, and how it
/// is emitted.
pub fn print_option_table() {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Option").add_attribute(Attribute::Bold),
            Cell::new("Flag").add_attribute(Attribute::Bold),
            Cell::new("Kind").add_attribute(Attribute::Bold),
        ]);

    for spec in OPTIONS {
        let kind = match spec.kind {
            OptionKind::Positional => "positional",
            OptionKind::Flag => "boolean",
            OptionKind::Valued => "valued",
        };
        let flag = if spec.flag.is_empty() { "-" } else { spec.flag };
        table.add_row(vec![spec.name, flag, kind]);
    }

    println!("{table}");
}
