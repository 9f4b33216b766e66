use std::io::{self, Write};

/// Field separator of the output table
pub const DELIMITER: char = ';';

/// Rows end the way spreadsheet tools expect
const LINE_END: &str = "\r\n";

/// Written once at the start of a new file so spreadsheet tools pick UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row, quoting only fields that need it.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        let cell = cell.as_ref();
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    write!(w, "{}", LINE_END)
}
