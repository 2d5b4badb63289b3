// src/csv.rs
use std::fmt::Display;
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer. Cells are rendered with `Display`.
pub fn write_row<W: Write, C: Display>(mut w: W, row: &[C], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        let text = cell.to_string();
        if needs_quotes(&text, sep) {
            write!(w, "\"{}\"", text.replace('"', "\"\""))?;
        } else {
            w.write_all(text.as_bytes())?;
        }
    }
    writeln!(w)
}

/* ---------------- Reading back ---------------- */

/// Split written output back into rows (quotes + CRLF tolerant). Used to check
/// exported tables; blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = s!();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => quoted = !quoted,
            c if c == sep && !quoted => row.push(take(&mut field)),
            '\r' | '\n' if !quoted => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut field));
                if row.len() > 1 || !row[0].is_empty() {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Value;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        let row = [Value::Int(699), Value::Null, Value::Text(s!("Gol, de cabeça")), Value::Float(58.3)];
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "699,,\"Gol, de cabeça\",58.3\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &["Gol, de cabeça", "diz \"olá\""], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Gol, de cabeça\t\"diz \"\"olá\"\"\"\n");
    }

    #[test]
    fn reads_back_what_it_writes() {
        let text = "a,b\r\n\"x, y\",\"q\"\"q\"\n\n1,\n";
        assert_eq!(
            parse_rows(text, ','),
            vec![vec!["a", "b"], vec!["x, y", "q\"q"], vec!["1", ""]]
        );
    }
}
