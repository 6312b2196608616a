//! Bordered ASCII tables.

use super::terminal::{center_field, display_width};
use std::fmt;

/// A table drawn with `+---+` rules and `|` separated, centred cells.
///
/// ```
/// use aws_vpc_summary::output::AsciiTable;
/// let mut table = AsciiTable::new(["ID", "Name"]);
/// table.add_row(["sg-1", "web"]);
/// assert_eq!(
///     table.to_string(),
///     "+------+------+\n\
///      |  ID  | Name |\n\
///      +------+------+\n\
///      | sg-1 | web  |\n\
///      +------+------+"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AsciiTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    pub fn new<I, S>(headers: I) -> AsciiTable
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AsciiTable {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render blank, extra cells are dropped.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[i]))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    write!(f, "+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    Ok(())
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, width) in cells.iter().zip(widths) {
        write!(f, " {} |", center_field(cell, *width))?;
    }
    Ok(())
}

impl fmt::Display for AsciiTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_rule(f, &widths)?;
        writeln!(f)?;
        write_cells(f, &self.headers, &widths)?;
        writeln!(f)?;
        write_rule(f, &widths)?;
        for row in &self.rows {
            writeln!(f)?;
            write_cells(f, row, &widths)?;
        }
        if !self.rows.is_empty() {
            writeln!(f)?;
            write_rule(f, &widths)?;
        }
        Ok(())
    }
}
