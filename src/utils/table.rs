//! Table rendering utilities for CLI outputs.
//!
//! Cell padding uses display width rather than char count so that Bengali
//! labels align with ASCII headers.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn pad_cell(cell: &str, width: usize) -> String {
        let w = UnicodeWidthStr::width(cell);
        let fill = width.saturating_sub(w);
        format!("{}{} ", cell, " ".repeat(fill))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::pad_cell(&col.header, col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&Self::pad_cell(&row[i], col.width));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let mut t = Table::new(vec![
            Column {
                header: "DAY".into(),
                width: 5,
            },
            Column {
                header: "SEHRI".into(),
                width: 7,
            },
        ]);
        t.add_row(vec!["1".into(), "05:06".into()]);
        let out = t.render();
        assert!(out.starts_with("DAY   SEHRI"));
        assert!(out.contains("1     05:06"));
    }
}
