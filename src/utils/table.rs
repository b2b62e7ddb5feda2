//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
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

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let cell = |s: &str, i: usize| match self.columns[i].align {
            Align::Left => pad_right(s, widths[i]),
            Align::Right => pad_left(s, widths[i]),
        };

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| cell(&c.header, i))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let line: Vec<String> = (0..self.columns.len())
                .map(|i| cell(row.get(i).map(String::as_str).unwrap_or(""), i))
                .collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}
