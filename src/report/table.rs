//! Fixed-width text tables with a bold title box.

use std::fmt::Display;

use colored::Colorize;

const PADDING: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    title: String,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// A table whose first row is `header`.
    pub fn new(title: impl Into<String>, header: &[&str]) -> Self {
        Self {
            title: title.into(),
            rows: vec![header.iter().map(|h| h.to_string()).collect()],
        }
    }

    pub fn push_row<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.rows
            .push(cells.into_iter().map(|c| c.to_string()).collect());
    }

    /// Widest cell in each column plus padding.
    pub fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    + PADDING
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let title_len = self.title.chars().count();
        let divider = format!(
            "+{}+",
            widths
                .iter()
                .map(|&w| "-".repeat(w))
                .collect::<Vec<_>>()
                .join("+")
        );

        let mut out = String::new();
        out.push_str(&format!("+-{}-+\n", "-".repeat(title_len)));
        out.push_str(&format!("| {} |\n", self.title.bold()));
        out.push_str(&divider);
        out.push('\n');
        for (i, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(j, &w)| format!("{:>w$}", row.get(j).map_or("", String::as_str)))
                .collect();
            out.push_str(&format!("|{}|\n", cells.join("|")));
            if i == 0 {
                out.push_str(&divider);
                out.push('\n');
            }
        }
        out.push_str(&divider);
        out.push('\n');
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_layout() {
        let mut table = Table::new("Results", &["Question", "P"]);
        table.push_row(["Comfort".to_string(), 0.5.to_string()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+---------+");
        assert!(lines[1].contains("Results"));
        assert_eq!(lines[2], "+-----------+------+");
        assert_eq!(lines[3], "|   Question|     P|");
        assert_eq!(lines[4], lines[2]);
        assert_eq!(lines[5], "|    Comfort|   0.5|");
        assert_eq!(lines[6], lines[2]);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn widths_follow_widest_cell() {
        let mut table = Table::new("T", &["a", "b"]);
        table.push_row(["longer cell", "x"]);
        assert_eq!(table.column_widths(), vec![14, 4]);
    }
}
