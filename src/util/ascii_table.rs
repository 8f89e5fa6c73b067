use std::borrow::Cow;

/// An ascii table
#[derive(Debug)]
pub struct AsciiTable<'a> {
    data: Vec<Vec<Cow<'a, str>>>,

    max_cell_widths: Vec<usize>,

    padding: usize,
}

impl<'a> AsciiTable<'a> {
    /// Make a new table
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![vec![Cow::Borrowed(""); width]; height],
            max_cell_widths: vec![0; width],
            padding: 0,
        }
    }

    /// Set the number of spaces always placed on both sides of a cell.
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    /// Set the value of the given cell.
    ///
    /// Indexing starts at 0. It starts at the top left corner and ends at the bottom right.
    pub fn set_cell(&mut self, x: usize, y: usize, data: impl Into<Cow<'a, str>>) {
        let data = data.into();
        self.max_cell_widths[x] = std::cmp::max(self.max_cell_widths[x], data.len());
        self.data[y][x] = data;
    }

    fn fmt_row_border(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+")?;
        for max_cell_width in self.max_cell_widths.iter() {
            for _ in 0..(max_cell_width + self.padding * 2) {
                write!(f, "-")?;
            }
            write!(f, "+")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl std::fmt::Display for AsciiTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.data.iter() {
            self.fmt_row_border(f)?;

            for (cell, max_cell_width) in row.iter().zip(self.max_cell_widths.iter()) {
                let padding = max_cell_width.saturating_sub(cell.len());

                write!(f, "|")?;

                for _ in 0..(self.padding + padding / 2) {
                    write!(f, " ")?;
                }

                write!(f, "{cell}")?;

                for _ in 0..(self.padding + (padding / 2) + padding % 2) {
                    write!(f, " ")?;
                }
            }
            writeln!(f, "|")?;
        }
        self.fmt_row_border(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render() {
        let mut table = AsciiTable::new(2, 2);
        table.set_padding(1);
        table.set_cell(0, 0, "Wins");
        table.set_cell(1, 0, "X");
        table.set_cell(0, 1, 3.to_string());
        table.set_cell(1, 1, "10");

        let expected = "\
+------+----+
| Wins | X  |
+------+----+
|  3   | 10 |
+------+----+
";
        assert_eq!(table.to_string(), expected);
    }
}
