/// Raw tabular data with a header row.
///
/// Blank cells are stored as `None`. Rows may be shorter than the header,
/// missing trailing cells are treated as blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: vec![],
        }
    }

    /// Appends a row, turning blank cells into `None`.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = cells
            .into_iter()
            .map(Into::into)
            .map(|cell: String| Some(cell).filter(|c| !c.trim().is_empty()))
            .collect();
        self.rows.push(row);
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(Option::as_deref)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_are_none() {
        let mut t = Table::new(vec!["a".into(), "b".into(), "c".into()]);
        t.push_row(["x", "  ", ""]);
        assert_eq!(Some("x"), t.cell(0, 0));
        assert_eq!(None, t.cell(0, 1));
        assert_eq!(None, t.cell(0, 2));
    }

    #[test]
    fn short_rows_and_out_of_bounds() {
        let mut t = Table::new(vec!["a".into(), "b".into()]);
        t.push_row(["x"]);
        assert_eq!(1, t.len());
        assert_eq!(None, t.cell(0, 1));
        assert_eq!(None, t.cell(1, 0));
    }
}
