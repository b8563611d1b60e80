//! Table types.

use super::Node;
use serde::{Deserialize, Serialize};

/// A table cell: the inline nodes it contains.
pub type TableCell = Vec<Node>;

/// A table structure.
///
/// Rows may have differing lengths; nothing here assumes a rectangular grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableNode {
    /// Header row cells
    pub header: Vec<TableCell>,

    /// Body rows, in order
    #[serde(default)]
    pub cells: Vec<Vec<TableCell>>,
}

impl TableNode {
    /// Create a table from a header row and body rows.
    pub fn new(header: Vec<TableCell>, cells: Vec<Vec<TableCell>>) -> Self {
        Self { header, cells }
    }

    /// Create a table from text values.
    pub fn from_strings<S: Into<String>>(
        header: impl IntoIterator<Item = S>,
        rows: impl IntoIterator<Item = Vec<S>>,
    ) -> Self {
        Self {
            header: header.into_iter().map(text_cell).collect(),
            cells: rows
                .into_iter()
                .map(|row| row.into_iter().map(text_cell).collect())
                .collect(),
        }
    }

    /// Get the number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.cells.len() + 1
    }

    /// Get the number of columns of a 1-based row (row 1 is the header).
    pub fn column_count(&self, row: usize) -> usize {
        match row {
            0 => 0,
            1 => self.header.len(),
            n => self.cells.get(n - 2).map(Vec::len).unwrap_or(0),
        }
    }

    /// Check if the table has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.cells.iter().all(Vec::is_empty)
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.cells.iter())
            .map(|row| {
                row.iter()
                    .map(|cell| cell.iter().map(Node::plain_text).collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn text_cell(value: impl Into<String>) -> TableCell {
    vec![Node::text(value.into())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = TableNode::default();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(1), 0);
    }

    #[test]
    fn test_table_with_data() {
        let table = TableNode::from_strings(
            ["Name", "Age"],
            [vec!["Alice", "30"], vec!["Bob", "25", "extra"]],
        );

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(1), 2);
        assert_eq!(table.column_count(2), 2);
        assert_eq!(table.column_count(3), 3);
        assert_eq!(table.column_count(4), 0);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_plain_text() {
        let table = TableNode::from_strings(["A", "B"], [vec!["1", "2"]]);
        assert_eq!(table.plain_text(), "A\tB\n1\t2");
    }
}
