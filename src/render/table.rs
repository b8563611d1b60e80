//! Table renderer and position-aware cell styling.

use crate::element::{CellElement, Element, GridElement, RowElement, TextContent, TextElement};
use crate::model::{TableCell, TableNode};
use crate::style::{StyleList, StyleName, Styles};

use super::{Output, RenderState};

/// Position of a cell in its table. Rows and columns are 1-based and row 1
/// is the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    /// Row number
    pub row: usize,
    /// Column number
    pub column: usize,
    /// Total rows, header included
    pub row_count: usize,
    /// Columns in this cell's row
    pub column_count: usize,
}

impl CellPosition {
    fn is_header(&self) -> bool {
        self.row == 1
    }

    fn is_last_row(&self) -> bool {
        self.row == self.row_count
    }

    fn is_last_column(&self) -> bool {
        self.column == self.column_count
    }
}

/// Accumulate (cell style, content style) fragments for a cell.
///
/// Fragments are appended in order: base, row parity, column parity, then
/// header or last row (header wins), then last column.
pub fn cell_styles(styles: &Styles, pos: CellPosition) -> (StyleList, StyleList) {
    let mut cell = StyleList::named(styles, StyleName::TableCell);
    let mut content = StyleList::named(styles, StyleName::TableCellContent);
    let mut add = |cell_name: StyleName, content_name: StyleName| {
        cell.push_named(styles, cell_name);
        content.push_named(styles, content_name);
    };

    if pos.row % 2 == 0 {
        add(StyleName::TableCellEvenRow, StyleName::TableCellContentEvenRow);
    } else {
        add(StyleName::TableCellOddRow, StyleName::TableCellContentOddRow);
    }

    if pos.column % 2 == 0 {
        add(StyleName::TableCellEvenColumn, StyleName::TableCellContentEvenColumn);
    } else {
        add(StyleName::TableCellOddColumn, StyleName::TableCellContentOddColumn);
    }

    if pos.is_header() {
        add(StyleName::TableHeaderCell, StyleName::TableHeaderCellContent);
    } else if pos.is_last_row() {
        add(StyleName::TableCellLastRow, StyleName::TableCellContentLastRow);
    }

    if pos.is_last_column() {
        add(StyleName::TableCellLastColumn, StyleName::TableCellContentLastColumn);
    }

    (cell, content)
}

pub(crate) fn render_table(node: &TableNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    let row_count = node.row_count();
    let rows = std::iter::once(&node.header)
        .chain(node.cells.iter())
        .enumerate()
        .map(|(index, cells)| {
            let row = index + 1;
            RowElement {
                id: row,
                cells: cells
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| {
                        let pos = CellPosition {
                            row,
                            column: column + 1,
                            row_count,
                            column_count: cells.len(),
                        };
                        render_cell(cell, pos, output, state, styles)
                    })
                    .collect(),
            }
        })
        .collect();

    Element::Grid(GridElement {
        key: state.key,
        style: StyleList::named(styles, StyleName::Table),
        rows,
    })
}

fn render_cell(
    cell: &TableCell,
    pos: CellPosition,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> CellElement {
    let (cell_style, content_style) = cell_styles(styles, pos);
    let content = TextElement::new(
        None,
        content_style,
        TextContent::element(output.output(cell, state)),
    );
    CellElement {
        row_id: pos.row,
        id: pos.column,
        style: cell_style,
        content: Box::new(Element::Text(content)),
    }
}
