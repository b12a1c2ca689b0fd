//! Table rendering
//!
//! The first row is always the header; the rest is body. Header detection is
//! positional and ignores any separator marker the parser recorded.

use super::RenderPass;
use crate::input::{Block, TableRow};
use crate::output::RenderSink;

const TABLE_TAG: &str = "table";
const HEAD_TAG: &str = "thead";
const BODY_TAG: &str = "tbody";
const ROW_TAG: &str = "tr";
const HEADER_CELL_TAG: &str = "th";
const BODY_CELL_TAG: &str = "td";

impl<S: RenderSink + ?Sized> RenderPass<'_, S> {
    pub(crate) fn render_table(&mut self, rows: &[TableRow]) {
        let Some((header, body)) = rows.split_first() else {
            return;
        };

        let options = self.options;
        self.open_element(TABLE_TAG);
        self.attribute("class", &options.table_class);

        self.open_element(HEAD_TAG);
        self.render_row(header, HEADER_CELL_TAG);
        self.sink.close_node();

        self.open_element(BODY_TAG);
        for row in body {
            self.render_row(row, BODY_CELL_TAG);
        }
        self.sink.close_node();

        self.sink.close_node();
    }

    /// Only the first block of a cell is considered, and only when it is a paragraph.
    fn render_row(&mut self, row: &TableRow, cell_tag: &str) {
        let options = self.options;
        self.open_element(ROW_TAG);
        self.attribute("class", &options.row_class);
        self.attribute("style", &options.row_style);

        for cell in &row.cells {
            self.open_element(cell_tag);
            match cell.blocks.first() {
                Some(Block::Paragraph(Some(inlines))) => self.render_inlines(inlines),
                Some(Block::Paragraph(None)) | None => {}
                Some(other) => {
                    tracing::trace!(kind = other.kind(), "skipping non-paragraph table cell");
                }
            }
            self.sink.close_node();
        }

        self.sink.close_node();
    }
}
