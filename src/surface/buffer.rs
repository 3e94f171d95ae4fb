//! In-memory cell grid
//!
//! Row-major cell array implementing [`TextSurface`]. Holds the
//! composed grapheme, attributes and display width per position, so a
//! rendered screen can be inspected or dumped as text. This is the
//! surface used by the chart renderer and the test suite.

use log::trace;
use smol_str::SmolStr;
use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthStr;

use super::{SurfaceError, TextSurface};
use crate::cell::{CellAttrs, GlyphCell};

/// Static space grapheme for blank cells
static SPACE: SmolStr = SmolStr::new_inline(" ");

/// Data for one stored screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCell {
    /// Grapheme shown at this position (NFC-composed)
    pub grapheme: SmolStr,
    pub attrs: CellAttrs,
    /// Display width: 1=narrow, 2=wide head, 0=wide continuation
    pub width: u8,
}

impl ScreenCell {
    fn blank() -> Self {
        Self {
            grapheme: SPACE.clone(),
            attrs: CellAttrs::empty(),
            width: 1,
        }
    }
}

/// In-memory text surface with a fixed cell grid.
pub struct BufferSurface {
    /// Cell array (row-major)
    cells: Vec<ScreenCell>,
    rows: usize,
    columns: usize,
}

impl BufferSurface {
    /// Blank surface of the given geometry.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![ScreenCell::blank(); rows * columns],
            rows,
            columns,
        }
    }

    /// Reset every position to a blank cell.
    pub fn clear(&mut self) {
        self.cells.fill(ScreenCell::blank());
    }

    /// Stored cell at (row, column), if in bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<&ScreenCell> {
        if row < self.rows && column < self.columns {
            Some(&self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// One row rendered as a string. Wide-head cells contribute their
    /// grapheme; continuation cells are skipped.
    pub fn row_text(&self, row: usize) -> String {
        let mut out = String::with_capacity(self.columns);
        if row >= self.rows {
            return out;
        }
        for column in 0..self.columns {
            let cell = &self.cells[row * self.columns + column];
            if cell.width != 0 {
                out.push_str(&cell.grapheme);
            }
        }
        out
    }

    /// Blank out the head of a wide pair when one half is overwritten,
    /// so no orphaned half remains.
    fn detach_wide_neighbours(&mut self, row: usize, column: usize) {
        let idx = row * self.columns + column;
        if self.cells[idx].width == 0 && column > 0 {
            let head = idx - 1;
            if self.cells[head].width == 2 {
                self.cells[head] = ScreenCell::blank();
            }
        }
        if self.cells[idx].width == 2 && column + 1 < self.columns {
            let cont = idx + 1;
            if self.cells[cont].width == 0 {
                self.cells[cont] = ScreenCell::blank();
            }
        }
    }
}

impl TextSurface for BufferSurface {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn put_cell(
        &mut self,
        row: usize,
        column: usize,
        cell: &GlyphCell,
    ) -> Result<(), SurfaceError> {
        if row >= self.rows || column >= self.columns {
            return Err(SurfaceError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }

        // Compose combining sequences before measuring, so a base
        // character plus marks occupies one narrow cell.
        let grapheme: String = cell.codepoints().iter().copied().nfc().collect();
        let mut width = UnicodeWidthStr::width(grapheme.as_str()).clamp(1, 2) as u8;
        if width == 2 && column + 1 >= self.columns {
            // Wide glyph at the last column cannot spill over.
            width = 1;
        }
        trace!("put ({}, {}) {:?} width {}", row, column, grapheme, width);

        self.detach_wide_neighbours(row, column);
        let idx = row * self.columns + column;
        self.cells[idx] = ScreenCell {
            grapheme: SmolStr::new(&grapheme),
            attrs: cell.attrs(),
            width,
        };
        if width == 2 {
            self.detach_wide_neighbours(row, column + 1);
            self.cells[idx + 1] = ScreenCell {
                grapheme: SmolStr::default(),
                attrs: cell.attrs(),
                width: 0,
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_out_of_bounds() {
        let mut surface = BufferSurface::new(2, 4);
        let cell = GlyphCell::new('A');
        assert_eq!(
            surface.put_cell(2, 0, &cell),
            Err(SurfaceError::OutOfBounds {
                row: 2,
                column: 0,
                rows: 2,
                columns: 4,
            })
        );
        assert_eq!(
            surface.put_cell(0, 4, &cell),
            Err(SurfaceError::OutOfBounds {
                row: 0,
                column: 4,
                rows: 2,
                columns: 4,
            })
        );
        assert!(surface.put_cell(1, 3, &cell).is_ok());
    }

    #[test]
    fn stores_and_reads_back() {
        let mut surface = BufferSurface::new(1, 4);
        surface.put_cell(0, 0, &GlyphCell::new('H')).unwrap();
        surface.put_cell(0, 1, &GlyphCell::new('i')).unwrap();
        assert_eq!(surface.row_text(0), "Hi  ");
        assert_eq!(surface.cell(0, 0).unwrap().grapheme, "H");
        assert!(surface.cell(5, 0).is_none());
    }

    #[test]
    fn combining_marks_compose_to_one_cell() {
        let mut surface = BufferSurface::new(1, 2);
        let cell =
            GlyphCell::from_codepoints(CellAttrs::empty(), &['e', '\u{0301}']).unwrap();
        surface.put_cell(0, 0, &cell).unwrap();
        let stored = surface.cell(0, 0).unwrap();
        assert_eq!(stored.grapheme, "\u{00E9}"); // precomposed é
        assert_eq!(stored.width, 1);
    }

    #[test]
    fn wide_glyph_occupies_two_cells() {
        let mut surface = BufferSurface::new(1, 4);
        surface.put_cell(0, 0, &GlyphCell::new('日')).unwrap();
        assert_eq!(surface.cell(0, 0).unwrap().width, 2);
        assert_eq!(surface.cell(0, 1).unwrap().width, 0);
        assert_eq!(surface.row_text(0), "日  ");

        // Overwriting the continuation blanks the orphaned head.
        surface.put_cell(0, 1, &GlyphCell::new('x')).unwrap();
        assert_eq!(surface.cell(0, 0).unwrap().grapheme, " ");
        assert_eq!(surface.row_text(0), " x  ");
    }

    #[test]
    fn wide_glyph_clipped_at_last_column() {
        let mut surface = BufferSurface::new(1, 2);
        surface.put_cell(0, 1, &GlyphCell::new('日')).unwrap();
        assert_eq!(surface.cell(0, 1).unwrap().width, 1);
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut surface = BufferSurface::new(2, 2);
        surface.put_cell(1, 1, &GlyphCell::new('Z')).unwrap();
        surface.clear();
        assert_eq!(surface.row_text(1), "  ");
    }
}
