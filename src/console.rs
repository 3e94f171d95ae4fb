//! Console rendering pass-through
//!
//! Joins the code page table to a text surface: resolve a byte from
//! emulated display memory, hand the pre-built cell to the surface's
//! placement primitive, return the surface's status unchanged. No
//! bounds checking happens at this layer; the surface owns its
//! coordinate space.

use log::trace;

use crate::cell::CellAttrs;
use crate::codepage;
use crate::mode::TextMode;
use crate::surface::{SurfaceError, TextSurface};

/// Text-mode console writer over a surface.
pub struct Console<S: TextSurface> {
    surface: S,
}

impl<S: TextSurface> Console<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Write the display cell for one code page 437 byte at
    /// (row, column). The surface's status is returned verbatim.
    #[inline]
    pub fn write_char_at(
        &mut self,
        row: usize,
        column: usize,
        ch: u8,
    ) -> Result<(), SurfaceError> {
        self.surface.put_cell(row, column, codepage::glyph(ch))
    }

    /// Write a character with attributes decoded from the PC text-mode
    /// attribute byte.
    pub fn write_char_with_attribute(
        &mut self,
        row: usize,
        column: usize,
        ch: u8,
        attribute: u8,
    ) -> Result<(), SurfaceError> {
        let cell = codepage::glyph(ch).with_attrs(CellAttrs::from_mda(attribute));
        self.surface.put_cell(row, column, &cell)
    }

    /// Sweep every position of a text mode, pulling changed
    /// character/attribute pairs from emulated video memory.
    ///
    /// `source` returns `Some((character, attribute))` for a position
    /// that needs redrawing, `None` for one that is unchanged. Stops at
    /// the first surface failure and reports it unchanged.
    pub fn rasterize_text_memory<F>(
        &mut self,
        mode: &TextMode,
        mut source: F,
    ) -> Result<(), SurfaceError>
    where
        F: FnMut(usize, usize) -> Option<(u8, u8)>,
    {
        trace!(
            "rasterize {}x{} text mode {:#04x}",
            mode.text_columns,
            mode.text_rows,
            mode.mode
        );
        for row in 0..mode.text_rows {
            for column in 0..mode.text_columns {
                if let Some((ch, attribute)) = source(row, column) {
                    self.write_char_with_attribute(row, column, ch, attribute)?;
                }
            }
        }
        Ok(())
    }
}
