//! Text-mode surface contract
//!
//! A surface is an addressable grid of display cells, the "place wide
//! character cell at (row, column)" primitive the console renders
//! through. Real backends (curses, GPU) live outside this crate; the
//! in-memory [`BufferSurface`] serves tests and offline rendering.

pub mod buffer;

pub use buffer::BufferSurface;

use thiserror::Error;

use crate::cell::GlyphCell;

/// Placement failure reported by a surface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// Coordinate outside the addressable cell grid
    #[error("cell ({row}, {column}) outside {rows}x{columns} surface")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// An addressable grid of display cells.
///
/// Implementations validate coordinates and report failures; callers
/// above this seam pass the status through unchanged.
pub trait TextSurface {
    /// Number of addressable rows.
    fn rows(&self) -> usize;

    /// Number of addressable columns.
    fn columns(&self) -> usize;

    /// Place one cell at (row, column), overwriting whatever was there.
    fn put_cell(&mut self, row: usize, column: usize, cell: &GlyphCell)
        -> Result<(), SurfaceError>;
}
