//! Bitmap font descriptors and the built-in font registry
//!
//! A [`FontDesc`] publishes identity and metadata for one built-in
//! bitmap font so selection logic can enumerate and rank the available
//! faces. The glyph data itself is an opaque, borrowed byte span; it is
//! rasterised elsewhere.

pub mod vga8x16;

pub use vga8x16::FONT_VGA_8X16;

use log::{debug, warn};
use thiserror::Error;

/// Glyphs per bitmap font (one per code page byte value).
pub const GLYPHS_PER_FONT: usize = 256;

/// Identity and metadata for one selectable bitmap font.
///
/// Immutable registration record: dimensions are fixed for the lifetime
/// of a descriptor and the glyph data is referenced, never owned.
#[derive(Debug, Clone, Copy)]
pub struct FontDesc {
    /// Registry index, unique among the built-in fonts
    pub index: i32,
    /// Human-readable name
    pub name: &'static str,
    /// Glyph cell width in pixels
    pub width: u32,
    /// Glyph cell height in pixels
    pub height: u32,
    /// Raster glyph bitmap, 256 glyphs of `height * bytes-per-row` each
    pub data: &'static [u8],
    /// Selection preference score; higher wins among size-equivalent
    /// candidates
    pub pref: i32,
}

static BUILTIN_FONTS: [&FontDesc; 1] = [&FONT_VGA_8X16];

/// All built-in font descriptors.
pub fn builtin_fonts() -> &'static [&'static FontDesc] {
    &BUILTIN_FONTS
}

/// Look up a built-in font by name (case-insensitive).
pub fn find_font(name: &str) -> Option<&'static FontDesc> {
    builtin_fonts()
        .iter()
        .copied()
        .find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Look up a built-in font by registry index.
pub fn font_by_index(index: i32) -> Option<&'static FontDesc> {
    builtin_fonts().iter().copied().find(|f| f.index == index)
}

/// Choose the best font for the requested glyph cell pixel size.
///
/// An exact size match outranks everything; otherwise candidates are
/// ranked by their preference score. There is always at least one
/// built-in font, so selection cannot fail.
pub fn best_font(width: u32, height: u32) -> &'static FontDesc {
    let mut best = BUILTIN_FONTS[0];
    let mut best_score = i32::MIN;
    for font in builtin_fonts().iter().copied() {
        let mut score = font.pref;
        if font.width == width && font.height == height {
            score += 1000;
        }
        if score > best_score {
            best_score = score;
            best = font;
        }
    }
    if best.width != width || best.height != height {
        warn!(
            "no exact {}x{} font, falling back to {} ({}x{})",
            width, height, best.name, best.width, best.height
        );
    }
    debug!("selected font {} for {}x{} cells", best.name, width, height);
    best
}

/// Descriptor data too short for the advertised geometry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("font {name}: glyph data is {actual} bytes, expected {expected}")]
pub struct TruncatedFontData {
    pub name: &'static str,
    pub expected: usize,
    pub actual: usize,
}

/// Read-only rasterisation view over a descriptor's glyph data.
///
/// Resolves the per-character scanline layout once, so backends can
/// fetch glyph bytes without re-deriving the geometry.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    desc: &'static FontDesc,
    bytes_per_row: usize,
    glyph_size: usize,
}

impl Font {
    /// Bind a descriptor, checking that its data covers all 256 glyphs.
    pub fn new(desc: &'static FontDesc) -> Result<Self, TruncatedFontData> {
        let bytes_per_row = (desc.width as usize + 7) / 8;
        let glyph_size = desc.height as usize * bytes_per_row;
        let expected = GLYPHS_PER_FONT * glyph_size;
        if desc.data.len() < expected {
            return Err(TruncatedFontData {
                name: desc.name,
                expected,
                actual: desc.data.len(),
            });
        }
        Ok(Self {
            desc,
            bytes_per_row,
            glyph_size,
        })
    }

    pub const fn desc(&self) -> &'static FontDesc {
        self.desc
    }

    /// Bytes per glyph scanline.
    pub const fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Bytes per glyph.
    pub const fn glyph_size(&self) -> usize {
        self.glyph_size
    }

    /// Scanline bytes for one character, top row first, MSB is the
    /// leftmost pixel.
    pub fn glyph_data(&self, ch: u8) -> &'static [u8] {
        let offset = ch as usize * self.glyph_size;
        &self.desc.data[offset..offset + self.glyph_size]
    }
}
