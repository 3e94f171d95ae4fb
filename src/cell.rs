//! Display cell attributes and the wide-character cell record.
//!
//! A `GlyphCell` is the unit a text-mode surface consumes: rendering
//! attributes plus the Unicode representation of one glyph, at most
//! [`GLYPH_CODEPOINTS`] codepoints with an explicit used length.

use bitflags::bitflags;
use smol_str::SmolStr;

bitflags! {
    /// Cell rendering attributes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellAttrs: u16 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const UNDERLINE = 0b0000_0100;
        const BLINK     = 0b0000_1000;
        const INVERSE   = 0b0001_0000;
        const HIDDEN    = 0b0010_0000;
    }
}

impl CellAttrs {
    /// Decode a PC text-mode attribute byte (MDA interpretation).
    ///
    /// Bit 3 selects intensity, bit 7 blink. Of the remaining bits the
    /// MDA recognises four patterns: 0x00 invisible, 0x01 underline,
    /// 0x70 reverse video, everything else normal.
    pub const fn from_mda(attribute: u8) -> Self {
        let mut bits = 0u16;
        if attribute & 0x08 != 0 {
            bits |= Self::BOLD.bits();
        }
        if attribute & 0x80 != 0 {
            bits |= Self::BLINK.bits();
        }
        let base = attribute & 0x77;
        if base == 0x00 {
            bits |= Self::HIDDEN.bits();
        } else if base == 0x70 {
            bits |= Self::INVERSE.bits();
        } else if base & 0x07 == 0x01 {
            bits |= Self::UNDERLINE.bits();
        }
        Self::from_bits_retain(bits)
    }
}

/// Maximum codepoints per display cell (base character plus combining
/// marks).
pub const GLYPH_CODEPOINTS: usize = 5;

/// One text-mode display cell: attributes plus the Unicode rendering of
/// a single-byte source character.
///
/// The codepoint sequence has a fixed capacity and an explicit length;
/// a cell always holds at least one codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    attrs: CellAttrs,
    chars: [char; GLYPH_CODEPOINTS],
    len: u8,
}

impl GlyphCell {
    /// Cell for a single codepoint with default attributes.
    pub const fn new(ch: char) -> Self {
        Self {
            attrs: CellAttrs::empty(),
            chars: [ch, '\0', '\0', '\0', '\0'],
            len: 1,
        }
    }

    /// Cell for a codepoint sequence (base character first, combining
    /// marks after). Returns `None` for an empty sequence or one longer
    /// than [`GLYPH_CODEPOINTS`].
    pub fn from_codepoints(attrs: CellAttrs, codepoints: &[char]) -> Option<Self> {
        if codepoints.is_empty() || codepoints.len() > GLYPH_CODEPOINTS {
            return None;
        }
        let mut chars = ['\0'; GLYPH_CODEPOINTS];
        chars[..codepoints.len()].copy_from_slice(codepoints);
        Some(Self {
            attrs,
            chars,
            len: codepoints.len() as u8,
        })
    }

    /// Same cell content with different attributes.
    pub const fn with_attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub const fn attrs(&self) -> CellAttrs {
        self.attrs
    }

    /// The used codepoints, base character first.
    pub fn codepoints(&self) -> &[char] {
        &self.chars[..self.len as usize]
    }

    /// The base character.
    pub fn base(&self) -> char {
        self.chars[0]
    }

    /// Codepoints joined into one grapheme string.
    ///
    /// At most 5 chars of 4 UTF-8 bytes each, so this always fits
    /// SmolStr inline storage.
    pub fn grapheme(&self) -> SmolStr {
        self.codepoints().iter().copied().collect()
    }
}
