//! Built-in VGA-compatible 8x16 bitmap font.
//!
//! 256 glyphs of 16 scanline bytes each, top row first; the most
//! significant bit is the leftmost pixel. Glyph order follows code
//! page 437.

use super::FontDesc;

/// Default text-mode font. Guaranteed available by name and index.
pub static FONT_VGA_8X16: FontDesc = FontDesc {
    index: 1,
    name: "VGA8x16",
    width: 8,
    height: 16,
    data: include_bytes!("vga8x16.bin"),
    pref: 10,
};
