//! Code page 437 glyph table
//!
//! Fixed mapping from the 256 byte values of the PC code page to
//! pre-built display cells. The table is a compile-time constant:
//! lookup is total over the 8-bit domain, O(1), allocation-free and
//! safe for concurrent readers.

use crate::cell::GlyphCell;

/// Unicode codepoint for each code page 437 byte value.
///
/// 0x00 renders as a blank cell, matching what text-mode hardware
/// displays for NUL. 0x20-0x7E are the ASCII-transparent region.
const CP437_TO_UNICODE: [char; 256] = [
    // 0x00: control-range graphics
    ' ', '☺', '☻', '♥', '♦', '♣', '♠', '•',
    '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼',
    // 0x10
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨',
    '↑', '↓', '→', '←', '∟', '↔', '▲', '▼',
    // 0x20: printable ASCII
    ' ', '!', '"', '#', '$', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/',
    // 0x30
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', ':', ';', '<', '=', '>', '?',
    // 0x40
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    // 0x50
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    // 0x60
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    // 0x70
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', '{', '|', '}', '~', '⌂',
    // 0x80: accented latin
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç',
    'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù',
    'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º',
    '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0: shades and box drawing
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖',
    '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟',
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫',
    '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0: greek and maths
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ',
    'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈',
    '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Pre-built display cells for every byte value (compile-time
/// generated). Trades 256 records of memory for an exact, auditable
/// mapping with no lookup-time conditional logic.
const fn build_cells() -> [GlyphCell; 256] {
    let mut cells = [GlyphCell::new(' '); 256];
    let mut i = 0;
    while i < 256 {
        cells[i] = GlyphCell::new(CP437_TO_UNICODE[i]);
        i += 1;
    }
    cells
}

static CP437_CELLS: [GlyphCell; 256] = build_cells();

/// Resolve one code page 437 byte to its display cell.
///
/// Total over [0, 255]: every byte has an entry with at least one
/// codepoint, so lookup cannot fail. The returned reference is shared
/// and immutable.
#[inline]
pub fn glyph(ch: u8) -> &'static GlyphCell {
    &CP437_CELLS[ch as usize]
}
