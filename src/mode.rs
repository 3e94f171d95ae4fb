//! BIOS text screen modes
//!
//! Geometry for the PC BIOS text modes. Graphics modes are outside
//! this crate's scope; a caller asking for one gets `None` and decides
//! what to do.

/// Color class of a screen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeColor {
    Monochrome,
    GreyScale(u32),
    Color(u32),
}

/// Geometry of one text screen mode.
#[derive(Debug, Clone, Copy)]
pub struct TextMode {
    /// BIOS mode number
    pub mode: u8,
    pub text_rows: usize,
    pub text_columns: usize,
    /// Character cell width in pixels (includes the 9th hardware
    /// column; glyph bitmaps are 8 wide)
    pub cell_width: u32,
    /// Character cell height in pixels
    pub cell_height: u32,
    /// Video memory segment for this mode
    pub vram_segment: u16,
    pub color: ModeColor,
}

impl TextMode {
    /// Look up a BIOS text mode by number. `None` for graphics modes
    /// and unknown numbers.
    pub const fn for_mode(mode: u8) -> Option<Self> {
        let entry = match mode {
            // 40x25 greyscale text (CGA, EGA, MCGA, VGA)
            0x00 => Self {
                mode,
                text_rows: 25,
                text_columns: 40,
                cell_width: 9,
                cell_height: 16,
                vram_segment: 0xB800,
                color: ModeColor::GreyScale(16),
            },
            // 40x25 16 color text (CGA, EGA, MCGA, VGA)
            0x01 => Self {
                mode,
                text_rows: 25,
                text_columns: 40,
                cell_width: 9,
                cell_height: 16,
                vram_segment: 0xB800,
                color: ModeColor::Color(16),
            },
            // 80x25 greyscale text (CGA, EGA, MCGA, VGA)
            0x02 => Self {
                mode,
                text_rows: 25,
                text_columns: 80,
                cell_width: 9,
                cell_height: 16,
                vram_segment: 0xB800,
                color: ModeColor::GreyScale(16),
            },
            // 80x25 16 color text (CGA, EGA, MCGA, VGA)
            0x03 => Self {
                mode,
                text_rows: 25,
                text_columns: 80,
                cell_width: 9,
                cell_height: 16,
                vram_segment: 0xB800,
                color: ModeColor::Color(16),
            },
            // 80x25 monochrome text (MDA, Hercules, EGA, VGA)
            0x07 => Self {
                mode,
                text_rows: 25,
                text_columns: 80,
                cell_width: 9,
                cell_height: 16,
                vram_segment: 0xB000,
                color: ModeColor::Monochrome,
            },
            _ => return None,
        };
        Some(entry)
    }

    pub const fn is_color(&self) -> bool {
        !matches!(self.color, ModeColor::Monochrome)
    }

    /// Glyph bitmap width for this mode (the 9th cell column is
    /// generated by the display hardware, not the font).
    pub const fn glyph_width(&self) -> u32 {
        if self.cell_width == 9 { 8 } else { self.cell_width }
    }
}
