//! End-to-end checks of the display core: glyph table contracts,
//! console pass-through and the built-in font, exercised together the
//! way an emulator video driver uses them.

use std::thread;

use textcon::codepage;
use textcon::font::{self, Font, FONT_VGA_8X16};
use textcon::{BufferSurface, CellAttrs, Console, SurfaceError, TextMode};

#[test]
fn every_byte_renders_to_a_cell() {
    let mut console = Console::new(BufferSurface::new(16, 16));
    for b in 0..=255u8 {
        let row = (b >> 4) as usize;
        let column = (b & 0xF) as usize;
        console.write_char_at(row, column, b).unwrap();
        let stored = console.surface().cell(row, column).unwrap();
        assert!(!stored.grapheme.is_empty(), "byte {b:#04x} rendered empty");
        assert_eq!(stored.grapheme, codepage::glyph(b).grapheme());
    }
}

#[test]
fn resolution_is_stable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                (0..=255u8)
                    .map(|b| codepage::glyph(b).base())
                    .collect::<Vec<char>>()
            })
        })
        .collect();
    let mut snapshots = handles.into_iter().map(|h| h.join().unwrap());
    let first = snapshots.next().unwrap();
    for snapshot in snapshots {
        assert_eq!(snapshot, first);
    }
    assert_eq!(first[0x41], 'A');
    assert_eq!(first[0xB0], '\u{2591}');
}

#[test]
fn ascii_example_from_the_video_driver() {
    // 'A' at the home position of an 80x25 color text screen.
    let mode = TextMode::for_mode(0x03).unwrap();
    let mut console = Console::new(BufferSurface::new(mode.text_rows, mode.text_columns));
    console.write_char_at(0, 0, 0x41).unwrap();
    assert_eq!(console.surface().cell(0, 0).unwrap().grapheme, "A");
    assert!(console.surface().row_text(0).starts_with('A'));
}

#[test]
fn out_of_bounds_status_is_not_masked() {
    let mut console = Console::new(BufferSurface::new(25, 80));
    assert!(console.write_char_at(24, 79, b'x').is_ok());
    assert_eq!(
        console.write_char_at(25, 0, b'x'),
        Err(SurfaceError::OutOfBounds {
            row: 25,
            column: 0,
            rows: 25,
            columns: 80,
        })
    );
    assert_eq!(
        console.write_char_at(0, 80, b'x'),
        Err(SurfaceError::OutOfBounds {
            row: 0,
            column: 80,
            rows: 25,
            columns: 80,
        })
    );
}

#[test]
fn text_memory_sweep_renders_a_full_screen() {
    let mode = TextMode::for_mode(0x00).unwrap();
    let mut console = Console::new(BufferSurface::new(mode.text_rows, mode.text_columns));
    // Simulated video memory: every cell holds its column's hex digit,
    // with reverse video on the top row.
    console
        .rasterize_text_memory(&mode, |row, column| {
            let ch = b"0123456789ABCDEF"[column & 0xF];
            let attribute = if row == 0 { 0x70 } else { 0x07 };
            Some((ch, attribute))
        })
        .unwrap();
    let surface = console.surface();
    assert_eq!(&surface.row_text(0)[..16], "0123456789ABCDEF");
    assert_eq!(surface.cell(0, 0).unwrap().attrs, CellAttrs::INVERSE);
    assert_eq!(surface.cell(1, 0).unwrap().attrs, CellAttrs::empty());
}

#[test]
fn default_font_is_stable() {
    // The descriptor is a process-wide constant: repeated reads agree.
    for _ in 0..3 {
        assert_eq!(FONT_VGA_8X16.width, 8);
        assert_eq!(FONT_VGA_8X16.height, 16);
    }
    let face = font::best_font(8, 16);
    assert!(std::ptr::eq(face, &FONT_VGA_8X16));

    let font = Font::new(face).unwrap();
    for b in 0..=255u8 {
        assert_eq!(font.glyph_data(b).len(), 16);
    }
}
