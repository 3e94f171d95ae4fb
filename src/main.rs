//! textcon - render the code page 437 chart through the display core
//!
//! Builds an in-memory text surface sized by the configured BIOS mode,
//! writes the full 256-byte chart through the console pass-through and
//! dumps the result to stdout. Doubles as a smoke test for the glyph
//! table and the built-in font.

use anyhow::{Context, Result};
use log::info;

use textcon::config::Config;
use textcon::font;
use textcon::{BufferSurface, Console, SurfaceError, TextMode, TextSurface};

/// Chart geometry: 16x16 bytes, one blank column between entries.
const CHART_COLUMN_STRIDE: usize = 2;

fn print_help() {
    println!("textcon - text-mode console display core");
    println!();
    println!("USAGE:");
    println!("    textcon [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help           Show this help");
    println!("    -V, --version        Show version");
    println!("        --init-config    Write the default config file");
    println!("        --mode=N         Override the BIOS text mode (0-3, 7)");
    println!();
    println!("Config file: ~/.config/textcon/config.toml");
    println!("Set RUST_LOG=debug for verbose output.");
}

/// Write one code page byte at a chart position, mapping hex row/column
/// labels and entries through the same pass-through path.
fn render_chart(
    console: &mut Console<BufferSurface>,
    origin_row: usize,
    origin_column: usize,
    hex_labels: bool,
) -> Result<(), SurfaceError> {
    let hex_digit = |n: usize| -> u8 { b"0123456789ABCDEF"[n & 0xF] };

    let (row0, col0) = if hex_labels {
        // Column header along the top, row labels down the left.
        for low in 0..16 {
            console.write_char_at(
                origin_row,
                origin_column + 3 + low * CHART_COLUMN_STRIDE,
                hex_digit(low),
            )?;
        }
        for high in 0..16 {
            console.write_char_at(origin_row + 1 + high, origin_column, hex_digit(high))?;
        }
        (origin_row + 1, origin_column + 3)
    } else {
        (origin_row, origin_column)
    };

    for high in 0..16 {
        for low in 0..16 {
            let ch = (high * 16 + low) as u8;
            console.write_char_at(row0 + high, col0 + low * CHART_COLUMN_STRIDE, ch)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Check command line arguments
    let args: Vec<String> = std::env::args().collect();

    // --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("textcon {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Config file generation mode
    if args.iter().any(|a| a == "--init-config") {
        let path = Config::write_default_config()?;
        println!("Config file generated: {}", path.display());
        return Ok(());
    }

    let config = Config::load();

    let mode_number = match args.iter().find_map(|a| a.strip_prefix("--mode=")) {
        Some(value) => value
            .parse::<u8>()
            .with_context(|| format!("invalid mode number: {value}"))?,
        None => config.display.mode,
    };
    let mode = TextMode::for_mode(mode_number)
        .with_context(|| format!("mode {mode_number:#04x} is not a text mode"))?;
    info!(
        "text mode {:#04x}: {}x{} cells",
        mode.mode, mode.text_columns, mode.text_rows
    );

    // Pick the bitmap font the way an emulator video driver would.
    let face = if config.font.name.is_empty() {
        font::best_font(mode.glyph_width(), mode.cell_height)
    } else {
        font::find_font(&config.font.name)
            .with_context(|| format!("unknown font: {}", config.font.name))?
    };
    let font = font::Font::new(face)?;
    info!("font {} ({}x{})", face.name, face.width, face.height);

    let mut console = Console::new(BufferSurface::new(mode.text_rows, mode.text_columns));
    render_chart(&mut console, 1, 1, config.chart.hex_labels)
        .context("chart does not fit the configured text mode")?;

    let surface = console.surface();
    for row in 0..surface.rows() {
        println!("{}", surface.row_text(row).trim_end());
    }
    println!(
        "font: {} {}x{}, {} glyphs, {} bytes/glyph",
        face.name,
        face.width,
        face.height,
        font::GLYPHS_PER_FONT,
        font.glyph_size()
    );
    Ok(())
}
