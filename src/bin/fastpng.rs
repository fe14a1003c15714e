//! fastpng CLI - write 8-bit grayscale or palette PNGs.
//!
//! Reads raw 8-bit pixels (dimensions given on the command line) or a binary
//! PGM (P5) file, plus optional palette channel files, and writes a PNG.

use std::fs;
use std::io::{BufRead, Cursor, Read};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use fastpng::png::{self, PngOptions};

/// Write 8-bit grayscale or palette-indexed PNG files.
///
/// Without palette files the pixels are gray levels. With --reds, --greens
/// and --blues the pixels are indices into that palette.
#[derive(Parser, Debug)]
#[command(name = "fastpng")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input pixels: binary PGM (P5) or raw bytes, one per pixel
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long, value_name = "OUTPUT")]
    output: PathBuf,

    /// Image width; with --height, the input is read as raw bytes
    #[arg(long)]
    width: Option<u32>,

    /// Image height; with --width, the input is read as raw bytes
    #[arg(long)]
    height: Option<u32>,

    /// Compression level (0-9, higher = smaller file)
    #[arg(short = 'c', long, default_value = "3", value_parser = clap::value_parser!(u8).range(0..=9))]
    compression: u8,

    /// Raw file holding the palette's red channel
    #[arg(long, value_name = "FILE")]
    reds: Option<PathBuf>,

    /// Raw file holding the palette's green channel
    #[arg(long, value_name = "FILE")]
    greens: Option<PathBuf>,

    /// Raw file holding the palette's blue channel
    #[arg(long, value_name = "FILE")]
    blues: Option<PathBuf>,

    /// Split image data into IDAT chunks of at most this many bytes
    #[arg(long, value_name = "BYTES")]
    idat_chunk_size: Option<NonZeroUsize>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Pixels loaded from the input file.
struct InputImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    format: &'static str,
}

/// Logger printing records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))?;

    let summary = convert(&args)?;
    if args.verbose {
        println!(
            "{} -> {} ({:.1}% of raw)",
            format_size(summary.raw_bytes),
            format_size(summary.png_bytes),
            summary.png_bytes as f64 * 100.0 / summary.raw_bytes.max(1) as f64
        );
    }
    Ok(())
}

/// Sizes reported after a successful conversion.
struct Summary {
    raw_bytes: u64,
    png_bytes: u64,
}

/// Load the input and palette files, encode, and write the output PNG.
fn convert(args: &Args) -> Result<Summary, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let image = load_input(&args.input, args.width, args.height)?;
    let reds = read_channel(args.reds.as_deref())?;
    let greens = read_channel(args.greens.as_deref())?;
    let blues = read_channel(args.blues.as_deref())?;
    log::debug!(
        "loaded {} ({}x{}, {}) in {:.2?}",
        args.input.display(),
        image.width,
        image.height,
        image.format,
        start.elapsed()
    );

    let mut options = PngOptions::default().with_compression_level(args.compression);
    if let Some(size) = args.idat_chunk_size {
        options = options.with_idat_chunk_size(size);
    }

    let start = Instant::now();
    let encoded = png::encode_channels(
        &image.pixels,
        image.width,
        image.height,
        reds.as_deref(),
        greens.as_deref(),
        blues.as_deref(),
        &options,
    )?;
    let encode_time = start.elapsed();

    png::write_encoded_file(&args.output, &encoded)?;

    log::debug!(
        "wrote {} ({}, level {}) in {:.2?}",
        args.output.display(),
        format_size(encoded.len() as u64),
        options.compression_level,
        encode_time
    );
    Ok(Summary {
        raw_bytes: image.pixels.len() as u64,
        png_bytes: encoded.len() as u64,
    })
}

fn read_channel(path: Option<&Path>) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Some(fs::read(path)?)),
        None => Ok(None),
    }
}

/// Load raw bytes when both dimensions are given, otherwise a PGM (P5) file.
fn load_input(
    path: &Path,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<InputImage, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)?;

    if let (Some(width), Some(height)) = (width, height) {
        return Ok(InputImage {
            width,
            height,
            pixels: bytes,
            format: "raw",
        });
    }

    if is_pgm(&bytes) {
        return decode_pgm(&bytes);
    }
    Err("raw input needs --width and --height (or use a P5 PGM file)".into())
}

/// `P5` magic followed by header whitespace.
fn is_pgm(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes.starts_with(b"P5") && bytes[2].is_ascii_whitespace()
}

/// Decode a binary PGM with maxval 255.
fn decode_pgm(bytes: &[u8]) -> Result<InputImage, Box<dyn std::error::Error>> {
    let mut reader = Cursor::new(bytes);
    let mut token = String::new();

    read_token(&mut reader, &mut token)?;
    if token != "P5" {
        return Err("expected PGM magic P5".into());
    }
    read_token(&mut reader, &mut token)?;
    let width: u32 = token.parse()?;
    read_token(&mut reader, &mut token)?;
    let height: u32 = token.parse()?;
    read_token(&mut reader, &mut token)?;
    let maxval: u32 = token.parse()?;
    if maxval != 255 {
        return Err(format!("unsupported PGM maxval {maxval}, expected 255").into());
    }

    let mut pixels = Vec::new();
    reader.read_to_end(&mut pixels)?;
    // Extra bytes past the raster are left for the encoder to reject.
    Ok(InputImage {
        width,
        height,
        pixels,
        format: "pgm",
    })
}

/// Read one whitespace-separated header token, skipping `#` comments. Consumes
/// exactly one whitespace byte after the token.
fn read_token<R: BufRead>(reader: &mut R, token: &mut String) -> std::io::Result<()> {
    token.clear();
    let mut byte = [0u8; 1];

    loop {
        reader.read_exact(&mut byte)?;
        match byte[0] {
            b'#' => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            b if b.is_ascii_whitespace() => {}
            b => {
                token.push(b as char);
                break;
            }
        }
    }

    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        if byte[0].is_ascii_whitespace() {
            break;
        }
        token.push(byte[0] as char);
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
