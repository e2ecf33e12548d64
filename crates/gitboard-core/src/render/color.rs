//! Centralized color functions for dashboard output.
//!
//! All functions automatically respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection
//! via `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an internal
//! flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::Tone;

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once at startup when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

/// Type-safe RGB color with compile-time hex-to-component conversion.
#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const GREEN: Rgb = Rgb::from_hex(0x6B8F5E); // Clean / added
const AMBER: Rgb = Rgb::from_hex(0xC49A5C); // Dirty / edited
const RED: Rgb = Rgb::from_hex(0xB87060); // Failure / removed
const MAGENTA: Rgb = Rgb::from_hex(0xA088B0); // Renamed
const BLUE: Rgb = Rgb::from_hex(0x7CB4C8); // Branch names
const GRAY: Rgb = Rgb::from_hex(0x5C6370); // Dimmed rows

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn truecolor(text: &str, c: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(c.r, c.g, c.b))
        .to_string()
}

pub fn green(text: &str) -> String {
    truecolor(text, GREEN)
}

pub fn amber(text: &str) -> String {
    truecolor(text, AMBER)
}

pub fn red(text: &str) -> String {
    truecolor(text, RED)
}

pub fn magenta(text: &str) -> String {
    truecolor(text, MAGENTA)
}

pub fn blue(text: &str) -> String {
    truecolor(text, BLUE)
}

pub fn dim(text: &str) -> String {
    truecolor(text, GRAY)
}

/// Apply bold text (headers).
pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Bold white directory name for dark terminals.
pub fn name(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold().white().to_string())
        .to_string()
}

/// Bold black directory name for light terminals (`--invert`).
pub fn inverted_name(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold().black().to_string())
        .to_string()
}

/// Apply the color for a cell tone.
pub fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Success | Tone::Added => green(text),
        Tone::Warning | Tone::Edited => amber(text),
        Tone::Failure | Tone::Removed => red(text),
        Tone::Renamed => magenta(text),
        Tone::Branch => blue(text),
        Tone::Name => name(text),
        Tone::InvertedName => inverted_name(text),
        Tone::Dim => dim(text),
        Tone::Header => bold(text),
    }
}
