use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use ratatui::style::Color;
use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// SilkCircuit Neon — Electric meets elegant
// ═══════════════════════════════════════════════════════════════════════════════

// RGB tuple constants for use with the `colored` crate's `.truecolor()` method
pub mod rgb {
    pub const ELECTRIC_PURPLE: (u8, u8, u8) = (225, 53, 255);
    pub const NEON_CYAN: (u8, u8, u8) = (128, 255, 234);
    pub const CORAL: (u8, u8, u8) = (255, 106, 193);
    pub const SUCCESS_GREEN: (u8, u8, u8) = (80, 250, 123);
    pub const ERROR_RED: (u8, u8, u8) = (255, 99, 99);
    pub const DIM_WHITE: (u8, u8, u8) = (180, 180, 190);
}

// Ratatui Color constants for TUI rendering
/// Electric Purple #e135ff — Keywords, control flow, importance
pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255);
/// Soft Pink #ff99ff — Strings, secondary emphasis
pub const SOFT_PINK: Color = Color::Rgb(255, 153, 255);
/// Neon Cyan #80ffea — Functions, methods, interactions
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234);
/// Coral #ff6ac1 — Numbers, constants
pub const CORAL: Color = Color::Rgb(255, 106, 193);
/// Electric Yellow #f1fa8c — Classes, types, warnings
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140);
/// Success Green #50fa7b — Success states, confirmations
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123);
/// Error Red #ff6363 — Errors, danger, removals
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99);
/// Soft White #f8f8f2 — Primary text
pub const SOFT_WHITE: Color = Color::Rgb(248, 248, 242);
/// Purple Muted #6272a4 — Comments, secondary text
pub const PURPLE_MUTED: Color = Color::Rgb(98, 114, 164);
/// Deep Purple #bd93f9 — Accents, borders
pub const DEEP_PURPLE: Color = Color::Rgb(189, 147, 249);
/// Void #282a36 — Background hints, surfaces
pub const VOID: Color = Color::Rgb(40, 42, 54);

/// Track quiet mode state
static QUIET_MODE: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));

/// Enable or disable quiet mode
pub fn set_quiet_mode(enabled: bool) {
    let mut quiet_mode = QUIET_MODE.lock();
    *quiet_mode = enabled;
}

/// Check if quiet mode is enabled
pub fn is_quiet_mode() -> bool {
    *QUIET_MODE.lock()
}

pub fn create_spinner(message: &str) -> ProgressBar {
    // Don't create a spinner in quiet mode
    if is_quiet_mode() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("✦✧✶✷✸✹✺✻✼✽")
            .template("{spinner} {msg}")
            .expect("Could not set spinner style"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

pub fn print_info(message: &str) {
    if !is_quiet_mode() {
        println!("{}", message.cyan().bold());
    }
}

pub fn print_warning(message: &str) {
    if !is_quiet_mode() {
        println!("{}", message.yellow().bold());
    }
}

pub fn print_error(message: &str) {
    // Always print errors, even in quiet mode
    eprintln!("{}", message.red().bold());
}

pub fn print_success(message: &str) {
    if !is_quiet_mode() {
        println!("{}", message.green().bold());
    }
}

pub fn print_version(version: &str) {
    if !is_quiet_mode() {
        let (r, g, b) = rgb::ELECTRIC_PURPLE;
        println!(
            "{} {}",
            "mailmuse".truecolor(r, g, b).bold(),
            version.truecolor(rgb::DIM_WHITE.0, rgb::DIM_WHITE.1, rgb::DIM_WHITE.2)
        );
    }
}

pub fn print_message(message: &str) {
    if !is_quiet_mode() {
        println!("{message}");
    }
}

pub fn print_newline() {
    if !is_quiet_mode() {
        println!();
    }
}
