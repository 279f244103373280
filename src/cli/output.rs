//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ push sent`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secrets file not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: flare encode secrets.json`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print raw data to stdout with no decoration, for piping.
pub fn data(value: &str) {
    println!("{}", value);
}

/// Print a dimmed/secondary message to stderr.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        eprintln!("{}", style(msg).dim());
    } else {
        eprintln!("{}", msg);
    }
}
