/* src/cli/src/ui.rs */

// Terminal output helpers shared across commands.

#![allow(clippy::print_stdout, clippy::print_stderr)]

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";

/// Section header for a command phase.
pub fn arrow(msg: &str) {
  println!("{CYAN}\u{2192}{RESET} {msg}");
}

/// Final success line.
pub fn ok(msg: &str) {
  println!("{GREEN}\u{2713}{RESET} {msg}");
}

/// Indented progress detail.
pub fn detail(msg: &str) {
  println!("  {msg}");
}

/// Indented detail with a success tick.
pub fn detail_ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn error(msg: &str) {
  eprintln!("{RED}error:{RESET} {msg}");
}

pub fn format_size(bytes: u64) -> String {
  if bytes < 1024 {
    format!("{bytes} B")
  } else if bytes < 1024 * 1024 {
    format!("{:.1} KB", bytes as f64 / 1024.0)
  } else {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
  }
}
