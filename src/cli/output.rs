//! Shared CLI output helpers.
//!
//! Thin wrappers over `console` styling so every message reports the same
//! way. Status lines go to stderr; stdout is reserved for record output.
//! Colors are dropped automatically when stderr is not a terminal or
//! NO_COLOR is set.

use console::style;

/// Print a success message with checkmark.
///
/// Example: `✓ synced 3 secrets`
pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green(), msg);
}

/// Print an error message.
///
/// Example: `✗ unrecognized path`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint.
///
/// Example: `→ see: satchel --help`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a dimmed/secondary message.
///
/// Example: `nothing to sync`
pub fn dimmed(msg: &str) {
    eprintln!("{}", style(msg).dim());
}
