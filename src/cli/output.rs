use colored::Colorize;

// Everything here goes to stderr; stdout is reserved for the JSON body.

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Echo a diagnostic line verbatim (verbose mode).
pub fn trace(msg: &str) {
    eprintln!("{}", msg.dimmed());
}
