//! Formatting for the lines charmask writes to stdout and stderr.
//! License: MIT OR APACHE 2.0

use charmask_core::SubstitutionError;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes the transformed text followed by a single newline.
pub fn print_result<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    writeln!(writer, "{}", text)?;
    writer.flush()
}

/// Writes one `Error: <message>` line. The prefix is coloured only when
/// `supports_color` is set.
pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    let message = single_line(message);
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), message)
    } else {
        writeln!(writer, "Error: {}", message)
    }
}

/// Renders an error and its causes as `outer: inner`.
///
/// The walk stops at a [`SubstitutionError`]: its message already carries the
/// condensed engine diagnostic, and its source would only repeat it across
/// several lines.
pub fn render_error(err: &anyhow::Error) -> String {
    let mut parts = Vec::new();
    for cause in err.chain() {
        parts.push(cause.to_string());
        if cause.is::<SubstitutionError>() {
            break;
        }
    }
    parts.join(": ")
}

// Guarantees the error report stays on one line.
fn single_line(message: &str) -> String {
    message.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ")
}
