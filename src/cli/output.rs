//! Shared CLI output helpers.
//!
//! Data goes to stdout so it can be piped; status, errors and hints go to
//! stderr. Color respects NO_COLOR and is dropped when the stream is not a
//! terminal.

use std::fmt::Display;

use console::style;
use serde::Serialize;

use crate::error::Result;

const RULE_WIDTH: usize = 48;

/// Print a success message with checkmark (green).
///
/// Example: `✓ saved profile default`
pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green().for_stderr(), msg);
}

/// Print an error message (red).
///
/// Example: `✗ No authorization data found.`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().for_stderr(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().for_stderr(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: courier login`
pub fn hint(msg: &str) {
    eprintln!(
        "{} {}",
        style("→").cyan().for_stderr(),
        style(msg).cyan().for_stderr()
    );
}

/// Print raw data to stdout, unstyled.
pub fn data(text: &str) {
    println!("{}", text);
}

/// Print `value` as pretty JSON to stdout.
pub fn json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    data(&text);
    Ok(())
}

/// Print a bold header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  default  encrypted`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a horizontal rule.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed message.
///
/// Example: `no profiles stored`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

pub fn blank() {
    println!();
}

/// Format a count in bold for inline use.
pub fn count(n: usize) -> String {
    style(n).bold().to_string()
}

/// Format a command in green for inline use.
pub fn cmd(c: &str) -> String {
    style(c).green().for_stderr().to_string()
}
