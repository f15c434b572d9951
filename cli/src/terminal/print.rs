use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;

pub const TOTAL_WIDTH: usize = 64;

const BANNER: &str = r#"
         _   _  ___ _____ _____ _     ___ _____ ____
        | | | |/ _ \_   _| ____| |   |_ _| ____|  _ \
        | |_| | | | || | |  _| | |    | ||  _| | |_) |
        |  _  | |_| || | | |___| |___ | || |___|  _ <
        |_| |_|\___/ |_| |_____|_____|___|_____|_| \_\
"#;

pub fn banner<W: Write>(out: &mut W, no_banner: bool) -> io::Result<()> {
    if no_banner {
        return Ok(());
    }

    let text_content: String = format!("⟦ HOTELIER v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    writeln!(out, "{sep}{text}{sep}")?;
    writeln!(out, "{}", BANNER.color(colors::PRIMARY).bold())
}

/// Centered section title padded with dashes to [`TOTAL_WIDTH`].
pub fn header<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    writeln!(out, "{line}")
}

pub fn menu_entry<W: Write>(out: &mut W, idx: usize, label: &str) -> io::Result<()> {
    writeln!(out, "{}. {}", idx.to_string().color(colors::ACCENT), label)
}

/// Writes a prompt without a trailing newline and flushes it so it shows before input.
pub fn prompt<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    write!(out, "{}", msg.color(colors::TEXT_DEFAULT))?;
    out.flush()
}

pub fn error<W: Write>(out: &mut W, err: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".color(colors::ERROR).bold(), err)
}

pub fn fat_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
