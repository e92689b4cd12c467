//! Formatting of the status lines written to stderr.
//!
//! Each helper prefixes the message with its level and paints the line with
//! the theme entry for that level when colors are enabled.

use std::io::{self, Write};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let line = format!("{} {}", prefix, msg);
    writeln!(writer, "{}", paint(&line, entry, theme, enable_colors))
}

pub fn print_info_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "[info]", msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_warn_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "[warn]", msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "[error]", msg, ThemeEntry::Error, theme, enable_colors)
}
