use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use contextlens_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Width of the longest report key, "Control Likelihood".
pub const KEY_WIDTH: usize = 18;

/// Events with this target are written verbatim by the log formatter.
pub const PRINT_TARGET: &str = "contextlens::print";

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

/// One-time console setup. Must run before anything is printed.
pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Writes `label` without a trailing newline so the answer lands beside it.
pub fn prompt(label: &str) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "{} ", label.color(colors::PRIMARY).bold());
    let _ = stdout.flush();
}

pub fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::ACCENT).bold(),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    format!("{}", line)
}

pub fn header(msg: &str) {
    print(&header_line(msg));
}

pub fn fat_separator_line() -> String {
    format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
}

pub fn section_line(title: &str) -> String {
    format!("{}", title.color(colors::PRIMARY).bold())
}

pub fn aligned<V>(key: &str, value: V) -> String
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    status_line(format!("{}{} {}", key.color(colors::PRIMARY), colon, value))
}

pub fn status_line<T: AsRef<str>>(msg: T) -> String {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT))
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&status_line(msg));
}

pub fn bullet_line(msg: &str) -> String {
    format!("    {} {}", "-".color(colors::SEPARATOR), msg.color(colors::TEXT_DEFAULT))
}

pub fn farewell() {
    mprint!();
    print("Exiting ContextLens.");
    mprint!();
}

pub fn graceful_exit() {
    mprint!();
    mprint!();
    print("Graceful exit. Goodbye.");
    mprint!();
    let _ = io::stdout().flush();
}

/// Drops ANSI SGR sequences so tests can reason about visible columns.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
