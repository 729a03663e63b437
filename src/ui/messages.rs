//! Console messages: coloured, icon-prefixed lines.
//! Set `NO_COLOR` to get plain output (e.g. when piping).

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn render<T: fmt::Display>(level: Level, msg: T) -> String {
    if use_color() {
        format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, msg));
}

/// Warnings go to stderr so they never mix with JSON printed on stdout.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, msg));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    if use_color() {
        println!(
            "{}{}====================== {}\n{}",
            Level::Info.color(),
            BOLD,
            msg,
            RESET
        );
    } else {
        println!("====================== {}\n", msg);
    }
}
