//! TTY-aware user-facing printing.
//!
//! Prefixes are colored only when the stream is a terminal, so piped
//! output stays plain and scriptable.

use owo_colors::OwoColorize;

/// Primary output lines (listings, hashes, destinations) that users may
/// script against. Never prefixed or colored.
pub fn print_user(msg: &str) {
    println!("{msg}");
}

pub fn print_info(msg: &str) {
    if atty::is(atty::Stream::Stdout) {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

pub fn print_success(msg: &str) {
    if atty::is(atty::Stream::Stdout) {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}

pub fn print_warn(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}
