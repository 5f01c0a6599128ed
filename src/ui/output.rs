use crate::models::{Message, Role};
use colored::*;
use terminal_size::{terminal_size, Width};

const DEFAULT_WIDTH: usize = 60;
const MAX_WIDTH: usize = 100;

/// Print a dimmed diagnostic to stderr when verbose output is on
pub fn trace(verbose: bool, message: impl AsRef<str>) {
    if verbose {
        eprintln!("{}", format!("[flights] {}", message.as_ref()).dimmed());
    }
}

/// Print a warning to stderr
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{}", format!("[flights] {}", message.as_ref()).yellow());
}

pub fn display_error(message: impl AsRef<str>) {
    eprintln!("{} {}", "Error:".red(), message.as_ref());
}

fn rule_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| (w as usize).min(MAX_WIDTH))
        .unwrap_or(DEFAULT_WIDTH)
}

pub fn display_title(title: &str) {
    println!("{}", title.bold());
    println!("{}", "─".repeat(rule_width()).dimmed());
}

pub fn role_label(role: Role) -> ColoredString {
    match role {
        Role::User => "user".cyan().bold(),
        Role::Model => "model".green().bold(),
    }
}

/// One chat bubble: role label, then the content
pub fn display_message(message: &Message) {
    println!("{}", role_label(message.role));
    println!("{}", message.content.trim_end());
    println!();
}

pub fn display_prompt(label: &str) {
    print!("{} ", format!("{}>", label).cyan());
}
