use crate::error::{ErrorContext, LocatorError};
use colored::Colorize;
use std::error::Error as _;

pub fn format_error_chain(error: &LocatorError) -> String {
    let context = ErrorContext::new(error);
    let mut output = context.to_string();

    let mut cause = error.source();
    while let Some(err) = cause {
        output.push_str(&format!("\n\nCaused by:\n    {err}"));
        cause = err.source();
    }

    output
}

/// Format error for display to user with colors and formatting
pub fn format_error_with_color(error: &LocatorError, use_color: bool) -> String {
    colored::control::set_override(use_color);

    let context = ErrorContext::new(error);
    let mut output = String::new();

    // Error header
    output.push_str(&format!("{} {error}\n", "Error:".red().bold()));

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
        for line in suggestion.lines() {
            if !line.trim().is_empty() {
                output.push_str(&format!("{}\n", format!("• {line}").cyan()));
            }
        }
    }

    colored::control::unset_override();
    output
}
