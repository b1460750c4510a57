//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction. In plain mode every helper prints bare values suitable for
//! piping; otherwise output is decorated with `console` styling.

use console::style;

use crate::notice::Notice;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a notice to the user.
pub fn display_notice(notice: &Notice) {
    eprintln!("{} {}", style("⚠ NOTICE:").yellow().bold(), notice);
}

/// Display the result of stepping a single input.
///
/// Plain mode prints only the resulting value; decorated mode shows the
/// before/after pair.
///
/// # Arguments
/// * `input` - The original value
/// * `output` - The stepped value
/// * `plain` - Suppress decoration
pub fn display_result(input: &str, output: &str, plain: bool) {
    if plain {
        println!("{}", output);
        return;
    }
    println!(
        "  {} {} {}",
        style(input).red(),
        style("->").dim(),
        style(output).green()
    );
}

/// Display a list of generated values.
///
/// Plain mode prints one bare value per line; decorated mode numbers them.
///
/// # Arguments
/// * `values` - Values to display, in generation order
/// * `plain` - Suppress decoration
pub fn display_sequence(values: &[String], plain: bool) {
    if plain {
        for value in values {
            println!("{}", value);
        }
        return;
    }
    for (i, value) in values.iter().enumerate() {
        println!("  {}. {}", i + 1, style(value).green());
    }
}
