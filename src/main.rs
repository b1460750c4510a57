use anyhow::Result;
use clap::Parser;

use str_bump::config;
use str_bump::increment::{decrement, is_inert};
use str_bump::notice::Notice;
use str_bump::range::{Expansion, RangeExpr};
use str_bump::sequence::Sequence;
use str_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "str-bump",
    about = "Advance alphanumeric strings with carry (abc -> abd, az9 -> ba0)"
)]
struct Args {
    #[arg(help = "Strings to advance; reads lines from stdin when omitted")]
    inputs: Vec<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'n', long, help = "Number of steps to apply")]
    count: Option<u32>,

    #[arg(short, long, help = "Step backwards instead of forwards")]
    decrement: bool,

    #[arg(
        short,
        long,
        help = "Treat each input as a start..end range and expand it"
    )]
    range: bool,

    #[arg(long, help = "Print every intermediate value")]
    steps: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(short, long, help = "Print bare values without decoration")]
    plain: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("str-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let count = args.count.unwrap_or(config.behavior.count).max(1);
    let plain = args.plain || config.output.plain;
    let show_steps = args.steps || config.output.show_steps;

    let inputs = if args.inputs.is_empty() {
        read_stdin_inputs()?
    } else {
        args.inputs.clone()
    };

    if inputs.is_empty() {
        ui::display_error("No inputs given");
        std::process::exit(1);
    }

    let mut failed = false;
    for input in &inputs {
        let outcome = if args.range {
            process_range(input, &config, args.force, plain)
        } else if args.decrement {
            process_decrement(input, count, show_steps, plain)
        } else {
            process_increment(input, count, show_steps, plain)
        };

        if let Err(e) = outcome {
            ui::display_error(&e.to_string());
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Advance one input by `count` steps and print the outcome.
fn process_increment(input: &str, count: u32, show_steps: bool, plain: bool) -> Result<()> {
    if let Some(notice) = inert_notice(input) {
        ui::display_notice(&notice);
        ui::display_result(input, input, plain);
        return Ok(());
    }

    let values: Vec<String> = Sequence::new(input).take(count as usize).collect();
    if show_steps {
        ui::display_sequence(&values, plain);
    } else if let Some(last) = values.last() {
        ui::display_result(input, last, plain);
    }

    Ok(())
}

/// Step one input backwards by `count` steps and print the outcome.
fn process_decrement(input: &str, count: u32, show_steps: bool, plain: bool) -> Result<()> {
    if let Some(notice) = inert_notice(input) {
        ui::display_notice(&notice);
        ui::display_result(input, input, plain);
        return Ok(());
    }

    let mut values = Vec::new();
    let mut current = input.to_string();
    for _ in 0..count {
        current = decrement(&current)?;
        values.push(current.clone());
    }

    if show_steps {
        ui::display_sequence(&values, plain);
    } else if let Some(last) = values.last() {
        ui::display_result(input, last, plain);
    }

    Ok(())
}

/// Expand one range expression, asking before oversized expansions.
fn process_range(input: &str, config: &config::Config, force: bool, plain: bool) -> Result<()> {
    let expr = RangeExpr::parse(input)?;

    match expr.expand(config.range.max_items)? {
        Expansion::Complete(values) => {
            ui::display_sequence(&values, plain);
            if !plain {
                ui::display_success(&format!("Expanded '{}' into {} values", expr, values.len()));
            }
        }
        Expansion::Truncated { limit, .. } => {
            ui::display_notice(&Notice::RangeTruncated {
                expr: input.to_string(),
                limit,
            });

            let expand_fully = if force {
                true
            } else if config.behavior.confirm_large_expansions {
                ui::confirm_action(&format!(
                    "'{}' needs more than {} values; expand fully?",
                    expr, limit
                ))?
            } else {
                false
            };

            if !expand_fully {
                return Ok(());
            }

            match expr.expand(usize::MAX)? {
                Expansion::Complete(values) | Expansion::Truncated { values, .. } => {
                    ui::display_sequence(&values, plain);
                }
            }
        }
    }

    Ok(())
}

fn inert_notice(input: &str) -> Option<Notice> {
    if input.is_empty() {
        Some(Notice::EmptyInput)
    } else if is_inert(input) {
        Some(Notice::InertInput {
            input: input.to_string(),
        })
    } else {
        None
    }
}

fn read_stdin_inputs() -> Result<Vec<String>> {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let mut inputs = Vec::new();
    for line in stdin.lock().lines() {
        inputs.push(line?);
    }
    Ok(inputs)
}
