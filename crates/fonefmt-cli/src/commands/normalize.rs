use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use fonefmt_core::dto::PhoneResultDto;
use std::io::{self, BufRead, Write};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Numbers to normalize; one per line is read from stdin when omitted
    pub numbers: Vec<String>,
}

pub fn normalize_numbers(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let inputs = if args.numbers.is_empty() {
        read_stdin_lines().with_context(|| "read numbers from stdin")?
    } else {
        args.numbers
    };

    let results: Vec<PhoneResultDto> = inputs
        .iter()
        .map(|raw| PhoneResultDto::from_raw(raw))
        .collect();

    if ctx.json {
        return print_json(&results);
    }

    let mut stdout = io::stdout().lock();
    for result in &results {
        writeln!(stdout, "{}", result.output)?;
    }
    Ok(())
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .map(|line| line.map(|line| line.trim_end_matches('\r').to_string()))
        .collect()
}
