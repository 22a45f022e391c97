use crate::commands::{is_stdio, print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::Args;
use fonefmt_core::dto::ColumnReportDto;
use fonefmt_table::paths::default_output_path;
use fonefmt_table::{format_phone_column, read_table, write_table, ReadOptions, TableFormat};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Input table; `-` reads stdin and requires --format
    pub input: PathBuf,
    /// Column holding phone numbers [default: from config, else "telefone"]
    #[arg(long, short)]
    pub column: Option<String>,
    /// Output path; `-` writes to stdout
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Accept rows with a different number of fields than the header
    #[arg(long)]
    pub flexible: bool,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
    Xlsx,
}

impl From<FormatArg> for TableFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => TableFormat::Csv,
            FormatArg::Tsv => TableFormat::Tsv,
            FormatArg::Xlsx => TableFormat::Xlsx,
        }
    }
}

#[derive(Debug, Serialize)]
struct FormatReport {
    input: String,
    output: Option<String>,
    format: String,
    dry_run: bool,
    #[serde(flatten)]
    column: ColumnReportDto,
}

enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    fn label(&self) -> Option<String> {
        match self {
            Destination::Stdout => None,
            Destination::File(path) => Some(path.display().to_string()),
        }
    }
}

pub fn format_file(ctx: &Context<'_>, args: FormatArgs) -> Result<()> {
    let from_stdin = is_stdio(&args.input);
    let format = match args.format {
        Some(format) => format.into(),
        None if from_stdin => return Err(invalid_input("--format is required when reading stdin")),
        None => TableFormat::from_path(&args.input)
            .with_context(|| format!("detect format of {}", args.input.display()))?,
    };

    let column = args
        .column
        .unwrap_or_else(|| ctx.config.phone_column.clone());
    if column.trim().is_empty() {
        return Err(invalid_input("column name cannot be empty"));
    }

    let destination = match args.out {
        Some(path) if is_stdio(&path) => Destination::Stdout,
        Some(path) => Destination::File(path),
        None if from_stdin => Destination::Stdout,
        None => Destination::File(default_output_path(
            &args.input,
            &ctx.config.output_suffix,
            format,
        )),
    };
    if let Destination::File(path) = &destination {
        if !from_stdin && same_file(&args.input, path) {
            return Err(invalid_input(format!(
                "output path matches input: {}",
                path.display()
            )));
        }
    }
    if ctx.json && !args.dry_run && matches!(destination, Destination::Stdout) {
        return Err(invalid_input(
            "--json cannot be combined with writing the table to stdout",
        ));
    }

    let bytes = read_input(&args.input, from_stdin)?;
    let options = ReadOptions {
        flexible: args.flexible || ctx.config.table.flexible,
    };
    let input_label = if from_stdin {
        "stdin".to_string()
    } else {
        args.input.display().to_string()
    };

    let mut table =
        read_table(&bytes, format, &options).with_context(|| format!("read {}", input_label))?;
    let column_report = format_phone_column(&mut table, &column)
        .with_context(|| format!("format column {:?} of {}", column, input_label))?;

    if !args.dry_run {
        match &destination {
            Destination::Stdout => {
                let stdout = io::stdout().lock();
                write_table(stdout, &table, format).with_context(|| "write table to stdout")?;
            }
            Destination::File(path) => {
                debug!(path = %path.display(), "writing output");
                let file = File::create(path)
                    .with_context(|| format!("create output {}", path.display()))?;
                write_table(BufWriter::new(file), &table, format)
                    .with_context(|| format!("write output {}", path.display()))?;
            }
        }
    }

    if ctx.json {
        let report = FormatReport {
            input: input_label,
            output: destination.label(),
            format: format.to_string(),
            dry_run: args.dry_run,
            column: column_report,
        };
        return print_json(&report);
    }

    match (&destination, args.dry_run) {
        (Destination::Stdout, false) => {}
        (Destination::File(path), false) => println!(
            "Formatted {} of {} rows in column {}; written to {}",
            column_report.formatted,
            column_report.rows,
            column_report.column,
            path.display()
        ),
        (_, true) => println!(
            "Would format {} of {} rows in column {}",
            column_report.formatted, column_report.rows, column_report.column
        ),
    }
    Ok(())
}

fn read_input(path: &Path, from_stdin: bool) -> Result<Vec<u8>> {
    if from_stdin {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .with_context(|| "read stdin")?;
        return Ok(bytes);
    }
    if !path.exists() {
        return Err(not_found(format!("input file {}", path.display())));
    }
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
