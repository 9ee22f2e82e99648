use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use courier_lib::{process_stream, solve_cases, CostModel};

/// Rendering for solved case results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One fixed-precision cost per line.
    Text,
    /// JSON array of case reports.
    Json,
}

pub fn run(
    model: &CostModel,
    input: Option<&Path>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open input {}", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Text => {
            let cases = process_stream(model, reader, &mut writer)
                .context("failed to solve case stream")?;
            tracing::debug!(cases, "stream solved");
        }
        OutputFormat::Json => {
            let reports = solve_cases(model, reader).context("failed to solve case stream")?;
            serde_json::to_writer_pretty(&mut writer, &reports)
                .context("failed to render case reports")?;
            writeln!(writer)?;
        }
    }
    writer.flush().context("failed to flush output")?;
    Ok(())
}
