use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};

use courier_lib::{solve_cases, CostModel};

/// Solve `input` and compare each rendered cost against `expected`, line by
/// line. Fails on the first mismatch.
pub fn run(model: &CostModel, input: &Path, expected: &Path) -> Result<()> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("failed to open input {}", input.display()))?,
    );
    let reports = solve_cases(model, reader).context("failed to solve case stream")?;

    let expected_reader = BufReader::new(
        File::open(expected)
            .with_context(|| format!("failed to open expected output {}", expected.display()))?,
    );
    let expected_lines: Vec<String> = expected_reader
        .lines()
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("failed to read {}", expected.display()))?;

    if expected_lines.len() != reports.len() {
        bail!(
            "expected {} results but solved {} cases",
            expected_lines.len(),
            reports.len()
        );
    }

    for (report, expected_line) in reports.iter().zip(&expected_lines) {
        let actual = report.rendered_cost();
        if actual != expected_line.trim() {
            bail!(
                "case {} mismatch: expected {}, solved {}",
                report.case,
                expected_line.trim(),
                actual
            );
        }
    }

    println!("{} cases verified", reports.len());
    Ok(())
}
