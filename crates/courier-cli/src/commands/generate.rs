use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use courier_lib::CostModel;

/// Write a single-case stream of `count` random waypoints followed by the
/// zero terminator. Coordinates stay strictly inside the field so every
/// record parses back as a valid interior waypoint.
pub fn run(
    model: &CostModel,
    count: usize,
    seed: Option<u64>,
    max_penalty: u32,
    output: Option<&Path>,
) -> Result<()> {
    ensure!(
        model.edge >= 2,
        "field edge {} leaves no room for interior waypoints",
        model.edge
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    writeln!(writer, "{count}")?;
    for _ in 0..count {
        let x = rng.random_range(1..model.edge);
        let y = rng.random_range(1..model.edge);
        let penalty = rng.random_range(0..=max_penalty);
        writeln!(writer, "{x} {y} {penalty}")?;
    }
    writeln!(writer, "0")?;
    writer.flush().context("failed to flush output")?;

    tracing::debug!(count, max_penalty, "case generated");
    Ok(())
}
