use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use courier_lib::CostModel;

mod commands;

use commands::solve::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Courier waypoint routing utilities")]
struct Cli {
    /// Edge length of the square field in metres.
    #[arg(long, default_value_t = 100)]
    edge: u32,

    /// Courier speed in metres per second.
    #[arg(long, default_value_t = 2.0)]
    speed: f64,

    /// Stop time in seconds charged per visited waypoint.
    #[arg(long, default_value_t = 10.0)]
    delay: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve every case in a waypoint stream and print one cost per case.
    Solve {
        /// Input file; defaults to standard input.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file; defaults to standard output.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Result rendering.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Generate a random single-case stream, terminated by the zero sentinel.
    Generate {
        /// Number of waypoints to generate.
        #[arg(long)]
        count: usize,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Largest penalty to draw.
        #[arg(long, default_value_t = 99)]
        max_penalty: u32,
        /// Output file; defaults to standard output.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Solve a stream and diff the results against an expected-output file.
    Verify {
        /// Input file holding the case stream.
        #[arg(long)]
        input: PathBuf,
        /// File holding one expected cost per case.
        #[arg(long)]
        expected: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let model = CostModel {
        edge: cli.edge,
        speed: cli.speed,
        delay: cli.delay,
    };

    match cli.command {
        Command::Solve {
            input,
            output,
            format,
        } => commands::solve::run(&model, input.as_deref(), output.as_deref(), format),
        Command::Generate {
            count,
            seed,
            max_penalty,
            output,
        } => commands::generate::run(&model, count, seed, max_penalty, output.as_deref()),
        Command::Verify { input, expected } => commands::verify::run(&model, &input, &expected),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so solved results on stdout stay clean.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
