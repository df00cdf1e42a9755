use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use tangent_sight::api::{run_comparison, run_demo, run_sighting};
use tangent_sight::{CommandError, CommandResult, OutputFormat, ToolConfig};

#[derive(Parser, Debug)]
#[command(name = "tangent-sight", version)]
#[command(about = "Compare tangent approximations and solve two-angle sightings")]
#[command(after_help = "Examples:\n  tangent-sight --tan 1.024 6 10\n  tangent-sight -c 1.7 -m 0.15 1.3")]
struct Cli {
    /// Compare both approximations of tan(A) for depths N through M
    #[arg(long = "tan", num_args = 3, value_names = ["A", "N", "M"], allow_negative_numbers = true, conflicts_with = "measure")]
    tan: Option<Vec<String>>,

    /// Observer eye height in meters, 0 < C <= 100 (default 1.5)
    #[arg(short = 'c', value_name = "C", allow_negative_numbers = true)]
    height: Option<String>,

    /// Distance from angle A to the object's base, and its height from angle B to its top
    #[arg(short = 'm', num_args = 1..=2, value_names = ["A", "B"], allow_negative_numbers = true)]
    measure: Option<Vec<String>>,

    /// Run the built-in demonstration
    #[arg(long, conflicts_with_all = ["tan", "measure"])]
    demo: bool,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CommandResult<String> {
    let config = match &cli.config {
        Some(path) => ToolConfig::load_from_file(path)?,
        None => ToolConfig::default(),
    };
    let format = cli.format.unwrap_or(config.output_format);
    debug!(?format, "selected output format");

    if cli.demo {
        return run_demo(format);
    }

    if let Some(values) = &cli.tan {
        if let [angle, from, to] = values.as_slice() {
            return run_comparison(angle, from, to, format);
        }
    }

    if let Some(values) = &cli.measure {
        if let Some((alpha, rest)) = values.split_first() {
            return run_sighting(
                cli.height.as_deref(),
                alpha,
                rest.first().map(String::as_str),
                &config,
                format,
            );
        }
    }

    Err(CommandError::NothingToDo)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                error!("failed to write output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
