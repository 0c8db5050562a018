use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use toll_calculator::application::calculator::TollCalculator;
use toll_calculator::domain::fee::DailyFee;
use toll_calculator::domain::vehicle::{Vehicle, VehicleType};
use toll_calculator::interfaces::csv::fee_writer::DailyFeeWriter;
use toll_calculator::interfaces::csv::passing_reader::PassingReader;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file of one day's passings, with a `timestamp` column
    input: PathBuf,

    /// Category of the passing vehicle
    #[arg(long, default_value_t = VehicleType::Car)]
    vehicle: VehicleType,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let mut passings = Vec::new();
    for passing in PassingReader::new(file).passings() {
        match passing {
            Ok(passing) => passings.push(passing),
            Err(e) => error!(error = %e, "skipping unreadable passing"),
        }
    }

    let calculator = TollCalculator::default();
    let vehicle: &dyn Vehicle = &cli.vehicle;
    let fee = calculator
        .total_fee(Some(vehicle), &passings)
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = DailyFeeWriter::new(stdout.lock());
    writer
        .write_fees([DailyFee {
            vehicle: cli.vehicle,
            date: passings.first().map(|p| p.date()),
            passings: passings.len(),
            fee,
        }])
        .into_diagnostic()?;

    Ok(())
}
