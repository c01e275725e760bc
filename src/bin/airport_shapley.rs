use airport_shapley::{AirportShapley, Algorithm, Players};
use clap::Parser;
use std::{error::Error, fs::File, io::BufReader, path::PathBuf};
use tabled::{Table, settings::Style};

/// Split a shared runway cost among its users by Shapley value
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON run description (players, algorithm, num_samples, runway_cost_steps, seed)
    #[arg(short, long)]
    input: PathBuf,

    /// Replace the players of the run with a CSV table (Id,Name,Cost,Type,Airlines)
    #[arg(short, long)]
    players: Option<PathBuf>,

    /// exact | approximate | configuration_value
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Monte Carlo orderings for the approximate algorithm
    #[arg(short, long)]
    samples: Option<usize>,

    /// Seed for reproducible approximate runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the allocation as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let reader = BufReader::new(File::open(&cli.input)?);
    let mut run: AirportShapley = serde_json::from_reader(reader)?;

    if let Some(path) = &cli.players {
        run = run.with_players(Players::from_csv(path)?);
    }
    if let Some(algorithm) = &cli.algorithm {
        run = run.with_algorithm(algorithm.parse::<Algorithm>()?);
    }
    if let Some(samples) = cli.samples {
        run = run.with_num_samples(samples);
    }
    if let Some(seed) = cli.seed {
        run = run.with_seed(seed);
    }

    let allocation = run.compute()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&allocation)?);
        return Ok(());
    }

    let mut table = Table::new(&allocation.values);
    table.with(Style::psql());
    println!("{table}");
    println!(
        "algorithm: {}  total worth: {:.4}  distributed: {:.4}  elapsed: {:.6}s",
        allocation.algorithm,
        allocation.total_worth,
        allocation.sum(),
        allocation.elapsed_seconds
    );

    Ok(())
}
