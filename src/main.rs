#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use jarama::{
    NameRegistry, Race, RaceConfig, ResultsReporter, Vehicle, VehicleFactory, VehicleKind,
};

#[derive(Parser)]
#[command(name = "jarama")]
#[command(version)]
#[command(about = "Multi-vehicle race where every kilometre costs fuel")]
struct Cli {
    /// Participant names, one random vehicle each
    #[arg(required = true)]
    names: Vec<String>,

    /// Race name
    #[arg(long)]
    name: Option<String>,

    /// Distance to the finish line in km (at least 1000)
    #[arg(long, short = 'd')]
    distance: Option<f64>,

    /// Seed for a reproducible race
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Print the whole race as JSON
    #[arg(long)]
    json: bool,

    /// Print the partial ranking after every round
    #[arg(long)]
    rounds: bool,

    /// Verbose logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> RaceConfig {
        let defaults = RaceConfig::default();
        RaceConfig {
            name: self.name.clone().unwrap_or(defaults.name),
            distance: self.distance.unwrap_or(defaults.distance),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    config.validate()?;
    let mut rng = config.rng();

    let mut registry = NameRegistry::new();
    let vehicles = VehicleFactory::new(&mut registry).roster(&cli.names, &mut rng)?;
    if !cli.json {
        for vehicle in &vehicles {
            println!("{} got {}", vehicle.name(), describe(vehicle));
        }
    }

    let mut race = Race::new(config.name.clone(), config.distance, vehicles)?;
    race.start(&mut rng)?;

    let reporter = ResultsReporter::new(&race);
    if cli.json {
        println!("{}", reporter.export());
        return Ok(());
    }

    if cli.rounds {
        for log in race.logs() {
            println!("\n* Partial ranking (round {}):\n", log.round);
            for standing in &log.standings {
                println!(
                    "{} -> {} (km = {}, fuel = {} L)",
                    standing.position, standing.name, standing.odometer, standing.fuel
                );
            }
        }
    }

    if let Some(winner) = race.winner() {
        println!("\n{} wins {} after {} rounds.", winner.name(), race.name(), race.round());
    }

    println!("\n* Final ranking:\n");
    for result in reporter.final_ranking() {
        println!("{} -> {} ({} km)", result.rank, result.name, result.distance);
    }

    println!("\n* Detailed history:\n");
    for (position, (name, history)) in reporter.detailed_history().into_iter().enumerate() {
        println!("{} -> {}", position + 1, name);
        for line in history {
            println!("{line}");
        }
        println!();
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "jarama=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn describe(vehicle: &Vehicle) -> String {
    let make = format!("{} {}", vehicle.brand(), vehicle.model());
    let make = make.trim();
    let capacity = vehicle.fuel_capacity();
    let fuel = jarama::fuel::round2(vehicle.fuel());

    let details = match vehicle.kind() {
        VehicleKind::Generic => String::new(),
        VehicleKind::Car { hybrid } => {
            if *hybrid {
                ", hybrid".to_string()
            } else {
                String::new()
            }
        }
        VehicleKind::Motorcycle { engine } => format!(", {} cc", engine.cc()),
        VehicleKind::Truck { load_kg } => format!(", {load_kg} kg load"),
        VehicleKind::Quad { engine, class } => format!(", {} cc, {class}", engine.cc()),
    };

    if make.is_empty() {
        format!("a {} ({fuel}/{capacity} L{details})", vehicle.kind().label())
    } else {
        format!("a {} {make} ({fuel}/{capacity} L{details})", vehicle.kind().label())
    }
}
