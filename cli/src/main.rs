use std::fs;

use accrete::{generate_system, DoleConstants, Star};
use clap::Parser;

mod cli;

use cli::{Arguments, Commands};

fn main() {
    human_panic::setup_panic!();
    let args = Arguments::parse();

    let level = match (args.quiet, args.verbose) {
        (q, _) if q >= 2 => None,
        (1, _) => Some(log::Level::Error),
        (_, 0) => Some(log::Level::Warn),
        (_, 1) => Some(log::Level::Info),
        (_, 2) => Some(log::Level::Debug),
        _ => Some(log::Level::Trace),
    };
    if let Some(level) = level {
        std::env::set_var("RUST_LOG", level.as_str().to_lowercase());
        pretty_env_logger::init();
    }

    match args.sub_command {
        Commands::Generate {
            seed,
            star_mass,
            star_luminosity,
            profile,
            output,
        } => run_generate(seed, star_mass, star_luminosity, profile, output),
    }
}

fn run_generate(
    seed: Option<u64>,
    star_mass: f64,
    star_luminosity: f64,
    profile: Option<std::path::PathBuf>,
    output: Option<std::path::PathBuf>,
) {
    let star = Star {
        mass: star_mass,
        luminosity: star_luminosity,
    };

    let consts = match profile {
        Some(path) => match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<DoleConstants>(&contents) {
                Ok(consts) => consts,
                Err(e) => {
                    eprintln!("Failed to parse profile {}: {e}", path.display());
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Failed to read profile {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => DoleConstants::default(),
    };

    match generate_system(seed, &star, &consts) {
        Ok(report) => {
            let json = serde_json::to_string_pretty(&report).expect("report is always valid JSON");
            match output {
                Some(path) => {
                    if let Err(e) = fs::write(&path, json) {
                        eprintln!("Failed to write {}: {e}", path.display());
                        std::process::exit(1);
                    }
                }
                None => println!("{json}"),
            }
        }
        Err(e) => {
            eprintln!("Generation failed: {e}");
            std::process::exit(1);
        }
    }
}
