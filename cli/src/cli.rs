use std::path::PathBuf;

use clap::Parser;

/// Command-line front-end for the `accrete` planetary accretion engine.
#[derive(Parser)]
#[command(version, about)]
#[command(propagate_version = true)]
pub(super) struct Arguments {
    /// Output additional data to the console, one occurrence outputs info
    /// logs, two debug, three trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(super) verbose: u8,

    /// Output less information to the console; use twice for none.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(super) quiet: u8,

    #[command(subcommand)]
    pub(super) sub_command: Commands,
}

/// Commands for `accrete`.
#[derive(Parser)]
pub(super) enum Commands {
    /// Generate one planetary system.
    Generate {
        /// Seed for the random number generator; leave blank to derive one
        /// from the wall clock.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Mass of the primary star, in solar masses.
        #[arg(long, default_value_t = 1.0)]
        star_mass: f64,

        /// Luminosity of the primary star, in solar luminosities.
        #[arg(long, default_value_t = 1.0)]
        star_luminosity: f64,

        /// Path to a JSON file holding a `DoleConstants` profile; defaults
        /// used for any field it omits.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Write the resulting `SystemReport` as pretty-printed JSON to this
        /// path instead of the console.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
