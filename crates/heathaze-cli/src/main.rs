//! Heat haze CLI - generates tileable noise textures for heat haze distortion
//!
//! This binary builds cyclical Perlin noise fields and packs them into PNG
//! distortion textures.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use heathaze_cli::commands::{self, generate::Overrides};
use heathaze_cli::logging;

/// Heat haze noise texture generator
#[derive(Parser)]
#[command(name = "heathaze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a tileable noise texture and write it as PNG
    Generate {
        /// Path to a JSON noise config
        #[arg(short, long)]
        config: Option<String>,

        /// Output PNG path
        #[arg(short, long)]
        output: String,

        /// Gradient grid nodes along x
        #[arg(long)]
        grid_width: Option<u32>,

        /// Gradient grid nodes along y
        #[arg(long)]
        grid_height: Option<u32>,

        /// Pixels per gradient cell
        #[arg(long)]
        samples_per_node: Option<u32>,

        /// Number of noise channels (3 or 4)
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=4))]
        channels: Option<u8>,

        /// Base seed (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Sample a single noise field at the given points
    Sample {
        /// Gradient grid nodes along x
        #[arg(long, default_value_t = 4)]
        width: u32,

        /// Gradient grid nodes along y
        #[arg(long, default_value_t = 4)]
        height: u32,

        /// Field seed
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Points to sample, as x,y
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the default noise config as JSON
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            config,
            output,
            grid_width,
            grid_height,
            samples_per_node,
            channels,
            seed,
            json,
        } => {
            let overrides = Overrides {
                grid_width,
                grid_height,
                samples_per_node,
                channels: channels.map(usize::from),
                seed,
            };
            commands::generate::run(config.as_deref(), &overrides, &output, json)
        }
        Commands::Sample {
            width,
            height,
            seed,
            points,
            json,
        } => commands::sample::run(width, height, seed, &points, json),
        Commands::Config => commands::config::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
