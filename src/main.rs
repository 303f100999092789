use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use calorie_tile_rs::cli::Cli;
use calorie_tile_rs::error::Result;
use calorie_tile_rs::interface::{display_tile, render_json};
use calorie_tile_rs::state::{refresh, JsonFileStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let control = cli.command.unwrap_or_default().control();

    let mut store = JsonFileStore::new(&cli.file);
    let view = refresh(&mut store, control);

    if cli.json {
        println!("{}", render_json(&view)?);
    } else {
        display_tile(&view);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
