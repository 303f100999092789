use clap::{Parser, Subcommand};

use crate::models::constants::DEFAULT_STORE_FILE;
use crate::models::Control;

/// Calorie tile — a running calorie count against a daily goal.
///
/// Each invocation is one refresh of the tile.
#[derive(Parser, Debug)]
#[command(name = "calorie_tile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the key-value store file.
    #[arg(short, long, env = "CALORIE_TILE_FILE", default_value = DEFAULT_STORE_FILE)]
    pub file: String,

    /// Print the tile as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show the tile without changing the count.
    #[default]
    Show,

    /// Add one step of calories.
    Add,

    /// Remove one step of calories (never below zero).
    Sub,

    /// Reset the count to zero.
    Reset,

    /// Refresh as if the tile reported a click on the given control id.
    Click {
        /// Clickable id, e.g. image_add_cals.
        id: String,
    },
}

impl Command {
    /// Control applied by this command.
    ///
    /// `Click` goes through the same id resolution as a tile click, so an
    /// unknown id is a plain refresh.
    pub fn control(&self) -> Option<Control> {
        match self {
            Command::Show => None,
            Command::Add => Some(Control::Add),
            Command::Sub => Some(Control::Subtract),
            Command::Reset => Some(Control::Reset),
            Command::Click { id } => Control::from_clickable_id(Some(id.as_str())),
        }
    }
}
