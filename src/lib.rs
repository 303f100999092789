pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{Result, TileError};
pub use models::{Control, TileView};
pub use state::{CalorieState, JsonFileStore, KeyValueStore, MemoryStore};
