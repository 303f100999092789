mod calorie;
mod refresh;
mod store;

pub use calorie::CalorieState;
pub use refresh::{refresh, refresh_clicked};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
