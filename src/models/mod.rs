pub mod constants;
pub mod control;
pub mod tile;

pub use control::Control;
pub use tile::TileView;
