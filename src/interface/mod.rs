pub mod render;

pub use render::{display_tile, render_json, render_tile};
