/// Daily calorie target. Fixed; the tile offers no way to change it.
pub const CALORIE_GOAL: f64 = 2000.0;

/// Calories added or removed by one tap of the step controls.
pub const CALORIE_STEP: f64 = 50.0;

/// Store key holding the running count.
pub const CALORIE_KEY: &str = "CAL_KEY";

/// Default location of the key-value store file.
pub const DEFAULT_STORE_FILE: &str = "calorie_tile.json";

// ─────────────────────────────────────────────────────────────────────────────
// Control identifiers
// ─────────────────────────────────────────────────────────────────────────────

pub const ID_ADD_CALS: &str = "image_add_cals";
pub const ID_SUB_CALS: &str = "image_sub_cals";
pub const ID_RESET_CALS: &str = "image_reset_cals";

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Degrees in a full progress sweep (percentage 1.0).
pub const ARC_TOTAL_DEGREES: f64 = 360.0;

/// Cells in the textual progress bar.
pub const PROGRESS_BAR_WIDTH: usize = 20;
