use tracing::{debug, warn};

use crate::error::{Result, TileError};
use crate::models::constants::{CALORIE_GOAL, CALORIE_KEY, CALORIE_STEP};
use crate::models::{Control, TileView};
use crate::state::store::KeyValueStore;

/// The running calorie count for the day.
///
/// A transient view over the store: loaded at the start of each refresh and
/// saved after each mutation. The store owns the durable value.
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieState {
    count: f64,
    goal: f64,
    step: f64,
}

impl Default for CalorieState {
    fn default() -> Self {
        Self::with_count(0.0)
    }
}

impl CalorieState {
    /// A state holding `count`, with the fixed goal and step.
    ///
    /// Negative or non-finite counts are floored to 0.
    pub fn with_count(count: f64) -> Self {
        Self {
            count: sanitize(count),
            goal: CALORIE_GOAL,
            step: CALORIE_STEP,
        }
    }

    /// Load the persisted count. Never fails: a missing key, an unreadable
    /// store or a bad stored value all yield a count of 0.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match read_count(store) {
            Ok(count) => {
                debug!(count, "loaded calorie count");
                Self::with_count(count)
            }
            Err(e) => {
                warn!(error = %e, "could not read calorie count, starting from 0");
                Self::default()
            }
        }
    }

    /// Persist the count. Store failures are logged and swallowed.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        if let Err(e) = store.put_f64(CALORIE_KEY, self.count) {
            warn!(error = %e, count = self.count, "could not save calorie count");
        }
    }

    pub fn count(&self) -> f64 {
        self.count
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Add one step. There is no upper bound.
    pub fn increment(&mut self) {
        self.count += self.step;
    }

    /// Remove one step, flooring at 0.
    pub fn decrement(&mut self) {
        self.count = (self.count - self.step).max(0.0);
    }

    pub fn reset(&mut self) {
        self.count = 0.0;
    }

    /// Fraction of the goal reached.
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.count / self.goal
    }

    /// Run the operation bound to `control`.
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Add => self.increment(),
            Control::Subtract => self.decrement(),
            Control::Reset => self.reset(),
        }
    }

    pub fn view(&self) -> TileView {
        TileView::new(self.count.trunc() as i64, self.percentage())
    }
}

fn read_count<S: KeyValueStore + ?Sized>(store: &S) -> Result<f64> {
    match store.get_f64(CALORIE_KEY)? {
        None => Ok(0.0),
        Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Some(value) => Err(TileError::InvalidStoredValue {
            key: CALORIE_KEY.to_string(),
            value,
        }),
    }
}

fn sanitize(count: f64) -> f64 {
    if count.is_finite() && count > 0.0 {
        count
    } else {
        0.0
    }
}
