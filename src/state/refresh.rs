use tracing::info;

use crate::models::{Control, TileView};
use crate::state::calorie::CalorieState;
use crate::state::store::KeyValueStore;

/// Run one tile refresh: load, apply the clicked control (if any), save,
/// and return what the renderer should draw.
///
/// The store is only written when a control was applied.
pub fn refresh<S: KeyValueStore + ?Sized>(store: &mut S, control: Option<Control>) -> TileView {
    let mut state = CalorieState::load(&*store);

    if let Some(control) = control {
        let before = state.count();
        state.apply(control);
        state.save(store);
        info!(control = %control, before, after = state.count(), "applied control");
    }

    state.view()
}

/// Refresh driven by the raw clickable id the tile reported.
pub fn refresh_clicked<S: KeyValueStore + ?Sized>(
    store: &mut S,
    last_clickable_id: Option<&str>,
) -> TileView {
    refresh(store, Control::from_clickable_id(last_clickable_id))
}
