use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::TileError;
use crate::models::constants::{CALORIE_STEP, ID_ADD_CALS, ID_RESET_CALS, ID_SUB_CALS};

/// One of the three clickable controls on the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Add,
    Subtract,
    Reset,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Add, Control::Subtract, Control::Reset];

    /// Fixed clickable identifier reported back by the tile on a tap.
    pub fn id(self) -> &'static str {
        match self {
            Control::Add => ID_ADD_CALS,
            Control::Subtract => ID_SUB_CALS,
            Control::Reset => ID_RESET_CALS,
        }
    }

    /// Button label, e.g. "+50".
    pub fn label(self) -> String {
        match self {
            Control::Add => format!("+{:.0}", CALORIE_STEP),
            Control::Subtract => format!("-{:.0}", CALORIE_STEP),
            Control::Reset => "reset".to_string(),
        }
    }

    /// Resolve the last clicked id of a refresh request.
    ///
    /// A missing, empty or unrecognised id is a plain refresh and yields
    /// `None`. Unrecognised ids are logged.
    pub fn from_clickable_id(id: Option<&str>) -> Option<Control> {
        match id {
            None | Some("") => None,
            Some(id) => match id.parse() {
                Ok(control) => Some(control),
                Err(e) => {
                    warn!(error = %e, "ignoring click, refreshing only");
                    None
                }
            },
        }
    }
}

impl FromStr for Control {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| TileError::UnknownControl(s.to_string()))
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
