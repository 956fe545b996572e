//! User-facing control actions

use crate::types::SlotId;
use serde::{Deserialize, Serialize};

/// One discrete control event on the wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ControlAction {
    /// Submit the URL input
    Add { input: String },
    /// Move a slot one position toward the front
    MovePrev { slot: SlotId },
    /// Move a slot one position toward the back
    MoveNext { slot: SlotId },
    /// Remove a slot
    Remove { slot: SlotId },
    /// Pick an explicit grid size
    SetGridSize { size: u32 },
    /// Enter or leave fullscreen
    ToggleFullscreen,
    /// Fast-forward every active player
    FastForwardAll,
}

impl ControlAction {
    /// Map a per-slot button's `data-action` value to an action.
    pub fn from_dataset(action: &str, slot: SlotId) -> Option<Self> {
        match action {
            "remove" => Some(Self::Remove { slot }),
            "move-prev" => Some(Self::MovePrev { slot }),
            "move-next" => Some(Self::MoveNext { slot }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_mapping() {
        let slot = SlotId::new();
        assert_eq!(
            ControlAction::from_dataset("remove", slot),
            Some(ControlAction::Remove { slot })
        );
        assert_eq!(
            ControlAction::from_dataset("move-prev", slot),
            Some(ControlAction::MovePrev { slot })
        );
        assert_eq!(
            ControlAction::from_dataset("move-next", slot),
            Some(ControlAction::MoveNext { slot })
        );
        assert_eq!(ControlAction::from_dataset("explode", slot), None);
    }
}
