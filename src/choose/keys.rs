//! Picker-specific key bindings.
//!
//! These sit on top of the list's own bindings: `toggle` flips the item under
//! the cursor and `complete` ends the session. Both are ignored while the
//! filter editor is open so the keys can be typed into the filter.

use crate::key::{self, KeyMap};

/// Bindings for toggling and completing a selection.
#[derive(Debug, Clone)]
pub struct ChooseKeyMap {
    /// Flip the chosen flag of the item under the cursor.
    pub toggle: key::Binding,
    /// End the session with the current selection.
    pub complete: key::Binding,
}

impl Default for ChooseKeyMap {
    fn default() -> Self {
        Self {
            toggle: key::new_binding(&["tab", "space"]).with_help("tab", "toggle selection"),
            complete: key::new_binding(&["enter"]).with_help("enter", "complete with selections"),
        }
    }
}

impl KeyMap for ChooseKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.complete, &self.toggle]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.complete, &self.toggle]]
    }
}
