//! Picker state machine vocabulary.
//!
//! The controller is always in one [`Phase`]. Each [`Event`] is resolved to
//! an [`Action`] by a fixed precedence:
//!
//! 1. the force-quit key, in every phase;
//! 2. while filtering, everything else goes to the filter editor;
//! 3. `complete`, then `toggle`;
//! 4. anything else is list navigation.
//!
//! Applying the action yields the next phase and an [`Effect`] for the host
//! loop. `Terminated` is absorbing: once reached, events are ignored.

use crate::key::KeyPress;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user finished normally; chosen items are the result.
    Confirmed,
    /// The user force-quit; there is no result.
    Cancelled,
}

/// Where the controller is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Moving around the list.
    Browsing,
    /// Typing filter text.
    Filtering,
    /// Done; no further input is handled.
    Terminated(Outcome),
}

impl Phase {
    /// Whether the session is over.
    pub fn is_terminated(&self) -> bool {
        matches!(self, Phase::Terminated(_))
    }
}

/// Input to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyPress),
    /// The terminal was resized.
    Resize {
        /// Terminal columns.
        width: usize,
        /// Terminal rows.
        height: usize,
    },
}

/// What a key press means in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the session without a result.
    ForceQuit,
    /// End the session with the chosen items.
    Complete,
    /// Flip the item under the cursor.
    Toggle,
    /// Delegated to the list (cursor, paging, filter editing, help, quit).
    Navigate,
}

/// What the host loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Draw again.
    Redraw,
    /// Stop the loop.
    Quit,
}
