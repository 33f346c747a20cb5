//! Core types and traits for list components.
//!
//! This module contains the fundamental types and traits that define the interface
//! and behavior of list components:
//! - `Item` trait for displayable/filterable items
//! - `ItemDelegate` trait for custom rendering
//! - `FilterState` for filter management
//! - `ListSignal`, the outcome of feeding a key press to the list
//! - Internal types for filtered item representation

use std::fmt::Display;

/// An entry that can be shown in a list and matched by the filter.
pub trait Item: Display + Clone {
    /// The text the fuzzy filter matches against.
    fn filter_value(&self) -> String;
}

/// Renders items for a list.
///
/// `index` is the position of the item within the currently visible (possibly
/// filtered) sequence, so `index == m.index()` identifies the cursor row.
pub trait ItemDelegate<I: Item> {
    /// Renders one item. An empty string means "draw nothing".
    fn render(&self, m: &super::Model<I>, index: usize, item: &I) -> String;

    /// Number of lines one item occupies.
    fn height(&self) -> usize;

    /// Blank lines between items.
    fn spacing(&self) -> usize;

    /// Extra bindings contributed to the list's short help.
    fn short_help(&self) -> Vec<crate::key::Binding> {
        vec![]
    }

    /// Extra bindings contributed to the list's full help.
    fn full_help(&self) -> Vec<Vec<crate::key::Binding>> {
        vec![]
    }
}

/// A visible item after filtering: its position in the canonical item
/// sequence plus the matched character positions of its filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FilteredItem {
    pub index: usize,
    pub matches: Vec<usize>,
}

/// Filtering state of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// No filter; every item is visible.
    Unfiltered,
    /// The filter editor is capturing text.
    Filtering,
    /// A non-empty filter has been committed.
    FilterApplied,
}

impl std::fmt::Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FilterState::Unfiltered => "unfiltered",
            FilterState::Filtering => "filtering",
            FilterState::FilterApplied => "filter applied",
        };
        f.write_str(s)
    }
}

/// What the list wants its owner to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSignal {
    /// The key was consumed (or ignored); keep running.
    Continue,
    /// The list's quit binding was pressed.
    Quit,
    /// The list's force-quit binding was pressed.
    ForceQuit,
}
