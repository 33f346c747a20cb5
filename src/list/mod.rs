//! List component with filtering, paging, contextual help, and delegate rendering.
//!
//! This module exposes a generic `Model<I: Item>` plus supporting traits and submodules:
//! - `Item`: Implement for your item type; must be `Display + Clone` and return a `filter_value()`
//! - `ItemDelegate`: Controls item `render`, `height`, `spacing`, and extra help
//! - Submodules: `keys` and `style`
//!
//! ### Filtering States
//! The list supports fuzzy filtering with three states:
//! - `Unfiltered`: No filter active
//! - `Filtering`: User is typing a filter; input is shown in the header
//! - `FilterApplied`: Filter accepted; only matching items are displayed
//!
//! When filtering is active, fuzzy match indices are stored per visible item
//! and delegates can use them for character-level highlighting through
//! [`Model::matches_for_item`].
//!
//! ### Index Semantics
//! The filtered view never copies items. It stores indices into the canonical
//! item sequence, so an item replaced with [`Model::set_item`] shows its new
//! state immediately whether or not a filter is active.
//!
//! The list does not run on its own. An owner feeds it key presses with
//! [`Model::update`] and acts on the returned [`ListSignal`].

/// Key bindings for list navigation, filtering and help.
pub mod keys;

/// Visual styling for the list chrome.
pub mod style;

mod filtering;
mod model;
mod rendering;
mod types;
mod update;

pub use keys::ListKeyMap;
pub use model::Model;
pub use style::ListStyles;
pub use types::{FilterState, Item, ItemDelegate, ListSignal};
