//! Interactive picker: choose one or many items from a filterable list.
//!
//! The picker wraps a [`crate::list::Model`] of [`ChoiceItem`]s. In
//! [`SelectionMode::Single`] the cursor row is marked with `>` and toggling
//! an item finishes the session. In [`SelectionMode::Multi`] every row shows
//! `◉` or `○` and the user toggles any number of items before pressing
//! enter.
//!
//! | key | browsing | filtering |
//! |-----|----------|-----------|
//! | `ctrl+c` | cancel | cancel |
//! | `enter` | complete | accept filter |
//! | `tab` | toggle | accept filter |
//! | `space` | toggle | typed into the filter |
//! | `/` | start filter | typed into the filter |
//! | `q`, `esc` | complete | `esc` cancels the filter |
//!
//! ```no_run
//! use dofu_choose::choose::{self, ChoiceItem, Options};
//!
//! # async fn demo() -> dofu_choose::Result<()> {
//! let items = vec![
//!     ChoiceItem::new("zsh", "shell config"),
//!     ChoiceItem::new("git", "global gitconfig"),
//! ];
//! match choose::many(items, Options::default().with_title("Modules")).await? {
//!     Some(chosen) => println!("chosen: {:?}", chosen),
//!     None => println!("cancelled"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod delegate;
pub mod item;
pub mod keys;
mod model;
pub mod options;
mod run;
pub mod state;
pub mod style;
pub mod truncate;

pub use delegate::{ChooseDelegate, RowContext};
pub use item::ChoiceItem;
pub use keys::ChooseKeyMap;
pub use model::Model;
pub use options::{Options, SelectionMode};
pub use run::{many, one, run, run_blocking, Selection};
pub use state::{Action, Effect, Event, Outcome, Phase};
pub use style::ChooseItemStyles;
pub use truncate::truncate_with_tail;

#[cfg(test)]
mod tests;
