#![warn(missing_docs)]

//! # dofu-choose
//!
//! An interactive terminal picker built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! and lipgloss. Give it a list of titled items, let the user move around,
//! fuzzy-filter and mark one or many of them, and get the chosen titles back.
//!
//! ## Overview
//!
//! - [`choose`] is the picker itself: item model, row rendering, the
//!   selection state machine and the run drivers.
//! - [`list`] is the scrollable, filterable list the picker is built on.
//! - [`key`] holds key bindings and help metadata.
//!
//! ## Picking items
//!
//! ```no_run
//! use dofu_choose::choose::{self, ChoiceItem, Options, Selection};
//!
//! let items = vec![
//!     ChoiceItem::new("zsh", "shell config"),
//!     ChoiceItem::new("tmux", "terminal multiplexer"),
//! ];
//! let opt = Options::default().with_title("Sync modules").with_no_limit(true);
//! match choose::run_blocking(items, &opt)? {
//!     Selection::Confirmed(chosen) => println!("{}", chosen.join(",")),
//!     Selection::Cancelled => eprintln!("cancelled"),
//! }
//! # Ok::<(), dofu_choose::Error>(())
//! ```
//!
//! ## Driving the controller directly
//!
//! The picker is a plain state machine, so it can be exercised without a
//! terminal:
//!
//! ```rust
//! use dofu_choose::prelude::*;
//! use crossterm::event::KeyCode;
//!
//! let items = vec![ChoiceItem::from("a"), ChoiceItem::from("b")];
//! let mut picker = ChooseModel::new(items, &Options::default());
//! picker.handle(Event::Key(KeyPress::from(KeyCode::Down)));
//! assert_eq!(picker.handle(Event::Key(KeyPress::from(KeyCode::Tab))), Effect::Quit);
//! assert_eq!(picker.selection(), Selection::Confirmed(vec!["b".to_string()]));
//! ```
//!
//! ## Logging
//!
//! The crate logs through `tracing` and never installs a subscriber. Since
//! the picker owns the terminal while it runs, send logs to a file or stderr
//! redirect.

pub mod choose;
pub mod error;
pub mod key;
pub mod list;

pub use error::{Error, Result};

/// Commonly used types.
pub mod prelude {
    pub use crate::choose::{
        ChoiceItem, ChooseDelegate, Effect, Event, Model as ChooseModel, Options, Outcome, Phase,
        Selection, SelectionMode,
    };
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::list::{FilterState, Item, ItemDelegate, Model as List};
    pub use crate::{Error, Result};
}
