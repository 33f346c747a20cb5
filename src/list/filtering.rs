//! Filter operations and state management for list components.
//!
//! This module handles fuzzy filtering:
//! - Filter application and fuzzy matching
//! - Character-level match index tracking
//! - Filter state transitions (start, accept, cancel, clear)
//! - Key handling while the filter editor is capturing text

use super::types::{FilterState, FilteredItem, Item, ListSignal};
use super::Model;
use crate::key::KeyPress;
use crossterm::event::KeyCode;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Fuzzy-matches `term` against `targets` and returns `(index, matches)` for
/// every hit, best score first. Ties keep their original order. An empty
/// term matches everything with no highlighted positions.
pub(super) fn fuzzy_filter(term: &str, targets: &[String]) -> Vec<FilteredItem> {
    if term.is_empty() {
        return (0..targets.len())
            .map(|index| FilteredItem {
                index,
                matches: vec![],
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut ranked: Vec<(i64, FilteredItem)> = targets
        .iter()
        .enumerate()
        .filter_map(|(index, target)| {
            matcher
                .fuzzy_indices(target, term)
                .map(|(score, matches)| (score, FilteredItem { index, matches }))
        })
        .collect();
    // sort_by is stable, so equal scores stay in insertion order.
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, fi)| fi).collect()
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Recomputes the visible items from the current filter text and puts
    /// the cursor back on the first match.
    pub(super) fn apply_filter(&mut self) {
        let targets: Vec<String> = self.items.iter().map(Item::filter_value).collect();
        self.filtered_items = fuzzy_filter(&self.filter_input.value(), &targets);
        self.cursor = 0;
    }

    /// Enters the filter editor, keeping any previously applied text.
    pub(super) fn start_filtering(&mut self) {
        self.filter_state = FilterState::Filtering;
        let end = self.filter_input.value.len();
        self.filter_input.set_cursor(end);
        self.apply_filter();
    }

    /// Commits the filter. An empty filter is the same as no filter.
    pub(super) fn accept_filter(&mut self) {
        if self.filter_input.value.is_empty() {
            self.reset_filter();
        } else {
            self.filter_state = FilterState::FilterApplied;
        }
    }

    /// Drops the filter and returns to the full list, keeping the cursor on
    /// the item it pointed at.
    pub(super) fn reset_filter(&mut self) {
        let keep = self.canonical_index(self.cursor);
        self.filter_input.reset();
        self.filter_state = FilterState::Unfiltered;
        self.filtered_items.clear();
        self.cursor = keep.unwrap_or(0).min(self.items.len().saturating_sub(1));
    }

    /// Returns true if filtering is active in any form.
    pub fn is_filtering(&self) -> bool {
        matches!(
            self.filter_state,
            FilterState::Filtering | FilterState::FilterApplied
        )
    }

    /// Clears any filter, equivalent to the clear filter key.
    pub fn clear_filter(&mut self) {
        self.reset_filter();
    }

    /// Sets the filter text and applies it as a committed filter. An empty
    /// string clears the filter.
    pub fn set_filter_text(&mut self, s: &str) {
        self.filter_input.set_value(s);
        if s.is_empty() {
            self.reset_filter();
        } else {
            self.filter_state = FilterState::FilterApplied;
            self.apply_filter();
        }
    }

    /// Handles a key press while the filter editor is capturing text.
    pub(super) fn update_filtering(&mut self, press: &KeyPress) -> ListSignal {
        if self.keymap.force_quit.matches_press(press) {
            return ListSignal::ForceQuit;
        }
        if self.keymap.cancel_filter.matches_press(press) {
            self.reset_filter();
            return ListSignal::Continue;
        }
        if self.keymap.accept_filter.matches_press(press) {
            self.accept_filter();
            return ListSignal::Continue;
        }

        let changed = match press.code {
            KeyCode::Backspace => self.filter_input.delete_backward(),
            KeyCode::Delete => self.filter_input.delete_forward(),
            KeyCode::Left => {
                let pos = self.filter_input.pos;
                self.filter_input.set_cursor(pos.saturating_sub(1));
                false
            }
            KeyCode::Right => {
                let pos = self.filter_input.pos;
                self.filter_input.set_cursor(pos + 1);
                false
            }
            KeyCode::Home => {
                self.filter_input.set_cursor(0);
                false
            }
            KeyCode::End => {
                let end = self.filter_input.value.len();
                self.filter_input.set_cursor(end);
                false
            }
            KeyCode::Char(c) if press.is_printable() => {
                self.filter_input.insert(c);
                true
            }
            _ => false,
        };
        if changed {
            self.apply_filter();
        }
        ListSignal::Continue
    }
}
