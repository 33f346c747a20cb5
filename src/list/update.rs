//! Key handling for list components.
//!
//! While the filter editor is open every key goes to it (see
//! `filtering.rs`). Otherwise keys move the cursor, page, open or clear the
//! filter, toggle help, or ask the owner to quit.

use super::types::{FilterState, Item, ListSignal};
use super::Model;
use crate::key::KeyPress;

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Feeds one key press to the list and reports whether its owner should
    /// quit. The list never quits on its own.
    pub fn update(&mut self, press: &KeyPress) -> ListSignal {
        if self.filter_state == FilterState::Filtering {
            return self.update_filtering(press);
        }

        let km = &self.keymap;
        if km.force_quit.matches_press(press) {
            return ListSignal::ForceQuit;
        }

        if km.cursor_up.matches_press(press) {
            self.cursor_up();
        } else if km.cursor_down.matches_press(press) {
            self.cursor_down();
        } else if km.next_page.matches_press(press) {
            self.next_page();
        } else if km.prev_page.matches_press(press) {
            self.prev_page();
        } else if km.go_to_start.matches_press(press) {
            self.cursor = 0;
        } else if km.go_to_end.matches_press(press) {
            self.cursor = self.len().saturating_sub(1);
        } else if km.filter.matches_press(press) {
            self.start_filtering();
        } else if self.filter_state == FilterState::FilterApplied
            && km.clear_filter.matches_press(press)
        {
            // esc clears an applied filter before it means quit
            self.reset_filter();
        } else if km.show_full_help.matches_press(press) || km.close_full_help.matches_press(press)
        {
            self.show_full_help = !self.show_full_help;
        } else if km.quit.matches_press(press) {
            return ListSignal::Quit;
        }
        ListSignal::Continue
    }

    /// Moves the cursor up one item, stopping at the top.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one item, stopping at the bottom.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor forward one page, clamped to the last item.
    pub fn next_page(&mut self) {
        let len = self.len();
        if len > 0 {
            self.cursor = (self.cursor + self.per_page()).min(len - 1);
        }
    }

    /// Moves the cursor back one page, clamped to the first item.
    pub fn prev_page(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.per_page());
    }
}
