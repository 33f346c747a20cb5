//! View rendering functions for list components.
//!
//! This module handles all visual rendering aspects of the list:
//! - Header rendering (title or filter input)
//! - Item rendering for the current page
//! - Pagination dots, status bar and help
//! - Complete view composition

use super::style::{BULLET, ELLIPSIS};
use super::types::{FilterState, Item};
use super::Model;
use crate::key::{self, KeyMap};
use lipgloss_extras::lipgloss::width_visible;

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Renders the whole list.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();

        let header = self.view_header();
        if !header.is_empty() {
            sections.push(header);
        }

        if self.show_status_bar {
            sections.push(self.view_status());
        }

        sections.push(self.view_items());

        if self.show_pagination && self.total_pages() > 1 {
            sections.push(self.view_pagination());
        }

        if self.show_help {
            let help = self.view_help();
            if !help.is_empty() {
                sections.push(help);
            }
        }

        sections.join("\n")
    }

    /// Title, or the filter prompt while filtering.
    pub(super) fn view_header(&self) -> String {
        if self.filter_state == FilterState::Filtering {
            let prompt = self.styles.filter_prompt.clone().render("Filter: ");
            let value = &self.filter_input.value;
            let pos = self.filter_input.pos;
            let before: String = value[..pos].iter().collect();
            let under = value.get(pos).map_or(" ".to_string(), |c| c.to_string());
            let after: String = value.get(pos + 1..).map_or(String::new(), |s| s.iter().collect());
            let cursor = self.styles.filter_cursor.clone().underline(true).render(&under);
            let line = format!("{}{}{}{}", prompt, before, cursor, after);
            return self.styles.title_bar.clone().render(&line);
        }
        if !self.show_title || self.title.is_empty() {
            return String::new();
        }
        let title = self.styles.title.clone().render(&self.title);
        self.styles.title_bar.clone().render(&title)
    }

    /// Item count, with the filter and number of hidden items when filtered.
    pub(super) fn view_status(&self) -> String {
        let singular = self.status_item_singular.as_deref().unwrap_or("item");
        let plural = self.status_item_plural.as_deref().unwrap_or("items");
        let total = self.items.len();
        let visible = self.len();

        if visible == 0 {
            let text = self.styles.status_empty.clone().render(&format!("No {}", plural));
            return self.styles.status_bar.clone().render(&text);
        }

        let noun = if visible == 1 { singular } else { plural };
        let mut status = if self.filter_state == FilterState::Unfiltered {
            format!("{}/{} {}", self.cursor + 1, visible, noun)
        } else {
            let filter = self
                .styles
                .status_bar_active_filter
                .clone()
                .render(&format!("“{}”", self.filter_input.value()));
            format!("{} {} {}", filter, visible, noun)
        };

        let hidden = total - visible;
        if hidden > 0 {
            let divider = self.styles.divider_dot.clone().render(&format!(" {} ", BULLET));
            let count = self
                .styles
                .status_bar_filter_count
                .clone()
                .render(&format!("{} filtered", hidden));
            status.push_str(&divider);
            status.push_str(&count);
        }
        self.styles.status_bar.clone().render(&status)
    }

    /// Items on the current page, rendered by the delegate with their
    /// visible index.
    pub(super) fn view_items(&self) -> String {
        if self.is_empty() {
            return self.styles.no_items.clone().render("No items.");
        }

        let (start, end) = self.page_bounds();
        let spacing = self.delegate.spacing();
        let mut rendered_items = Vec::new();
        for visible_index in start..end {
            let item = match self
                .canonical_index(visible_index)
                .and_then(|i| self.items.get(i))
            {
                Some(item) => item,
                None => continue,
            };
            let rendered = self.delegate.render(self, visible_index, item);
            if rendered.is_empty() {
                continue;
            }
            if !rendered_items.is_empty() {
                for _ in 0..spacing {
                    rendered_items.push(String::new());
                }
            }
            rendered_items.push(rendered);
        }
        rendered_items.join("\n")
    }

    /// One dot per page, the current page highlighted.
    pub(super) fn view_pagination(&self) -> String {
        let page = self.page();
        let dots: String = (0..self.total_pages())
            .map(|p| {
                if p == page {
                    self.styles.active_pagination_dot.clone().render(BULLET)
                } else {
                    self.styles.inactive_pagination_dot.clone().render(BULLET)
                }
            })
            .collect();
        self.styles.pagination_style.clone().render(&dots)
    }

    /// Short or full help built from the list bindings and the delegate's
    /// extra bindings.
    pub(super) fn view_help(&self) -> String {
        let extra_short = self.delegate.short_help();
        let extra_full = self.delegate.full_help();

        let body = if self.show_full_help {
            let mut columns = self.full_help();
            columns.extend(extra_full.iter().map(|col| col.iter().collect::<Vec<_>>()));
            self.full_help_view(&columns)
        } else {
            let mut bindings = self.short_help();
            // Delegate bindings go before quit and help; they are plain text
            // while the filter is being edited.
            if self.filter_state != FilterState::Filtering {
                let at = bindings.len().saturating_sub(2);
                for (offset, b) in extra_short.iter().enumerate() {
                    bindings.insert(at + offset, b);
                }
            }
            let frame = self.styles.help_style.get_horizontal_frame_size().max(0) as usize;
            self.short_help_view(&bindings, self.width.saturating_sub(frame))
        };
        if body.is_empty() {
            return String::new();
        }
        self.styles.help_style.clone().render(&body)
    }

    /// Lines used by the help body.
    pub(super) fn help_height(&self) -> usize {
        if !self.show_full_help {
            return 1;
        }
        let extra = self.delegate.full_help();
        self.full_help()
            .iter()
            .map(|col| col.iter().filter(|b| b.enabled()).count())
            .chain(extra.iter().map(|col| col.iter().filter(|b| b.enabled()).count()))
            .max()
            .unwrap_or(0)
    }

    fn help_entry(&self, b: &key::Binding) -> String {
        let help = b.help();
        format!(
            "{} {}",
            self.styles.help_key.clone().inline(true).render(&help.key),
            self.styles.help_desc.clone().inline(true).render(&help.desc)
        )
    }

    /// One line of help. Entries that do not fit in `width` are replaced by
    /// an ellipsis; a zero width means no limit.
    fn short_help_view(&self, bindings: &[&key::Binding], width: usize) -> String {
        let separator = self
            .styles
            .divider_dot
            .clone()
            .inline(true)
            .render(&format!(" {} ", BULLET));
        let mut out = String::new();
        let mut total = 0;
        for b in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total > 0 { separator.as_str() } else { "" };
            let entry = format!("{}{}", sep, self.help_entry(b));
            let entry_width = width_visible(&entry);
            if width > 0 && total + entry_width > width {
                let tail = format!(
                    " {}",
                    self.styles.divider_dot.clone().inline(true).render(ELLIPSIS)
                );
                if total + width_visible(&tail) < width {
                    out.push_str(&tail);
                }
                break;
            }
            total += entry_width;
            out.push_str(&entry);
        }
        out
    }

    fn full_help_view(&self, columns: &[Vec<&key::Binding>]) -> String {
        let rendered: Vec<Vec<String>> = columns
            .iter()
            .map(|col| {
                col.iter()
                    .filter(|b| b.enabled())
                    .map(|b| self.help_entry(b))
                    .collect()
            })
            .filter(|col: &Vec<String>| !col.is_empty())
            .collect();
        let widths: Vec<usize> = rendered
            .iter()
            .map(|col| {
                col.iter()
                    .map(|s| width_visible(s))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let rows = rendered.iter().map(Vec::len).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = String::new();
            for (c, col) in rendered.iter().enumerate() {
                let cell = col.get(row).map(String::as_str).unwrap_or("");
                line.push_str(cell);
                if c + 1 < rendered.len() {
                    let pad = widths[c] - width_visible(cell);
                    line.push_str(&" ".repeat(pad + 4));
                }
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

// Help integration: the list's own bindings, filtered by the current state.
impl<I: Item> KeyMap for Model<I> {
    fn short_help(&self) -> Vec<&key::Binding> {
        let km = &self.keymap;
        match self.filter_state {
            FilterState::Filtering => vec![&km.accept_filter, &km.cancel_filter],
            FilterState::FilterApplied => vec![
                &km.cursor_up,
                &km.cursor_down,
                &km.filter,
                &km.clear_filter,
                &km.show_full_help,
            ],
            FilterState::Unfiltered => vec![
                &km.cursor_up,
                &km.cursor_down,
                &km.filter,
                &km.quit,
                &km.show_full_help,
            ],
        }
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let km = &self.keymap;
        if self.filter_state == FilterState::Filtering {
            return vec![vec![&km.accept_filter, &km.cancel_filter]];
        }
        vec![
            vec![
                &km.cursor_up,
                &km.cursor_down,
                &km.next_page,
                &km.prev_page,
                &km.go_to_start,
                &km.go_to_end,
            ],
            vec![&km.filter, &km.clear_filter],
            vec![&km.close_full_help, &km.quit, &km.force_quit],
        ]
    }
}
