//! Row rendering for the picker.
//!
//! A row is a prefix (cursor pointer in single mode, chosen marker in multi
//! mode) followed by the truncated title and, optionally, description lines.
//! [`ChooseDelegate::render_row`] does the work from a [`RowContext`] alone,
//! so it can be exercised without a list or a terminal.

use super::item::ChoiceItem;
use super::keys::ChooseKeyMap;
use super::options::{Options, SelectionMode, DEFAULT_HEIGHT};
use super::style::{
    style_runes, text_only, ChooseItemStyles, ALIGN_PREFIX, CHOSEN_PREFIX, ROW_INSET,
    SINGLE_CHOSEN_PREFIX, UNCHOSEN_PREFIX,
};
use super::truncate::truncate_text;
use crate::key::{self, KeyMap};
use crate::list::style::ELLIPSIS;
use crate::list::{FilterState, ItemDelegate, Model};
use unicode_width::UnicodeWidthStr;

/// Everything about the list that affects how one row looks.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// Whether the row is under the cursor.
    pub is_cursor: bool,
    /// Current filter state of the list.
    pub filter_state: FilterState,
    /// Whether the filter text is empty.
    pub filter_empty: bool,
    /// Matched character positions in the title, if filtered.
    pub matches: Option<&'a [usize]>,
    /// Columns available to the row.
    pub width: usize,
}

/// Renders [`ChoiceItem`]s with selection markers.
#[derive(Debug, Clone)]
pub struct ChooseDelegate {
    mode: SelectionMode,
    /// Draw descriptions under titles.
    pub show_description: bool,
    /// Row styles.
    pub styles: ChooseItemStyles,
    /// Bindings listed in the help footer.
    pub keys: ChooseKeyMap,
    height: usize,
    spacing: usize,
}

impl ChooseDelegate {
    /// Creates a delegate for `mode` with no descriptions and no spacing.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            show_description: false,
            styles: ChooseItemStyles::default(),
            keys: ChooseKeyMap::default(),
            height: DEFAULT_HEIGHT,
            spacing: 0,
        }
    }

    /// Creates a delegate configured from picker options.
    pub fn from_options(opt: &Options) -> Self {
        let mut d = Self::new(opt.mode());
        d.show_description = opt.show_description;
        d.height = opt.row_height();
        d.spacing = opt.space;
        d
    }

    /// Selection mode the rows are drawn for.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets lines per row when descriptions are shown. 0 restores the default.
    pub fn set_height(&mut self, height: usize) {
        self.height = if height == 0 { DEFAULT_HEIGHT } else { height };
    }

    /// Sets blank lines between rows.
    pub fn set_spacing(&mut self, spacing: usize) {
        self.spacing = spacing;
    }

    fn prefixes(&self, item: &ChoiceItem, is_cursor: bool) -> (&'static str, &'static str) {
        match self.mode {
            SelectionMode::Single if is_cursor => (SINGLE_CHOSEN_PREFIX, ALIGN_PREFIX),
            SelectionMode::Single => (ALIGN_PREFIX, ALIGN_PREFIX),
            SelectionMode::Multi if item.is_chosen() => (CHOSEN_PREFIX, ALIGN_PREFIX),
            SelectionMode::Multi => (UNCHOSEN_PREFIX, ALIGN_PREFIX),
        }
    }

    /// Renders one row. Returns an empty string when there is no width.
    pub fn render_row(&self, item: &ChoiceItem, ctx: &RowContext<'_>) -> String {
        if ctx.width == 0 {
            return String::new();
        }

        let s = &self.styles;
        let (title_prefix, desc_prefix) = self.prefixes(item, ctx.is_cursor);
        let text_width = ctx
            .width
            .saturating_sub(UnicodeWidthStr::width(title_prefix) + ROW_INSET);
        let (mut title, desc) = truncate_text(
            item.title(),
            item.description(),
            text_width,
            self.show_description,
            self.height,
            ELLIPSIS,
        );

        let is_filtering = ctx.filter_state == FilterState::Filtering;
        let is_filter_empty = is_filtering && ctx.filter_empty;
        let is_filtered = ctx.filter_state != FilterState::Unfiltered;
        let is_selected = ctx.is_cursor && !is_filtering;

        let (title_style, desc_style) = if is_filter_empty {
            (&s.dimmed_title, &s.dimmed_desc)
        } else if is_selected {
            (&s.selected_title, &s.selected_desc)
        } else {
            (&s.normal_title, &s.normal_desc)
        };

        if let Some(matches) = ctx.matches.filter(|m| is_filtered && !m.is_empty()) {
            // The ellipsis of a cut title is not part of the match.
            let kept = if title == item.title() {
                title.chars().count()
            } else {
                title.chars().count().saturating_sub(1)
            };
            let matches: Vec<usize> = matches.iter().copied().filter(|&i| i < kept).collect();
            // Runs carry only colour; the row frame is drawn once below.
            let unmatched = text_only(title_style);
            let matched = unmatched.clone().inherit(s.filter_match.clone());
            title = style_runes(&title, &matches, &matched, &unmatched);
        }

        let title = title_style.render(&format!("{}{}", title_prefix, title));
        if !self.show_description {
            return title;
        }
        let desc = desc
            .split('\n')
            .map(|line| format!("{}{}", desc_prefix, line))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n{}", title, desc_style.render(&desc))
    }
}

impl ItemDelegate<ChoiceItem> for ChooseDelegate {
    fn render(&self, m: &Model<ChoiceItem>, index: usize, item: &ChoiceItem) -> String {
        let ctx = RowContext {
            is_cursor: index == m.index(),
            filter_state: m.filter_state(),
            filter_empty: m.filter_value().is_empty(),
            matches: m.matches_for_item(index),
            width: m.width(),
        };
        self.render_row(item, &ctx)
    }

    fn height(&self) -> usize {
        if self.show_description {
            self.height
        } else {
            1
        }
    }

    fn spacing(&self) -> usize {
        self.spacing
    }

    fn short_help(&self) -> Vec<key::Binding> {
        self.keys.short_help().into_iter().cloned().collect()
    }

    fn full_help(&self) -> Vec<Vec<key::Binding>> {
        self.keys
            .full_help()
            .into_iter()
            .map(|col| col.into_iter().cloned().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;
    use pretty_assertions::assert_eq;

    fn ctx(is_cursor: bool, width: usize) -> RowContext<'static> {
        RowContext {
            is_cursor,
            filter_state: FilterState::Unfiltered,
            filter_empty: true,
            matches: None,
            width,
        }
    }

    fn plain(d: &ChooseDelegate, item: &ChoiceItem, c: &RowContext<'_>) -> String {
        lipgloss::strip_ansi(&d.render_row(item, c))
    }

    #[test]
    fn test_single_mode_prefixes() {
        let d = ChooseDelegate::new(SelectionMode::Single);
        let item = ChoiceItem::new("vim", "");
        assert!(plain(&d, &item, &ctx(true, 40)).contains("> vim"));
        let other = plain(&d, &item, &ctx(false, 40));
        assert!(other.contains("  vim"));
        assert!(!other.contains('>'));
    }

    #[test]
    fn test_multi_mode_markers_follow_chosen_flag() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        let item = ChoiceItem::new("vim", "");
        assert!(plain(&d, &item, &ctx(true, 40)).contains("○ vim"));
        let chosen = item.with_chosen(true);
        assert!(plain(&d, &chosen, &ctx(false, 40)).contains("◉ vim"));
    }

    #[test]
    fn test_zero_width_renders_nothing() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        assert_eq!(d.render_row(&ChoiceItem::from("vim"), &ctx(true, 0)), "");
    }

    #[test]
    fn test_row_fits_width() {
        let d = ChooseDelegate::new(SelectionMode::Single);
        let row = plain(&d, &ChoiceItem::from("a very long title"), &ctx(false, 10));
        assert_eq!(row.trim_end(), "    a ver…");
        assert!(lipgloss::width_visible(row.trim_end()) <= 10);
    }

    #[test]
    fn test_description_lines_are_prefixed_and_capped() {
        let opt = Options::default()
            .with_no_limit(true)
            .with_description(true)
            .with_height(3);
        let d = ChooseDelegate::from_options(&opt);
        let item = ChoiceItem::new("git", "line one\nline two\nline three");
        let row = plain(&d, &item, &ctx(false, 40));
        let lines: Vec<&str> = row.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["  ○ git", "    line one", "    line two"]);
    }

    #[test]
    fn test_description_hidden_by_default() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        let row = plain(&d, &ChoiceItem::new("git", "version control"), &ctx(false, 40));
        assert!(!row.contains("version control"));
        assert_eq!(row.lines().count(), 1);
    }

    fn filtered(is_cursor: bool, matches: Option<&[usize]>) -> RowContext<'_> {
        RowContext {
            is_cursor,
            filter_state: FilterState::FilterApplied,
            filter_empty: false,
            matches,
            width: 40,
        }
    }

    #[test]
    fn test_highlighting_keeps_text() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        let matches = [0usize, 2];
        let row = d.render_row(&ChoiceItem::from("tmux"), &filtered(false, Some(&matches)));
        assert!(lipgloss::strip_ansi(&row).contains("○ tmux"));
    }

    #[test]
    fn test_highlighting_keeps_row_layout() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        let item = ChoiceItem::from("alpha");
        let matches = [0usize, 4];
        for is_cursor in [false, true] {
            let plain_row = d.render_row(&item, &filtered(is_cursor, None));
            let lit = d.render_row(&item, &filtered(is_cursor, Some(&matches)));
            assert_eq!(lit.lines().count(), 1);
            assert_eq!(lipgloss::strip_ansi(&lit), lipgloss::strip_ansi(&plain_row));
        }
    }

    #[test]
    fn test_cursor_row_highlight_is_one_line() {
        let d = ChooseDelegate::new(SelectionMode::Single);
        let matches = [1usize];
        let row = d.render_row(&ChoiceItem::from("beta"), &filtered(true, Some(&matches)));
        assert_eq!(row.lines().count(), 1);
        assert_eq!(lipgloss::strip_ansi(&row).trim_end(), "│ > beta");
    }

    #[test]
    fn test_empty_filter_dims_every_row() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        let s = &d.styles;
        let chosen = ChoiceItem::from("vim").with_chosen(true);
        for is_cursor in [false, true] {
            let c = RowContext {
                is_cursor,
                filter_state: FilterState::Filtering,
                filter_empty: true,
                matches: None,
                width: 40,
            };
            assert_eq!(d.render_row(&chosen, &c), s.dimmed_title.render("◉ vim"));
        }
    }

    #[test]
    fn test_cursor_row_selected_unless_editing_filter() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        let s = &d.styles;
        let item = ChoiceItem::from("vim");

        assert_eq!(d.render_row(&item, &ctx(true, 40)), s.selected_title.render("○ vim"));
        assert_eq!(
            d.render_row(&item, &filtered(true, None)),
            s.selected_title.render("○ vim")
        );

        let editing = RowContext {
            is_cursor: true,
            filter_state: FilterState::Filtering,
            filter_empty: false,
            matches: None,
            width: 40,
        };
        assert_eq!(d.render_row(&item, &editing), s.normal_title.render("○ vim"));
    }

    #[test]
    fn test_other_rows_are_normal() {
        let d = ChooseDelegate::new(SelectionMode::Multi);
        let s = &d.styles;
        let item = ChoiceItem::from("vim");
        assert_eq!(d.render_row(&item, &ctx(false, 40)), s.normal_title.render("○ vim"));
        assert_eq!(
            d.render_row(&item, &filtered(false, None)),
            s.normal_title.render("○ vim")
        );
    }

    #[test]
    fn test_height_depends_on_description() {
        let mut d = ChooseDelegate::new(SelectionMode::Multi);
        assert_eq!(ItemDelegate::<ChoiceItem>::height(&d), 1);
        d.show_description = true;
        d.set_height(0);
        assert_eq!(ItemDelegate::<ChoiceItem>::height(&d), DEFAULT_HEIGHT);
    }
}
