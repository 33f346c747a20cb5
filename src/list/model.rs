//! Main Model struct and core functionality for list components.
//!
//! This module contains the list state (items, cursor, filter, viewport size),
//! its construction, and its accessors.

use super::keys::ListKeyMap;
use super::style::ListStyles;
use super::types::{FilterState, FilteredItem, Item, ItemDelegate};

/// Single-line text editor backing the filter prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FilterInput {
    pub value: Vec<char>,
    pub pos: usize,
}

impl FilterInput {
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.pos, c);
        self.pos += 1;
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        self.value.remove(self.pos);
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.pos);
        true
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }
}

/// An interactive list with fuzzy filtering, paging, and delegate rendering.
///
/// The list keeps a canonical item sequence and, while a filter is active, a
/// view of matching items that refers back into it by index. The cursor is
/// always relative to the visible sequence.
///
/// # Examples
///
/// ```
/// use dofu_choose::choose::{ChoiceItem, ChooseDelegate, SelectionMode};
/// use dofu_choose::list::Model;
///
/// let items = vec![ChoiceItem::new("Apple", ""), ChoiceItem::new("Banana", "")];
/// let list = Model::new(items, ChooseDelegate::new(SelectionMode::Multi), 80, 24);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.index(), 0);
/// ```
pub struct Model<I: Item> {
    pub(super) title: String,
    pub(super) items: Vec<I>,
    pub(super) delegate: Box<dyn ItemDelegate<I> + Send + Sync>,

    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) styles: ListStyles,

    pub(super) show_title: bool,
    pub(super) show_status_bar: bool,
    pub(super) show_pagination: bool,
    pub(super) show_help: bool,
    pub(super) show_full_help: bool,
    pub(super) status_item_singular: Option<String>,
    pub(super) status_item_plural: Option<String>,

    pub(super) keymap: ListKeyMap,

    pub(super) filter_state: FilterState,
    pub(super) filtered_items: Vec<FilteredItem>,
    pub(super) cursor: usize,
    pub(super) filter_input: FilterInput,
}

impl<I: Item> std::fmt::Debug for Model<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("title", &self.title)
            .field("items", &self.items.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("filter_state", &self.filter_state)
            .field("filter", &self.filter_input.value())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Creates a new list with the provided items, delegate, and dimensions.
    ///
    /// The list starts unfiltered with the cursor on the first item and the
    /// title `"List"`.
    pub fn new<D>(items: Vec<I>, delegate: D, width: usize, height: usize) -> Self
    where
        D: ItemDelegate<I> + Send + Sync + 'static,
    {
        Self {
            title: "List".to_string(),
            items,
            delegate: Box::new(delegate),
            width,
            height,
            styles: ListStyles::default(),
            show_title: true,
            show_status_bar: true,
            show_pagination: true,
            show_help: true,
            show_full_help: false,
            status_item_singular: None,
            status_item_plural: None,
            keymap: ListKeyMap::default(),
            filter_state: FilterState::Unfiltered,
            filtered_items: vec![],
            cursor: 0,
            filter_input: FilterInput::default(),
        }
    }

    /// Sets the list title, for method chaining.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the list title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the styles.
    pub fn set_styles(&mut self, styles: ListStyles) {
        self.styles = styles;
    }

    /// Mutable access to the styles.
    pub fn styles_mut(&mut self) -> &mut ListStyles {
        &mut self.styles
    }

    /// Returns the key bindings.
    pub fn keymap(&self) -> &ListKeyMap {
        &self.keymap
    }

    /// Mutable access to the key bindings.
    pub fn keymap_mut(&mut self) -> &mut ListKeyMap {
        &mut self.keymap
    }

    /// Shows or hides the help footer.
    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Shows or hides the status line.
    pub fn set_show_status_bar(&mut self, show: bool) {
        self.show_status_bar = show;
    }

    /// Shows or hides the title bar.
    pub fn set_show_title(&mut self, show: bool) {
        self.show_title = show;
    }

    /// Shows or hides the pagination dots.
    pub fn set_show_pagination(&mut self, show: bool) {
        self.show_pagination = show;
    }

    /// Sets the nouns used in the status line ("1 module", "3 modules").
    pub fn set_status_bar_item_name(&mut self, singular: &str, plural: &str) {
        self.status_item_singular = Some(singular.to_string());
        self.status_item_plural = Some(plural.to_string());
    }

    /// Replaces all items and resets the cursor and any filter.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.reset_filter();
        self.cursor = 0;
    }

    /// The canonical, unfiltered items in insertion order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Replaces the item at `index` in the canonical sequence. Out of range
    /// indices are ignored and reported with `false`.
    ///
    /// The filtered view refers to items by index, so the replacement is
    /// visible immediately without refiltering.
    pub fn set_item(&mut self, index: usize, item: I) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Mutable access to the item at `index` in the canonical sequence.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut I> {
        self.items.get_mut(index)
    }

    /// Canonical index of the visible item at `visible_index`.
    pub fn canonical_index(&self, visible_index: usize) -> Option<usize> {
        if self.filter_state == FilterState::Unfiltered {
            (visible_index < self.items.len()).then_some(visible_index)
        } else {
            self.filtered_items.get(visible_index).map(|fi| fi.index)
        }
    }

    /// Items currently shown, in display order.
    pub fn visible_items(&self) -> Vec<&I> {
        if self.filter_state == FilterState::Unfiltered {
            self.items.iter().collect()
        } else {
            self.filtered_items
                .iter()
                .filter_map(|fi| self.items.get(fi.index))
                .collect()
        }
    }

    /// Returns the item under the cursor.
    pub fn selected_item(&self) -> Option<&I> {
        self.canonical_index(self.cursor)
            .and_then(|i| self.items.get(i))
    }

    /// Cursor position within the visible items.
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to the visible items.
    pub fn select(&mut self, index: usize) {
        self.cursor = index.min(self.len().saturating_sub(1));
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        if self.filter_state == FilterState::Unfiltered {
            self.items.len()
        } else {
            self.filtered_items.len()
        }
    }

    /// Whether no item is visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current filter state.
    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    /// Current filter text.
    pub fn filter_value(&self) -> String {
        self.filter_input.value()
    }

    /// Matched character positions for the visible item at `visible_index`.
    /// `None` when no filter is active.
    pub fn matches_for_item(&self, visible_index: usize) -> Option<&[usize]> {
        if self.filter_state == FilterState::Unfiltered {
            return None;
        }
        self.filtered_items
            .get(visible_index)
            .map(|fi| fi.matches.as_slice())
    }

    /// Width available to the list.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height available to the list.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resizes the list. The cursor stays on its item; the page follows it.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Rows used by the delegate for one item including spacing.
    pub(super) fn item_stride(&self) -> usize {
        self.delegate.height() + self.delegate.spacing()
    }

    /// How many items fit on one page at the current height.
    pub fn per_page(&self) -> usize {
        let stride = self.item_stride();
        if stride == 0 {
            return 1;
        }
        let chrome = self.chrome_height();
        let available = self.height.saturating_sub(chrome);
        // The last item on a page has no trailing spacing.
        ((available + self.delegate.spacing()) / stride).max(1)
    }

    /// Number of pages for the visible items.
    pub fn total_pages(&self) -> usize {
        let per_page = self.per_page();
        self.len().div_ceil(per_page).max(1)
    }

    /// Page holding the cursor.
    pub fn page(&self) -> usize {
        self.cursor / self.per_page()
    }

    /// Visible-index range rendered on the current page.
    pub(super) fn page_bounds(&self) -> (usize, usize) {
        let per_page = self.per_page();
        let start = self.page() * per_page;
        let end = (start + per_page).min(self.len());
        (start, end)
    }

    /// Lines used by everything except the items.
    fn chrome_height(&self) -> usize {
        let mut h = 0;
        if self.show_title || self.filter_state == FilterState::Filtering {
            h += 2; // title line + title bar bottom padding
        }
        if self.show_status_bar {
            h += 2; // status line + bottom padding
        }
        if self.show_pagination {
            h += 1;
        }
        if self.show_help {
            h += 1 + self.help_height(); // help_style top padding
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::FilterInput;

    #[test]
    fn test_filter_input_editing() {
        let mut input = FilterInput::default();
        for c in "abc".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "abc");

        input.set_cursor(1);
        input.insert('x');
        assert_eq!(input.value(), "axbc");
        assert_eq!(input.pos, 2);

        assert!(input.delete_backward());
        assert_eq!(input.value(), "abc");
        assert!(input.delete_forward());
        assert_eq!(input.value(), "ac");

        input.set_cursor(99);
        assert_eq!(input.pos, 2);
        assert!(!input.delete_forward());

        input.reset();
        assert_eq!(input.value(), "");
        assert!(!input.delete_backward());
    }
}
