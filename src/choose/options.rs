//! Picker configuration.

/// Default number of lines per row when descriptions are shown.
pub const DEFAULT_HEIGHT: usize = 2;

/// Whether the picker returns one item or any number of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one item; toggling an item completes the session.
    #[default]
    Single,
    /// Any number of items; the user confirms explicitly.
    Multi,
}

/// Options for one picker session. Zero values give the defaults: single
/// mode, no description, no spacing.
///
/// ```rust
/// use dofu_choose::choose::{Options, SelectionMode};
///
/// let opt = Options::default()
///     .with_title("Pick modules")
///     .with_no_limit(true)
///     .with_description(true);
/// assert_eq!(opt.mode(), SelectionMode::Multi);
/// assert_eq!(opt.row_height(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Header text.
    pub title: String,
    /// Allow choosing any number of items.
    pub no_limit: bool,
    /// Draw descriptions under titles.
    pub show_description: bool,
    /// Lines per row including the title; 0 means [`DEFAULT_HEIGHT`].
    pub height: usize,
    /// Blank lines between rows.
    pub space: usize,
}

impl Options {
    /// Sets the header text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Allows choosing any number of items.
    pub fn with_no_limit(mut self, no_limit: bool) -> Self {
        self.no_limit = no_limit;
        self
    }

    /// Shows descriptions under titles.
    pub fn with_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    /// Sets lines per row including the title.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Sets blank lines between rows.
    pub fn with_space(mut self, space: usize) -> Self {
        self.space = space;
        self
    }

    /// Selection mode implied by `no_limit`.
    pub fn mode(&self) -> SelectionMode {
        if self.no_limit {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }

    /// Configured row height with the default applied.
    pub fn row_height(&self) -> usize {
        if self.height == 0 {
            DEFAULT_HEIGHT
        } else {
            self.height
        }
    }
}
