//! Styling for list components.
//!
//! Styles cover the list chrome (title bar, filter prompt, status bar,
//! pagination dots and help). Item rows are styled by the delegate.
//!
//! All colors are `AdaptiveColor`s so they read well on light and dark
//! terminals.
//!
//! ```rust
//! use dofu_choose::list::style::{ListStyles, BULLET};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.title = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
//!     .bold(true);
//! assert_eq!(BULLET, "•");
//! ```

use lipgloss_extras::prelude::*;

/// Pagination dot.
pub const BULLET: &str = "•";

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Styles for the list chrome.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Frame around the title or filter prompt.
    pub title_bar: Style,
    /// The title text.
    pub title: Style,
    /// The `Filter:` prompt.
    pub filter_prompt: Style,
    /// The filter editor cursor.
    pub filter_cursor: Style,
    /// Frame around the status line.
    pub status_bar: Style,
    /// Status text when nothing is visible.
    pub status_empty: Style,
    /// The quoted filter in the status line.
    pub status_bar_active_filter: Style,
    /// The "N filtered" count.
    pub status_bar_filter_count: Style,
    /// The placeholder shown instead of items when nothing matches.
    pub no_items: Style,
    /// Frame around the pagination dots.
    pub pagination_style: Style,
    /// Frame around the help line.
    pub help_style: Style,
    /// Key names in help.
    pub help_key: Style,
    /// Descriptions in help.
    pub help_desc: Style,
    /// Dot for the current page.
    pub active_pagination_dot: Style,
    /// Dot for other pages.
    pub inactive_pagination_dot: Style,
    /// Separator between help entries and status segments.
    pub divider_dot: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let very_subdued_color = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_cursor: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 1, 2),
            status_empty: Style::new().foreground(subdued_color.clone()),
            status_bar_active_filter: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            status_bar_filter_count: Style::new().foreground(very_subdued_color.clone()),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pagination_style: Style::new().padding_left(2),
            help_style: Style::new().padding(1, 0, 0, 2),
            help_key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help_desc: Style::new().foreground(subdued_color),
            active_pagination_dot: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            inactive_pagination_dot: Style::new().foreground(very_subdued_color.clone()),
            divider_dot: Style::new().foreground(very_subdued_color),
        }
    }
}
