//! Row styles and the picker frame.
//!
//! Rows are drawn in one of three looks: normal, selected (the cursor row,
//! marked with a left border) and dimmed (while an empty filter is being
//! typed). Filter matches are underlined on top of whichever applies.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;

/// Cursor marker in single mode.
pub const SINGLE_CHOSEN_PREFIX: &str = "> ";
/// Indent that lines rows up with a marker.
pub const ALIGN_PREFIX: &str = "  ";
/// Marker for a chosen item in multi mode.
pub const CHOSEN_PREFIX: &str = "◉ ";
/// Marker for an unchosen item in multi mode.
pub const UNCHOSEN_PREFIX: &str = "○ ";

/// Outer frame around the whole picker.
pub static APP_STYLE: Lazy<Style> = Lazy::new(|| Style::new().padding(1, 2, 1, 2));

/// Horizontal and vertical space taken by [`APP_STYLE`].
pub const APP_FRAME: (usize, usize) = (4, 2);

/// Picker title: light text on green.
pub static TITLE_STYLE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from("#FFFDF5"))
        .background(Color::from("#25A065"))
        .padding(0, 1, 0, 1)
});

/// Columns a row style adds to the left of the text.
pub(crate) const ROW_INSET: usize = 2;

/// Styles for picker rows in each visual state.
#[derive(Debug, Clone)]
pub struct ChooseItemStyles {
    /// Title style in normal state.
    pub normal_title: Style,
    /// Description style in normal state.
    pub normal_desc: Style,
    /// Title style on the cursor row.
    pub selected_title: Style,
    /// Description style on the cursor row.
    pub selected_desc: Style,
    /// Title style while an empty filter is being typed.
    pub dimmed_title: Style,
    /// Description style while an empty filter is being typed.
    pub dimmed_desc: Style,
    /// Applied on top of the title style for matched characters.
    pub filter_match: Style,
}

impl Default for ChooseItemStyles {
    fn default() -> Self {
        let normal_title = Style::new()
            .foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            })
            .padding(0, 0, 0, 2);
        let normal_desc = normal_title.clone().foreground(AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        });
        let selected_title = Style::new()
            .border_style(lipgloss::normal_border())
            .border_top(false)
            .border_right(false)
            .border_bottom(false)
            .border_left(true)
            .border_left_foreground(Color::from("#AD58B4"))
            .foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            })
            .padding(0, 0, 0, 1);
        let selected_desc = selected_title.clone().foreground(AdaptiveColor {
            Light: "#F793FF",
            Dark: "#AD58B4",
        });
        let dimmed_title = Style::new()
            .foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            })
            .padding(0, 0, 0, 2);
        let dimmed_desc = dimmed_title.clone().foreground(AdaptiveColor {
            Light: "#C2B8C2",
            Dark: "#4D4D4D",
        });
        Self {
            normal_title,
            normal_desc,
            selected_title,
            selected_desc,
            dimmed_title,
            dimmed_desc,
            filter_match: Style::new().underline(true),
        }
    }
}

/// The colour and attribute part of a row style, without its padding or
/// border. Used for runs inside a row that is framed once as a whole.
pub(crate) fn text_only(style: &Style) -> Style {
    style
        .clone()
        .unset_padding()
        .unset_margins()
        .unset_border_style()
}

/// Renders `text` with the characters at `matches` in `highlight` and the
/// rest in `normal`. Positions are character indices.
pub(crate) fn style_runes(
    text: &str,
    matches: &[usize],
    highlight: &Style,
    normal: &Style,
) -> String {
    if matches.is_empty() {
        return normal.render(text);
    }

    let mut out = String::new();
    let mut run = String::new();
    let mut run_matched = false;
    for (i, c) in text.chars().enumerate() {
        let matched = matches.contains(&i);
        if matched != run_matched && !run.is_empty() {
            let style = if run_matched { highlight } else { normal };
            out.push_str(&style.render(&run));
            run.clear();
        }
        run_matched = matched;
        run.push(c);
    }
    if !run.is_empty() {
        let style = if run_matched { highlight } else { normal };
        out.push_str(&style.render(&run));
    }
    out
}
