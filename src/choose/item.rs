//! The selectable entry shown by the picker.

use crate::list::Item;
use std::fmt;

/// One selectable entry: a title, an optional (possibly multi-line)
/// description, and whether it is currently chosen.
///
/// Titles identify items when a toggle has to find the underlying entry
/// behind a filtered row, so they should be unique within one picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    title: String,
    description: String,
    chosen: bool,
}

impl ChoiceItem {
    /// Creates an unchosen item.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            chosen: false,
        }
    }

    /// Marks the item as chosen before the picker starts.
    pub fn with_chosen(mut self, chosen: bool) -> Self {
        self.chosen = chosen;
        self
    }

    /// Display name, also the filter key.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free text shown under the title; may span lines.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the item will be part of the result.
    pub fn is_chosen(&self) -> bool {
        self.chosen
    }

    pub(crate) fn set_chosen(&mut self, chosen: bool) {
        self.chosen = chosen;
    }
}

impl fmt::Display for ChoiceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl Item for ChoiceItem {
    fn filter_value(&self) -> String {
        self.title.clone()
    }
}

impl From<&str> for ChoiceItem {
    fn from(title: &str) -> Self {
        Self::new(title, "")
    }
}

impl From<String> for ChoiceItem {
    fn from(title: String) -> Self {
        Self::new(title, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_and_displays_by_title() {
        let item = ChoiceItem::new("zsh", "shell config\nwith plugins");
        assert_eq!(item.filter_value(), "zsh");
        assert_eq!(item.to_string(), "zsh");
        assert_eq!(item.description(), "shell config\nwith plugins");
        assert!(!item.is_chosen());
    }

    #[test]
    fn test_preseeded_chosen_flag() {
        let item = ChoiceItem::from("git").with_chosen(true);
        assert!(item.is_chosen());
        assert_eq!(item.description(), "");
    }
}
