//! Scenario tests for the picker, driven through `Model::handle` without a
//! terminal.

use super::*;
use crate::key::KeyPress;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use pretty_assertions::assert_eq;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyPress::from(code))
}

fn ch(c: char) -> Event {
    key(KeyCode::Char(c))
}

fn ctrl_c() -> Event {
    Event::Key(KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

fn down() -> Event {
    key(KeyCode::Down)
}

fn toggle() -> Event {
    key(KeyCode::Tab)
}

fn enter() -> Event {
    key(KeyCode::Enter)
}

fn picker(titles: &[&str], mode: SelectionMode) -> Model {
    let items = titles.iter().map(|t| ChoiceItem::from(*t)).collect();
    let opt = Options::default().with_no_limit(mode == SelectionMode::Multi);
    Model::new(items, &opt)
}

/// Feeds events and returns the effect of the last one.
fn feed(m: &mut Model, events: &[Event]) -> Effect {
    events
        .iter()
        .fold(Effect::None, |_, event| m.handle(*event))
}

fn type_str(m: &mut Model, s: &str) {
    for c in s.chars() {
        m.handle(ch(c));
    }
}

/// View with styling removed and trailing blanks trimmed from each line.
fn normalize(s: &str) -> String {
    lipgloss::strip_ansi(s)
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_multi_toggle_then_complete() {
    let mut m = picker(&["a", "b", "c"], SelectionMode::Multi);
    let effect = feed(&mut m, &[down(), toggle(), down(), toggle(), enter()]);
    assert_eq!(effect, Effect::Quit);
    assert_eq!(m.phase(), Phase::Terminated(Outcome::Confirmed));
    assert_eq!(m.selection(), Selection::Confirmed(vec!["b".into(), "c".into()]));
}

#[test]
fn test_single_toggle_completes_immediately() {
    let mut m = picker(&["a", "b"], SelectionMode::Single);
    assert_eq!(m.handle(down()), Effect::Redraw);
    assert_eq!(m.handle(toggle()), Effect::Quit);
    assert_eq!(m.outcome(), Some(Outcome::Confirmed));
    assert_eq!(m.chosen(), vec!["b".to_string()]);
}

#[test]
fn test_single_toggle_replaces_preseeded_choice() {
    let items = vec![ChoiceItem::from("a"), ChoiceItem::from("b").with_chosen(true)];
    let mut m = Model::new(items, &Options::default());
    m.handle(toggle());
    assert_eq!(m.selection(), Selection::Confirmed(vec!["a".into()]));
}

#[test]
fn test_force_quit_discards_toggles() {
    let mut m = picker(&["a", "b"], SelectionMode::Multi);
    let effect = feed(&mut m, &[toggle(), down(), toggle(), ctrl_c()]);
    assert_eq!(effect, Effect::Quit);
    assert!(m.was_force_quit());
    assert_eq!(m.selection(), Selection::Cancelled);
}

#[test]
fn test_force_quit_while_filtering() {
    let mut m = picker(&["a", "b"], SelectionMode::Multi);
    m.handle(toggle());
    m.handle(ch('/'));
    m.handle(ch('a'));
    assert_eq!(m.phase(), Phase::Filtering);
    assert_eq!(m.handle(ctrl_c()), Effect::Quit);
    assert_eq!(m.phase(), Phase::Terminated(Outcome::Cancelled));
    assert_eq!(m.selection(), Selection::Cancelled);
}

#[test]
fn test_force_quit_first_thing() {
    for mode in [SelectionMode::Single, SelectionMode::Multi] {
        let mut m = picker(&["a", "b"], mode);
        m.handle(ctrl_c());
        assert_eq!(m.selection(), Selection::Cancelled);
    }
}

#[test]
fn test_double_toggle_unchooses() {
    let mut m = picker(&["a", "b"], SelectionMode::Multi);
    feed(&mut m, &[toggle(), toggle(), enter()]);
    assert_eq!(m.selection(), Selection::Confirmed(vec![]));
}

#[test]
fn test_odd_toggles_are_chosen() {
    // (moves down before toggling, toggles) per step
    let plan = [(0, 3), (1, 2), (1, 1)];
    let mut m = picker(&["a", "b", "c"], SelectionMode::Multi);
    for (moves, toggles) in plan {
        for _ in 0..moves {
            m.handle(down());
        }
        for _ in 0..toggles {
            m.handle(toggle());
        }
    }
    m.handle(enter());
    assert_eq!(m.chosen(), vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn test_preseeded_flags_survive() {
    let items = vec![ChoiceItem::from("a"), ChoiceItem::from("b").with_chosen(true)];
    let mut m = Model::new(items, &Options::default().with_no_limit(true));
    m.handle(enter());
    assert_eq!(m.selection(), Selection::Confirmed(vec!["b".into()]));
}

#[test]
fn test_filtering_preserves_chosen_flags() {
    let mut m = picker(&["vim", "zsh", "tmux"], SelectionMode::Multi);
    m.handle(toggle());
    m.handle(ch('/'));
    type_str(&mut m, "zsh");
    assert_eq!(m.list().len(), 1);
    m.handle(enter());
    assert_eq!(m.phase(), Phase::Browsing);
    m.handle(key(KeyCode::Esc));
    assert_eq!(m.list().len(), 3);
    assert!(m.items()[0].is_chosen());
    m.handle(enter());
    assert_eq!(m.selection(), Selection::Confirmed(vec!["vim".into()]));
}

#[test]
fn test_toggle_under_filter_targets_underlying_item() {
    let mut m = picker(&["apple", "banana", "cherry"], SelectionMode::Multi);
    m.handle(ch('/'));
    type_str(&mut m, "ch");
    m.handle(enter());
    assert_eq!(m.list().filter_state(), crate::list::FilterState::FilterApplied);
    m.handle(toggle());
    assert_eq!(m.chosen(), vec!["cherry".to_string()]);
    assert!(!m.items()[0].is_chosen());
}

#[test]
fn test_toggle_and_complete_are_text_while_filtering() {
    let mut m = picker(&["a b", "ab"], SelectionMode::Multi);
    m.handle(ch('/'));
    m.handle(ch(' '));
    assert_eq!(m.phase(), Phase::Filtering);
    assert_eq!(m.list().filter_value(), " ");
    assert!(m.chosen().is_empty());

    // enter accepts the filter instead of completing
    assert_eq!(m.handle(enter()), Effect::Redraw);
    assert_eq!(m.phase(), Phase::Browsing);
    assert_eq!(m.list().filter_value(), " ");
}

#[test]
fn test_space_toggles_while_browsing() {
    let mut m = picker(&["a", "b"], SelectionMode::Multi);
    m.handle(ch(' '));
    assert_eq!(m.chosen(), vec!["a".to_string()]);
}

#[test]
fn test_empty_filter_accept_returns_to_browsing() {
    let mut m = picker(&["a"], SelectionMode::Multi);
    m.handle(ch('/'));
    m.handle(toggle());
    assert_eq!(m.phase(), Phase::Browsing);
    assert!(m.chosen().is_empty());
}

#[test]
fn test_complete_with_nothing_visible() {
    let mut m = picker(&["a", "b"], SelectionMode::Multi);
    m.handle(toggle());
    m.handle(ch('/'));
    type_str(&mut m, "zzz");
    m.handle(enter());
    assert!(m.list().is_empty());
    assert_eq!(m.handle(toggle()), Effect::None);
    assert_eq!(m.handle(enter()), Effect::Quit);
    assert_eq!(m.selection(), Selection::Confirmed(vec!["a".into()]));
}

#[test]
fn test_quit_key_confirms() {
    let mut m = picker(&["a", "b"], SelectionMode::Multi);
    m.handle(toggle());
    assert_eq!(m.handle(ch('q')), Effect::Quit);
    assert_eq!(m.selection(), Selection::Confirmed(vec!["a".into()]));
}

#[test]
fn test_terminated_ignores_input() {
    let mut m = picker(&["a", "b"], SelectionMode::Multi);
    m.handle(enter());
    assert_eq!(m.handle(toggle()), Effect::None);
    assert_eq!(m.handle(ctrl_c()), Effect::None);
    assert_eq!(m.selection(), Selection::Confirmed(vec![]));
}

#[test]
fn test_toggle_on_empty_list_is_noop() {
    let mut m = picker(&[], SelectionMode::Multi);
    assert_eq!(m.handle(toggle()), Effect::None);
    assert_eq!(m.phase(), Phase::Browsing);
}

#[test]
fn test_resize_subtracts_frame() {
    let mut m = picker(&["a"], SelectionMode::Multi);
    assert_eq!(
        m.handle(Event::Resize {
            width: 80,
            height: 24
        }),
        Effect::Redraw
    );
    assert_eq!(m.list().width(), 76);
    assert_eq!(m.list().height(), 22);
    assert_eq!(m.phase(), Phase::Browsing);

    m.handle(Event::Resize {
        width: 1,
        height: 1,
    });
    assert_eq!(m.list().width(), 0);
}

#[test]
fn test_action_precedence() {
    let mut m = picker(&["a"], SelectionMode::Multi);
    let press = |c: KeyCode| KeyPress::from(c);
    let ctrl = KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert_eq!(m.resolve(&ctrl), Action::ForceQuit);
    assert_eq!(m.resolve(&press(KeyCode::Enter)), Action::Complete);
    assert_eq!(m.resolve(&press(KeyCode::Tab)), Action::Toggle);
    assert_eq!(m.resolve(&press(KeyCode::Char(' '))), Action::Toggle);
    assert_eq!(m.resolve(&press(KeyCode::Char('j'))), Action::Navigate);

    m.handle(ch('/'));
    assert_eq!(m.resolve(&ctrl), Action::ForceQuit);
    assert_eq!(m.resolve(&press(KeyCode::Enter)), Action::Navigate);
    assert_eq!(m.resolve(&press(KeyCode::Tab)), Action::Navigate);
    assert_eq!(m.resolve(&press(KeyCode::Char(' '))), Action::Navigate);
}

#[test]
fn test_view_shows_markers_and_help() {
    let items = vec![ChoiceItem::from("alpha"), ChoiceItem::from("beta")];
    let opt = Options::default().with_title("Pick").with_no_limit(true);
    let mut m = Model::new(items, &opt);
    m.handle(Event::Resize {
        width: 60,
        height: 20,
    });
    m.handle(down());
    m.handle(toggle());

    let view = normalize(&m.view());
    assert!(view.contains("Pick"));
    assert!(view.contains("○ alpha"));
    assert!(view.contains("◉ beta"));
    assert!(view.contains("toggle selection"));
}

#[test]
fn test_single_view_points_at_cursor() {
    let mut m = picker(&["alpha", "beta"], SelectionMode::Single);
    m.handle(Event::Resize {
        width: 60,
        height: 20,
    });
    m.handle(down());
    let view = normalize(&m.view());
    assert!(view.contains("> beta"));
    assert!(!view.contains("> alpha"));
}

#[test]
fn test_description_rows() {
    let items = vec![ChoiceItem::new("zsh", "shell\nplugins\nthemes")];
    let opt = Options::default()
        .with_no_limit(true)
        .with_description(true)
        .with_height(2);
    let mut m = Model::new(items, &opt);
    m.handle(Event::Resize {
        width: 60,
        height: 20,
    });
    let view = normalize(&m.view());
    assert!(view.contains("shell"));
    assert!(!view.contains("plugins"));
}

#[test]
fn test_no_width_renders_no_rows() {
    let m = picker(&["alpha"], SelectionMode::Multi);
    assert!(!normalize(&m.view()).contains("alpha"));
}

#[test]
fn test_filtered_view_keeps_rows_intact() {
    let mut m = picker(&["alpha", "beta", "gamma"], SelectionMode::Multi);
    m.handle(Event::Resize {
        width: 60,
        height: 30,
    });
    feed(&mut m, &[ch('/'), ch('a'), enter()]);
    assert_eq!(m.phase(), Phase::Browsing);
    assert_eq!(m.list().filter_state(), crate::list::FilterState::FilterApplied);

    let view = normalize(&m.view());
    for title in ["alpha", "beta", "gamma"] {
        assert!(view.contains(&format!("○ {}", title)), "{}", view);
    }
    assert!(!view.contains('┌'));
}

#[test]
fn test_help_fits_narrow_terminal() {
    let mut m = picker(&["alpha", "beta"], SelectionMode::Multi);
    m.handle(Event::Resize {
        width: 40,
        height: 20,
    });
    let view = normalize(&m.view());
    assert!(view.lines().all(|l| lipgloss::width_visible(l) <= 40), "{}", view);
    assert!(view.contains("/ filter …"));
    assert!(!view.contains("complete with selections"));
}
