//! The selection controller.
//!
//! Owns the list of [`ChoiceItem`]s and drives it through the phases in
//! [`super::state`]. Every event is handled by [`Model::handle`], a total
//! function that never fails; the bubbletea-rs [`BubbleTeaModel`] impl only
//! translates runtime messages into events and effects into commands.

use super::delegate::ChooseDelegate;
use super::item::ChoiceItem;
use super::keys::ChooseKeyMap;
use super::options::{Options, SelectionMode};
use super::run::{take_seed, Selection};
use super::state::{Action, Effect, Event, Outcome, Phase};
use super::style::{APP_FRAME, APP_STYLE, TITLE_STYLE};
use crate::key::KeyPress;
use crate::list::{self, FilterState, ListSignal};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use tracing::{debug, warn};

/// Interactive picker over a list of [`ChoiceItem`]s.
///
/// ```rust
/// use dofu_choose::choose::{ChoiceItem, Event, Model, Options};
/// use dofu_choose::key::KeyPress;
/// use crossterm::event::KeyCode;
///
/// let items = vec![ChoiceItem::from("a"), ChoiceItem::from("b")];
/// let mut picker = Model::new(items, &Options::default().with_no_limit(true));
/// picker.handle(Event::Key(KeyPress::from(KeyCode::Tab)));
/// picker.handle(Event::Key(KeyPress::from(KeyCode::Enter)));
/// assert_eq!(picker.chosen(), vec!["a".to_string()]);
/// assert!(!picker.was_force_quit());
/// ```
#[derive(Debug)]
pub struct Model {
    list: list::Model<ChoiceItem>,
    keys: ChooseKeyMap,
    mode: SelectionMode,
    phase: Phase,
}

impl Model {
    /// Creates a picker over `items`. Pre-set chosen flags are kept.
    ///
    /// The list starts with no size and renders nothing until the first
    /// resize event.
    pub fn new(items: Vec<ChoiceItem>, opt: &Options) -> Self {
        let delegate = ChooseDelegate::from_options(opt);
        let keys = delegate.keys.clone();
        let mut list = list::Model::new(items, delegate, 0, 0).with_title(&opt.title);
        list.styles_mut().title = TITLE_STYLE.clone();
        if opt.title.is_empty() {
            list.set_show_title(false);
        }
        Self {
            list,
            keys,
            mode: opt.mode(),
            phase: Phase::Browsing,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Single or multi selection.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// How the session ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Terminated(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// True once the user has force-quit.
    pub fn was_force_quit(&self) -> bool {
        self.phase == Phase::Terminated(Outcome::Cancelled)
    }

    /// Titles of chosen items in their original order.
    pub fn chosen(&self) -> Vec<String> {
        self.list
            .items()
            .iter()
            .filter(|i| i.is_chosen())
            .map(|i| i.title().to_string())
            .collect()
    }

    /// The session result. A session that stopped without terminating (the
    /// host loop was interrupted) counts as cancelled.
    pub fn selection(&self) -> Selection {
        match self.phase {
            Phase::Terminated(Outcome::Confirmed) => Selection::Confirmed(self.chosen()),
            _ => Selection::Cancelled,
        }
    }

    /// The items with their current chosen flags.
    pub fn items(&self) -> &[ChoiceItem] {
        self.list.items()
    }

    /// The underlying list.
    pub fn list(&self) -> &list::Model<ChoiceItem> {
        &self.list
    }

    /// Sizes the picker to a terminal of `width` x `height`.
    pub fn set_size(&mut self, width: usize, height: usize) {
        let (h, v) = APP_FRAME;
        self.list
            .set_size(width.saturating_sub(h), height.saturating_sub(v));
    }

    /// Applies one event and reports what the host loop should do.
    pub fn handle(&mut self, event: Event) -> Effect {
        if self.phase.is_terminated() {
            return Effect::None;
        }
        match event {
            Event::Resize { width, height } => {
                self.set_size(width, height);
                Effect::Redraw
            }
            Event::Key(press) => {
                let action = self.resolve(&press);
                debug!(?action, phase = ?self.phase, "picker key");
                match action {
                    Action::ForceQuit => self.terminate(Outcome::Cancelled),
                    Action::Complete => self.terminate(Outcome::Confirmed),
                    Action::Toggle => self.toggle(),
                    Action::Navigate => self.navigate(&press),
                }
            }
        }
    }

    /// Maps a key to an action for the current phase.
    pub fn resolve(&self, press: &KeyPress) -> Action {
        if self.list.keymap().force_quit.matches_press(press) {
            Action::ForceQuit
        } else if self.phase == Phase::Filtering {
            Action::Navigate
        } else if self.keys.complete.matches_press(press) {
            Action::Complete
        } else if self.keys.toggle.matches_press(press) {
            Action::Toggle
        } else {
            Action::Navigate
        }
    }

    fn navigate(&mut self, press: &KeyPress) -> Effect {
        match self.list.update(press) {
            ListSignal::Quit => self.terminate(Outcome::Confirmed),
            ListSignal::ForceQuit => self.terminate(Outcome::Cancelled),
            ListSignal::Continue => {
                let next = if self.list.filter_state() == FilterState::Filtering {
                    Phase::Filtering
                } else {
                    Phase::Browsing
                };
                if next != self.phase {
                    debug!(from = ?self.phase, to = ?next, "picker phase");
                    self.phase = next;
                }
                Effect::Redraw
            }
        }
    }

    fn toggle(&mut self) -> Effect {
        let target = match self.list.selected_item() {
            Some(item) => item.title().to_string(),
            None => return Effect::None,
        };
        // The cursor indexes the visible rows; the flag lives on the
        // canonical item, found by title.
        let index = match self.list.items().iter().position(|i| i.title() == target) {
            Some(index) => index,
            None => {
                warn!(title = %target, "toggle target not found");
                return Effect::None;
            }
        };

        match self.mode {
            SelectionMode::Multi => {
                if let Some(item) = self.list.item_mut(index) {
                    let chosen = !item.is_chosen();
                    item.set_chosen(chosen);
                    debug!(title = %target, chosen, "toggled");
                }
                Effect::Redraw
            }
            SelectionMode::Single => {
                for i in 0..self.list.items().len() {
                    if let Some(item) = self.list.item_mut(i) {
                        item.set_chosen(i == index);
                    }
                }
                debug!(title = %target, "picked");
                self.terminate(Outcome::Confirmed)
            }
        }
    }

    fn terminate(&mut self, outcome: Outcome) -> Effect {
        debug!(from = ?self.phase, ?outcome, "picker terminated");
        self.phase = Phase::Terminated(outcome);
        Effect::Quit
    }

    /// Renders the picker inside its frame.
    pub fn view(&self) -> String {
        APP_STYLE.render(&self.list.view())
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = take_seed().unwrap_or_else(|| Model::new(vec![], &Options::default()));
        if let Ok((width, height)) = crossterm::terminal::size() {
            model.set_size(width as usize, height as usize);
        }
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let event = if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            Event::Key(KeyPress::from(key_msg))
        } else if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            Event::Resize {
                width: size.width as usize,
                height: size.height as usize,
            }
        } else {
            return None;
        };

        match self.handle(event) {
            Effect::Quit => Some(bubbletea_rs::quit()),
            Effect::Redraw | Effect::None => None,
        }
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
