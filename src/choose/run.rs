//! Running a picker as a full-screen program.
//!
//! bubbletea-rs builds the root model through the static
//! [`BubbleTeaModel::init`], so the driver leaves the configured model in a
//! process-wide slot for `init` to pick up. Runs are serialized: only one
//! picker owns the terminal at a time.

use super::item::ChoiceItem;
use super::model::Model;
use super::options::Options;
use crate::error::{Error, Result};
use bubbletea_rs::{Model as BubbleTeaModel, Program};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use tracing::info;

static SEED: Lazy<Mutex<Option<Model>>> = Lazy::new(|| Mutex::new(None));
static RUN_GUARD: Lazy<tokio::sync::Mutex<()>> = Lazy::new(|| tokio::sync::Mutex::new(()));

/// Result of a picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user finished; titles of the chosen items in list order. May be
    /// empty.
    Confirmed(Vec<String>),
    /// The user force-quit.
    Cancelled,
}

impl Selection {
    /// Whether the user force-quit.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Selection::Cancelled)
    }

    /// The chosen titles, or `None` if the session was cancelled.
    pub fn into_chosen(self) -> Option<Vec<String>> {
        match self {
            Selection::Confirmed(chosen) => Some(chosen),
            Selection::Cancelled => None,
        }
    }

    /// The first chosen title. `None` if the session was cancelled,
    /// `Some(None)` if the user confirmed without choosing anything.
    pub fn into_first(self) -> Option<Option<String>> {
        self.into_chosen().map(|chosen| chosen.into_iter().next())
    }
}

fn put_seed(model: Model) {
    let mut slot = SEED.lock().unwrap_or_else(|e| e.into_inner());
    *slot = Some(model);
}

/// Takes the model left by [`run`], if any.
pub(super) fn take_seed() -> Option<Model> {
    let mut slot = SEED.lock().unwrap_or_else(|e| e.into_inner());
    slot.take()
}

/// Shows the picker on the alternate screen and waits for the user.
///
/// Cancellation is a normal outcome ([`Selection::Cancelled`]). Errors come
/// only from the terminal program loop and are returned unchanged.
pub async fn run(items: Vec<ChoiceItem>, opt: &Options) -> Result<Selection> {
    let _guard = RUN_GUARD.lock().await;
    info!(items = items.len(), mode = ?opt.mode(), title = %opt.title, "starting picker");

    put_seed(Model::new(items, opt));
    let result = match Program::<Model>::builder().alt_screen(true).build() {
        Ok(program) => program.run().await,
        Err(e) => Err(e),
    };
    // Drop the seed if the program never got as far as init.
    take_seed();

    let model = result?;
    let selection = model.selection();
    match &selection {
        Selection::Confirmed(chosen) => info!(chosen = chosen.len(), "picker confirmed"),
        Selection::Cancelled => info!("picker cancelled"),
    }
    Ok(selection)
}

/// [`run`] on a runtime of its own, for callers outside async code.
pub fn run_blocking(items: Vec<ChoiceItem>, opt: &Options) -> Result<Selection> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;
    runtime.block_on(run(items, opt))
}

/// Picks exactly one item. `None` when the user cancelled; `Some(None)` when
/// the user confirmed without picking.
pub async fn one(items: Vec<ChoiceItem>, opt: Options) -> Result<Option<Option<String>>> {
    let opt = opt.with_no_limit(false);
    Ok(run(items, &opt).await?.into_first())
}

/// Picks any number of items. `None` only when the user cancelled;
/// `Some(vec![])` is a confirmed empty selection.
pub async fn many(items: Vec<ChoiceItem>, opt: Options) -> Result<Option<Vec<String>>> {
    let opt = opt.with_no_limit(true);
    Ok(run(items, &opt).await?.into_chosen())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choose::{Event, Phase};
    use crate::key::KeyPress;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_selection_into_chosen() {
        let done = Selection::Confirmed(vec!["a".into()]);
        assert!(!done.is_cancelled());
        assert_eq!(done.into_chosen(), Some(vec!["a".to_string()]));

        let empty = Selection::Confirmed(vec![]);
        assert_eq!(empty.into_chosen(), Some(vec![]));

        assert!(Selection::Cancelled.is_cancelled());
        assert_eq!(Selection::Cancelled.into_chosen(), None);
    }

    fn single(titles: &[&str]) -> Model {
        let items = titles.iter().map(|t| ChoiceItem::from(*t)).collect();
        Model::new(items, &Options::default())
    }

    fn press(m: &mut Model, code: KeyCode, modifiers: KeyModifiers) {
        m.handle(Event::Key(KeyPress::new(code, modifiers)));
    }

    #[test]
    fn test_single_pick_separates_empty_from_cancelled() {
        let mut confirmed = single(&["a", "b"]);
        press(&mut confirmed, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(confirmed.selection().into_first(), Some(None));

        let mut cancelled = single(&["a", "b"]);
        press(&mut cancelled, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(cancelled.selection().into_first(), None);

        let mut picked = single(&["a", "b"]);
        press(&mut picked, KeyCode::Down, KeyModifiers::NONE);
        press(&mut picked, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(picked.selection().into_first(), Some(Some("b".to_string())));
    }

    #[test]
    fn test_init_takes_seeded_model() {
        let items = vec![ChoiceItem::from("zsh"), ChoiceItem::from("tmux")];
        put_seed(Model::new(items, &Options::default().with_title("Modules")));

        let (model, cmd) = <Model as BubbleTeaModel>::init();
        assert!(cmd.is_none());
        assert_eq!(model.items().len(), 2);
        assert_eq!(model.list().title(), "Modules");
        assert_eq!(model.phase(), Phase::Browsing);
        assert!(take_seed().is_none());
    }
}
