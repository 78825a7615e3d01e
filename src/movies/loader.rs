use std::future::Future;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use yew::prelude::*;

use super::diagnostics::DiagnosticSink;
use super::model::MovieList;
use super::source::MovieSource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// View state of the library screen for one activation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LibraryState {
    phase: LoadPhase,
    movies: MovieList,
}

impl LibraryState {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn movies(&self) -> &MovieList {
        &self.movies
    }
}

#[derive(Debug, PartialEq)]
pub enum LibraryAction {
    Activate,
    Loaded(MovieList),
    Failed,
}

impl Reducible for LibraryState {
    type Action = LibraryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LibraryAction::Activate => Rc::new(LibraryState {
                phase: LoadPhase::Loading,
                movies: self.movies.clone(),
            }),
            // replaced wholesale, never merged
            LibraryAction::Loaded(movies) => Rc::new(LibraryState {
                phase: LoadPhase::Loaded,
                movies,
            }),
            LibraryAction::Failed => Rc::new(LibraryState {
                phase: LoadPhase::Failed,
                movies: self.movies.clone(),
            }),
        }
    }
}

/// Runs the single fetch of an activation and reports how it settled.
///
/// Faults are written to `diagnostics` and turned into [`LibraryAction::Failed`];
/// they never reach the rendered view.
pub async fn load_movies<S, D>(source: &S, diagnostics: &D) -> LibraryAction
where
    S: MovieSource,
    D: DiagnosticSink,
{
    match source.list_movies().await {
        Ok(movies) => {
            diagnostics.debug(&format!("Fetched {} movies", movies.len()));
            LibraryAction::Loaded(movies)
        }
        Err(err) => {
            diagnostics.error(&format!("Failed to fetch movies: {err}"));
            LibraryAction::Failed
        }
    }
}

/// Builds the fetch for one view activation. The returned future runs
/// [`load_movies`] and hands the outcome to `dispatch`; once the handle is
/// aborted the outcome is dropped instead, even if the response already
/// arrived.
pub fn activation_task<S, D, F>(source: S, diagnostics: D, dispatch: F) -> (impl Future<Output = ()>, AbortHandle)
where
    S: MovieSource,
    D: DiagnosticSink,
    F: FnOnce(LibraryAction),
{
    let (fetch, handle) = abortable(async move {
        let action = load_movies(&source, &diagnostics).await;
        dispatch(action);
    });

    let task = async move {
        let _ = fetch.await;
    };
    (task, handle)
}
