pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod model;
pub mod source;

pub use diagnostics::{ConsoleSink, DiagnosticSink};
pub use error::FetchError;
pub use loader::{activation_task, load_movies, LibraryAction, LibraryState, LoadPhase};
pub use model::{Movie, MovieList};
pub use source::{HttpMovieSource, MovieSource};
