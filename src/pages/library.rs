use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::MovieListView;
use crate::config::LibraryConfig;
use crate::movies::{activation_task, ConsoleSink, HttpMovieSource, LibraryAction, LibraryState};

#[derive(Properties, PartialEq)]
pub struct LibraryPageProps {
    #[prop_or_default]
    pub config: LibraryConfig,
}

#[function_component(LibraryPage)]
pub fn library_page(props: &LibraryPageProps) -> Html {
    let library = use_reducer(LibraryState::default);

    { // fetch once per activation
        let library = library.clone();
        let endpoint = props.config.movies_endpoint.clone();

        use_effect_with((), move |_| {
            library.dispatch(LibraryAction::Activate);

            let source = HttpMovieSource::new(endpoint);
            let (fetch, handle) = activation_task(source, ConsoleSink, move |action| library.dispatch(action));
            spawn_local(fetch);

            // a completion after teardown is dropped
            move || handle.abort()
        });
    }

    html! {
        <div class="container" id="library-container">
            <h1>{"Movie List"}</h1>
            <MovieListView movies={library.movies().clone()} />
        </div>
    }
}
