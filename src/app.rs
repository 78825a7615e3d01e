use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/library")]
    Library,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home         => html! { <pages::home::HomePage /> },
        Route::Library      => html! { <pages::library::LibraryPage /> },
        // unknown paths land on the entry screen
        Route::NotFound     => html! { <pages::home::HomePage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <main class="container">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_route_lives_at_its_own_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Library.to_path(), "/library");
    }

    #[test]
    fn library_path_is_recognized() {
        assert_eq!(Route::recognize("/library"), Some(Route::Library));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }
}
