use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::EnterButton;
use crate::styles::{LANDING_CONTAINER, LANDING_TITLE};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator();

    let on_enter = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Library);
        }
    });

    html! {
        <div class="container" id="home-container" style={LANDING_CONTAINER}>
            <h1 style={LANDING_TITLE}>{"Welcome to MovieScope"}</h1>
            <EnterButton label="Enter Library" {on_enter} />
        </div>
    }
}
