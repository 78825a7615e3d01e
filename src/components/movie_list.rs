use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::movies::Movie;

#[derive(Properties, PartialEq)]
pub struct MovieListViewProps {
    pub movies: Vec<Movie>,
}

/// One row per movie, in listing order. An empty listing renders an empty list.
#[function_component(MovieListView)]
pub fn movie_list_view(props: &MovieListViewProps) -> Html {
    html! {
        <ul class="movie-list">
            {
                props.movies.iter().enumerate().map(|(index, movie)| {
                    // position is only a render key; titles may repeat
                    html! {
                        <li class="movie-item" key={index}>
                            <Icon icon_id={IconId::LucideFilm} width={"16"} height={"16"} />
                            <span class="movie-title">{ movie.label().to_string() }</span>
                        </li>
                    }
                }).collect::<Html>()
            }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(movies: Vec<Movie>) -> String {
        ServerRenderer::<MovieListView>::with_props(move || MovieListViewProps { movies })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn renders_one_item_per_movie_in_order() {
        let html = render(vec![Movie::titled("Inception"), Movie::default(), Movie::titled("Dune")]).await;

        assert_eq!(html.matches(r#"<li class="movie-item">"#).count(), 3);
        let inception = html.find("Inception").unwrap();
        let dune = html.find("Dune").unwrap();
        assert!(inception < dune);
        assert!(html.contains(r#"<span class="movie-title"></span>"#));
    }

    #[tokio::test]
    async fn empty_listing_renders_bare_list() {
        let html = render(Vec::new()).await;

        assert_eq!(html, r#"<ul class="movie-list"></ul>"#);
    }
}
