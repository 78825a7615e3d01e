use std::future::Future;

use gloo::net::http::Request;

use super::error::FetchError;
use super::model::{Movie, MovieList};

/// Anything able to produce the movie listing.
pub trait MovieSource {
    fn list_movies(&self) -> impl Future<Output = Result<MovieList, FetchError>>;
}

/// Fetches the listing with a plain `GET` against a fixed endpoint.
/// No timeout is applied; the request settles when the browser's fetch does.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpMovieSource {
    endpoint: String,
}

impl HttpMovieSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl<T: MovieSource + ?Sized> MovieSource for &T {
    fn list_movies(&self) -> impl Future<Output = Result<MovieList, FetchError>> {
        (**self).list_movies()
    }
}

impl MovieSource for HttpMovieSource {
    fn list_movies(&self) -> impl Future<Output = Result<MovieList, FetchError>> {
        let endpoint = self.endpoint.clone();
        async move {
            let response = Request::get(&endpoint)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            let status_text = response.status_text();
            // failing responses are reported without reading the body
            let body = if is_success(status) {
                response
                    .text()
                    .await
                    .map_err(|e| FetchError::Transport(e.to_string()))?
            } else {
                String::new()
            };
            classify_response(status, &status_text, &body)
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turns a settled response into the listing or a fault. The status is
/// checked first, so a failing response never reports a decode fault.
pub fn classify_response(status: u16, status_text: &str, body: &str) -> Result<MovieList, FetchError> {
    if !is_success(status) {
        return Err(FetchError::Status {
            status,
            status_text: status_text.to_string(),
        });
    }

    let movies: Vec<Movie> = serde_json::from_str(body)?;
    Ok(movies)
}
