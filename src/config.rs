/// Address of the movie listing service used when no override is given.
pub const DEFAULT_MOVIES_ENDPOINT: &str = "http://localhost:8000/movie/";

#[derive(Clone, Debug, PartialEq)]
pub struct LibraryConfig {
    pub movies_endpoint: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            movies_endpoint: DEFAULT_MOVIES_ENDPOINT.to_string(),
        }
    }
}
