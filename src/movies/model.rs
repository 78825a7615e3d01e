use serde::Deserialize;

/// A single entry of the movie listing. Only the title is rendered; any other
/// fields the service sends are ignored during decoding.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(from = "MovieRecord")]
pub struct Movie {
    pub title: Option<String>,
}

/// Wire shape of a listing entry. The listing service capitalises its keys;
/// `title` wins when a record carries both.
#[derive(Deserialize)]
struct MovieRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "Title")]
    capitalised_title: Option<String>,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            title: record.title.or(record.capitalised_title),
        }
    }
}

impl Movie {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()) }
    }

    /// Text shown for this movie; empty when the record carries no title.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Ordered as returned by the listing service.
pub type MovieList = Vec<Movie>;
