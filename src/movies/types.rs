use serde::Serialize;

use crate::db::Movie;

/// One element of the `results` array. The static list only knows titles,
/// the store knows full rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MovieEntry {
    Title(String),
    Record(Movie),
}

impl From<Movie> for MovieEntry {
    fn from(movie: Movie) -> Self {
        MovieEntry::Record(movie)
    }
}

impl From<&str> for MovieEntry {
    fn from(title: &str) -> Self {
        MovieEntry::Title(title.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularMoviesResponse {
    pub results: Vec<MovieEntry>,
}
