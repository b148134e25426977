use std::sync::Arc;

use async_trait::async_trait;

use super::types::MovieEntry;
use crate::db::{DbResult, MovieRepo};

const POPULAR_TITLES: [&str; 4] = ["Inception", "Interstellar", "The Dark Knight", "Memento"];

/// Where the popular movies list comes from. One implementation is picked
/// at startup.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn list(&self) -> DbResult<Vec<MovieEntry>>;
}

/// Fixed, hardcoded list of titles.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticMovies;

#[async_trait]
impl MovieSource for StaticMovies {
    async fn list(&self) -> DbResult<Vec<MovieEntry>> {
        Ok(POPULAR_TITLES.iter().copied().map(MovieEntry::from).collect())
    }
}

/// Every row in the movie store, in store order.
pub struct PersistedMovies {
    repo: Arc<dyn MovieRepo>,
}

impl PersistedMovies {
    pub fn new(repo: Arc<dyn MovieRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl MovieSource for PersistedMovies {
    async fn list(&self) -> DbResult<Vec<MovieEntry>> {
        let movies = self.repo.list_movies().await?;
        Ok(movies.into_iter().map(MovieEntry::from).collect())
    }
}
