use async_trait::async_trait;

use super::model::*;

/// Read and seed access to stored movies. Only what the movies feature needs.
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// All stored movies, oldest first.
    async fn list_movies(&self) -> DbResult<Vec<Movie>>;
    /// Stores `title` as given. Blank titles are rejected with
    /// `DbError::InvalidTitle`.
    async fn insert_movie(&self, title: &str) -> DbResult<Movie>;
    async fn count_movies(&self) -> DbResult<i64>;
}
