use std::sync::Arc;

use super::source::MovieSource;
use super::types::PopularMoviesResponse;
use crate::db::DbResult;

pub struct MovieService {
    source: Arc<dyn MovieSource>,
}

impl MovieService {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self { source }
    }

    /// Wraps the source listing in the `results` envelope. Errors from the
    /// source are returned as-is.
    pub async fn popular_movies_response(&self) -> DbResult<PopularMoviesResponse> {
        let results = self.source.list().await?;
        Ok(PopularMoviesResponse { results })
    }
}
