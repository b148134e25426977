use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
    #[error("Invalid movie title: {0:?}")]
    InvalidTitle(String),
}

pub type DbResult<T> = Result<T, DbError>;
