use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::model::*;
use super::repo::*;

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(db_path: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_path)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let repo = Self { pool };

        repo.init_schema().await?;

        info!("Database initialized at {}", db_path);

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::query(schema).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts `titles` in order, but only into an empty table. All titles
    /// are checked first and the rows are written in one transaction, so a
    /// bad title leaves the table empty. Returns the number of rows inserted.
    pub async fn seed_if_empty(&self, titles: &[String]) -> DbResult<usize> {
        if titles.is_empty() || self.count_movies().await? > 0 {
            return Ok(0);
        }
        for title in titles {
            check_title(title)?;
        }

        let mut tx = self.pool.begin().await?;
        for title in titles {
            sqlx::query("INSERT INTO movies (title) VALUES (?)")
                .bind(title)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        info!("Seeded {} movies", titles.len());
        Ok(titles.len())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn check_title(title: &str) -> DbResult<()> {
    if title.trim().is_empty() {
        return Err(DbError::InvalidTitle(title.to_string()));
    }
    Ok(())
}

#[async_trait]
impl MovieRepo for SqliteRepository {
    async fn list_movies(&self) -> DbResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>("SELECT id, title FROM movies ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        debug!("Loaded {} movies", movies.len());
        Ok(movies)
    }

    async fn insert_movie(&self, title: &str) -> DbResult<Movie> {
        check_title(title)?;

        let result = sqlx::query("INSERT INTO movies (title) VALUES (?)")
            .bind(title)
            .execute(&self.pool)
            .await?;

        Ok(Movie {
            id: result.last_insert_rowid(),
            title: title.to_string(),
        })
    }

    async fn count_movies(&self) -> DbResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_repo(dir: &tempfile::TempDir) -> SqliteRepository {
        let path = dir.path().join("movies.db");
        SqliteRepository::new(path.to_str().unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn test_list_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_repo(&dir).await;
        assert!(repo.list_movies().await.unwrap().is_empty());
        assert_eq!(repo.count_movies().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_repo(&dir).await;

        let first = repo.insert_movie("Memento").await.unwrap();
        let second = repo.insert_movie("Inception").await.unwrap();
        assert!(second.id > first.id);

        let movies = repo.list_movies().await.unwrap();
        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Memento", "Inception"]);
        assert_eq!(movies[0], first);
    }

    #[tokio::test]
    async fn test_insert_rejects_blank_title() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_repo(&dir).await;

        let err = repo.insert_movie("   ").await.unwrap_err();
        assert!(matches!(err, DbError::InvalidTitle(ref t) if t == "   "));
        assert_eq!(repo.count_movies().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_stores_title_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_repo(&dir).await;

        let movie = repo.insert_movie(" Memento ").await.unwrap();
        assert_eq!(movie.title, " Memento ");
        assert_eq!(repo.list_movies().await.unwrap()[0].title, " Memento ");
    }

    #[tokio::test]
    async fn test_seed_only_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_repo(&dir).await;
        let titles = vec!["Inception".to_string(), "Interstellar".to_string()];

        assert_eq!(repo.seed_if_empty(&titles).await.unwrap(), 2);
        assert_eq!(repo.seed_if_empty(&titles).await.unwrap(), 0);
        assert_eq!(repo.count_movies().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_bad_seed_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_repo(&dir).await;
        let bad = vec!["Inception".to_string(), " ".to_string(), "Memento".to_string()];

        let err = repo.seed_if_empty(&bad).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidTitle(ref t) if t == " "));
        assert_eq!(repo.count_movies().await.unwrap(), 0);

        let good = vec!["Inception".to_string(), "Memento".to_string()];
        assert_eq!(repo.seed_if_empty(&good).await.unwrap(), 2);
        let titles: Vec<String> = repo
            .list_movies()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Inception", "Memento"]);
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = open_repo(&dir).await;
            repo.insert_movie("The Dark Knight").await.unwrap();
            repo.close().await;
        }
        let repo = open_repo(&dir).await;
        let movies = repo.list_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "The Dark Knight");
    }

    #[tokio::test]
    async fn test_closed_pool_is_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_repo(&dir).await;
        repo.close().await;

        let err = repo.list_movies().await.unwrap_err();
        assert!(matches!(err, DbError::StoreUnavailable(_)));
    }
}
