use async_trait::async_trait;
use sakila_core::error::StorageError;
use sakila_core::models::FilmModel;
use sakila_core::repositories::FilmRepository;
use sakila_core::types::DbId;
use sqlx::PgPool;

use crate::datasources::FilmDatasource;

pub struct FilmRepositoryImpl {
    datasource: FilmDatasource,
}

impl FilmRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self {
            datasource: FilmDatasource::new(pool),
        }
    }
}

#[async_trait]
impl FilmRepository for FilmRepositoryImpl {
    async fn get(&self, film_id: DbId) -> Result<Option<FilmModel>, StorageError> {
        self.datasource.get(film_id).await
    }

    async fn get_list(&self) -> Result<Vec<FilmModel>, StorageError> {
        self.datasource.get_list().await
    }
}
