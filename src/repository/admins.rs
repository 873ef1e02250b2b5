//! Admin accounts repository

use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::Admin};

#[derive(Clone)]
pub struct AdminsRepository {
    pool: Pool<Sqlite>,
}

impl AdminsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Look up an admin account by username
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admin WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    /// Look up an admin account by id
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admin WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    /// Count admin accounts
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Create an admin account with a pre-hashed password
    pub async fn create(&self, username: &str, password_hash: &str) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO admin (username, password) VALUES (?, ?) RETURNING id",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }
}
