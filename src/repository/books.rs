//! Books repository for catalog operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get a book by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book. All copies start available.
    pub async fn create(&self, payload: &BookPayload) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, quantity, available)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.quantity)
        .bind(payload.quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Update a book, carrying the quantity delta over to `available` so the
    /// number of copies on loan is preserved. An update that would leave
    /// `available` negative (quantity reduced below copies on loan) is
    /// rejected.
    pub async fn update(&self, id: i64, payload: &BookPayload) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        let new_available = current.available + (payload.quantity - current.quantity);
        if new_available < 0 {
            let on_loan = current.quantity - current.available;
            return Err(AppError::Validation(format!(
                "quantity cannot be reduced below the {} copies currently on loan",
                on_loan
            )));
        }

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET title = ?, author = ?, quantity = ?, available = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.quantity)
        .bind(new_available)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(book)
    }

    /// Delete a book. Refused while open issues still reference it, so the
    /// ledger never points at a missing record.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let open_issues: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM issue WHERE book_id = ? AND status = 'issued'",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if open_issues > 0 {
            return Err(AppError::Conflict(format!(
                "Book has {} active issue(s) and cannot be deleted",
                open_issues
            )));
        }

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    /// Sum of `quantity` across all books, zero when the catalog is empty
    pub async fn total_copies(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(quantity), 0) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
