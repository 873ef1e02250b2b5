//! Issues repository: the lending ledger's database operations
//!
//! Issue and return each run inside a transaction. The availability
//! decrement is a single conditional update so two concurrent issue
//! requests can never both take the last copy.

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        issue::{fine_for_loan, IssueStatus},
        ActiveIssue, Issue,
    },
};

#[derive(Clone)]
pub struct IssuesRepository {
    pool: Pool<Sqlite>,
}

impl IssuesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get an issue record by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Issue> {
        sqlx::query_as::<_, Issue>("SELECT * FROM issue WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue record not found".to_string()))
    }

    /// Issue a book to a student.
    ///
    /// The check-and-decrement on `available` is one conditional UPDATE;
    /// zero rows affected means the book is missing or has no free copies,
    /// and nothing is changed.
    pub async fn create(
        &self,
        student_id: i64,
        book_id: i64,
        issue_date: NaiveDate,
    ) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let decremented =
            sqlx::query("UPDATE books SET available = available - 1 WHERE id = ? AND available > 0")
                .bind(book_id)
                .execute(&mut *tx)
                .await?;

        if decremented.rows_affected() == 0 {
            return Err(AppError::BookUnavailable);
        }

        let issue_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO issue (student_id, book_id, issue_date, fine, status)
            VALUES (?, ?, ?, 0, 'issued')
            RETURNING id
            "#,
        )
        .bind(student_id)
        .bind(book_id)
        .bind(issue_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(issue_id)
    }

    /// Return an issued book, computing the fine and crediting the copy
    /// back to the catalog. An already-returned issue is rejected, so
    /// `available` is credited exactly once per issue.
    pub async fn return_issue(&self, issue_id: i64, return_date: NaiveDate) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let issue = sqlx::query_as::<_, Issue>("SELECT * FROM issue WHERE id = ?")
            .bind(issue_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue record not found".to_string()))?;

        if issue.status != IssueStatus::Issued {
            return Err(AppError::AlreadyReturned);
        }

        if return_date < issue.issue_date {
            return Err(AppError::Validation(format!(
                "return_date {} is before issue_date {}",
                return_date, issue.issue_date
            )));
        }

        let fine = fine_for_loan(issue.issue_date, return_date);

        sqlx::query(
            "UPDATE issue SET return_date = ?, fine = ?, status = 'returned' WHERE id = ?",
        )
        .bind(return_date)
        .bind(fine)
        .bind(issue_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE books SET available = available + 1 WHERE id = ?")
            .bind(issue.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(fine)
    }

    /// List open issues joined with borrower name and book title,
    /// in insertion order
    pub async fn list_active(&self) -> AppResult<Vec<ActiveIssue>> {
        let issues = sqlx::query_as::<_, ActiveIssue>(
            r#"
            SELECT i.*, s.name AS student_name, b.title AS book_title
            FROM issue i
            JOIN students s ON i.student_id = s.id
            JOIN books b ON i.book_id = b.id
            WHERE i.status = 'issued'
            ORDER BY i.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(issues)
    }

    /// Count issues currently out
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM issue WHERE status = 'issued'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
