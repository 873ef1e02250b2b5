//! Lending ledger service
//!
//! Owns the issue/return lifecycle: one `available` decrement per issue
//! created, one increment when it is returned, and the fine on overdue
//! returns.

use chrono::NaiveDate;

use crate::{error::AppResult, models::ActiveIssue, repository::Repository};

#[derive(Clone)]
pub struct LedgerService {
    repository: Repository,
}

impl LedgerService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Issue a book to a student. Returns the new issue record's id.
    pub async fn issue_book(
        &self,
        student_id: i64,
        book_id: i64,
        issue_date: NaiveDate,
    ) -> AppResult<i64> {
        // Verify the student exists
        self.repository.students.get_by_id(student_id).await?;

        let issue_id = self
            .repository
            .issues
            .create(student_id, book_id, issue_date)
            .await?;
        tracing::info!(
            "Issued book id={} to student id={} (issue id={})",
            book_id,
            student_id,
            issue_id
        );
        Ok(issue_id)
    }

    /// Return an issued book. Returns the computed fine.
    pub async fn return_book(&self, issue_id: i64, return_date: NaiveDate) -> AppResult<i64> {
        let fine = self
            .repository
            .issues
            .return_issue(issue_id, return_date)
            .await?;
        tracing::info!("Returned issue id={} with fine {}", issue_id, fine);
        Ok(fine)
    }

    /// List open issues with borrower and book details
    pub async fn active_issues(&self) -> AppResult<Vec<ActiveIssue>> {
        self.repository.issues.list_active().await
    }
}
