//! Statistics service

use crate::{api::stats::StatsResponse, error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Dashboard counters: total copies owned, registered students,
    /// issues currently out. Empty aggregates count as zero.
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let total_books = self.repository.books.total_copies().await?;
        let total_students = self.repository.students.count().await?;
        let issued_books = self.repository.issues.count_active().await?;

        Ok(StatsResponse {
            total_books,
            total_students,
            issued_books,
        })
    }
}
