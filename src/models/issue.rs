//! Issue (loan record) model and fine computation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Days a book may be kept before fines accrue
pub const GRACE_PERIOD_DAYS: i64 = 7;

/// Fine in currency units per day past the grace period
pub const FINE_PER_DAY: i64 = 2;

/// Lifecycle status of an issue record. The only transition is
/// `Issued -> Returned`; a returned issue is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum IssueStatus {
    Issued,
    Returned,
}

/// Issue record from the database: one book copy lent to one student
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Issue {
    pub id: i64,
    pub student_id: i64,
    pub book_id: i64,
    pub issue_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub fine: i64,
    pub status: IssueStatus,
}

/// Active issue joined with the borrower's name and the book's title
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActiveIssue {
    pub id: i64,
    pub student_id: i64,
    pub book_id: i64,
    pub issue_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub fine: i64,
    pub status: IssueStatus,
    pub student_name: String,
    pub book_title: String,
}

/// Compute the fine for a loan held from `issue_date` to `return_date`.
///
/// The first [`GRACE_PERIOD_DAYS`] whole days are free; each day beyond
/// costs [`FINE_PER_DAY`] currency units. Callers must ensure
/// `return_date >= issue_date`.
pub fn fine_for_loan(issue_date: NaiveDate, return_date: NaiveDate) -> i64 {
    let days = (return_date - issue_date).num_days();
    if days > GRACE_PERIOD_DAYS {
        (days - GRACE_PERIOD_DAYS) * FINE_PER_DAY
    } else {
        0
    }
}
