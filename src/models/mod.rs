//! Data models for the Librarium server

pub mod admin;
pub mod book;
pub mod issue;
pub mod student;

pub use admin::{Admin, AdminInfo};
pub use book::{Book, BookPayload};
pub use issue::{ActiveIssue, Issue, IssueStatus};
pub use student::{Student, StudentPayload};
