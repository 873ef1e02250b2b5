//! Librarium Library Management Server
//!
//! A small REST JSON API for managing a library catalog of books and
//! students, and the lending ledger of book issues and returns.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub sessions: Arc<services::sessions::SessionStore>,
}
