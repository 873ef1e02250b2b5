//! Catalog management service: books and students

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload, Student, StudentPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Add a book to the catalog; all copies start available
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let book = self.repository.books.create(&payload).await?;
        tracing::info!("Created book '{}' (id={})", book.title, book.id);
        Ok(book)
    }

    /// Update a book's details and total quantity
    pub async fn update_book(&self, id: i64, payload: BookPayload) -> AppResult<Book> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.books.update(id, &payload).await
    }

    /// Remove a book from the catalog
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// List all students
    pub async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.repository.students.list().await
    }

    /// Register a new student
    pub async fn create_student(&self, payload: StudentPayload) -> AppResult<Student> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let student = self.repository.students.create(&payload).await?;
        tracing::info!("Registered student '{}' (id={})", student.name, student.id);
        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing;

    #[tokio::test]
    async fn negative_quantity_is_rejected() {
        let catalog = CatalogService::new(Repository::new(testing::pool().await));
        let err = catalog
            .create_book(BookPayload {
                title: "T".to_string(),
                author: "A".to_string(),
                quantity: -1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let catalog = CatalogService::new(Repository::new(testing::pool().await));
        let err = catalog
            .create_book(BookPayload {
                title: String::new(),
                author: "A".to_string(),
                quantity: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn nameless_student_is_rejected() {
        let catalog = CatalogService::new(Repository::new(testing::pool().await));
        let err = catalog
            .create_student(StudentPayload {
                name: String::new(),
                department: "CS".to_string(),
                phone: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
