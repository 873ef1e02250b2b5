//! Students repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{Student, StudentPayload},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Sqlite>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all students in insertion order
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    /// Get a student by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Student> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student with id {} not found", id)))
    }

    /// Register a new student
    pub async fn create(&self, payload: &StudentPayload) -> AppResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, department, phone)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.department)
        .bind(&payload.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(student)
    }

    /// Count registered students
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing;

    #[tokio::test]
    async fn create_and_list() {
        let repo = StudentsRepository::new(testing::pool().await);

        let payload = StudentPayload {
            name: "Ada".to_string(),
            department: "CS".to_string(),
            phone: "555-0100".to_string(),
        };
        let student = repo.create(&payload).await.unwrap();
        assert_eq!(student.name, "Ada");

        let students = repo.list().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let repo = StudentsRepository::new(testing::pool().await);
        assert!(matches!(
            repo.get_by_id(7).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
