//! Student repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Student record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub ra: String,
    pub cpf: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a student
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub ra: String,
    pub cpf: String,
}

/// Input for a partial student update
#[derive(Debug, Clone, Default)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub ra: Option<String>,
    pub cpf: Option<String>,
}

/// Student repository for database operations
pub struct StudentRepository;

impl StudentRepository {
    /// Insert a new student
    pub async fn create(pool: &PgPool, input: &NewStudent) -> Result<StudentRecord> {
        let student = sqlx::query_as::<_, StudentRecord>(
            r#"
            INSERT INTO students (name, email, ra, cpf)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, ra, cpf, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.ra)
        .bind(&input.cpf)
        .fetch_one(pool)
        .await?;

        Ok(student)
    }

    /// Insert a student, returning None when a unique constraint collides
    ///
    /// Used by fake-data seeding, where collisions are skipped, not errors.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &NewStudent,
    ) -> Result<Option<StudentRecord>> {
        let student = sqlx::query_as::<_, StudentRecord>(
            r#"
            INSERT INTO students (name, email, ra, cpf)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING
            RETURNING id, name, email, ra, cpf, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.ra)
        .bind(&input.cpf)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    /// Fetch all students, oldest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<StudentRecord>> {
        let students = sqlx::query_as::<_, StudentRecord>(
            r#"
            SELECT id, name, email, ra, cpf, created_at, updated_at
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(students)
    }

    /// Find student by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<StudentRecord>> {
        let student = sqlx::query_as::<_, StudentRecord>(
            r#"
            SELECT id, name, email, ra, cpf, created_at, updated_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    /// Apply a partial update, returning None when the student is absent
    pub async fn update(
        pool: &PgPool,
        id: i64,
        updates: &UpdateStudent,
    ) -> Result<Option<StudentRecord>> {
        let student = sqlx::query_as::<_, StudentRecord>(
            r#"
            UPDATE students SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                ra = COALESCE($4, ra),
                cpf = COALESCE($5, cpf),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, ra, cpf, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&updates.name)
        .bind(&updates.email)
        .bind(&updates.ra)
        .bind(&updates.cpf)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    /// Delete a student; idempotent, returns rows affected
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Check if a student already holds any of the unique fields
    pub async fn exists_conflicting(
        pool: &PgPool,
        email: &str,
        ra: &str,
        cpf: &str,
    ) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM students
                WHERE email = $1 OR ra = $2 OR cpf = $3
            )
            "#,
        )
        .bind(email)
        .bind(ra)
        .bind(cpf)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    // Database-backed coverage lives in backend/tests/student_integration_test.rs
}
