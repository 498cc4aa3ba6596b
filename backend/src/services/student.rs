//! Student service: CRUD over student records plus fake-data seeding

use super::is_unique_violation;
use crate::error::ApiError;
use crate::repositories::{NewStudent, StudentRecord, StudentRepository, UpdateStudent};
use educa_shared::types::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};
use educa_shared::validation::{validate_cpf, validate_email, validate_id};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use sqlx::PgPool;

const POPULATE_DEFAULT_COUNT: u32 = 10;
const POPULATE_MAX_COUNT: u32 = 100;

fn to_response(record: StudentRecord) -> StudentResponse {
    StudentResponse {
        id: record.id,
        name: record.name,
        email: record.email,
        ra: record.ra,
        cpf: record.cpf,
    }
}

/// Student service
pub struct StudentService;

impl StudentService {
    /// Create a student after presence/format/uniqueness checks
    pub async fn create(
        pool: &PgPool,
        req: CreateStudentRequest,
    ) -> Result<StudentResponse, ApiError> {
        let (name, email, ra, cpf) = match (req.name, req.email, req.ra, req.cpf) {
            (Some(n), Some(e), Some(r), Some(c))
                if !n.is_empty() && !e.is_empty() && !r.is_empty() && !c.is_empty() =>
            {
                (n, e, r, c)
            }
            _ => {
                return Err(ApiError::Validation(
                    "All fields are required: name, email, RA, and CPF".to_string(),
                ))
            }
        };

        validate_email(&email).map_err(ApiError::Validation)?;
        validate_cpf(&cpf).map_err(ApiError::Validation)?;

        if StudentRepository::exists_conflicting(pool, &email, &ra, &cpf)
            .await
            .map_err(|e| ApiError::service("Could not create student", e))?
        {
            return Err(ApiError::Conflict(
                "Student already exists with the provided email, RA or CPF".to_string(),
            ));
        }

        let input = NewStudent {
            name,
            email,
            ra,
            cpf,
        };

        let student = StudentRepository::create(pool, &input).await.map_err(|e| {
            // Concurrent insert can still trip the constraint after the check
            if is_unique_violation(&e) {
                ApiError::Conflict(
                    "Student already exists with the provided email, RA or CPF".to_string(),
                )
            } else {
                ApiError::service("Could not create student", e)
            }
        })?;

        Ok(to_response(student))
    }

    /// List all students
    pub async fn find_all(pool: &PgPool) -> Result<Vec<StudentResponse>, ApiError> {
        let students = StudentRepository::find_all(pool)
            .await
            .map_err(|e| ApiError::service("Could not fetch students", e))?;

        Ok(students.into_iter().map(to_response).collect())
    }

    /// Fetch one student by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<StudentResponse, ApiError> {
        validate_id(id).map_err(ApiError::Validation)?;

        let student = StudentRepository::find_by_id(pool, id)
            .await
            .map_err(|e| ApiError::service("Could not fetch student", e))?
            .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

        Ok(to_response(student))
    }

    /// Partially update a student
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: UpdateStudentRequest,
    ) -> Result<StudentResponse, ApiError> {
        validate_id(id).map_err(ApiError::Validation)?;

        if let Some(email) = req.email.as_deref() {
            validate_email(email).map_err(ApiError::Validation)?;
        }
        if let Some(cpf) = req.cpf.as_deref() {
            validate_cpf(cpf).map_err(ApiError::Validation)?;
        }

        let updates = UpdateStudent {
            name: req.name,
            email: req.email,
            ra: req.ra,
            cpf: req.cpf,
        };

        let student = StudentRepository::update(pool, id, &updates)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Conflict(
                        "Student already exists with the provided email, RA or CPF".to_string(),
                    )
                } else {
                    ApiError::service("Could not update student", e)
                }
            })?
            .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

        Ok(to_response(student))
    }

    /// Remove a student; succeeds whether or not the record existed
    pub async fn remove(pool: &PgPool, id: i64) -> Result<(), ApiError> {
        validate_id(id).map_err(ApiError::Validation)?;

        StudentRepository::delete(pool, id)
            .await
            .map_err(|e| ApiError::service("Could not remove student", e))?;

        Ok(())
    }

    /// Seed the table with generated students, skipping unique collisions
    pub async fn populate(
        pool: &PgPool,
        count: Option<u32>,
    ) -> Result<Vec<StudentResponse>, ApiError> {
        let count = count
            .unwrap_or(POPULATE_DEFAULT_COUNT)
            .clamp(1, POPULATE_MAX_COUNT);

        let mut created = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let input = fake_student();
            let inserted = StudentRepository::create_if_absent(pool, &input)
                .await
                .map_err(|e| ApiError::service("Could not populate students", e))?;

            if let Some(student) = inserted {
                created.push(to_response(student));
            }
        }

        Ok(created)
    }
}

fn fake_student() -> NewStudent {
    NewStudent {
        name: Name().fake(),
        email: SafeEmail().fake(),
        ra: NumberWithFormat("######").fake(),
        cpf: NumberWithFormat("###########").fake(),
    }
}
