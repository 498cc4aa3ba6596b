//! Student CRUD routes
//!
//! All routes here sit behind the auth gate; the verified caller identity is
//! available from request extensions for audit logging.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::StudentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use educa_shared::types::{
    CreateStudentRequest, PopulateRequest, StudentResponse, UpdateStudentRequest,
};
use tracing::info;

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(list_students))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/populate", post(populate_students))
}

/// POST /api/students
async fn create_student(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreateStudentRequest>,
) -> ApiResult<(StatusCode, Json<StudentResponse>)> {
    let student = StudentService::create(state.db(), req).await?;
    info!(actor = auth.user_id, student_id = student.id, "student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/students
async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = StudentService::find_all(state.db()).await?;
    Ok(Json(students))
}

/// GET /api/students/:id
async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<StudentResponse>> {
    let student = StudentService::find_by_id(state.db(), id).await?;
    Ok(Json(student))
}

/// PUT /api/students/:id
async fn update_student(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    let student = StudentService::update(state.db(), id, req).await?;
    info!(actor = auth.user_id, student_id = id, "student updated");
    Ok(Json(student))
}

/// DELETE /api/students/:id
async fn delete_student(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    StudentService::remove(state.db(), id).await?;
    info!(actor = auth.user_id, student_id = id, "student removed");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/students/populate
///
/// The body is optional; `{"count": n}` overrides the default batch size.
async fn populate_students(
    State(state): State<AppState>,
    body: Option<Json<PopulateRequest>>,
) -> ApiResult<(StatusCode, Json<Vec<StudentResponse>>)> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let created = StudentService::populate(state.db(), req.count).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
