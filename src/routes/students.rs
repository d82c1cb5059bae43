use crate::{
    data::student::{Student, StudentFields},
    error::{MissingStudentSnafu, PupilResult},
    store::StudentStore,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use snafu::OptionExt;

pub fn router() -> Router<StudentStore> {
    Router::new()
        .route("/students", get(get_students).post(post_student))
        .route(
            "/students/{id}",
            get(get_student).put(put_student).delete(delete_student),
        )
}

pub async fn get_students(State(store): State<StudentStore>) -> Json<Vec<Student>> {
    Json(store.list_all().await)
}

pub async fn post_student(
    State(store): State<StudentStore>,
    Json(fields): Json<StudentFields>,
) -> (StatusCode, Json<Student>) {
    (StatusCode::CREATED, Json(store.insert(fields).await))
}

pub async fn get_student(
    State(store): State<StudentStore>,
    Path(id): Path<String>,
) -> PupilResult<Json<Student>> {
    let student = store
        .find_by_id(&id)
        .await
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}

pub async fn put_student(
    State(store): State<StudentStore>,
    Path(id): Path<String>,
    Json(fields): Json<StudentFields>,
) -> PupilResult<Json<Student>> {
    let student = store
        .update(&id, fields)
        .await
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(store): State<StudentStore>,
    Path(id): Path<String>,
) -> StatusCode {
    store.remove(&id).await;
    StatusCode::NO_CONTENT
}
