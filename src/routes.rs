use crate::state::FrontendState;
use axum::{
    Router,
    routing::{delete, get},
};

pub mod api_docs;
pub mod student_form;
pub mod student_list;
pub mod student_report;
pub mod students;

pub fn frontend_router() -> Router<FrontendState> {
    Router::new()
        .route("/", get(student_list::get_student_list))
        .route(
            "/add",
            get(student_form::get_add_student).post(student_form::post_add_student),
        )
        .route(
            "/edit/{id}",
            get(student_form::get_edit_student).post(student_form::post_edit_student),
        )
        .route("/report/{id}", get(student_report::get_student_report))
        .route("/internal/students", get(student_list::internal_get_students))
        .route(
            "/internal/students/{id}",
            delete(student_list::internal_delete_student),
        )
        .route(
            "/internal/report/{id}",
            get(student_report::internal_get_student_report),
        )
        .route("/api-docs", get(api_docs::get_api_docs))
        .route("/api-docs/openapi.json", get(api_docs::get_openapi_document))
}
