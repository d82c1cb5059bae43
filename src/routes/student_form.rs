use crate::{
    client::view_state::ViewAction,
    data::student::{Student, StudentFields},
    error::PupilResult,
    maud_conveniences::{form_submit_button, simple_form_element, textarea_form_element, title},
    state::FrontendState,
};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct StudentForm {
    name: String,
    needs: String,
    report: String,
}

impl From<StudentForm> for StudentFields {
    fn from(StudentForm { name, needs, report }: StudentForm) -> Self {
        Self::all(name, needs, report)
    }
}

pub async fn get_add_student(State(state): State<FrontendState>) -> Markup {
    state.render(render_student_form(None))
}

pub async fn get_edit_student(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
) -> PupilResult<Markup> {
    let student = state.api().get(&id).await?;
    state.dispatch(ViewAction::SetSelected(student.clone())).await;

    Ok(state.render(render_student_form(Some(&student))))
}

pub async fn post_add_student(
    State(state): State<FrontendState>,
    Form(form): Form<StudentForm>,
) -> PupilResult<Redirect> {
    let created = state.api().create(&form.into()).await?;
    state.dispatch(ViewAction::AddStudent(created)).await;

    Ok(Redirect::to("/"))
}

pub async fn post_edit_student(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
    Form(form): Form<StudentForm>,
) -> PupilResult<Redirect> {
    let updated = state.api().update(&id, &form.into()).await?;
    state.dispatch(ViewAction::UpdateStudent(updated)).await;

    Ok(Redirect::to("/"))
}

///Creating or editing is decided purely by whether there's an existing student to pre-fill from.
pub fn render_student_form(existing: Option<&Student>) -> Markup {
    let (heading, action, button) = match existing {
        Some(student) => ("Edit Student", format!("/edit/{}", student.id), "Update"),
        None => ("Add Student", "/add".to_string(), "Save"),
    };

    html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            (title(heading))
            form method="post" action=(action) class="p-4" {
                (simple_form_element("name", "Name", true, existing.map(|s| s.name.as_str())))
                (simple_form_element("needs", "Needs", true, existing.map(|s| s.needs.as_str())))
                (textarea_form_element("report", "Report", true, existing.map(|s| s.report.as_str())))

                (form_submit_button(button))
            }
        }
    }
}
