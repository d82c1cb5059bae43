use crate::{
    client::view_state::ViewAction,
    data::student::Student,
    maud_conveniences::{error_alert, loading_placeholder, title},
    state::FrontendState,
};
use axum::extract::{Path, State};
use maud::{Markup, html};

pub async fn get_student_report(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
) -> Markup {
    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-md w-full" hx-get={"/internal/report/" (id)} hx-trigger="load" {
            (loading_placeholder())
        }
    })
}

pub async fn internal_get_student_report(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
) -> Markup {
    match state.api().get(&id).await {
        Ok(student) => {
            let markup = render_report(&student);
            state.dispatch(ViewAction::SetSelected(student)).await;
            markup
        }
        Err(e) => {
            error!(?e, %id, "Unable to fetch student report");
            error_alert(e.to_string())
        }
    }
}

pub fn render_report(student: &Student) -> Markup {
    html! {
        (title(html!{"Report for " (student)}))
        p class="text-gray-200 font-semibold" {
            "Needs: "
            span class="font-medium" {(student.needs)}
        }
        div class="text-gray-200 font-semibold" {
            "Report: "
            div class="font-medium" {
                @for line in student.report.lines() {
                    (line)
                    br;
                }
            }
        }
        a href="/" class="hover:text-blue-300 underline" {"Back to list"}
    }
}
