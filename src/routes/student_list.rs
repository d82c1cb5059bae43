use crate::{
    client::view_state::ViewAction,
    data::student::Student,
    maud_conveniences::{error_alert, loading_placeholder, table, title},
    state::FrontendState,
};
use axum::extract::{Path, State};
use maud::{Markup, html};

pub async fn get_student_list(State(state): State<FrontendState>) -> Markup {
    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            div id="all_students" hx-get="/internal/students" hx-trigger="load" {
                (loading_placeholder())
            }
            a href="/add" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded text-center" {
                "Add new Student"
            }
        }
    })
}

pub async fn internal_get_students(State(state): State<FrontendState>) -> Markup {
    match state.api().list().await {
        Ok(students) => {
            let view_state = state.dispatch(ViewAction::SetStudents(students)).await;
            render_students_table(&view_state.students)
        }
        Err(e) => {
            error!(?e, "Unable to fetch students");
            error_alert(e.to_string())
        }
    }
}

pub async fn internal_delete_student(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
) -> Markup {
    if let Err(e) = state.api().delete(&id).await {
        error!(?e, %id, "Unable to delete student");
        let current = state.view_state().await;
        return html! {
            (error_alert(e.to_string()))
            (render_students_table(&current.students))
        };
    }

    let view_state = state.dispatch(ViewAction::DeleteStudent(id)).await;
    render_students_table(&view_state.students)
}

pub fn render_students_table(students: &[Student]) -> Markup {
    let rows = students
        .iter()
        .map(|student| {
            [
                html! { (student) },
                html! { (student.needs) },
                html! { (student.report) },
                html! {
                    div class="flex flex-row space-x-2" {
                        a href={"/edit/" (student.id)} class="hover:text-blue-300 underline" {"Edit"}
                        button class="bg-red-600 hover:bg-red-800 font-bold px-2 rounded" hx-delete={"/internal/students/" (student.id)} hx-target="#all_students" {
                            "Delete"
                        }
                        a href={"/report/" (student.id)} class="hover:text-blue-300 underline" {"View Report"}
                    }
                },
            ]
        })
        .collect();

    table(
        title("Students"),
        ["Name", "Needs", "Report", "Actions"],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::student::StudentFields;

    #[test]
    fn table_has_a_row_per_student_with_actions() {
        let students = vec![
            Student::new("1", StudentFields::all("Juan Pérez", "TDAH", "Informe 1")),
            Student::new("2", StudentFields::all("María López", "Sordera", "Informe 2")),
        ];
        let markup = render_students_table(&students).into_string();

        assert_eq!(markup.matches("<tr>").count(), 3);
        assert!(markup.contains("Juan Pérez"));
        assert!(markup.contains("Sordera"));
        assert!(markup.contains("href=\"/edit/1\""));
        assert!(markup.contains("hx-delete=\"/internal/students/2\""));
        assert!(markup.contains("href=\"/report/2\""));
    }

    #[test]
    fn student_text_is_escaped() {
        let students = vec![Student::new(
            "1",
            StudentFields::all("<b>Ana</b>", "TDAH", "Informe"),
        )];
        let markup = render_students_table(&students).into_string();

        assert!(markup.contains("&lt;b&gt;Ana&lt;/b&gt;"));
        assert!(!markup.contains("<b>Ana"));
    }
}
