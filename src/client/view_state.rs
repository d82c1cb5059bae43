use crate::data::student::Student;

///What the views last heard from the API. Only ever changed through [`ViewState::apply`], and only
///after a response has come back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub students: Vec<Student>,
    pub selected_student: Option<Student>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    ///after listing everything
    SetStudents(Vec<Student>),
    ///after a create
    AddStudent(Student),
    ///after an update
    UpdateStudent(Student),
    ///after a delete, carries the id
    DeleteStudent(String),
    ///after fetching one record for the form or report
    SetSelected(Student),
}

impl ViewState {
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SetStudents(students) => self.students = students,
            ViewAction::AddStudent(student) => self.students.push(student),
            ViewAction::UpdateStudent(updated) => {
                for student in self.students.iter_mut().filter(|s| s.id == updated.id) {
                    *student = updated.clone();
                }
            }
            ViewAction::DeleteStudent(id) => self.students.retain(|student| student.id != id),
            ViewAction::SetSelected(student) => self.selected_student = Some(student),
        }
    }
}
