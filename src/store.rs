use crate::data::student::{Student, StudentFields};
use jiff::Timestamp;
use std::sync::Arc;
use tokio::sync::Mutex;

///The in-memory collection of every student, in insertion order.
///
///Clones share the same collection. Every operation holds the one lock for its whole duration, so
///concurrent requests are serialised against each other and nothing finer-grained is needed.
#[derive(Clone, Debug, Default)]
pub struct StudentStore {
    students: Arc<Mutex<Vec<Student>>>,
}

impl StudentStore {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(students: Vec<Student>) -> Self {
        Self {
            students: Arc::new(Mutex::new(students)),
        }
    }

    ///The two records every fresh process starts with.
    pub fn seeded() -> Self {
        Self::from_records(vec![
            Student::new("1", StudentFields::all("Juan Pérez", "TDAH", "Informe 1")),
            Student::new("2", StudentFields::all("María López", "Sordera", "Informe 2")),
        ])
    }

    pub async fn list_all(&self) -> Vec<Student> {
        self.students.lock().await.clone()
    }

    pub async fn insert(&self, fields: StudentFields) -> Student {
        let mut students = self.students.lock().await;

        let id = next_id(&students, Timestamp::now().as_millisecond());
        let student = Student::new(id, fields);
        students.push(student.clone());

        info!(id = %student.id, total = students.len(), "Added student");
        student
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Student> {
        self.students
            .lock()
            .await
            .iter()
            .find(|student| student.id == id)
            .cloned()
    }

    pub async fn update(&self, id: &str, fields: StudentFields) -> Option<Student> {
        let mut students = self.students.lock().await;
        let student = students.iter_mut().find(|student| student.id == id)?;
        student.merge(fields);

        debug!(%id, "Updated student");
        Some(student.clone())
    }

    ///Removing an id that isn't there is fine - the end state is the same either way.
    pub async fn remove(&self, id: &str) {
        let mut students = self.students.lock().await;
        let before = students.len();
        students.retain(|student| student.id != id);

        debug!(%id, removed = before - students.len(), "Removed student");
    }
}

///Millisecond timestamps as ids, bumped along until they don't collide with a live record.
fn next_id(existing: &[Student], now_millis: i64) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|student| student.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> StudentFields {
        StudentFields::all(name, "Visual", "X")
    }

    #[tokio::test]
    async fn seeded_store_keeps_insertion_order() {
        let store = StudentStore::seeded();
        let all = store.list_all().await;

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "1");
        assert_eq!(all[0].name, "Juan Pérez");
        assert_eq!(all[1].id, "2");
        assert_eq!(all[1].name, "María López");
    }

    #[tokio::test]
    async fn insert_assigns_fresh_id_and_appends() {
        let store = StudentStore::seeded();
        let before: Vec<_> = store.list_all().await.into_iter().map(|s| s.id).collect();

        let created = store.insert(fields("Ana")).await;
        assert!(!created.id.is_empty());
        assert!(!before.contains(&created.id));

        let all = store.list_all().await;
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn quick_inserts_never_share_an_id() {
        let store = StudentStore::empty();
        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(store.insert(fields(&format!("student {i}"))).await.id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn create_then_read_round_trips() {
        let store = StudentStore::empty();
        let created = store.insert(fields("Ana")).await;

        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found.name, "Ana");
        assert_eq!(found.needs, "Visual");
        assert_eq!(found.report, "X");
    }

    #[tokio::test]
    async fn missing_ids_are_not_found_and_delete_is_silent() {
        let store = StudentStore::seeded();

        assert!(store.find_by_id("999").await.is_none());
        assert!(store.update("999", fields("Nobody")).await.is_none());

        store.remove("999").await;
        assert_eq!(store.list_all().await.len(), 2);
    }

    #[tokio::test]
    async fn delete_twice_is_idempotent() {
        let store = StudentStore::seeded();

        store.remove("1").await;
        store.remove("1").await;

        let all = store.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "2");
    }

    #[tokio::test]
    async fn update_merges_in_place() {
        let store = StudentStore::seeded();
        let updated = store
            .update("2", StudentFields {
                report: Some("Informe nuevo".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "María López");
        assert_eq!(updated.needs, "Sordera");
        assert_eq!(updated.report, "Informe nuevo");
        assert_eq!(store.list_all().await[1], updated);
    }

    #[test]
    fn next_id_skips_collisions() {
        let existing = vec![
            Student::new("100", StudentFields::default()),
            Student::new("101", StudentFields::default()),
        ];
        assert_eq!(next_id(&existing, 100), "102");
        assert_eq!(next_id(&existing, 5), "5");
    }
}
