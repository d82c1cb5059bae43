use maud::{Render, html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub needs: String,
    #[serde(default)]
    pub report: String,
    ///anything else the caller sent us, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

///A partial record, as sent in create and update bodies. Any JSON object is accepted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Map<String, Value>")]
pub struct StudentFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for StudentFields {
    fn from(mut object: Map<String, Value>) -> Self {
        let mut take_text = |key: &str| object.remove(key).and_then(into_text);

        Self {
            name: take_text("name"),
            needs: take_text("needs"),
            report: take_text("report"),
            extra: object,
        }
    }
}

///Records are all text - `null` counts as not supplied, anything else is kept as its JSON text.
fn into_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl StudentFields {
    pub fn all(name: impl Into<String>, needs: impl Into<String>, report: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            needs: Some(needs.into()),
            report: Some(report.into()),
            extra: Map::new(),
        }
    }
}

impl Student {
    pub fn new(id: impl Into<String>, fields: StudentFields) -> Self {
        let StudentFields {
            name,
            needs,
            report,
            mut extra,
        } = fields;
        //ids are only ever assigned by the store
        extra.remove("id");

        Self {
            id: id.into(),
            name: name.unwrap_or_default(),
            needs: needs.unwrap_or_default(),
            report: report.unwrap_or_default(),
            extra,
        }
    }

    ///Shallow merge: supplied fields overwrite, everything else stays. The id never changes.
    pub fn merge(&mut self, fields: StudentFields) {
        let StudentFields {
            name,
            needs,
            report,
            extra,
        } = fields;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(needs) = needs {
            self.needs = needs;
        }
        if let Some(report) = report {
            self.report = report;
        }
        self.extra
            .extend(extra.into_iter().filter(|(key, _)| key != "id"));
    }
}

impl Render for Student {
    fn render(&self) -> Markup {
        html! {
            @if self.name.is_empty() {
                span class="italic text-gray-400" {"(unnamed)"}
            } @else {
                (self.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_empty() {
        let student = Student::new("7", StudentFields {
            name: Some("Ana".into()),
            ..Default::default()
        });
        assert_eq!(student.name, "Ana");
        assert_eq!(student.needs, "");
        assert_eq!(student.report, "");
    }

    #[test]
    fn client_supplied_id_is_dropped() {
        let fields: StudentFields =
            serde_json::from_value(json!({"id": "evil", "name": "Ana", "grade": 3})).unwrap();
        let student = Student::new("42", fields);

        assert_eq!(student.id, "42");
        assert_eq!(student.extra.get("grade"), Some(&json!(3)));
        assert!(!student.extra.contains_key("id"));

        let serialised = serde_json::to_value(&student).unwrap();
        assert_eq!(serialised["id"], json!("42"));
        assert_eq!(serialised["grade"], json!(3));
    }

    #[test]
    fn merge_only_touches_supplied_fields() {
        let mut student = Student::new("1", StudentFields::all("Juan", "TDAH", "Informe 1"));
        student.merge(StudentFields {
            needs: Some("Visual".into()),
            ..Default::default()
        });

        assert_eq!(student.name, "Juan");
        assert_eq!(student.needs, "Visual");
        assert_eq!(student.report, "Informe 1");
    }

    #[test]
    fn merge_ignores_id_in_payload() {
        let mut student = Student::new("1", StudentFields::all("Juan", "TDAH", "Informe 1"));
        let fields: StudentFields =
            serde_json::from_value(json!({"id": "2", "report": "Informe 9"})).unwrap();
        student.merge(fields);

        assert_eq!(student.id, "1");
        assert_eq!(student.report, "Informe 9");
        assert!(student.extra.is_empty());
    }

    #[test]
    fn non_string_values_are_kept_as_text() {
        let fields: StudentFields = serde_json::from_value(
            json!({"name": 5, "needs": null, "report": {"term": 1}, "year": 4}),
        )
        .unwrap();

        assert_eq!(fields.name.as_deref(), Some("5"));
        assert_eq!(fields.needs, None);
        assert_eq!(fields.report.as_deref(), Some(r#"{"term":1}"#));
        assert_eq!(fields.extra.get("year"), Some(&json!(4)));
    }

    #[test]
    fn partial_fields_skip_absent_keys_when_serialised() {
        let fields = StudentFields {
            report: Some("X".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(fields).unwrap(), json!({"report": "X"}));
    }
}
