use crate::{
    error::{ParseApiDocumentSnafu, PupilResult},
    maud_conveniences::{table, title},
    state::FrontendState,
};
use axum::{extract::State, http::header, response::IntoResponse};
use maud::{Markup, html};
use serde_json::Value;
use snafu::ResultExt;

pub const OPENAPI_DOCUMENT: &str = include_str!("../../assets/openapi.json");

const METHODS: [&str; 4] = ["get", "post", "put", "delete"];

fn parse_document() -> PupilResult<Value> {
    serde_json::from_str(OPENAPI_DOCUMENT).context(ParseApiDocumentSnafu)
}

pub async fn get_openapi_document() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}

pub async fn get_api_docs(State(state): State<FrontendState>) -> PupilResult<Markup> {
    let document = parse_document()?;
    Ok(state.render(render_document(&document)))
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

fn render_document(document: &Value) -> Markup {
    let mut endpoints = vec![];
    if let Some(paths) = document["paths"].as_object() {
        for (path, operations) in paths {
            for method in METHODS {
                let Some(operation) = operations.get(method) else {
                    continue;
                };
                let statuses = operation["responses"]
                    .as_object()
                    .map(|responses| responses.keys().cloned().collect::<Vec<_>>().join(", "))
                    .unwrap_or_default();

                endpoints.push([
                    html! { span class="font-mono font-bold" {(method.to_uppercase())} },
                    html! { span class="font-mono" {(path)} },
                    html! { (text(&operation["summary"])) },
                    html! { (statuses) },
                ]);
            }
        }
    }

    let mut schemas = vec![];
    if let Some(components) = document["components"]["schemas"].as_object() {
        for (name, schema) in components {
            let fields: Vec<_> = schema["properties"]
                .as_object()
                .map(|properties| {
                    properties
                        .iter()
                        .map(|(field, def)| format!("{field}: {}", text(&def["type"])))
                        .collect()
                })
                .unwrap_or_default();
            schemas.push([html! { (name) }, html! { (fields.join(", ")) }]);
        }
    }

    html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-8" {
            (title(html!{
                (text(&document["info"]["title"]))
                " "
                span class="text-sm text-gray-400" {"v" (text(&document["info"]["version"]))}
            }))
            (table(html!{ h2 class="text-xl font-semibold mb-2" {"Endpoints"} }, ["Method", "Path", "Summary", "Responses"], endpoints))
            (table(html!{ h2 class="text-xl font-semibold mb-2" {"Schemas"} }, ["Name", "Fields"], schemas))
            a href="/api-docs/openapi.json" class="text-blue-400 underline" {"Raw OpenAPI document"}
        }
    }
}
