use crate::{maud_conveniences::error_alert, state::render_page};
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use serde_json::json;
use snafu::Snafu;
use std::net::{AddrParseError, SocketAddr};

pub type PupilResult<T> = Result<T, PupilError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PupilError {
    #[snafu(display("Student not found"))]
    MissingStudent { id: String },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse socket address {:?}", original))]
    ParseSocketAddr {
        source: AddrParseError,
        original: String,
    },
    #[snafu(display("Unable to parse students API base url {:?}", original))]
    ParseApiBase {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("Students API base url {:?} can't have paths added to it", original))]
    ApiBaseCannotBeABase { original: String },
    #[snafu(display("Unable to reach the students API"))]
    ApiRequest { source: reqwest::Error },
    #[snafu(display("Students API responded with {}: {}", status, message))]
    ApiStatus { status: StatusCode, message: String },
    #[snafu(display("Unable to listen on {}", addr))]
    BindListener {
        source: std::io::Error,
        addr: SocketAddr,
    },
    #[snafu(display("Bundled OpenAPI document is not valid JSON"))]
    ParseApiDocument { source: serde_json::Error },
    #[snafu(display("Error serving app"))]
    Serve { source: std::io::Error },
}

impl IntoResponse for PupilError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //api unreachable

        error!(?self, "Error!");

        match &self {
            //the only failure the JSON API itself models
            Self::MissingStudent { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            _ => {
                let status_code = match &self {
                    Self::ApiRequest { .. } => BG,
                    Self::ApiStatus { status, .. } => *status,
                    _ => ISE,
                };
                let page = render_page(html! {
                    div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
                        (error_alert(self.to_string()))
                        a href="/" class="hover:text-blue-300 underline" {"Back to list"}
                    }
                });
                (status_code, Html(page.into_string())).into_response()
            }
        }
    }
}
