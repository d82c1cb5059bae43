use crate::client::{
    api::StudentsApi,
    view_state::{ViewAction, ViewState},
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::Mutex;

///Everything the view handlers share: how to reach the API and the cached data they render from.
#[derive(Clone, Debug)]
pub struct FrontendState {
    api: StudentsApi,
    view_state: Arc<Mutex<ViewState>>,
}

impl FrontendState {
    pub fn new(api: StudentsApi) -> Self {
        Self {
            api,
            view_state: Arc::new(Mutex::new(ViewState::default())),
        }
    }

    pub const fn api(&self) -> &StudentsApi {
        &self.api
    }

    ///Applies the action and hands back a snapshot of the result, for rendering.
    pub async fn dispatch(&self, action: ViewAction) -> ViewState {
        let mut view_state = self.view_state.lock().await;
        view_state.apply(action);
        view_state.clone()
    }

    pub async fn view_state(&self) -> ViewState {
        self.view_state.lock().await.clone()
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        render_page(markup)
    }
}

///The full page shell, for when there's no state to hand - e.g. error pages.
pub fn render_page(markup: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8" {}
                meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                title { "Pupil" }
            }
            body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                (render_nav())
                (markup)
            }
        }
    }
}

fn render_nav() -> Markup {
    html! {
        nav class="w-full bg-gray-800 shadow-md mb-8" {
            div class="max-w-4xl mx-auto flex flex-row space-x-4 p-4" {
                a href="/" class="hover:text-blue-300 font-semibold" {"Students"}
                a href="/add" class="hover:text-blue-300 font-semibold" {"Add Student"}
                a href="/api-docs" class="hover:text-blue-300 font-semibold" {"API Docs"}
            }
        }
    }
}
