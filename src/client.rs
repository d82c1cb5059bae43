//! The browser-facing half of the app: an HTTP client for the students API and the cached copy of
//! its data that the views render from.

pub mod api;
pub mod view_state;
