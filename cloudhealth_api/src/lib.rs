//! Typed client for the CloudHealth REST API.
//!
//! All endpoints go through one pipeline: [`Client::execute`] sends a
//! [`Request`], buffers the body and maps the status code onto [`Error`];
//! list endpoints are walked page by page with [`Client::fetch_all`].

mod client;
mod errors;
mod pagination;
mod query;
mod resources;
pub mod types;
pub use self::client::{AuthStyle, Client, Request, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::pagination::{Page, PageCursor};
pub use self::query::CostHistoryQuery;
pub use reqwest::Method;
