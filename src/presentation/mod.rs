//! Request handling: validation, dispatch and uniform responses.

pub mod controllers;
pub mod error;
pub mod helpers;
pub mod http;

pub use controllers::*;
pub use error::HttpError;
pub use http::{HttpRequest, HttpResponse, ResponseBody};
