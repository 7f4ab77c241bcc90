//! Builders for uniform responses.

use crate::domain::Account;
use crate::presentation::error::HttpError;
use crate::presentation::http::{HttpResponse, ResponseBody};

pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// 400 response carrying `error`.
pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// 200 response carrying `account` as is.
pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: OK,
        body: ResponseBody::Account(account),
    }
}

/// 500 response with the masked error.
pub fn internal_server_error() -> HttpResponse {
    HttpResponse {
        status_code: INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(HttpError::Internal),
    }
}
