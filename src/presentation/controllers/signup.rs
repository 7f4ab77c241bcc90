//! Account registration controller.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use crate::domain::RegistrationInput;
use crate::ports::inbound::AddAccount;
use crate::ports::outbound::EmailValidator;
use crate::presentation::controllers::Controller;
use crate::presentation::error::HttpError;
use crate::presentation::helpers::{bad_request, internal_server_error, ok};
use crate::presentation::http::{HttpRequest, HttpResponse};

/// Validates a registration request and creates the account.
///
/// Checks run in a fixed order and stop at the first failure: `name`,
/// `email` and `password` presence, then the email format, then account
/// creation. Collaborator failures are logged and masked as a 500.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

/// Extract required fields, reporting the first missing one.
fn registration_input(
    request: &HttpRequest,
) -> Result<RegistrationInput, HttpError> {
    let name = request
        .field("name")
        .ok_or_else(|| HttpError::missing_param("name"))?;
    let email = request
        .field("email")
        .ok_or_else(|| HttpError::missing_param("email"))?;
    let password = request
        .field("password")
        .ok_or_else(|| HttpError::missing_param("password"))?;

    Ok(RegistrationInput::new(name, email, password))
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let input = match registration_input(&request) {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(error = %err, "rejected sign up request");
                return bad_request(err);
            },
        };

        let is_valid = catch_unwind(AssertUnwindSafe(|| {
            self.email_validator.is_valid(&input.email)
        }));
        match is_valid {
            Ok(true) => {},
            Ok(false) => return bad_request(HttpError::invalid_param("email")),
            Err(_) => {
                tracing::error!(
                    "email validator panicked, server returned 500 status"
                );
                return internal_server_error();
            },
        }

        let created = AssertUnwindSafe(self.add_account.add(input))
            .catch_unwind()
            .await;
        match created {
            Ok(Ok(account)) => ok(account),
            Ok(Err(err)) => {
                tracing::error!(
                    error = %err,
                    "account creation failed, server returned 500 status"
                );
                internal_server_error()
            },
            Err(_) => {
                tracing::error!(
                    "account creation panicked, server returned 500 status"
                );
                internal_server_error()
            },
        }
    }
}
