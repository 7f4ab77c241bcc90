//! Account registration pipeline.
//!
//! A [`SignUpController`] checks required fields, asks an
//! [`EmailValidator`](ports::outbound::EmailValidator) about the address,
//! then hands the data to an [`AddAccount`](ports::inbound::AddAccount) use
//! case which hashes the password through an
//! [`Encryptor`](ports::outbound::Encryptor). Every outcome is a uniform
//! [`HttpResponse`].

#![forbid(unsafe_code)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod presentation;
pub mod telemetry;
pub mod usecases;

use std::sync::Arc;

pub use presentation::{
    Controller, HttpError, HttpRequest, HttpResponse, ResponseBody,
    SignUpController,
};

/// Wire the controller with the default adapters.
pub fn initialize_controller(
    config: &config::Configuration,
) -> error::Result<SignUpController> {
    let encryptor = Arc::new(adapters::Argon2Encryptor::new(&config.argon2)?);
    let account_repo = Arc::new(adapters::MemoryAccountRepository::new());
    let add_account =
        Arc::new(usecases::AddAccountUseCase::new(encryptor, account_repo));

    Ok(SignUpController::new(
        Arc::new(adapters::StandardEmailValidator::new()),
        add_account,
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> config::Configuration {
        let mut config = config::Configuration::default();
        config.argon2 = config::Argon2 {
            memory_cost: 1024,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        };
        config
    }

    #[tokio::test]
    async fn test_sign_up_end_to_end() {
        let controller = initialize_controller(&config()).unwrap();

        let response = controller
            .handle(HttpRequest::new(json!({
                "name": "n",
                "email": "a@b.com",
                "password": "pw",
            })))
            .await;

        assert_eq!(response.status_code, 200);
        let ResponseBody::Account(account) = response.body else {
            panic!("expected an account, got {:?}", response.body);
        };
        assert_eq!(account.id, "1");
        assert_eq!(account.name, "n");
        assert_eq!(account.email, "a@b.com");
        assert_ne!(account.password, "pw");
        assert!(account.password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_malformed_email() {
        let controller = initialize_controller(&config()).unwrap();

        let response = controller
            .handle(HttpRequest::new(json!({
                "name": "n",
                "email": "not-an-email",
                "password": "pw",
            })))
            .await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            ResponseBody::Error(HttpError::invalid_param("email"))
        );
    }

    #[test]
    fn test_initialize_with_invalid_argon2_config() {
        let mut config = config();
        config.argon2.hash_length = 0;

        assert!(matches!(
            initialize_controller(&config),
            Err(error::ApplicationError::HasherConfig(_))
        ));
    }
}
