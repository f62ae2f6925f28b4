//! Account registration controller.

use async_trait::async_trait;

use crate::controller::Controller;
use crate::model::{
    AddAccountModel, HttpError, HttpRequest, HttpResponse, SignUpBody,
};
use crate::ports::{AddAccount, EmailValidator};

/// Registration controller.
pub struct SignUpController {
    email_validator: Box<dyn EmailValidator>,
    add_account: Box<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(
        email_validator: Box<dyn EmailValidator>,
        add_account: Box<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// Run presence and consistency checks.
    ///
    /// Fields are checked in the order `name`, `email`, `password`,
    /// `password_confirmation`; the first failure is returned.
    fn validate(body: &SignUpBody) -> Result<AddAccountModel, HttpError> {
        let name = required(body, "name")?;
        let email = required(body, "email")?;
        let password = required(body, "password")?;
        let password_confirmation = required(body, "password_confirmation")?;

        if password != password_confirmation {
            return Err(HttpError::invalid("password_confirmation"));
        }

        Ok(AddAccountModel {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// Non-empty value of `field`.
fn required<'a>(
    body: &'a SignUpBody,
    field: &'static str,
) -> Result<&'a str, HttpError> {
    body.field(field)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| HttpError::missing(field))
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let account = match Self::validate(&request.body) {
            Ok(account) => account,
            Err(err) => {
                tracing::debug!(error = %err, "sign up rejected");
                return HttpResponse::bad_request(err);
            },
        };

        match self.email_validator.is_valid(&account.email) {
            Ok(true) => (),
            Ok(false) => {
                tracing::debug!("sign up rejected, invalid email");
                return HttpResponse::bad_request(HttpError::invalid("email"));
            },
            Err(err) => {
                tracing::error!(error = ?err, "email validation failed");
                return HttpResponse::server_error();
            },
        }

        match self.add_account.add(account).await {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "account created");
                HttpResponse::ok(account)
            },
            Err(err) => {
                tracing::error!(error = ?err, "account creation failed");
                HttpResponse::server_error()
            },
        }
    }
}
