//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;
use domain::{CreateUserRequest, DomainError, User};

/// A type built from a wire payload by running its validation rules.
pub trait FromPayload: Sized {
    /// Wire shape; its default stands in for a body sent without a JSON
    /// content type.
    type Payload: DeserializeOwned + Default;

    fn from_payload(payload: Self::Payload) -> Result<Self, DomainError>;
}

impl FromPayload for User {
    type Payload = CreateUserRequest;

    fn from_payload(payload: CreateUserRequest) -> Result<Self, DomainError> {
        User::try_from(payload)
    }
}

/// Validated JSON extractor.
///
/// Deserializes the body into `T::Payload` and converts it into `T`, so
/// handlers only ever see values that passed every field rule. A request
/// without a JSON content type is read as an empty payload.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_user(ValidatedJson(user): ValidatedJson<User>) {
///     // user.id has at least 4 characters, the password is strong enough...
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: FromPayload,
    Json<T::Payload>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match Json::<T::Payload>::from_request(req, state).await {
            Ok(Json(payload)) => payload,
            Err(JsonRejection::MissingJsonContentType(_)) => T::Payload::default(),
            Err(e) => return Err(AppError::validation(e.body_text())),
        };

        let value = T::from_payload(payload)?;

        Ok(ValidatedJson(value))
    }
}
