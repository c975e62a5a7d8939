//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    MSG_EMAIL_NOT_STRING, MSG_ID_NOT_STRING, MSG_ID_TOO_SHORT, MSG_INVALID_PASSWORD,
    MSG_NAME_EMPTY, MSG_NAME_NOT_STRING, MIN_ID_LENGTH,
};
use crate::error::{DomainError, DomainResult};
use crate::validation::validate_password;

/// User record, stored and returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Externally supplied identifier
    #[cfg_attr(feature = "openapi", schema(example = "af01"))]
    pub id: String,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,
    /// Email address, unique across users
    #[cfg_attr(feature = "openapi", schema(example = "ana@x.com"))]
    pub email: String,
    /// Plain-text password
    #[cfg_attr(feature = "openapi", schema(example = "Ab1!23456"))]
    pub password: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User creation payload as received over the wire.
///
/// Members are kept as raw JSON so a missing or wrongly typed field is
/// reported by the field rules instead of the JSON parser. The body itself
/// must be a JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUserRequest {
    /// At least 4 characters
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "af01"))]
    pub id: Option<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "Ana"))]
    pub name: Option<Value>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "ana@x.com"))]
    pub email: Option<Value>,
    /// 8 to 12 characters with lowercase, uppercase, digit and special character
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "Ab1!23456"))]
    pub password: Option<Value>,
}

impl From<Map<String, Value>> for CreateUserRequest {
    fn from(mut members: Map<String, Value>) -> Self {
        Self {
            id: members.remove("id"),
            name: members.remove("name"),
            email: members.remove("email"),
            password: members.remove("password"),
        }
    }
}

/// Take a member as an owned string, or fail with `msg`.
fn string_field(value: Option<Value>, msg: &str) -> DomainResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(DomainError::validation(msg)),
    }
}

/// Field rules of user creation. The first failing rule wins.
impl TryFrom<CreateUserRequest> for User {
    type Error = DomainError;

    fn try_from(req: CreateUserRequest) -> DomainResult<Self> {
        let id = string_field(req.id, MSG_ID_NOT_STRING)?;
        if id.chars().count() < MIN_ID_LENGTH {
            return Err(DomainError::validation(MSG_ID_TOO_SHORT));
        }

        let name = string_field(req.name, MSG_NAME_NOT_STRING)?;
        if name.is_empty() {
            return Err(DomainError::validation(MSG_NAME_EMPTY));
        }

        let email = string_field(req.email, MSG_EMAIL_NOT_STRING)?;

        let password = string_field(req.password, MSG_INVALID_PASSWORD)?;
        if !validate_password(&password) {
            return Err(DomainError::validation(MSG_INVALID_PASSWORD));
        }

        Ok(User {
            id,
            name,
            email,
            password,
        })
    }
}
