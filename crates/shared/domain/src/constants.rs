//! Domain-level constants.
//!
//! These constants define business rules and the messages reported to
//! clients when a rule is violated.

// =============================================================================
// Validation
// =============================================================================

/// Minimum user id length
pub const MIN_ID_LENGTH: usize = 4;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 12;

/// Character an id must carry at index 1 to be deletable
pub const DELETABLE_ID_MARKER: char = 'f';

// =============================================================================
// Validation messages
// =============================================================================

pub const MSG_ID_NOT_STRING: &str = "id deve ser string";

pub const MSG_ID_TOO_SHORT: &str = "id deve possuir pelo menos 4 caracteres";

pub const MSG_NAME_NOT_STRING: &str = "name deve ser string";

pub const MSG_NAME_EMPTY: &str = "name não pode ser vazio";

pub const MSG_EMAIL_NOT_STRING: &str = "email deve ser string";

pub const MSG_INVALID_PASSWORD: &str = "'password' deve possuir entre 8 e 12 caracteres, com letras maiúsculas e minúsculas e no mínimo um número e um caractere especial";

pub const MSG_ID_TAKEN: &str = "id já existente";

pub const MSG_EMAIL_TAKEN: &str = "email já existente";

/// Reported when the second character of an id is not the marker.
pub const MSG_ID_MARKER: &str = "id deve iniciar com a letra f";

pub const MSG_ID_NOT_FOUND: &str = "id não encontrado";

/// Fallback for errors that carry no message
pub const MSG_UNEXPECTED: &str = "Erro inesperado";

// =============================================================================
// Success messages
// =============================================================================

pub const MSG_PONG: &str = "Pong!";

pub const MSG_USER_CREATED: &str = "Usuário criado com sucesso";

pub const MSG_USER_DELETED: &str = "Usuário deletado com sucesso";
