use thiserror::Error;

/// Reasons a chat request body is rejected before any upstream call.
///
/// The `Display` text is returned verbatim to the client as `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("messages is required")]
    MissingMessages,

    #[error("messages must be an array")]
    MessagesNotArray,

    #[error("messages must not be empty")]
    EmptyMessages,

    #[error("messages[{index}] must be an object with role and content")]
    TurnNotObject { index: usize },

    #[error("messages[{index}].role must be 'user' or 'assistant'")]
    InvalidRole { index: usize },

    #[error("messages[{index}].content must be a non-empty string")]
    EmptyContent { index: usize },

    #[error("userLocation must be a string")]
    InvalidLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_names_field() {
        let err = ValidationError::InvalidRole { index: 3 };
        assert_eq!(
            err.to_string(),
            "messages[3].role must be 'user' or 'assistant'"
        );
    }

    #[test]
    fn test_empty_messages_display() {
        assert_eq!(
            ValidationError::EmptyMessages.to_string(),
            "messages must not be empty"
        );
    }
}
