use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, missing resources, bad form input) or from asset/JSON output.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Serialization Error: {0}")]
    Serialization(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::MethodNotAllowed => 405,
            ServerError::Io(_) | ServerError::Serialization(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_variant() {
        assert_eq!(ServerError::NotFound.status(), 404);
        assert_eq!(ServerError::BadRequest("x".into()).status(), 400);
        assert_eq!(ServerError::MethodNotAllowed.status(), 405);
        assert_eq!(ServerError::Io("disk".into()).status(), 500);
    }

    #[test]
    fn display_includes_detail() {
        let err = ServerError::BadRequest("missing: email".into());
        assert_eq!(err.to_string(), "Bad Request: missing: email");
    }
}
