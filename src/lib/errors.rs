use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Returns the server-reported message for HTTP failures, if any.
    /// Credential flows use this to surface the server's own wording and
    /// fall back to a generic message for every other failure class.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text fit for showing next to a form: the server's own wording when it
    /// sent any, the transport detail for connectivity failures, and the
    /// caller's fallback for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http { .. } => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            AppError::Network(message) | AppError::Timeout(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn server_message_only_for_http_errors() {
        let http = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(http.server_message(), Some("Invalid credentials"));

        let network = AppError::Network("connection refused".to_string());
        assert_eq!(network.server_message(), None);

        let empty = AppError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(empty.server_message(), None);
    }

    #[test]
    fn user_message_prefers_server_wording_over_the_fallback() {
        let http = AppError::Http {
            status: 409,
            message: "Username is already taken".to_string(),
        };
        assert_eq!(http.user_message("Try again."), "Username is already taken");

        let bodyless = AppError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(bodyless.user_message("Try again."), "Try again.");

        let network = AppError::Network("connection refused".to_string());
        assert_eq!(network.user_message("Try again."), "connection refused");
    }

    #[test]
    fn display_includes_status_for_http_errors() {
        let err = AppError::Http {
            status: 422,
            message: "Username is taken".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (422): Username is taken");
    }
}
