use thiserror::Error;

/// Ошибки обращения к API накладных
///
/// Три класса, которые клиент показывает пользователю уведомлением:
/// сеть недоступна, сервер ответил ошибкой, данные формы некорректны.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("validation error: {0}")]
    Validation(String),
}

impl ApiError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Текст для всплывающего уведомления
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Cannot reach the invoice server".to_string(),
            Self::Server { status: 404, .. } => "Invoice no longer exists".to_string(),
            // 400 несет текст ошибки валидации с сервера
            Self::Server { status: 400, message } if !message.is_empty() => message.clone(),
            Self::Server { status, .. } => format!("Server error ({})", status),
            Self::Validation(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message(),
            "Cannot reach the invoice server"
        );
        assert_eq!(ApiError::server(500, "boom").user_message(), "Server error (500)");
        assert_eq!(ApiError::server(404, "").user_message(), "Invoice no longer exists");
        assert_eq!(ApiError::server(400, "Item name is required").user_message(), "Item name is required");
        assert_eq!(ApiError::server(400, "").user_message(), "Server error (400)");
        assert_eq!(
            ApiError::Validation("Price is required".into()).user_message(),
            "Price is required"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::server(502, "bad gateway").to_string(),
            "server error 502: bad gateway"
        );
    }
}
