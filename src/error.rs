use std::fmt;

/// Unified error type for dog.ceo API operations
#[derive(Debug)]
pub enum ApiError {
    /// HTTP request failed (network error, connection refused, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// API returned its JSON error envelope
    ApiResponse { code: String, details: String },
    /// HTTP error status code without a readable error body
    HttpStatus(reqwest::StatusCode),
    /// Image decoding error
    Image(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Parse(e) => write!(f, "Parse error: {}", e),
            ApiError::ApiResponse { code, details } => write!(f, "{}: {}", code, details),
            ApiError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ApiError::Image(msg) => write!(f, "Image error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e) => Some(e),
            ApiError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err)
    }
}

impl From<image::ImageError> for ApiError {
    fn from(err: image::ImageError) -> Self {
        ApiError::Image(err.to_string())
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that stop the application from starting
#[derive(Debug)]
pub enum AppError {
    /// The background Tokio runtime could not be created
    Runtime(std::io::Error),
    /// The native window or rendering backend failed
    Gui(eframe::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Runtime(e) => write!(f, "Runtime error: {}", e),
            AppError::Gui(e) => write!(f, "GUI error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Runtime(e) => Some(e),
            AppError::Gui(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Runtime(err)
    }
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Gui(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_api_response_display() {
        let err = ApiError::ApiResponse {
            code: "404".to_string(),
            details: "Breed not found (master breed does not exist)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "404: Breed not found (master breed does not exist)"
        );
    }

    #[test]
    fn test_http_status_display() {
        let err = ApiError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY);
        assert!(err.to_string().starts_with("HTTP error: 502"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ApiError::from(json_err);
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_runtime_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no threads");
        let err = AppError::from(io);
        assert_eq!(err.to_string(), "Runtime error: no threads");
    }
}
