/// DocDeck error types
#[derive(Debug, thiserror::Error)]
pub enum DocDeckError {
    /// File extension is not one of the supported document formats
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// Document parsing error
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// LLM related error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("File system error: {0}")]
    FileSystem(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found
    #[error("{0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocDeckError {
    /// Create extraction error
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        Self::Extraction(msg.into())
    }

    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create file system error
    pub fn file_system<S: Into<String>>(msg: S) -> Self {
        Self::FileSystem(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

impl DocDeckError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedFormat => 400,
            Self::InvalidInput(_) => 400,
            Self::Json(_) => 400,
            Self::NotFound(_) => 404,
            Self::Extraction(_) => 500,
            Self::Llm(_) => 500,
            Self::Config(_) => 500,
            Self::FileSystem(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(DocDeckError::UnsupportedFormat.status_code(), 400);
        assert_eq!(DocDeckError::invalid_input("bad").status_code(), 400);
        assert_eq!(DocDeckError::not_found("File not found").status_code(), 404);
        assert_eq!(DocDeckError::llm("timeout").status_code(), 500);
        assert_eq!(DocDeckError::extraction("corrupt").status_code(), 500);
        assert_eq!(DocDeckError::file_system("disk full").status_code(), 500);
    }

    #[test]
    fn test_messages() {
        assert_eq!(DocDeckError::UnsupportedFormat.to_string(), "Unsupported file format");
        assert_eq!(DocDeckError::not_found("File not found").to_string(), "File not found");
        assert_eq!(DocDeckError::llm("boom").to_string(), "LLM error: boom");
    }
}
