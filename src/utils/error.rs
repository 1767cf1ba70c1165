use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Failed to read portfolio document '{path}': {source}")]
    InputReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid portfolio document '{path}': {source}")]
    DocumentParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

impl PortfolioError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::InputReadError { path, .. } => {
                format!("Could not read the portfolio document at '{}'", path)
            }
            PortfolioError::DocumentParseError { path, source } => format!(
                "The portfolio document '{}' is not valid JSON (line {}, column {})",
                path,
                source.line(),
                source.column()
            ),
            PortfolioError::OutputWriteError { path, .. } => {
                format!("Could not write the generated page '{}'", path)
            }
            PortfolioError::IoError(e) => format!("File system error: {}", e),
            PortfolioError::ConfigValidationError { field, message } => {
                format!("Invalid argument '{}': {}", field, message)
            }
        }
    }

    /// 對應錯誤的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::InputReadError { .. } => {
                "Check that the path exists and is readable"
            }
            PortfolioError::DocumentParseError { .. } => {
                "Validate the document with a JSON linter and fix the reported position"
            }
            PortfolioError::OutputWriteError { .. } | PortfolioError::IoError(_) => {
                "Check write permissions and free space in the current directory"
            }
            PortfolioError::ConfigValidationError { .. } => {
                "Usage: portfolio-gen <path-to-portfolio.json>"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_includes_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"name\": }").unwrap_err();
        let err = PortfolioError::DocumentParseError {
            path: "portfolio.json".to_string(),
            source,
        };

        let message = err.user_friendly_message();
        assert!(message.contains("portfolio.json"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, PortfolioError::IoError(_)));
        assert!(err.recovery_suggestion().contains("permissions"));
    }
}
