use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid Q&A record #{index}: {reason}")]
    InvalidQa { index: usize, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("AI agent API error ({status}): {message}")]
    AgentApi {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("AI agent response error: {0}")]
    AgentResponse(String),

    #[error("AI agent response timed out")]
    AgentTimeout,

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl PortfolioError {
    /// Returns a user-friendly message for errors that stop the program.
    ///
    /// Agent failures during chat never get here; the chat service answers
    /// from the static table instead.
    pub fn user_message(&self) -> String {
        match self {
            PortfolioError::Io(_) | PortfolioError::Json(_) | PortfolioError::InvalidQa { .. } => {
                "Sorry, the portfolio data could not be loaded.".to_string()
            }
            PortfolioError::Config(_) | PortfolioError::InvalidUrl(_) => {
                "Sorry, there's a configuration issue on my end.".to_string()
            }
            PortfolioError::AgentApi { .. }
            | PortfolioError::AgentResponse(_)
            | PortfolioError::AgentTimeout
            | PortfolioError::Reqwest(_) => {
                "Sorry, the AI assistant could not be set up.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
