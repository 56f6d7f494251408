//! HTTP client for an external chat agent.

use chrono::Utc;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::AgentConfig;
use crate::error::{PortfolioError, Result};
use crate::types::Portfolio;

const SOURCE_HEADER: &str = "X-Portfolio-Source";
const SOURCE_VALUE: &str = "portfolio-website";
const EMPTY_REPLY: &str = "I couldn't process your request at the moment.";
const INITIALIZE_ACTION: &str = "initialize_portfolio_context";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    portfolio_context: Option<&'a Portfolio>,
    timestamp: String,
    user_session: String,
}

#[derive(Debug, Serialize)]
struct ContextRequest<'a> {
    portfolio_data: &'a Portfolio,
    timestamp: String,
    action: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> String {
        self.response
            .filter(|text| !text.is_empty())
            .or(self.message.filter(|text| !text.is_empty()))
            .unwrap_or_else(|| EMPTY_REPLY.to_string())
    }
}

/// Status report from the agent's `/info` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl AgentInfo {
    fn local(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            message: Some(message.to_string()),
        }
    }
}

pub struct AgentClient {
    endpoint: Url,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl AgentClient {
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let mut builder = self
            .client
            .request(method, self.url(path)?)
            .header(SOURCE_HEADER, SOURCE_VALUE);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        Ok(builder)
    }

    /// Send one visitor message and return the agent's reply text.
    pub async fn send_message(&self, message: &str, context: Option<&Portfolio>) -> Result<String> {
        debug!("Sending message to AI agent at {}", self.endpoint);

        let payload = ChatRequest {
            message,
            portfolio_context: context,
            timestamp: Utc::now().to_rfc3339(),
            user_session: session_id(),
        };

        let response = self
            .request(reqwest::Method::POST, "chat")?
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PortfolioError::AgentTimeout
                } else {
                    PortfolioError::Reqwest(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            return Err(PortfolioError::AgentApi { status, message });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| PortfolioError::AgentResponse(e.to_string()))?;

        debug!("Received response from AI agent");
        Ok(body.into_text())
    }

    /// Push the portfolio to the agent. Failures are logged only.
    pub async fn initialize(&self, portfolio: &Portfolio) {
        let payload = ContextRequest {
            portfolio_data: portfolio,
            timestamp: Utc::now().to_rfc3339(),
            action: INITIALIZE_ACTION,
        };

        let sent = match self.request(reqwest::Method::POST, "initialize") {
            Ok(builder) => builder.json(&payload).send().await.map_err(PortfolioError::from),
            Err(e) => Err(e),
        };

        match sent {
            Ok(response) if response.status().is_success() => {
                info!("AI agent initialized with portfolio data");
            }
            Ok(response) => {
                warn!("AI agent initialization returned {}", response.status());
            }
            Err(e) => {
                error!("Failed to initialize AI agent with portfolio data: {}", e);
            }
        }
    }

    pub async fn health_check(&self) -> bool {
        let response = match self.request(reqwest::Method::GET, "health") {
            Ok(builder) => builder.send().await,
            Err(e) => {
                error!("AI agent health check failed: {}", e);
                return false;
            }
        };

        match response {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                error!("AI agent health check failed: {}", e);
                false
            }
        }
    }

    pub async fn agent_info(&self) -> AgentInfo {
        let response = match self.request(reqwest::Method::GET, "info") {
            Ok(builder) => builder.send().await,
            Err(e) => {
                error!("Failed to get AI agent info: {}", e);
                return AgentInfo::local("error", "Agent not reachable");
            }
        };

        match response {
            Ok(response) if response.status().is_success() => {
                response.json().await.unwrap_or_else(|e| {
                    warn!("AI agent info was not valid JSON: {}", e);
                    AgentInfo::local("unknown", "Unable to get agent info")
                })
            }
            Ok(_) => AgentInfo::local("unknown", "Unable to get agent info"),
            Err(e) => {
                error!("Failed to get AI agent info: {}", e);
                AgentInfo::local("error", "Agent not reachable")
            }
        }
    }
}

/// `session_<unix millis>_<random hex>`
fn session_id() -> String {
    format!(
        "session_{}_{:08x}",
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}
