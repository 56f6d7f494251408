use std::{env, path::PathBuf, time::Duration};

use log::{debug, error, info};
use url::Url;

use crate::error::{PortfolioError, Result};

const DEFAULT_AGENT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the optional remote chat agent.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub endpoint: Url,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub portfolio_path: Option<PathBuf>,
    pub qa_path: Option<PathBuf>,
    pub agent: Option<AgentConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let portfolio_path = optional_var("PORTFOLIO_DATA_PATH").map(PathBuf::from);
        let qa_path = optional_var("PORTFOLIO_QA_PATH").map(PathBuf::from);

        let agent = match optional_var("AI_AGENT_ENDPOINT") {
            Some(endpoint) => {
                let endpoint = Url::parse(&endpoint).map_err(|e| {
                    error!("Failed to parse AI_AGENT_ENDPOINT '{}': {}", endpoint, e);
                    e
                })?;
                let timeout = match optional_var("AI_AGENT_TIMEOUT_SECS") {
                    Some(raw) => parse_timeout(&raw)?,
                    None => Duration::from_secs(DEFAULT_AGENT_TIMEOUT_SECS),
                };
                Some(AgentConfig {
                    endpoint,
                    api_key: optional_var("AI_AGENT_API_KEY"),
                    timeout,
                })
            }
            None => None,
        };

        info!("Configuration loaded successfully");
        debug!("Portfolio data path: {:?}", portfolio_path);
        debug!("Q&A data path: {:?}", qa_path);
        match &agent {
            Some(agent) => debug!(
                "AI agent endpoint: {} (timeout {:?}, api key set: {})",
                agent.endpoint,
                agent.timeout,
                agent.api_key.is_some()
            ),
            None => debug!("AI agent disabled"),
        }

        Ok(Self {
            portfolio_path,
            qa_path,
            agent,
        })
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        PortfolioError::Config(format!("AI_AGENT_TIMEOUT_SECS must be a whole number, got '{raw}'"))
    })?;
    if secs == 0 {
        return Err(PortfolioError::Config(
            "AI_AGENT_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_parses_seconds() {
        let timeout = parse_timeout(" 5 ").expect("valid timeout");
        assert_eq!(timeout, Duration::from_secs(5));
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert!(matches!(parse_timeout("0"), Err(PortfolioError::Config(_))));
        assert!(matches!(parse_timeout("soon"), Err(PortfolioError::Config(_))));
    }
}
