//! Chat front door: remote agent first, static answers as the fallback.

use std::time::Duration;

use log::{debug, info, warn};
use strum::{Display, EnumString};

use crate::{
    agent::AgentClient,
    error::{PortfolioError, Result},
    responder::StaticResponder,
    types::Portfolio,
};

/// Longest message forwarded, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AgentStatus {
    Checking,
    Connected,
    Disconnected,
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReplySource {
    Agent,
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

pub struct ChatService {
    responder: StaticResponder,
    portfolio: Option<Portfolio>,
    agent: Option<AgentClient>,
    timeout: Duration,
    status: AgentStatus,
}

impl ChatService {
    /// A service that only uses the static responder.
    pub fn offline(responder: StaticResponder) -> Self {
        Self {
            responder,
            portfolio: None,
            agent: None,
            timeout: Duration::ZERO,
            status: AgentStatus::Disconnected,
        }
    }

    /// A service that asks `agent` first. `portfolio` is sent along as context.
    pub fn with_agent(
        responder: StaticResponder,
        portfolio: Portfolio,
        agent: AgentClient,
        timeout: Duration,
    ) -> Self {
        Self {
            responder,
            portfolio: Some(portfolio),
            agent: Some(agent),
            timeout,
            status: AgentStatus::Checking,
        }
    }

    pub fn status(&self) -> AgentStatus {
        self.status
    }

    pub fn responder(&self) -> &StaticResponder {
        &self.responder
    }

    /// Run the agent health check and record the outcome.
    pub async fn refresh_status(&mut self) -> AgentStatus {
        self.status = match &self.agent {
            Some(agent) if agent.health_check().await => AgentStatus::Connected,
            _ => AgentStatus::Disconnected,
        };
        info!("AI agent status: {}", self.status);
        self.status
    }

    /// Send the portfolio to the agent, if there is one.
    pub async fn initialize_agent(&self) {
        if let (Some(agent), Some(portfolio)) = (&self.agent, &self.portfolio) {
            agent.initialize(portfolio).await;
        }
    }

    /// Answer one visitor message. Blank input gets no reply.
    pub async fn reply(&mut self, input: &str) -> Option<Reply> {
        if input.trim().is_empty() {
            return None;
        }
        let input = truncate_chars(input, MAX_MESSAGE_LENGTH);

        if let Some(agent) = &self.agent {
            match self.ask_agent(agent, input).await {
                Ok(text) => {
                    self.status = AgentStatus::Connected;
                    return Some(Reply {
                        text,
                        source: ReplySource::Agent,
                    });
                }
                Err(e) => {
                    warn!("AI agent unavailable, using static answers: {}", e);
                    self.status = AgentStatus::Disconnected;
                }
            }
        }

        debug!("Answering from static responder");
        Some(Reply {
            text: self.responder.respond(input),
            source: ReplySource::Static,
        })
    }

    async fn ask_agent(&self, agent: &AgentClient, input: &str) -> Result<String> {
        tokio::time::timeout(self.timeout, agent.send_message(input, self.portfolio.as_ref()))
            .await
            .map_err(|_| PortfolioError::AgentTimeout)?
    }
}

fn truncate_chars(input: &str, max: usize) -> &str {
    match input.char_indices().nth(max) {
        Some((index, _)) => &input[..index],
        None => input,
    }
}
