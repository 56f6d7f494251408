pub mod agent;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod markup;
pub mod portfolio;
pub mod responder;
pub mod types;
pub mod validate;

use std::path::Path;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use agent::AgentClient;
use chat::ChatService;
use cli::{Cli, Command};
use config::Config;
use error::Result;
use responder::{QaTable, StaticResponder};
use types::{PersonContext, Portfolio};
use validate::Validation;

/// Run one CLI command. Returns `false` when the command reports a failure.
pub async fn run(cli: Cli) -> Result<bool> {
    let config = Config::from_env()?;
    let portfolio_path = cli.portfolio.clone().or(config.portfolio_path.clone());
    let qa_path = cli.qa.clone().or(config.qa_path.clone());
    let color = !cli.no_color;

    match cli.command {
        Command::Validate => return run_validate(portfolio_path.as_deref(), qa_path.as_deref()),
        Command::Ask { question } => {
            let mut service = chat_service(&config, portfolio_path.as_deref(), qa_path.as_deref())?;
            if let Some(reply) = service.reply(&question.join(" ")).await {
                println!("{}", render(&reply.text, color));
            }
        }
        Command::Chat => {
            let service = chat_service(&config, portfolio_path.as_deref(), qa_path.as_deref())?;
            service.initialize_agent().await;
            chat_loop(service, color).await?;
        }
        Command::Suggestions => {
            let (_, responder) = load_responder(portfolio_path.as_deref(), qa_path.as_deref())?;
            for (index, question) in responder.suggestions().iter().enumerate() {
                println!("{}. {question}", index + 1);
            }
        }
        Command::Profile => {
            let portfolio = portfolio::load_portfolio(portfolio_path.as_deref())?;
            println!("{}", portfolio::profile_summary(&portfolio));
        }
    }

    Ok(true)
}

/// Load the portfolio and build a responder over the Q&A table. Any load
/// failure stops startup here.
pub fn load_responder(
    portfolio_path: Option<&Path>,
    qa_path: Option<&Path>,
) -> Result<(Portfolio, StaticResponder)> {
    let portfolio = portfolio::load_portfolio(portfolio_path)?;
    let person = PersonContext::from(&portfolio.personal_info);
    let responder = StaticResponder::new(QaTable::load(qa_path)?, person)?;
    Ok((portfolio, responder))
}

fn chat_service(
    config: &Config,
    portfolio_path: Option<&Path>,
    qa_path: Option<&Path>,
) -> Result<ChatService> {
    let (portfolio, responder) = load_responder(portfolio_path, qa_path)?;
    Ok(match &config.agent {
        Some(agent) => ChatService::with_agent(
            responder,
            portfolio,
            AgentClient::new(agent)?,
            agent.timeout,
        ),
        None => ChatService::offline(responder),
    })
}

fn render(text: &str, color: bool) -> String {
    markup::render_terminal(&markup::parse(text), color)
}

async fn chat_loop(mut service: ChatService, color: bool) -> Result<()> {
    if service.status() == chat::AgentStatus::Checking {
        service.refresh_status().await;
    }

    let person = service.responder().person();
    println!("Ask me anything about {}. Type 'exit' to leave.", person.name);
    println!("Try one of these:");
    for question in service.responder().suggestions() {
        println!("  - {question}");
    }

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        if let Some(reply) = service.reply(&line).await {
            println!("{}", render(&reply.text, color));
        }
    }

    info!("Chat session ended");
    Ok(())
}

fn run_validate(portfolio_path: Option<&Path>, qa_path: Option<&Path>) -> Result<bool> {
    let reports = [
        validate_source("portfolio data", portfolio_path, portfolio::BUNDLED_PORTFOLIO)?,
        validate_source("Q&A data", qa_path, responder::BUNDLED_QA)?,
    ];

    let mut all_valid = true;
    for (label, source, validation) in reports {
        match validation {
            Validation::Valid => println!("ok   {label}: {source}"),
            Validation::FileNotFound => {
                all_valid = false;
                println!("FAIL {label}: {source} not found");
            }
            Validation::Placeholders(found) => {
                all_valid = false;
                println!("FAIL {label}: {source} has {} placeholders", found.len());
                for placeholder in found {
                    println!("       {placeholder}");
                }
            }
        }
    }

    if !all_valid {
        warn!("Template validation failed");
    }
    Ok(all_valid)
}

/// Validate the override file when one is given, otherwise the data built
/// into the binary, which is what the other commands answer from.
fn validate_source<'a>(
    label: &'a str,
    path: Option<&Path>,
    bundled: &str,
) -> Result<(&'a str, String, Validation)> {
    Ok(match path {
        Some(path) => (label, path.display().to_string(), validate::validate_file(path)?),
        None => (label, "bundled".to_string(), validate::validate_text(bundled)),
    })
}
