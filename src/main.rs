use std::process::ExitCode;

use clap::Parser;
use portfolio_chat::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("portfolio_chat=info"),
    )
    .init();
    let cli = Cli::parse();
    log::debug!("Running command {:?}", cli.command);

    match portfolio_chat::run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("portfolio-chat failed: {}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
