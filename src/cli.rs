use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-chat",
    version,
    about = "Answer questions about a portfolio owner"
)]
pub struct Cli {
    /// Portfolio JSON to use instead of the bundled one
    #[arg(long, global = true)]
    pub portfolio: Option<PathBuf>,

    /// Q&A JSON to use instead of the bundled one
    #[arg(long, global = true)]
    pub qa: Option<PathBuf>,

    /// Disable ANSI styling in replies
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Answer a single question and exit
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Interactive chat on stdin
    Chat,
    /// List the suggested questions
    Suggestions,
    /// Print the portfolio summary
    Profile,
    /// Report unreplaced [PLACEHOLDER] tokens in the data files
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_joins_trailing_words() {
        let cli = Cli::try_parse_from(["portfolio-chat", "ask", "what", "is", "your", "role?"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Command::Ask {
                question: vec!["what".into(), "is".into(), "your".into(), "role?".into()]
            }
        );
        assert!(!cli.no_color);
    }

    #[test]
    fn global_paths_follow_subcommand() {
        let cli = Cli::try_parse_from(["portfolio-chat", "chat", "--qa", "custom.json"])
            .expect("parse");
        assert_eq!(cli.command, Command::Chat);
        assert_eq!(cli.qa, Some(PathBuf::from("custom.json")));
        assert!(cli.portfolio.is_none());
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Cli::try_parse_from(["portfolio-chat", "ask"]).is_err());
    }
}
