use clap::{Parser, Subcommand};

use crate::app::Command;
use crate::models::ArticleId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse articles and similar-article recommendations", long_about = None)]
pub struct Cli {
    /// Recommendation server URL; overrides API_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Load and print the article list
    List,
    /// Print recommendations for an article
    Similar {
        /// Article id as shown in the list
        id: usize,
    },
    /// Like an article
    Like {
        /// Article id as shown in the list
        id: usize,
    },
    /// Print the articles whose title or summary contains QUERY
    Search { query: String },
    /// Read commands from stdin (default)
    Interactive,
}

/// A line typed into the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Command(Command),
    Help,
    Quit,
}

pub const INTERACTIVE_HELP: &str = "\
commands:
  refresh            reload articles from the server
  search <query>     filter loaded articles (blank reloads); also `/ <query>`
  similar <id>       recommendations for article <id>
  like <id>          like article <id>
  like-rec <n>       like the n-th recommendation shown
  demo               recommendations for the first article
  help               show this message
  quit               leave";

/// Parses one interactive line; `Ok(None)` for a blank line
pub fn parse_input(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let input = match word {
        "refresh" | "r" => Input::Command(Command::Refresh),
        "search" | "/" => Input::Command(Command::Search(rest.to_string())),
        "similar" | "s" => Input::Command(Command::Similar(ArticleId(parse_number(word, rest)?))),
        "like" | "l" => Input::Command(Command::Like(ArticleId(parse_number(word, rest)?))),
        "like-rec" | "lr" => Input::Command(Command::LikeRecommendation(parse_number(word, rest)?)),
        "demo" => Input::Command(Command::Demo),
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(format!("unknown command `{}` (try `help`)", other)),
    };
    Ok(Some(input))
}

fn parse_number(word: &str, rest: &str) -> Result<usize, String> {
    rest.parse::<usize>()
        .map_err(|_| format!("`{}` expects a number, got `{}`", word, rest))
}
