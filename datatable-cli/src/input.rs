//! Interactive input lines.

use datatable_lib::view::Command;

pub const HELP: &str = "\
Commands:
  /<text>, search <text>   filter rows (empty text clears)
  sort <field>             sort by a column, again to reverse
  page <n>                 go to page n
  next, n                  next page
  prev, p                  previous page
  refresh                  redraw
  help, ?                  show this help
  quit, q                  exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A table command.
    Table(Command),
    NextPage,
    PreviousPage,
    Refresh,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

/// Why an input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a page number")]
    InvalidPage(String),
}

/// Parses one line of user input.
pub fn parse(line: &str) -> Result<Input, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(text) = line.strip_prefix('/') {
        return Ok(Input::Table(Command::Search(text.to_string())));
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Input::Nothing);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        "search" => Ok(Input::Table(Command::Search(rest.to_string()))),
        "sort" if rest.is_empty() => Err(InputError::MissingArgument("sort")),
        "sort" => Ok(Input::Table(Command::Sort(rest.to_string()))),
        "page" if rest.is_empty() => Err(InputError::MissingArgument("page")),
        "page" => rest
            .parse()
            .map(|n| Input::Table(Command::Page(n)))
            .map_err(|_| InputError::InvalidPage(rest.to_string())),
        "next" | "n" => Ok(Input::NextPage),
        "prev" | "p" => Ok(Input::PreviousPage),
        "refresh" => Ok(Input::Refresh),
        "help" | "?" => Ok(Input::Help),
        "quit" | "q" | "exit" => Ok(Input::Quit),
        _ => Err(InputError::Unknown(word.to_string())),
    }
}
