//! Parsing of interactive input into gallery commands.

use std::str::FromStr;

use pet_gallery_core::SortOrder;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  type <text>      set the search box (does not filter)
  search           filter by the search box contents
  pick <n>         toggle selection of record n
  all              select every displayed record
  clear            clear the selection
  sort asc|desc    sort displayed records by title (A-Z or Z-A)
  download         download images of the selection
  show             redraw the gallery
  help             show this text
  quit             wait for downloads and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search box contents.
    Type(String),
    Search,
    /// 1-based position in the displayed list.
    Pick(usize),
    SelectAll,
    Clear,
    Sort(SortOrder),
    Download,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?}, try \"help\"")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("{0:?} is not a record number")]
    InvalidIndex(String),

    #[error("{0:?} is not a sort order, use asc or desc")]
    InvalidSortOrder(String),

    #[error("{0} takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let bare = |command: Command, name: &'static str| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::UnexpectedArgument(name))
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "type" => Ok(Command::Type(rest.to_string())),
            "search" => bare(Command::Search, "search"),
            "pick" => parse_index(rest).map(Command::Pick),
            "all" => bare(Command::SelectAll, "all"),
            "clear" => bare(Command::Clear, "clear"),
            "sort" => parse_sort(rest).map(Command::Sort),
            "download" => bare(Command::Download, "download"),
            "show" => bare(Command::Show, "show"),
            "help" | "?" => bare(Command::Help, "help"),
            "quit" | "exit" => bare(Command::Quit, "quit"),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn parse_index(arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("pick"));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidIndex(arg.to_string())),
    }
}

fn parse_sort(arg: &str) -> Result<SortOrder, CommandError> {
    match arg.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::MissingArgument("sort")),
        "asc" | "a-z" => Ok(SortOrder::Ascending),
        "desc" | "z-a" => Ok(SortOrder::Descending),
        _ => Err(CommandError::InvalidSortOrder(arg.to_string())),
    }
}
