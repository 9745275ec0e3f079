use jobboard_core::{EntryId, InputField, Msg};
use thiserror::Error;

/// One line of console input, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Dispatch(Msg),
    Show,
    Ping,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a card number")]
    InvalidEntry(String),
}

pub(crate) const HELP_TEXT: &str = "\
Inputs:
  query <text>              search query
  exclude-keywords <text>   comma-separated description keywords to drop
  exclude-titles <text>     comma-separated title fragments to drop
  count <n>                 desired number of results
Actions:
  start                     ask the service to start scraping
  fetch                     fetch and display results for the query
  sort <date|company|title|location>
  toggle <n>                expand or collapse card n
  show                      print the current results again
  ping                      check that the service is up
  help | quit";

pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "query" => input(InputField::Query, rest),
        "exclude-keywords" => input(InputField::ExcludeKeywords, rest),
        "exclude-titles" => input(InputField::ExcludeTitles, rest),
        "count" => input(InputField::ResultsWanted, rest),
        "start" => Command::Dispatch(Msg::StartSearchClicked),
        "fetch" => Command::Dispatch(Msg::FetchClicked),
        "sort" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("sort"));
            }
            Command::Dispatch(Msg::SortSelected(rest.to_string()))
        }
        "toggle" => Command::Dispatch(Msg::EntryToggled(parse_entry(rest)?)),
        "show" => Command::Show,
        "ping" => Command::Ping,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn input(field: InputField, text: &str) -> Command {
    Command::Dispatch(Msg::InputChanged {
        field,
        text: text.to_string(),
    })
}

// Cards are numbered from 1 on screen.
fn parse_entry(raw: &str) -> Result<EntryId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument("toggle"));
    }
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(EntryId(n - 1)),
        _ => Err(CommandError::InvalidEntry(raw.to_string())),
    }
}
