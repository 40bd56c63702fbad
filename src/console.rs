//! Line-oriented console front end.
//!
//! Stands in for a menu: every history change re-renders the whole list to
//! stdout, and commands typed on stdin drive selection and clearing.

use std::io::{self, Write};
use std::str::FromStr;

use cr_core::ports::HistoryObserverPort;
use cr_core::{HistoryEntry, Slot};

const LABEL_MAX_CHARS: usize = 40;

pub const HELP: &str = "commands: list | select <index> | slot <1-9> | clear | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Select(usize),
    Slot(Slot),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("`{command}` needs an argument")]
    MissingArgument { command: &'static str },

    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error("invalid slot: {0}")]
    InvalidSlot(String),
}

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Self::List);
        };
        let argument = words.next();

        match command.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "select" | "s" => {
                let raw = argument.ok_or(ParseCommandError::MissingArgument { command: "select" })?;
                raw.parse()
                    .map(Self::Select)
                    .map_err(|_| ParseCommandError::InvalidIndex(raw.to_string()))
            }
            "slot" => {
                let raw = argument.ok_or(ParseCommandError::MissingArgument { command: "slot" })?;
                let mut chars = raw.chars();
                match (chars.next().and_then(Slot::from_char), chars.next()) {
                    (Some(slot), None) => Ok(Self::Slot(slot)),
                    _ => Err(ParseCommandError::InvalidSlot(raw.to_string())),
                }
            }
            // A bare digit is a slot shortcut.
            other => {
                let mut chars = other.chars();
                match (chars.next().and_then(Slot::from_char), chars.next()) {
                    (Some(slot), None) => Ok(Self::Slot(slot)),
                    _ => Err(ParseCommandError::Unknown(other.to_string())),
                }
            }
        }
    }
}

/// Render the ring as one line per entry:
/// `<index> [<slot>] <marker> <label>`, most recent first.
pub fn render(view: &[HistoryEntry]) -> String {
    if view.is_empty() {
        return "(history is empty)\n".to_string();
    }

    let mut out = String::new();
    for (index, entry) in view.iter().enumerate() {
        let slot = entry
            .slot
            .map(|slot| slot.to_string())
            .unwrap_or_else(|| " ".to_string());
        let marker = if entry.selected { '*' } else { ' ' };
        out.push_str(&format!(
            "{index:>4} [{slot}] {marker} {}\n",
            label(&entry.value)
        ));
    }
    out
}

/// Display label: surrounding whitespace trimmed, cut to
/// [`LABEL_MAX_CHARS`] characters plus `...`, control characters escaped so
/// every entry stays on one line. The stored value is never altered.
fn label(value: &str) -> String {
    let trimmed = value.trim();
    let mut label: String = trimmed.chars().take(LABEL_MAX_CHARS).collect();
    if trimmed.chars().count() > LABEL_MAX_CHARS {
        label.push_str("...");
    }
    label.escape_debug().to_string()
}

/// Observer that prints the full list to stdout on every change.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl HistoryObserverPort for ConsolePresenter {
    fn history_changed(&self, view: &[HistoryEntry]) {
        let mut stdout = io::stdout().lock();
        // A closed stdout only means nobody is looking.
        let _ = stdout
            .write_all(render(view).as_bytes())
            .and_then(|()| stdout.flush());
    }
}
