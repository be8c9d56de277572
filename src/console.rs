//! Console front end
//!
//! Parses operator lines and drives the panel the way the form would.

use crate::panel::Panel;
use crate::view::{render, CacheEntry};

/// Usage text printed by `help`
pub const HELP: &str = "commands: set <key> [ttl] | get <key> | del <key> | list | help | quit";

/// One line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Set { key: String, ttl: Option<String> },
    Get { key: String },
    Delete { key: String },
    List,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parses a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let key = words.next().map(str::to_string);
        let extra = words.next().map(str::to_string);

        let command = match (verb.to_ascii_lowercase().as_str(), key) {
            ("set", Some(key)) => ConsoleCommand::Set { key, ttl: extra },
            ("get", Some(key)) => ConsoleCommand::Get { key },
            ("del" | "delete", Some(key)) => ConsoleCommand::Delete { key },
            ("list" | "ls", None) => ConsoleCommand::List,
            ("help" | "?", None) => ConsoleCommand::Help,
            ("quit" | "exit", None) => ConsoleCommand::Quit,
            ("set" | "get" | "del" | "delete", None) => {
                return Err(format!("'{}' needs a key. {}", verb, HELP))
            }
            _ => return Err(format!("unknown command '{}'. {}", line.trim(), HELP)),
        };
        Ok(Some(command))
    }
}

/// Runs `command` against `panel` and returns the lines to print.
///
/// Errors are already part of the rendered view, so failed commands return
/// no extra lines.
pub async fn execute(panel: &Panel, command: ConsoleCommand) -> Vec<String> {
    match command {
        ConsoleCommand::Set { key, ttl } => {
            panel.edit_key(key);
            // An omitted TTL means the default, not whatever the form last held
            let ttl = ttl.unwrap_or_else(|| panel.state().default_input().ttl.clone());
            panel.edit_ttl(ttl);
            match panel.dispatcher().set().await {
                Ok(()) => vec!["ok".to_string()],
                Err(_) => Vec::new(),
            }
        }
        ConsoleCommand::Get { key } => {
            panel.edit_key(key.clone());
            match panel.dispatcher().get().await {
                Ok(entry) => vec![describe_lookup(&key, &entry)],
                Err(_) => Vec::new(),
            }
        }
        ConsoleCommand::Delete { key } => {
            panel.edit_key(key);
            match panel.dispatcher().delete().await {
                Ok(()) => vec!["ok".to_string()],
                Err(_) => Vec::new(),
            }
        }
        ConsoleCommand::List => {
            let lines = render(&panel.state());
            if lines.is_empty() {
                vec!["(no keys)".to_string()]
            } else {
                lines
            }
        }
        ConsoleCommand::Help => vec![HELP.to_string()],
        ConsoleCommand::Quit => Vec::new(),
    }
}

fn describe_lookup(key: &str, entry: &CacheEntry) -> String {
    let value = match &entry.value {
        Some(serde_json::Value::String(s)) => format!("{:?}", s),
        Some(other) => other.to_string(),
        None => "(no value)".to_string(),
    };
    match &entry.expiration {
        Some(expiration) => format!("{} = {} (Expires at {})", key, value, expiration),
        None => format!("{} = {}", key, value),
    }
}
