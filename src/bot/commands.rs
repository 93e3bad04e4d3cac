//! Chat command parsing

/// A command recognised in a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Settle from a month; `None` means the current month
    Balance { month: Option<String> },
    /// List the accepted month tokens
    Months,
    /// Greet the requester
    Hello,
    /// Describe the available commands
    Help,
    /// Anything else starting with a command prefix
    Unknown(String),
}

/// Prefixes a message must start with to be treated as a command
const PREFIXES: [char; 2] = ['/', '!'];

impl ChatCommand {
    /// Parse a chat message
    ///
    /// Returns `None` for messages that are not commands. Command names are
    /// case-insensitive; `saldo` is accepted as an alias for `balance`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let body = text.strip_prefix(PREFIXES)?;

        let mut parts = body.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args = parts.next().map(str::trim).filter(|s| !s.is_empty());

        let command = match name.as_str() {
            "balance" | "saldo" | "owe" => Self::Balance {
                month: args.map(str::to_string),
            },
            "months" | "meses" => Self::Months,
            "hello" | "hi" => Self::Hello,
            "help" => Self::Help,
            _ => Self::Unknown(name),
        };
        Some(command)
    }
}
