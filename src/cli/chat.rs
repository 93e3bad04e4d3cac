//! Interactive chat session
//!
//! Feeds each input line to the bot and writes its reply. Lines that are not
//! commands are ignored.

use std::io::{BufRead, Write};

use crate::bot::{Bot, ChatRequest};
use crate::config::{Settings, SplitPaths};
use crate::error::{SplitError, SplitResult};
use crate::remote::open_store;

/// Run a chat session on stdin/stdout
pub fn handle_chat_command(settings: &Settings, paths: &SplitPaths, author: &str) -> SplitResult<()> {
    let store = open_store(settings, paths)?;
    let bot = Bot::new(settings, store.as_ref());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_chat(&bot, author, stdin.lock(), stdout.lock())
}

/// Answer every command line from `input` on `output`
pub fn run_chat<R: BufRead, W: Write>(
    bot: &Bot<'_>,
    author: &str,
    input: R,
    mut output: W,
) -> SplitResult<()> {
    for line in input.lines() {
        let line = line.map_err(|e| SplitError::Io(format!("Failed to read input: {}", e)))?;

        if let Some(reply) = bot.dispatch(&ChatRequest::new(author, line)) {
            writeln!(output, "{}", reply)
                .map_err(|e| SplitError::Io(format!("Failed to write reply: {}", e)))?;
            output
                .flush()
                .map_err(|e| SplitError::Io(format!("Failed to flush reply: {}", e)))?;
        }
    }
    Ok(())
}
