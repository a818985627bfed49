//! `gwscan run`: one command dispatched locally, without Discord.

use anyhow::{bail, Result};

use gwscan_commands::{detect_command, CommandContext, CommandDispatcher};
use gwscan_core::Reply;

/// Dispatch `line` (`account 0x…` or `/transaction hash=0x…`) and return the reply.
pub async fn run(dispatcher: &CommandDispatcher, line: &[String]) -> Result<Reply> {
    let text = line.join(" ");
    let text = if text.trim_start().starts_with('/') { text } else { format!("/{text}") };

    let Some(invocation) = detect_command(&text, dispatcher.registry()) else {
        bail!("unknown command: {}", text.trim());
    };

    let ctx = CommandContext {
        requester_id: "cli".to_string(),
        channel_id: "cli".to_string(),
        guild_id: None,
    };
    match dispatcher.dispatch(&ctx, &invocation).await {
        Some(reply) => Ok(reply),
        None => bail!("unknown command: {}", invocation.name),
    }
}
