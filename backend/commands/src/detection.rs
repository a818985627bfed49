/// Text command parsing — turn `/name value ...` into an invocation.
///
/// Used where commands arrive as plain text instead of structured platform
/// interactions (operator CLI, message-content triggers).
use crate::registry::CommandRegistry;
use crate::types::{CommandDef, CommandInvocation};

/// Parse a `/command` line against the registry.
///
/// Tokens of the form `name=value` bind to the named argument; the rest bind
/// positionally to the remaining declared arguments, the last one capturing
/// whatever text is left. Returns `None` for text that is not a known command.
pub fn detect_command(text: &str, registry: &CommandRegistry) -> Option<CommandInvocation> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix('/')?;

    let (name, rest) = body
        .split_once(char::is_whitespace)
        .map(|(n, r)| (n, r.trim()))
        .unwrap_or((body, ""));

    let name = name.to_lowercase();
    let def = registry.get(&name)?.def.clone();
    Some(parse_args(&def, rest))
}

fn parse_args(def: &CommandDef, text: &str) -> CommandInvocation {
    let mut inv = CommandInvocation::new(def.name.clone());
    let mut positional = Vec::new();

    for token in text.split_whitespace() {
        match token.split_once('=') {
            Some((key, value)) if def.args.iter().any(|a| a.name == key) => {
                inv.args.insert(key.to_string(), value.to_string());
            }
            _ => positional.push(token),
        }
    }

    let open: Vec<&str> = def
        .args
        .iter()
        .map(|a| a.name.as_str())
        .filter(|name| !inv.args.contains_key(*name))
        .collect();

    for (i, name) in open.iter().enumerate() {
        if positional.is_empty() {
            break;
        }
        let value = if i == open.len() - 1 {
            positional.drain(..).collect::<Vec<_>>().join(" ")
        } else {
            positional.remove(0).to_string()
        };
        inv.args.insert(name.to_string(), value);
    }

    inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use gwscan_core::{CommandError, Reply};

    use crate::dispatch::{CommandContext, CommandHandler};
    use crate::types::{CommandArg, CommandArgs};

    struct Noop;

    #[async_trait]
    impl CommandHandler for Noop {
        async fn handle(
            &self,
            _ctx: &CommandContext,
            _args: &CommandArgs,
        ) -> Result<Reply, CommandError> {
            Ok(Reply::text("ok"))
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(
            CommandDef::new("transaction", "tx").arg(CommandArg::string("hash", "hash").required()),
            Arc::new(Noop),
        );
        registry.register(
            CommandDef::new("note", "note")
                .arg(CommandArg::string("target", "target"))
                .arg(CommandArg::string("text", "text")),
            Arc::new(Noop),
        );
        registry
    }

    #[test]
    fn positional_argument() {
        let inv = detect_command("/transaction 0xdeadbeef", &registry()).unwrap();
        assert_eq!(inv.name, "transaction");
        assert_eq!(inv.args.get("hash").map(String::as_str), Some("0xdeadbeef"));
    }

    #[test]
    fn named_argument() {
        let inv = detect_command("/transaction hash=0x01", &registry()).unwrap();
        assert_eq!(inv.args.get("hash").map(String::as_str), Some("0x01"));
    }

    #[test]
    fn last_argument_captures_remaining_text() {
        let inv = detect_command("/note alice hello there", &registry()).unwrap();
        assert_eq!(inv.args.get("target").map(String::as_str), Some("alice"));
        assert_eq!(inv.args.get("text").map(String::as_str), Some("hello there"));
    }

    #[test]
    fn missing_arguments_are_left_for_validation() {
        let inv = detect_command("/TRANSACTION", &registry()).unwrap();
        assert_eq!(inv.name, "transaction");
        assert!(inv.args.is_empty());
    }

    #[test]
    fn unknown_or_plain_text() {
        assert!(detect_command("/balance 0x01", &registry()).is_none());
        assert!(detect_command("hello", &registry()).is_none());
    }
}
