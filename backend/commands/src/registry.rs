/// Command registry — name-keyed table of command definitions and handlers.
use std::collections::BTreeMap;
use std::sync::Arc;

use gwscan_core::QueryExecutor;

use crate::compose::ReplyStyle;
use crate::dispatch::CommandHandler;
use crate::handlers::{AccountHandler, TransactionHandler};
use crate::types::{CommandArg, CommandDef, CommandSchema};

/// A registered command: its declaration plus the behavior behind it.
#[derive(Clone)]
pub struct Command {
    pub def: CommandDef,
    pub handler: Arc<dyn CommandHandler>,
}

/// Definitions of the built-in explorer commands.
pub fn builtin_commands() -> Vec<CommandDef> {
    vec![
        CommandDef::new("account", "Replies account info")
            .arg(CommandArg::string("address", "Account eth address").required()),
        CommandDef::new("transaction", "Replies transaction info")
            .arg(CommandArg::string("hash", "Transaction hash").required()),
    ]
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Filled once at start-up, then handed to the dispatcher which never
/// mutates it again.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in commands wired to `executor`.
    pub fn builtin(executor: Arc<dyn QueryExecutor>, style: ReplyStyle) -> Self {
        let mut registry = Self::new();
        for def in builtin_commands() {
            let handler: Arc<dyn CommandHandler> = match def.name.as_str() {
                "account" => Arc::new(AccountHandler::new(executor.clone(), style.clone())),
                "transaction" => Arc::new(TransactionHandler::new(executor.clone(), style.clone())),
                _ => continue,
            };
            registry.register(def, handler);
        }
        registry
    }

    /// Add a command. A later registration under the same name replaces the
    /// earlier one.
    pub fn register(&mut self, def: CommandDef, handler: Arc<dyn CommandHandler>) {
        self.commands.insert(def.name.clone(), Command { def, handler });
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Definitions in name order.
    pub fn defs(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.values().map(|c| &c.def)
    }

    /// Registration payload for the chat platform.
    pub fn schema(&self) -> Vec<CommandSchema> {
        self.defs().map(CommandSchema::from).collect()
    }
}
