pub mod compose;
pub mod detection;
pub mod dispatch;
pub mod handlers;
pub mod registry;
pub mod types;

pub use compose::{compose_account, compose_transaction, ReplyStyle};
pub use detection::detect_command;
pub use dispatch::{failure_reply, CommandContext, CommandDispatcher, CommandHandler, FAILURE_REPLY};
pub use handlers::{AccountHandler, TransactionHandler};
pub use registry::{builtin_commands, Command, CommandRegistry};
pub use types::{ArgType, CommandArg, CommandArgs, CommandDef, CommandInvocation, CommandSchema};

use std::sync::Arc;

use gwscan_core::QueryExecutor;

/// Build a dispatcher pre-wired with the built-in explorer commands.
pub fn build_default_dispatcher(
    executor: Arc<dyn QueryExecutor>,
    style: ReplyStyle,
) -> CommandDispatcher {
    CommandDispatcher::new(CommandRegistry::builtin(executor, style))
}
