/// Command dispatch — route invocations to handlers and contain failures.
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, Instrument};
use uuid::Uuid;

use gwscan_core::{CommandError, Reply};
use gwscan_logging::redact_sensitive_data;

use crate::registry::CommandRegistry;
use crate::types::{CommandArgs, CommandInvocation};

/// The one reply a requester sees when anything goes wrong.
pub const FAILURE_REPLY: &str = "There was an error on executing this command";

// ---------------------------------------------------------------------------
// Handler trait
// ---------------------------------------------------------------------------

/// Who asked, and where. Carried for logging; handlers are stateless.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub requester_id: String,
    pub channel_id: String,
    pub guild_id: Option<String>,
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, ctx: &CommandContext, args: &CommandArgs) -> Result<Reply, CommandError>;
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Looks commands up in a fixed registry and runs them.
///
/// `dispatch` never returns an error: every failure is logged and replaced
/// by [`FAILURE_REPLY`], so one broken invocation cannot take down the
/// loop feeding it.
#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
}

impl CommandDispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry: Arc::new(registry) }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run one invocation to its single reply.
    ///
    /// Returns `None` only for names the registry does not know.
    pub async fn dispatch(&self, ctx: &CommandContext, inv: &CommandInvocation) -> Option<Reply> {
        let Some(command) = self.registry.get(&inv.name) else {
            debug!(command = %inv.name, "Ignoring unknown command");
            return None;
        };

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("command", %request_id, command = %inv.name);

        async {
            info!(requester = %ctx.requester_id, channel = %ctx.channel_id, "Dispatching command");

            let args = match command.def.extract_args(inv) {
                Ok(args) => args,
                Err(err) => return Some(contain(&CommandError::from(err))),
            };

            // The handler runs in its own task so that a panic inside it is
            // contained like any other failure.
            let handler = Arc::clone(&command.handler);
            let task_ctx = ctx.clone();
            let task = async move { handler.handle(&task_ctx, &args).await };
            let outcome = tokio::spawn(task.in_current_span()).await;

            match outcome {
                Ok(Ok(reply)) => {
                    info!(ephemeral = reply.ephemeral, "Command replied");
                    Some(reply)
                }
                Ok(Err(err)) => Some(contain(&err)),
                Err(join_err) => {
                    error!(error = %join_err, "Command handler panicked");
                    Some(failure_reply())
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn contain(err: &CommandError) -> Reply {
    error!(
        kind = err.kind(),
        error = %redact_sensitive_data(&err.to_string()),
        "Command failed"
    );
    failure_reply()
}

pub fn failure_reply() -> Reply {
    Reply::text(FAILURE_REPLY).private()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use std::sync::Mutex;

    use gwscan_core::{QueryError, QueryExecutor, ReplyBody};
    use serde_json::{json, Value};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{self, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::Layer;

    use crate::compose::ReplyStyle;
    use crate::types::{CommandArg, CommandDef};

    /// Answers from canned data keyed by the first variable's value.
    struct FakeExplorer {
        calls: AtomicUsize,
    }

    impl FakeExplorer {
        fn new() -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0) })
        }
    }

    #[async_trait]
    impl QueryExecutor for FakeExplorer {
        async fn execute(&self, _document: &str, variables: Value) -> Result<Value, QueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let key = variables
                .as_object()
                .and_then(|m| m.values().next())
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            match key.as_str() {
                "0xslow" => {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(json!({"account": {"eth_address": "0xslow", "type": "ETH_USER"}}))
                }
                "0xfast" => Ok(json!({"transaction": {"hash": "0xfast", "type": "POLYJUICE"}})),
                "0xmissing" => Ok(json!({"account": null, "transaction": null})),
                "0xdown" => Err(QueryError::Transport("connection refused".into())),
                _ => Ok(json!({"account": {"eth_address": key, "type": "ETH_USER"}})),
            }
        }
    }

    struct Panics;

    #[async_trait]
    impl CommandHandler for Panics {
        async fn handle(
            &self,
            _ctx: &CommandContext,
            _args: &CommandArgs,
        ) -> Result<Reply, CommandError> {
            panic!("handler bug");
        }
    }

    struct Chatty;

    #[async_trait]
    impl CommandHandler for Chatty {
        async fn handle(
            &self,
            _ctx: &CommandContext,
            _args: &CommandArgs,
        ) -> Result<Reply, CommandError> {
            info!("inside handler");
            Ok(Reply::text("ok"))
        }
    }

    /// Records the span names enclosing every event logged from this module.
    #[derive(Clone, Default)]
    struct ScopeRecorder(Arc<Mutex<Vec<Vec<String>>>>);

    impl<S> Layer<S> for ScopeRecorder
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &Event<'_>, ctx: layer::Context<'_, S>) {
            if event.metadata().target() != module_path!() {
                return;
            }
            let scope = ctx
                .event_scope(event)
                .map(|scope| scope.map(|span| span.name().to_string()).collect())
                .unwrap_or_default();
            self.0.lock().unwrap().push(scope);
        }
    }

    fn dispatcher(explorer: Arc<FakeExplorer>) -> CommandDispatcher {
        let mut registry = CommandRegistry::builtin(explorer, ReplyStyle::default());
        registry.register(CommandDef::new("explode", "always panics"), Arc::new(Panics));
        CommandDispatcher::new(registry)
    }

    fn assert_failure(reply: &Reply) {
        assert_eq!(reply.as_text(), Some(FAILURE_REPLY));
        assert!(reply.ephemeral);
    }

    #[tokio::test]
    async fn handler_events_carry_the_command_span() {
        let recorder = ScopeRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut registry = CommandRegistry::new();
        registry.register(CommandDef::new("chatty", "logs from its handler"), Arc::new(Chatty));
        let reply = CommandDispatcher::new(registry)
            .dispatch(&CommandContext::default(), &CommandInvocation::new("chatty"))
            .await
            .unwrap();
        assert_eq!(reply.as_text(), Some("ok"));

        let scopes = recorder.0.lock().unwrap();
        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0], vec!["command".to_string()]);
    }

    #[tokio::test]
    async fn unknown_command_is_ignored() {
        let explorer = FakeExplorer::new();
        let d = dispatcher(explorer.clone());
        let reply = d
            .dispatch(&CommandContext::default(), &CommandInvocation::new("balance"))
            .await;
        assert!(reply.is_none());
        assert_eq!(explorer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_required_argument_is_contained() {
        let explorer = FakeExplorer::new();
        let d = dispatcher(explorer.clone());
        let reply = d
            .dispatch(&CommandContext::default(), &CommandInvocation::new("account"))
            .await
            .unwrap();
        assert_failure(&reply);
        assert_eq!(explorer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_choice_is_contained() {
        let mut registry = CommandRegistry::new();
        registry.register(
            CommandDef::new("net", "network")
                .arg(CommandArg::string("name", "network").required().choices(&["mainnet"])),
            Arc::new(Panics),
        );
        let d = CommandDispatcher::new(registry);
        let inv = CommandInvocation::new("net").with_arg("name", "devnet");
        let reply = d.dispatch(&CommandContext::default(), &inv).await.unwrap();
        assert_failure(&reply);
    }

    #[tokio::test]
    async fn not_found_is_a_private_reply() {
        let explorer = FakeExplorer::new();
        let d = dispatcher(explorer.clone());
        let inv = CommandInvocation::new("account").with_arg("address", "0xmissing");
        let reply = d.dispatch(&CommandContext::default(), &inv).await.unwrap();
        assert_eq!(reply.as_text(), Some("Account \"0xmissing\" not found"));
        assert!(reply.ephemeral);
        assert_eq!(explorer.calls.load(Ordering::SeqCst), 1);

        let inv = CommandInvocation::new("transaction").with_arg("hash", "0xmissing");
        let reply = d.dispatch(&CommandContext::default(), &inv).await.unwrap();
        assert_eq!(reply.as_text(), Some("Transaction \"0xmissing\" not found"));
        assert!(reply.ephemeral);
    }

    #[tokio::test]
    async fn upstream_failure_is_contained() {
        let d = dispatcher(FakeExplorer::new());
        let inv = CommandInvocation::new("account").with_arg("address", "0xdown");
        let reply = d.dispatch(&CommandContext::default(), &inv).await.unwrap();
        assert_failure(&reply);
    }

    #[tokio::test]
    async fn handler_panic_is_contained() {
        let d = dispatcher(FakeExplorer::new());
        let reply = d
            .dispatch(&CommandContext::default(), &CommandInvocation::new("explode"))
            .await
            .unwrap();
        assert_failure(&reply);
    }

    #[tokio::test]
    async fn account_reply_is_private_card() {
        let d = dispatcher(FakeExplorer::new());
        let inv = CommandInvocation::new("account").with_arg("address", "0xabc");
        let reply = d.dispatch(&CommandContext::default(), &inv).await.unwrap();
        assert!(reply.ephemeral);
        let card = reply.as_card().unwrap();
        assert_eq!(card.title, "ETH_USER 0xabc");
    }

    #[tokio::test]
    async fn transaction_reply_is_public_card() {
        let d = dispatcher(FakeExplorer::new());
        let inv = CommandInvocation::new("transaction").with_arg("hash", "0xfast");
        let reply = d.dispatch(&CommandContext::default(), &inv).await.unwrap();
        assert!(!reply.ephemeral);
        assert!(matches!(reply.body, ReplyBody::Card(_)));
    }

    #[tokio::test]
    async fn concurrent_invocations_stay_isolated() {
        let d = dispatcher(FakeExplorer::new());
        let ctx = CommandContext::default();
        let slow = CommandInvocation::new("account").with_arg("address", "0xslow");
        let fast = CommandInvocation::new("transaction").with_arg("hash", "0xfast");

        let (a, b) = tokio::join!(d.dispatch(&ctx, &slow), d.dispatch(&ctx, &fast));

        let a = a.unwrap();
        let b = b.unwrap();
        assert_eq!(a.as_card().unwrap().url, "https://www.gwscan.com/address/0xslow");
        assert_eq!(b.as_card().unwrap().url, "https://www.gwscan.com/tx/0xfast");
    }
}
