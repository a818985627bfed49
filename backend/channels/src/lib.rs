use async_trait::async_trait;
use gwscan_commands::CommandDispatcher;

pub mod discord;
pub mod discord_embeds;
pub mod discord_slash;

pub use discord::DiscordAdapter;
pub use discord_embeds::{render_card, render_reply, MAX_EMBEDS};
pub use discord_slash::{build_commands, context_from, deploy_commands, invocation_from};

/// All channel adapters implement this trait.
#[async_trait]
pub trait ChannelAdapter: Send + Sync {
    /// Human-readable adapter name for logging.
    fn name(&self) -> &str;

    /// Connect and answer invocations with `dispatcher` until the
    /// connection ends.
    async fn start(&self, dispatcher: CommandDispatcher) -> anyhow::Result<()>;
}
