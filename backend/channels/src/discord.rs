use crate::ChannelAdapter;
use crate::discord_embeds::render_reply;
use crate::discord_slash::{context_from, invocation_from};
use async_trait::async_trait;
use gwscan_commands::CommandDispatcher;
use serenity::all::{CreateInteractionResponse, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info};

struct Handler {
    dispatcher: CommandDispatcher,
}

#[async_trait]
impl EventHandler for Handler {
    // serenity runs every event on its own task, so invocations never wait
    // on each other.
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let invocation = invocation_from(&command);
        let context = context_from(&command);

        let Some(reply) = self.dispatcher.dispatch(&context, &invocation).await else {
            return;
        };

        let response = CreateInteractionResponse::Message(render_reply(&reply));
        if let Err(e) = command.create_response(&ctx.http, response).await {
            error!(command = %invocation.name, error = ?e, "Error sending interaction response");
        }
    }

    async fn ready(&self, _: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

pub struct DiscordAdapter {
    token: String,
}

impl DiscordAdapter {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[async_trait]
impl ChannelAdapter for DiscordAdapter {
    fn name(&self) -> &str { "discord" }

    async fn start(&self, dispatcher: CommandDispatcher) -> anyhow::Result<()> {
        info!(commands = dispatcher.registry().len(), "Starting Discord adapter");

        let intents = GatewayIntents::GUILDS;

        let mut client = Client::builder(&self.token, intents)
            .event_handler(Handler { dispatcher })
            .await?;

        if let Err(why) = client.start().await {
            error!("Client error: {:?}", why);
            anyhow::bail!("Discord client error: {:?}", why);
        }

        Ok(())
    }
}
