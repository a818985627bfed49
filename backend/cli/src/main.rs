mod run_cmd;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use gwscan_channels::{deploy_commands, ChannelAdapter, DiscordAdapter};
use gwscan_commands::{build_default_dispatcher, builtin_commands, CommandSchema, ReplyStyle};
use gwscan_config::{load_dotenv, redact, validate, BotConfig, Mode};
use gwscan_graphql::GraphQlClient;
use gwscan_logging::init_logger;

#[derive(Parser)]
#[command(name = "gwscan")]
#[command(about = "GwScan explorer bot for Discord")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and answer slash commands
    Serve,
    /// Register the slash commands with the configured guild
    DeployCommands,
    /// Print the slash-command schema as JSON
    Schema,
    /// Run one command against the explorer and print the reply as JSON
    Run {
        /// Command name followed by its arguments, positional or `name=value`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        line: Vec<String>,
    },
}

impl Commands {
    fn mode(&self) -> Mode {
        match self {
            Commands::Serve => Mode::Serve,
            Commands::DeployCommands => Mode::Deploy,
            Commands::Schema => Mode::Schema,
            Commands::Run { .. } => Mode::Query,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv();
    let config = BotConfig::from_env();
    let _log_guard = init_logger(&config.log_level, config.log_dir.as_deref());

    let report = validate(&config, cli.command.mode());
    for warning in &report.warnings {
        warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    report.into_result()?;
    info!(config = %redact(&config), "Configuration loaded");

    match cli.command {
        Commands::Serve => {
            let dispatcher = build_default_dispatcher(graphql_client(&config)?, style(&config));
            let token = config.discord_token.clone().context("DISCORD_TOKEN is required")?;
            DiscordAdapter::new(token).start(dispatcher).await?;
        }
        Commands::DeployCommands => {
            let token = config.discord_token.as_deref().context("DISCORD_TOKEN is required")?;
            let app_id = config.app_id_u64().context("APP_ID must be a Discord id")?;
            let guild_id = config.guild_id_u64().context("GUILD_ID must be a Discord id")?;

            let count = deploy_commands(token, app_id, guild_id, &builtin_commands()).await?;
            info!(count, guild_id, "Successfully registered application commands");
            println!("Registered {count} commands");
        }
        Commands::Schema => {
            let schema: Vec<CommandSchema> =
                builtin_commands().iter().map(CommandSchema::from).collect();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Run { line } => {
            let dispatcher = build_default_dispatcher(graphql_client(&config)?, style(&config));
            let reply = run_cmd::run(&dispatcher, &line).await?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
    }

    Ok(())
}

fn graphql_client(config: &BotConfig) -> Result<Arc<GraphQlClient>> {
    let server = config.server.as_deref().context("SERVER is required")?;
    Ok(Arc::new(GraphQlClient::new(server)?))
}

fn style(config: &BotConfig) -> ReplyStyle {
    let defaults = ReplyStyle::default();
    ReplyStyle {
        explorer_url: config.explorer_url.clone(),
        logo_url: config.logo_url.clone(),
        color: config.embed_color_rgb().unwrap_or(defaults.color),
    }
}
