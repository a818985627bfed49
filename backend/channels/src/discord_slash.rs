//! Discord Slash Commands
//!
//! Registers the command registry as guild application commands and turns
//! incoming command interactions into invocations.

use anyhow::{Context as _, Result};
use serenity::all::{
    ApplicationId, CommandDataOptionValue, CommandInteraction, CommandOptionType, CreateCommand,
    CreateCommandOption, GuildId, Http,
};
use tracing::{info, warn};

use gwscan_commands::{ArgType, CommandArg, CommandContext, CommandDef, CommandInvocation};

/// Application-command builders for the given definitions.
pub fn build_commands<'a>(defs: impl IntoIterator<Item = &'a CommandDef>) -> Vec<CreateCommand> {
    defs.into_iter().map(build_command).collect()
}

fn build_command(def: &CommandDef) -> CreateCommand {
    def.args.iter().fold(
        CreateCommand::new(&def.name).description(&def.description),
        |command, arg| command.add_option(build_option(arg)),
    )
}

fn build_option(arg: &CommandArg) -> CreateCommandOption {
    let kind = match arg.arg_type {
        ArgType::String => CommandOptionType::String,
        ArgType::Integer => CommandOptionType::Integer,
    };
    let option = CreateCommandOption::new(kind, &arg.name, &arg.description).required(arg.required);

    arg.choices.iter().fold(option, |option, choice| match arg.arg_type {
        ArgType::String => option.add_string_choice(choice, choice),
        ArgType::Integer => match choice.parse::<i32>() {
            Ok(value) => option.add_int_choice(choice, value),
            Err(_) => {
                warn!(arg = %arg.name, %choice, "Skipping non-integer choice");
                option
            }
        },
    })
}

/// Replace the guild's application commands with `defs`.
///
/// Returns how many commands Discord now has registered.
pub async fn deploy_commands(
    token: &str,
    app_id: u64,
    guild_id: u64,
    defs: &[CommandDef],
) -> Result<usize> {
    let http = Http::new(token);
    http.set_application_id(ApplicationId::new(app_id));

    info!(app_id, guild_id, count = defs.len(), "Deploying slash commands");
    let deployed = GuildId::new(guild_id)
        .set_commands(&http, build_commands(defs))
        .await
        .context("Failed to register guild commands")?;

    Ok(deployed.len())
}

/// The structured invocation carried by a command interaction.
pub fn invocation_from(interaction: &CommandInteraction) -> CommandInvocation {
    let mut inv = CommandInvocation::new(interaction.data.name.clone());
    for option in &interaction.data.options {
        if let Some(value) = option_value(&option.value) {
            inv.args.insert(option.name.clone(), value);
        }
    }
    inv
}

/// Who sent the interaction and where.
pub fn context_from(interaction: &CommandInteraction) -> CommandContext {
    CommandContext {
        requester_id: interaction.user.id.to_string(),
        channel_id: interaction.channel_id.to_string(),
        guild_id: interaction.guild_id.map(|id| id.to_string()),
    }
}

fn option_value(value: &CommandDataOptionValue) -> Option<String> {
    match value {
        CommandDataOptionValue::String(s) => Some(s.clone()),
        CommandDataOptionValue::Integer(i) => Some(i.to_string()),
        CommandDataOptionValue::Number(n) => Some(n.to_string()),
        CommandDataOptionValue::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
