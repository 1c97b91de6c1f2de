use crate::core::client::Context;
use crate::core::platform::CommandScope;

/// Overwrite the bot's application commands with every registered slash
/// command, globally or in one guild.
///
/// Failures are logged; they never stop the bot.
pub async fn register_slash_commands(ctx: &Context<'_>, guild_id: Option<u64>) {
    if ctx.platform().current_user().is_none() {
        return;
    }

    let commands = ctx.registry().slash_command_infos();
    let scope = match guild_id {
        Some(id) => CommandScope::Guild(id),
        None => CommandScope::Global,
    };

    tracing::info!(
        "Started refreshing {} application (/) commands.",
        commands.len()
    );

    match ctx.platform().overwrite_commands(scope, &commands).await {
        Ok(count) => tracing::info!("Successfully reloaded {} application (/) commands.", count),
        Err(e) => tracing::error!(
            "Something went wrong while trying to refresh application commands: {}",
            e
        ),
    }
}
