//! Publishing slash command metadata to Discord.

use poise::serenity_prelude as serenity;
use std::fmt;
use tracing::info;

/// Where commands are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    /// Every guild; Discord may take up to an hour to propagate changes.
    Global,
    /// A single guild; changes apply almost immediately.
    Guild(serenity::GuildId),
}

impl RegistrationScope {
    /// Guild scope when a non-zero guild ID is configured, global otherwise.
    pub fn from_guild_id(guild_id: Option<u64>) -> Self {
        match guild_id {
            Some(id) if id != 0 => Self::Guild(serenity::GuildId::new(id)),
            _ => Self::Global,
        }
    }
}

impl fmt::Display for RegistrationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Guild(id) => write!(f, "guild {id}"),
        }
    }
}

/// The command definitions exactly as sent to Discord.
pub fn command_payload<U, E>(commands: &[poise::Command<U, E>]) -> Vec<serenity::CreateCommand> {
    poise::builtins::create_application_commands(commands)
}

/// Overwrites the registered command set for `scope`.
///
/// Discord replaces the whole set on every call, so re-running with the same
/// commands has no further effect.
pub async fn register_commands<U, E>(
    http: impl AsRef<serenity::Http>,
    commands: &[poise::Command<U, E>],
    scope: RegistrationScope,
) -> Result<(), serenity::Error> {
    info!(%scope, count = commands.len(), "Started refreshing application (/) commands");

    let payload = command_payload(commands);
    let registered = match scope {
        RegistrationScope::Global => serenity::Command::set_global_commands(http, payload).await?,
        RegistrationScope::Guild(guild_id) => guild_id.set_commands(http, payload).await?,
    };

    info!(
        %scope,
        count = registered.len(),
        "Successfully reloaded application (/) commands"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_guild_id() {
        assert_eq!(RegistrationScope::from_guild_id(None), RegistrationScope::Global);
        assert_eq!(RegistrationScope::from_guild_id(Some(0)), RegistrationScope::Global);
        assert_eq!(
            RegistrationScope::from_guild_id(Some(42)),
            RegistrationScope::Guild(serenity::GuildId::new(42))
        );
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(RegistrationScope::Global.to_string(), "global");
        assert_eq!(
            RegistrationScope::Guild(serenity::GuildId::new(42)).to_string(),
            "guild 42"
        );
    }
}
