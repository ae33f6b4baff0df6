//! Projection of server and bot state into Discord embeds.

use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;
use vcmp_common::{embed_value, join_or, truncate_string, ServerQuery, EMBED_TITLE_LIMIT};
use vcmp_status::ServerState;

/// Accent colour of every embed the bot sends.
pub const EMBED_COLOUR: u32 = 0x0099_ff;

/// "Player Names" value when nobody is connected.
pub const NO_PLAYERS: &str = "No players online";

/// Replacement for blank values; Discord rejects empty field values.
pub const UNKNOWN_VALUE: &str = "Unknown";

/// One name/value row of an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field label.
    pub name: String,
    /// Field value, never empty.
    pub value: String,
    /// Whether Discord may lay the field out next to its neighbours.
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: &str, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: embed_value(value, UNKNOWN_VALUE),
            inline,
        }
    }
}

/// Platform-neutral embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEmbed {
    /// Embed title.
    pub title: String,
    /// Accent colour as `0xRRGGBB`.
    pub colour: u32,
    /// Fields in display order.
    pub fields: Vec<EmbedField>,
    /// Optional footer text.
    pub footer: Option<String>,
    /// Timestamp shown under the embed.
    pub timestamp: DateTime<Utc>,
}

impl ReplyEmbed {
    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Field labels in display order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }

    /// Converts into the serenity builder sent over the wire.
    pub fn to_create_embed(&self) -> serenity::CreateEmbed {
        let timestamp = serenity::Timestamp::from_unix_timestamp(self.timestamp.timestamp())
            .unwrap_or_else(|_| serenity::Timestamp::now());

        let mut embed = serenity::CreateEmbed::new()
            .title(&self.title)
            .colour(self.colour)
            .timestamp(timestamp);

        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        if let Some(footer) = &self.footer {
            embed = embed.footer(serenity::CreateEmbedFooter::new(footer));
        }

        embed
    }
}

/// Field labels of the `/serverinfo` embed, in order.
pub const SERVER_FIELDS: [&str; 8] = [
    "Server Name",
    "Game Mode",
    "Players",
    "Player Names",
    "Map",
    "Version",
    "Ping",
    "Password Protected",
];

/// Builds the `/serverinfo` embed.
pub fn server_embed(query: &ServerQuery, state: &ServerState, timestamp: DateTime<Utc>) -> ReplyEmbed {
    let players = format!("{}/{}", state.raw.numplayers, state.maxplayers);
    let player_names = join_or(state.player_names(), NO_PLAYERS);
    let ping = format!("{} ms", state.ping);
    let passworded = if state.raw.passworded { "Yes" } else { "No" };

    ReplyEmbed {
        title: truncate_string(&format!("Server Info for {query}"), EMBED_TITLE_LIMIT),
        colour: EMBED_COLOUR,
        fields: vec![
            EmbedField::new(SERVER_FIELDS[0], &state.name, true),
            EmbedField::new(SERVER_FIELDS[1], &state.raw.gamemode, true),
            EmbedField::new(SERVER_FIELDS[2], &players, true),
            EmbedField::new(SERVER_FIELDS[3], &player_names, false),
            EmbedField::new(SERVER_FIELDS[4], &state.raw.map, true),
            EmbedField::new(SERVER_FIELDS[5], &state.raw.version, true),
            EmbedField::new(SERVER_FIELDS[6], &ping, true),
            EmbedField::new(SERVER_FIELDS[7], passworded, true),
        ],
        footer: None,
        timestamp,
    }
}

/// Static facts shown by `/botinfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotInfo {
    /// Who maintains the bot.
    pub creator: String,
    /// Crate version.
    pub version: String,
    /// Guilds the bot is currently in.
    pub guild_count: usize,
    /// Configured "Watching ..." activity text.
    pub activity: String,
}

impl BotInfo {
    /// Info for the running binary.
    pub fn current(guild_count: usize, activity: impl Into<String>) -> Self {
        Self {
            creator: env!("CARGO_PKG_AUTHORS").replace(':', ", "),
            version: env!("CARGO_PKG_VERSION").to_string(),
            guild_count,
            activity: activity.into(),
        }
    }
}

/// Builds the `/botinfo` embed.
pub fn bot_embed(info: &BotInfo, timestamp: DateTime<Utc>) -> ReplyEmbed {
    ReplyEmbed {
        title: "Bot Info".to_string(),
        colour: EMBED_COLOUR,
        fields: vec![
            EmbedField::new("Creator", &info.creator, true),
            EmbedField::new("Language", "Rust", true),
            EmbedField::new("Library", "poise / serenity", true),
            EmbedField::new("Version", &info.version, true),
            EmbedField::new("Servers", &info.guild_count.to_string(), true),
        ],
        footer: Some(format!("Watching {}", info.activity)),
        timestamp,
    }
}
