//! `/serverinfo`: live status of a VCMP server.

use crate::embed::{server_embed, ReplyEmbed};
use crate::framework::{Context, Error};
use chrono::{DateTime, Utc};
use tracing::{debug, error};
use vcmp_common::ServerQuery;
use vcmp_status::{StatusApi, StatusOutcome};

/// Private reply when the status service could not reach the server.
pub const UNAVAILABLE_MESSAGE: &str = "Could not fetch server info. Please check the IP and port.";

/// Private reply for transport, decode and schema failures.
pub const FAILURE_MESSAGE: &str = "Error fetching server information. Please try again later.";

/// The single reply a `/serverinfo` invocation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerInfoReply {
    /// Public embed describing the server.
    Embed(ReplyEmbed),
    /// The service answered without "success".
    Unavailable,
    /// The lookup failed outright.
    Failed,
}

impl ServerInfoReply {
    /// Whether only the invoking user sees the reply.
    pub const fn is_ephemeral(&self) -> bool {
        !matches!(self, Self::Embed(_))
    }

    /// Plain-text content, if any.
    pub const fn content(&self) -> Option<&'static str> {
        match self {
            Self::Embed(_) => None,
            Self::Unavailable => Some(UNAVAILABLE_MESSAGE),
            Self::Failed => Some(FAILURE_MESSAGE),
        }
    }

    /// The embed, if any.
    pub const fn embed(&self) -> Option<&ReplyEmbed> {
        match self {
            Self::Embed(embed) => Some(embed),
            _ => None,
        }
    }

    /// Converts into the poise reply builder.
    pub fn into_create_reply(self) -> poise::CreateReply {
        match self {
            Self::Embed(embed) => poise::CreateReply::default().embed(embed.to_create_embed()),
            other => poise::CreateReply::default()
                .content(other.content().unwrap_or(FAILURE_MESSAGE))
                .ephemeral(true),
        }
    }
}

/// Looks up `query` and decides the reply. Never fails: every branch maps to
/// exactly one [`ServerInfoReply`].
pub async fn respond(api: &dyn StatusApi, query: &ServerQuery, now: DateTime<Utc>) -> ServerInfoReply {
    match api.fetch(query).await {
        Ok(StatusOutcome::Online(state)) => ServerInfoReply::Embed(server_embed(query, &state, now)),
        Ok(StatusOutcome::Unavailable { msg }) => {
            debug!(server = %query, %msg, "Status service could not query server");
            ServerInfoReply::Unavailable
        }
        Err(e) => {
            error!(server = %query, error = %e, "Failed to fetch server status");
            ServerInfoReply::Failed
        }
    }
}

/// Get information about the VCMP server
#[poise::command(slash_command)]
pub async fn serverinfo(
    ctx: Context<'_>,
    #[description = "IP address of the VCMP server"] ip: String,
    #[description = "Port of the VCMP server"] port: i64,
) -> Result<(), Error> {
    let query = ServerQuery::new(ip, port);
    let reply = respond(ctx.data().status.as_ref(), &query, Utc::now()).await;

    ctx.send(reply.into_create_reply()).await?;
    Ok(())
}
