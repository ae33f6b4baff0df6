//! Poise framework setup and interaction dispatch.

use crate::serverinfo::FAILURE_MESSAGE;
use std::fmt;
use std::sync::Arc;
use tracing::{error, warn};
use vcmp_config::Config;
use vcmp_status::StatusApi;

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Status service client shared by every invocation.
    pub status: Arc<dyn StatusApi>,
}

impl Data {
    /// Bundles the configuration and status client.
    pub fn new(config: Arc<Config>, status: Arc<dyn StatusApi>) -> Self {
        Self { config, status }
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot serves, in registration order.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![crate::serverinfo::serverinfo(), crate::botinfo::botinfo()]
}

/// Framework options with the command table and error handler.
pub fn framework_options() -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options())
}

/// Central error handler.
///
/// Command bodies reply before they can fail, so a command error is only
/// logged here. Interactions that never reached a command body get a single
/// private reply.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!(error = %error, "Framework setup failed");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                command = %ctx.command().qualified_name,
                error = %error,
                "Command failed"
            );
        }
        poise::FrameworkError::ArgumentParse { error, input, ctx, .. } => {
            warn!(
                command = %ctx.command().qualified_name,
                input = ?input,
                error = %error,
                "Rejected command arguments"
            );
            let reply = poise::CreateReply::default()
                .content(FAILURE_MESSAGE)
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!(error = %e, "Failed to send argument error reply");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = %e, "Error while handling error");
            }
        }
    }
}
