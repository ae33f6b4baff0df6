//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use crate::liveness;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};
use vcmp_commands::{create_framework, register_commands, Data, RegistrationScope};
use vcmp_config::Config;
use vcmp_status::{StatusApi, StatusClient, StatusClientConfig};

/// Main bot structure.
pub struct VcmpBot {
    config: Arc<Config>,
}

impl VcmpBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the bot runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Where slash commands are registered on startup.
    pub fn registration_scope(&self) -> RegistrationScope {
        RegistrationScope::from_guild_id(self.config.discord.guild_id)
    }

    /// Builds the status service client from the configuration.
    pub fn status_client(&self) -> BotResult<StatusClient> {
        let api = &self.config.status_api;
        let mut client_config =
            StatusClientConfig::new(api.base_url.as_str()).with_timeout(api.timeout_secs);
        if let Some(user_agent) = &api.user_agent {
            client_config = client_config.with_user_agent(user_agent.as_str());
        }
        Ok(StatusClient::new(client_config)?)
    }

    /// Starts the liveness endpoint in the background, if enabled.
    ///
    /// A bind failure is logged and the bot keeps running without it.
    pub fn spawn_liveness(&self) -> Option<tokio::task::JoinHandle<()>> {
        let liveness = &self.config.liveness;
        if !liveness.enabled {
            info!("Liveness endpoint disabled");
            return None;
        }

        let port = liveness.port;
        Some(tokio::spawn(async move {
            if let Err(e) = liveness::serve(port).await {
                error!(port, error = %e, "Liveness endpoint stopped");
            }
        }))
    }

    /// Starts the bot and runs until the gateway connection ends.
    pub async fn start(&self) -> BotResult<()> {
        let status: Arc<dyn StatusApi> = Arc::new(self.status_client()?);
        let _liveness = self.spawn_liveness();

        let config = self.config.clone();
        let scope = self.registration_scope();

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(
                        user = %ready.user.name,
                        guilds = ready.guilds.len(),
                        "Connected to Discord"
                    );

                    // Serving interactions matters more than refreshed metadata.
                    if let Err(e) =
                        register_commands(ctx, &framework.options().commands, scope).await
                    {
                        error!(%scope, error = %e, "Failed to register application commands");
                    }

                    Ok(Data::new(config, status))
                })
            })
            .build();

        let activity = serenity::ActivityData::watching(self.config.discord.activity.as_str());
        let mut builder = serenity::ClientBuilder::new(
            &self.config.discord.token,
            serenity::GatewayIntents::GUILDS,
        )
        .framework(framework)
        .activity(activity);

        if let Some(id) = self.config.discord.client_id.filter(|id| *id != 0) {
            builder = builder.application_id(serenity::ApplicationId::new(id));
        }

        let mut client = builder.await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl-C, shutting down");
                shard_manager.shutdown_all().await;
            }
        });

        info!("Starting gateway connection");
        client.start().await?;
        Ok(())
    }
}
