use anyhow::Result;
use colored::Colorize;
use handler::Handler;
use serenity::{Client, all::GatewayIntents};

use crate::config::store::LinearsBotConfig;

mod handler;

pub struct LinearsBot {
    client: Client,
}

impl LinearsBot {
    pub async fn new(config: LinearsBotConfig) -> Result<Self> {
        let mut cache = serenity::cache::Settings::default();
        cache.max_messages = 100;

        let builder = serenity::Client::builder(&config.discord.token, GatewayIntents::all())
            .cache_settings(cache);

        let framework = handler::framework::framework(config);

        let client = builder.event_handler(Handler).framework(framework).await?;

        Ok(Self { client })
    }

    pub async fn run(self) {
        let LinearsBot { mut client } = self;

        log::info!("{}", "-> the bot is starting...".yellow());

        if let Err(why) = client.start().await {
            log::error!("Client error: {why:?}");
        }
    }
}
