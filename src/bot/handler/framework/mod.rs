use std::sync::Arc;

use serenity::all::Framework;
use tokio::sync::RwLock;

use crate::config::store::LinearsBotConfig;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

mod version;

pub struct InnerData {
    pub config: RwLock<LinearsBotConfig>,
}
pub type Data = Arc<InnerData>;

pub fn framework(config: LinearsBotConfig) -> impl Framework + 'static {
    let prefix = config.discord.prefix.clone();
    let data = Arc::new(InnerData {
        config: RwLock::new(config),
    });

    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![version::version()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                case_insensitive_commands: true,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build()
}
