use colored::Colorize;
use serenity::{
    all::{Context, EventHandler, OnlineStatus, Ready},
    async_trait,
};

pub mod framework;

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!("{}", format!("-> {} is connected!", ready.user.name).green());

        ctx.set_presence(None, OnlineStatus::Online);
    }
}
