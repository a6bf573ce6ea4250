use std::path::{Path, PathBuf};

use anyhow::bail;
use config::store::LinearsBotConfig;
use utils::log::Logger;

mod bot;
mod config;
mod storage;
mod update;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storage::ensure_data_layout(Path::new("."))?;

    let config = LinearsBotConfig::read(PathBuf::from("config.toml"))?;

    Logger::init(config.log_level);

    if config.discord.token.is_empty() {
        bail!(
            "no discord token set, fill in [config.discord] in {}",
            config.path.display()
        );
    }

    // runs alongside the bot, never awaited
    let _ = update::spawn(&config.update);

    let bot = bot::LinearsBot::new(config).await?;
    bot.run().await;

    Ok(())
}
