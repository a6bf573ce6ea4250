//! Background check for newer releases of the bot.
//!
//! A [`VersionMonitor`] reads the published version string and, when it is
//! newer than [`LOCAL_VERSION`], an [`UpdateFetcher`] downloads the release
//! archive and unpacks it into a staging directory. Nothing is applied to the
//! running process.

use tokio::task::JoinHandle;

use crate::config::structure::UpdateConfig;

mod error;
mod fetcher;
mod monitor;
mod version;

pub use error::UpdateError;
pub use fetcher::{FetchOutcome, UpdateFetcher};
pub use monitor::VersionMonitor;
pub use version::{Comparison, LOCAL_VERSION, Version};

/// Starts an update cycle in the background if `keep_updated` is set.
///
/// The caller is not expected to await the handle; failures end up in the log.
pub fn spawn(config: &UpdateConfig) -> Option<JoinHandle<()>> {
    if !config.keep_updated {
        log::debug!("update checks are disabled");
        return None;
    }

    let client = match reqwest::Client::builder()
        .user_agent(concat!("linears-bot/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(why) => {
            log::error!("could not build the update http client: {why}");
            return None;
        }
    };

    let monitor = VersionMonitor::new(client, config.clone());

    Some(tokio::spawn(async move {
        if let Err(why) = monitor.run().await {
            log::error!("update check failed: {why}");
        }
    }))
}
