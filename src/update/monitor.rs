use colored::Colorize;

use crate::config::structure::UpdateConfig;

use super::{
    FetchOutcome, UpdateError, UpdateFetcher,
    version::{LOCAL_VERSION, Version, VersionParseError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    UpToDate { local: Version, remote: Version },
    Newer { local: Version, remote: Version },
}

/// Compares the published version against the one compiled in and hands off
/// to an [`UpdateFetcher`] when a newer one exists.
///
/// Owns the http client for the whole check-and-fetch cycle.
pub struct VersionMonitor {
    client: reqwest::Client,
    config: UpdateConfig,
    local: Version,
}

impl VersionMonitor {
    pub fn new(client: reqwest::Client, config: UpdateConfig) -> Self {
        Self {
            client,
            config,
            local: LOCAL_VERSION,
        }
    }

    pub fn check_for_update(
        &self,
        remote_text: &str,
    ) -> Result<UpdateDecision, VersionParseError> {
        let remote: Version = remote_text.parse()?;
        let local = self.local;

        Ok(match remote.is_newer_than(&local, self.config.comparison) {
            true => UpdateDecision::Newer { local, remote },
            false => UpdateDecision::UpToDate { local, remote },
        })
    }

    pub async fn fetch_remote_version(&self) -> Result<String, UpdateError> {
        let url = &self.config.version_url;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::Status {
                url: url.clone(),
                status,
            });
        }

        Ok(response.text().await?)
    }

    /// Runs one full cycle. Returns `None` when no update was needed.
    pub async fn run(self) -> Result<Option<FetchOutcome>, UpdateError> {
        let remote_text = self.fetch_remote_version().await?;

        match self.check_for_update(&remote_text)? {
            UpdateDecision::UpToDate { local, remote } => {
                log::info!("running version {local}, latest published is {remote}");
                Ok(None)
            }
            UpdateDecision::Newer { local, remote } => {
                log::warn!("{}", "-> a new version is available:".red());
                log::info!("{}", format!("-> local version: {local}").yellow());
                log::info!("{}", format!("-> remote version: {remote}").green());

                let mut fetcher = UpdateFetcher::new(self.client, self.config);
                let outcome = fetcher.fetch_and_apply(remote).await;
                log::debug!("update cycle ended in state {}", fetcher.state());

                outcome.map(Some)
            }
        }
    }
}
