use std::{
    fmt,
    path::{Path, PathBuf},
};

use colored::Colorize;
use futures::StreamExt;
use tokio::{fs::File, io::AsyncWriteExt, task::JoinError};

use crate::config::structure::UpdateConfig;

use super::{UpdateError, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Downloading,
    Failed,
    Extracting,
    ExtractFailed,
    Done,
}

impl FetchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::ExtractFailed | Self::Done)
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Downloading => "downloading",
            Self::Failed => "failed",
            Self::Extracting => "extracting",
            Self::ExtractFailed => "extract failed",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// How the archive download ended.
#[derive(Debug, Default)]
pub struct DownloadCompletion {
    pub cancelled: bool,
    pub error: Option<UpdateError>,
}

impl DownloadCompletion {
    fn from_task(result: Result<Result<(), UpdateError>, JoinError>) -> Self {
        match result {
            Ok(Ok(())) => Self::default(),
            Ok(Err(why)) => Self {
                cancelled: false,
                error: Some(why),
            },
            Err(why) if why.is_cancelled() => Self {
                cancelled: true,
                error: None,
            },
            Err(why) => Self {
                cancelled: false,
                error: Some(why.into()),
            },
        }
    }

    pub fn succeeded(&self) -> bool {
        !self.cancelled && self.error.is_none()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The download did not complete; nothing was extracted.
    Failed,
    /// The archive was unpacked into the staging directory at `path`.
    Done { path: PathBuf },
}

/// Downloads a release archive and unpacks it into the staging directory.
///
/// The archive is left on disk afterwards and its contents are not verified.
pub struct UpdateFetcher {
    client: reqwest::Client,
    config: UpdateConfig,
    state: FetchState,
}

impl UpdateFetcher {
    pub fn new(client: reqwest::Client, config: UpdateConfig) -> Self {
        Self {
            client,
            config,
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn archive_url(&self, version: &Version) -> String {
        format!(
            "{}/download/{version}/linearsbot-{version}.zip",
            self.config.releases_url.trim_end_matches('/')
        )
    }

    pub async fn fetch_and_apply(
        &mut self,
        version: Version,
    ) -> Result<FetchOutcome, UpdateError> {
        let completion = self.download(version).await?;
        self.complete(completion).await
    }

    /// Starts the single download this fetcher is allowed to make.
    pub async fn download(
        &mut self,
        version: Version,
    ) -> Result<DownloadCompletion, UpdateError> {
        self.expect_state(FetchState::Idle, "download")?;

        let url = self.archive_url(&version);
        let target = PathBuf::from(&self.config.archive_path);

        log::info!(
            "{}",
            format!("-> downloading version {version} to \"{}\"", target.display()).magenta()
        );
        self.transition(FetchState::Downloading);

        // only an abort issued by the runtime itself shows up as `cancelled`
        let task = tokio::spawn(download_to(self.client.clone(), url, target));

        Ok(DownloadCompletion::from_task(task.await))
    }

    /// Acts on a finished download. Only a download that was neither
    /// cancelled nor errored leads to extraction.
    pub async fn complete(
        &mut self,
        completion: DownloadCompletion,
    ) -> Result<FetchOutcome, UpdateError> {
        self.expect_state(FetchState::Downloading, "complete a download")?;

        if !completion.succeeded() {
            match &completion.error {
                Some(why) => log::debug!("archive download failed: {why}"),
                None => log::debug!("archive download was cancelled"),
            }
            self.transition(FetchState::Failed);

            log::error!(
                "{}",
                format!(
                    "-> the download could not finish, try doing it manually from the project page:\n-> {}",
                    self.config.releases_url
                )
                .red()
            );
            return Ok(FetchOutcome::Failed);
        }

        self.transition(FetchState::Extracting);

        let archive = PathBuf::from(&self.config.archive_path);
        let staging = PathBuf::from(&self.config.staging_dir);

        match extract(archive, staging).await {
            Ok(path) => {
                self.transition(FetchState::Done);
                log::info!(
                    "{}",
                    format!(
                        "-> new version downloaded successfully to:\n-> {}",
                        path.display()
                    )
                    .green()
                );
                Ok(FetchOutcome::Done { path })
            }
            Err(why) => {
                self.transition(FetchState::ExtractFailed);
                Err(why)
            }
        }
    }

    fn expect_state(
        &self,
        expected: FetchState,
        action: &'static str,
    ) -> Result<(), UpdateError> {
        match self.state {
            state if state == expected => Ok(()),
            state if state.is_terminal() => Err(UpdateError::AlreadyFinished(state)),
            state => Err(UpdateError::InvalidState { action, state }),
        }
    }

    fn transition(&mut self, next: FetchState) {
        log::debug!("update fetcher: {} -> {}", self.state, next);
        self.state = next;
    }
}

async fn download_to(
    client: reqwest::Client,
    url: String,
    target: PathBuf,
) -> Result<(), UpdateError> {
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpdateError::Status { url, status });
    }

    let mut file = File::create(&target).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;

    Ok(())
}

async fn extract(archive: PathBuf, staging: PathBuf) -> Result<PathBuf, UpdateError> {
    tokio::task::spawn_blocking(move || unpack(&archive, &staging)).await?
}

fn unpack(archive: &Path, staging: &Path) -> Result<PathBuf, UpdateError> {
    std::fs::create_dir_all(staging)?;

    let file = std::fs::File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    zip.extract(staging)?;

    Ok(std::path::absolute(staging)?)
}
