use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::update::Comparison;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct LinearsBotConfigTOML {
    pub config: LinearsBotConfigInner,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LinearsBotConfigInner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LevelFilter>,
    pub discord: DiscordConfig,
    #[serde(default)]
    pub update: UpdateConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordConfig {
    pub token: String,
    #[serde(default = "DiscordConfig::default_prefix")]
    pub prefix: String,
}

impl DiscordConfig {
    fn default_prefix() -> String {
        "!".to_string()
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: Self::default_prefix(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UpdateConfig {
    #[serde(alias = "keepUpdated")]
    pub keep_updated: bool,
    /// Plaintext file holding the latest `major.minor.patch`.
    pub version_url: String,
    /// Releases page, also the base of the archive download URL.
    pub releases_url: String,
    pub archive_path: String,
    pub staging_dir: String,
    pub comparison: Comparison,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            keep_updated: true,
            version_url: "https://raw.githubusercontent.com/Cu-chi/linears-utils/master/version"
                .to_string(),
            releases_url: "https://github.com/Cu-chi/linears-utils/releases".to_string(),
            archive_path: "new-linears-bot.zip".to_string(),
            staging_dir: "lastupdate".to_string(),
            comparison: Comparison::default(),
        }
    }
}
