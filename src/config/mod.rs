// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Bot configuration.
//!
//! This module manages the configuration file, which holds the bot's identity
//! and the text and limits used by the conversation helpers.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::conversation::BotIdentity;

const CONFIG_NAME: &str = "botkit";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    pub version: u32,
    pub bot: BotIdentity,
    pub conversation: ConversationConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            version: 1,
            bot: BotIdentity::default(),
            conversation: ConversationConfig::default(),
        }
    }
}

/// Settings for the retry drivers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConversationConfig {
    /// The word a user types to abandon a prompt.
    pub exit_token: String,
    /// Unexpected answers tolerated before giving up, unbounded if absent.
    pub max_retries: Option<u32>,
    /// How long a console session waits for an answer.
    pub dialog_timeout_secs: u64,
    pub messages: ConversationMessages,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            exit_token: String::from("exit"),
            max_retries: None,
            dialog_timeout_secs: 300,
            messages: ConversationMessages::default(),
        }
    }
}

impl ConversationConfig {
    pub fn dialog_timeout(&self) -> Duration {
        Duration::from_secs(self.dialog_timeout_secs)
    }
}

/// User-facing notices sent while prompting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConversationMessages {
    pub timed_out: String,
    pub try_again_or_exit: String,
    pub try_again_yes_no: String,
}

impl Default for ConversationMessages {
    fn default() -> Self {
        Self {
            timed_out: String::from("I did not hear back from you in time, so I stopped waiting."),
            try_again_or_exit: String::from(
                "I didn't understand that. Please try again, or type exit to quit.",
            ),
            try_again_yes_no: String::from("I didn't understand that. Please answer yes or no."),
        }
    }
}

pub fn load_config() -> BotConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &BotConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

pub fn load_config_from(path: impl AsRef<Path>) -> Result<BotConfig, confy::ConfyError> {
    confy::load_path(path)
}

pub fn save_config_to(path: impl AsRef<Path>, cfg: &BotConfig) -> Result<(), confy::ConfyError> {
    confy::store_path(path, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BotConfig::default();
        assert_eq!(cfg.bot.name, "hubot");
        assert_eq!(cfg.conversation.exit_token, "exit");
        assert_eq!(cfg.conversation.max_retries, None);
        assert_eq!(cfg.conversation.dialog_timeout(), Duration::from_secs(300));
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("botkit.toml");

        let mut cfg = BotConfig::default();
        cfg.bot = BotIdentity::new("watson", Some("slack"));
        cfg.conversation.max_retries = Some(3);
        cfg.conversation.messages.timed_out = String::from("Too slow.");

        save_config_to(&path, &cfg).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded, cfg);
        assert!(loaded.bot.is_slack());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("botkit.toml");
        std::fs::write(&path, "[conversation.messages]\ntimed_out = \"Bye.\"\n").unwrap();

        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.conversation.messages.timed_out, "Bye.");
        assert_eq!(
            loaded.conversation.messages.try_again_yes_no,
            ConversationMessages::default().try_again_yes_no
        );
        assert_eq!(loaded.bot, BotIdentity::default());
        assert_eq!(loaded.version, 1);
    }
}
