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

//! The bot's identity and the chat platform it is connected through.

use serde::{Deserialize, Serialize};

/// The name the bot answers to and the adapter it runs under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BotIdentity {
    pub name: String,
    pub adapter_name: Option<String>,
}

impl Default for BotIdentity {
    fn default() -> Self {
        Self {
            name: String::from("hubot"),
            adapter_name: Some(String::from("shell")),
        }
    }
}

impl BotIdentity {
    pub fn new(name: impl Into<String>, adapter_name: Option<&str>) -> Self {
        Self {
            name: name.into(),
            adapter_name: adapter_name.map(str::to_string),
        }
    }

    /// True if we are certain the bot is running in Slack.
    pub fn is_slack(&self) -> bool {
        is_slack(self.adapter_name.as_deref())
    }

    /// True if we are certain the bot is running in Facebook Messenger.
    pub fn is_facebook(&self) -> bool {
        is_facebook(self.adapter_name.as_deref())
    }
}

/// Checks an adapter name for a Slack-like adapter.
pub fn is_slack(adapter_name: Option<&str>) -> bool {
    adapter_name.is_some_and(|name| name.to_lowercase().contains("slack"))
}

/// Checks an adapter name for the Facebook adapter.
pub fn is_facebook(adapter_name: Option<&str>) -> bool {
    adapter_name.is_some_and(|name| name.eq_ignore_ascii_case("fb"))
}
