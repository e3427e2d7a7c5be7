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

//! Detecting and removing the bot's name in chat text.
//!
//! Users address a bot by name, in forms that vary by platform: `hubot`,
//! `@hubot`, `@hubot:` and so on, in any case.

use regex::Regex;

/// Removes every occurrence of the bot's name from `text`.
///
/// Matching is case-insensitive and covers an optional leading `@` and an
/// optional trailing `:`. Each occurrence, together with the whitespace around
/// it, collapses to a single space, and the result is trimmed.
///
/// # Examples
///
/// ```
/// use botkit::conversation::strip_bot_name;
///
/// let text = "@hubot @hubot: hubot HUBOT: How are you doing today?";
/// assert_eq!(strip_bot_name("hubot", text), "How are you doing today?");
/// ```
pub fn strip_bot_name(name: &str, text: &str) -> String {
    if name.is_empty() {
        return text.trim().to_string();
    }

    let source = format!(r"(?i)\s*@?{}:?\s*", regex::escape(name));
    let Ok(pattern) = Regex::new(&source) else {
        return text.trim().to_string();
    };

    pattern.replace_all(text, " ").trim().to_string()
}

/// Checks whether a message addresses the bot by name at one of its edges.
///
/// The name must open or close the message as a whole token: a name followed
/// (or, at the end, preceded) by another word character does not count, so
/// `@huboty` does not address `hubot`. On Slack-like platforms the name must
/// carry a leading `@`; elsewhere it must appear bare, so `@hubot hi` is
/// not an address outside Slack.
///
/// A name that only appears in the middle of a message is not detected.
pub fn check_bot_addressed(name: &str, text: &str, is_slack: bool) -> bool {
    if name.is_empty() {
        return false;
    }

    let token = if is_slack {
        format!("@{}", regex::escape(name))
    } else {
        regex::escape(name)
    };

    let leading = format!(r"(?i)^\s*{}(?:\W|$)", token);
    let trailing = format!(r"(?i)(?:^|\W){}\s*$", token);

    [leading, trailing]
        .iter()
        .filter_map(|source| Regex::new(source).ok())
        .any(|pattern| pattern.is_match(text))
}
