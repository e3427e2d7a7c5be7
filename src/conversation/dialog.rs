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

//! The dialog abstraction the conversation helpers drive.
//!
//! The hosting chat framework owns message routing and per-conversation state.
//! These traits describe the small part of it the helpers need:
//!
//! * A [`Responder`] sends text back to the user who triggered a command.
//! * A [`SwitchBoard`] opens a [`DialogSession`] for one prompt-response
//!   exchange.
//! * A [`DialogSession`] holds the patterns registered for the exchange and
//!   suspends until the user's next message matches one of them, or until its
//!   own deadline passes.

use regex::{Captures, Regex};

/// Identifies which registered pattern a user's message satisfied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChoiceKind {
    Expected,
    Affirmative,
    Negative,
    Unexpected,
}

/// A user message that satisfied one of the registered choices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChoiceMatch {
    pub kind: ChoiceKind,
    /// The matched text.
    pub text: String,
    /// Capture groups 1 and up, `None` where a group did not participate.
    pub captures: Vec<Option<String>>,
}

impl ChoiceMatch {
    pub fn new(kind: ChoiceKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            captures: vec![],
        }
    }

    fn from_captures(kind: ChoiceKind, captures: &Captures) -> Self {
        Self {
            kind,
            text: captures
                .get(0)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            captures: captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }

    /// Returns capture group `index`, counting from 1 as regular expressions
    /// do.
    pub fn capture(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.captures.get(i))
            .and_then(|group| group.as_deref())
    }
}

/// Signals a session can be sent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DialogEvent {
    /// Tells the session to tear itself down, whether or not its deadline has
    /// actually passed.
    Timeout,
}

/// Sends text back to the user.
pub trait Responder {
    fn reply(&mut self, message: &str);
}

/// One prompt-response exchange with a single user.
pub trait DialogSession {
    /// Registers a pattern. Patterns are tried in registration order and the
    /// first to match a message wins.
    fn add_choice(&mut self, kind: ChoiceKind, pattern: Regex);

    /// Removes every registered pattern.
    fn reset_choices(&mut self);

    /// Sets the notice the session delivers to the user if its deadline
    /// passes before a registered pattern matches.
    fn set_timeout_notice(&mut self, notice: &str);

    fn emit(&mut self, event: DialogEvent);

    /// Waits for the next message that matches a registered pattern.
    ///
    /// Returns `None` once the session's deadline has passed or its input has
    /// closed; by then the session has delivered its timeout notice.
    fn next_choice(&mut self) -> Option<ChoiceMatch>;
}

/// Opens dialog sessions for the responses of a chat framework.
pub trait SwitchBoard<R: Responder> {
    type Session: DialogSession;

    fn start_dialog(&mut self, response: &R) -> Self::Session;
}

/// Registration-ordered patterns, where the first pattern to match wins.
///
/// Session implementations use this to decide which choice a message
/// satisfies.
#[derive(Debug, Default)]
pub struct ChoiceSet {
    choices: Vec<(ChoiceKind, Regex)>,
}

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ChoiceKind, pattern: Regex) {
        self.choices.push((kind, pattern));
    }

    pub fn clear(&mut self) {
        self.choices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Finds the first registered pattern matching `input`.
    pub fn resolve(&self, input: &str) -> Option<ChoiceMatch> {
        self.choices.iter().find_map(|(kind, pattern)| {
            pattern
                .captures(input)
                .map(|captures| ChoiceMatch::from_captures(*kind, &captures))
        })
    }
}
