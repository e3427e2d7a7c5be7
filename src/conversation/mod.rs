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

//! Conversational helpers.
//!
//! # Sub-modules
//!
//! * [`pattern`]: Patterns for numbered menus and yes/no answers.
//! * [`addressing`]: Finding and removing the bot's name in a message.
//! * [`platform`]: The bot's identity and adapter probes.
//! * [`dialog`]: The dialog session abstraction supplied by the host.
//! * [`prompt`]: Drivers that re-prompt until an acceptable answer arrives.

pub mod addressing;
pub mod dialog;
pub mod pattern;
pub mod platform;
pub mod prompt;

pub use addressing::{check_bot_addressed, strip_bot_name};
pub use dialog::{
    ChoiceKind, ChoiceMatch, ChoiceSet, DialogEvent, DialogSession, Responder, SwitchBoard,
};
pub use pattern::{CONFIRM, DENY, numbered_list_pattern, numbered_list_source};
pub use platform::{BotIdentity, is_facebook, is_slack};
pub use prompt::{get_confirmed_response, get_expected_response};
