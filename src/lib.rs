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

//! # Chat-bot helpers.
//!
//! Small building blocks shared by the commands of a conversational bot:
//!
//! * [`palette`]: Colours for status attachments.
//! * [`util::format`]: Byte and memory sizes for humans.
//! * [`conversation`]: Numbered-menu and yes/no patterns, bot-name handling,
//!   and drivers that keep prompting a user until an acceptable answer
//!   arrives.
//! * [`console`]: A stdin/stdout implementation of the dialog traits.
//! * [`config`]: The persisted configuration.
//!
//! ## Dialogs
//!
//! The hosting chat framework owns conversation state. The drivers in
//! [`conversation::prompt`] only talk to it through the
//! [`conversation::SwitchBoard`] and [`conversation::DialogSession`] traits,
//! so any framework, or a test double, can supply the sessions.

pub mod config;
pub mod console;
pub mod conversation;
pub mod error;
pub mod palette;
pub mod util;

pub use error::{ConversationError, Result};
