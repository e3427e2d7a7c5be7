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

//! Error types for conversation helpers.

use thiserror::Error;

/// The ways a conversation helper can fail to produce a value.
///
/// Only [`ConversationError::OutOfRange`] indicates a caller mistake; the
/// other variants describe how the user ended a prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    #[error("numbered list size {max} is outside the supported range 1..=99")]
    OutOfRange { max: i64 },

    #[error("the user left the conversation")]
    Exited,

    #[error("the user declined")]
    Declined,

    #[error("the conversation timed out")]
    TimedOut,

    #[error("no acceptable answer after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, ConversationError>;
