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

//! Patterns for recognising replies.
//!
//! Chat users answer a numbered menu with a bare numeral, often prefixed by
//! the bot's name (`@hubot 3`), and answer questions with one of many
//! spellings of yes or no. The patterns here accept those forms.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConversationError, Result};

/// The largest numbered list a generated pattern can select from.
pub const MAX_NUMBERED_LIST: i64 = 99;

/// Matches an affirmative answer anywhere in a message.
pub static CONFIRM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(yes|ye|yeah|yep|yo|y|yee|yeehaw|sure|sur|giddy-up)\b")
        .expect("confirm pattern is valid")
});

/// Matches a negative answer anywhere in a message.
pub static DENY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(no|nah|nuh-uh|neep|nawp|nope|nop|gasp|never)\b")
        .expect("deny pattern is valid")
});

/// Matches any input at all, used as the fallback choice.
pub(crate) static ANYTHING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*").expect("fallback pattern is valid"));

/// Builds a pattern accepting the numerals `1` through `max_num`.
///
/// The numeral may be preceded by any run of non-digit characters, so an
/// addressed reply such as `@hubot 12` matches, and the selected numeral is
/// available as capture group 1. Nothing may follow the numeral.
///
/// # Errors
///
/// Returns [`ConversationError::OutOfRange`] if `max_num` is outside
/// `1..=99`.
///
/// # Examples
///
/// ```
/// use botkit::conversation::numbered_list_pattern;
///
/// let pattern = numbered_list_pattern(15).unwrap();
/// assert!(pattern.is_match("@hubot 15"));
/// assert!(!pattern.is_match("16"));
/// ```
pub fn numbered_list_pattern(max_num: i64) -> Result<Regex> {
    let source = numbered_list_source(max_num)?;
    // Built only from digits and character classes.
    Ok(Regex::new(&source).expect("numbered list pattern is valid"))
}

/// Builds the regular expression source behind [`numbered_list_pattern`].
pub fn numbered_list_source(max_num: i64) -> Result<String> {
    if !(1..=MAX_NUMBERED_LIST).contains(&max_num) {
        return Err(ConversationError::OutOfRange { max: max_num });
    }

    let numerals = if max_num <= 9 {
        format!("[1-{}]", max_num)
    } else {
        let tens = max_num / 10;
        let units = max_num % 10;

        let mut alternatives = vec![String::from("[1-9]")];
        if tens > 1 {
            alternatives.push(format!("[1-{}][0-9]", tens - 1));
        }
        alternatives.push(format!("{}[0-{}]", tens, units));
        alternatives.join("|")
    };

    Ok(format!(r"^\D*({})$", numerals))
}
