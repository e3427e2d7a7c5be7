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

//! Prompting a user until an acceptable answer arrives.
//!
//! Both drivers follow the same shape: send the prompt, wait for the next
//! message that matches a registered choice, then either settle or explain
//! the problem and prompt again. The loop runs as an explicit state machine,
//! so any number of unexpected answers uses constant stack.
//!
//! # Settling
//!
//! A driver settles when the user gives an accepted answer or backs out. In
//! both cases the session's choices are reset and the session is told to tear
//! down before the driver returns, so no session is left listening. When the
//! session's own deadline passes it has already torn itself down and
//! delivered its timeout notice, and the driver returns
//! [`ConversationError::TimedOut`] without touching it.

use regex::Regex;
use tracing::{debug, trace};

use crate::{
    config::ConversationConfig,
    conversation::{
        BotIdentity,
        dialog::{ChoiceKind, ChoiceMatch, DialogEvent, DialogSession, Responder, SwitchBoard},
        pattern::{ANYTHING, CONFIRM, DENY},
    },
    error::{ConversationError, Result},
};

enum PromptState<T> {
    Prompting,
    AwaitingInput,
    Resolved(T),
    Rejected(ConversationError),
}

// What a driver makes of one matched message.
enum Step<T> {
    Resolve(T),
    Reject(ConversationError),
    Retry(String),
}

/// Prompts until the user's answer matches `expected`, or the user exits.
///
/// If capture group 1 of the match contains the bot's name, the group is
/// replaced by the text after its first space, so `@hubot 3` yields `3`.
///
/// Any other message is checked for the exit token: the first word, or the
/// second word when the message contains the bot's name.
///
/// # Errors
///
/// * [`ConversationError::Exited`] if the user typed the exit token.
/// * [`ConversationError::TimedOut`] if the session's deadline passed.
/// * [`ConversationError::RetriesExhausted`] if `max_retries` is configured
///   and the user exceeded it.
pub fn get_expected_response<R, B>(
    response: &mut R,
    robot: &BotIdentity,
    switch_board: &mut B,
    prompt: &str,
    expected: &Regex,
    config: &ConversationConfig,
) -> Result<ChoiceMatch>
where
    R: Responder,
    B: SwitchBoard<R>,
{
    let mut session = switch_board.start_dialog(response);
    session.add_choice(ChoiceKind::Expected, expected.clone());
    session.add_choice(ChoiceKind::Unexpected, ANYTHING.clone());

    run_prompt(response, &mut session, prompt, config, |choice, _| match choice.kind {
        ChoiceKind::Expected => Step::Resolve(strip_addressed_capture(choice, &robot.name)),
        _ => {
            if choice_token(&choice.text, &robot.name)
                .is_some_and(|token| token.eq_ignore_ascii_case(&config.exit_token))
            {
                Step::Reject(ConversationError::Exited)
            } else {
                Step::Retry(config.messages.try_again_or_exit.clone())
            }
        }
    })
}

/// Prompts until the user answers yes or no.
///
/// On a negative answer `negative_response` is sent to the user before the
/// driver returns.
///
/// # Errors
///
/// * [`ConversationError::Declined`] if the user answered no.
/// * [`ConversationError::TimedOut`] if the session's deadline passed.
/// * [`ConversationError::RetriesExhausted`] if `max_retries` is configured
///   and the user exceeded it.
pub fn get_confirmed_response<R, B>(
    response: &mut R,
    switch_board: &mut B,
    prompt: &str,
    negative_response: &str,
    config: &ConversationConfig,
) -> Result<()>
where
    R: Responder,
    B: SwitchBoard<R>,
{
    let mut session = switch_board.start_dialog(response);
    session.add_choice(ChoiceKind::Affirmative, CONFIRM.clone());
    session.add_choice(ChoiceKind::Negative, DENY.clone());
    session.add_choice(ChoiceKind::Unexpected, ANYTHING.clone());

    run_prompt(response, &mut session, prompt, config, |choice, response| match choice.kind {
        ChoiceKind::Affirmative => Step::Resolve(()),
        ChoiceKind::Negative => {
            response.reply(negative_response);
            Step::Reject(ConversationError::Declined)
        }
        _ => Step::Retry(config.messages.try_again_yes_no.clone()),
    })
}

// Drives a session through the prompt loop until `classify` settles it.
fn run_prompt<R, S, T, F>(
    response: &mut R,
    session: &mut S,
    prompt: &str,
    config: &ConversationConfig,
    mut classify: F,
) -> Result<T>
where
    R: Responder,
    S: DialogSession,
    F: FnMut(ChoiceMatch, &mut R) -> Step<T>,
{
    let mut retries = 0u32;
    let mut state = PromptState::Prompting;

    loop {
        state = match state {
            PromptState::Prompting => {
                debug!(prompt, retries, "Prompting user");
                response.reply(prompt);
                session.set_timeout_notice(&config.messages.timed_out);
                PromptState::AwaitingInput
            }

            PromptState::AwaitingInput => {
                let Some(choice) = session.next_choice() else {
                    debug!("Dialog timed out waiting for an answer");
                    return Err(ConversationError::TimedOut);
                };
                trace!(kind = ?choice.kind, text = %choice.text, "Received choice");

                match classify(choice, response) {
                    Step::Resolve(value) => PromptState::Resolved(value),
                    Step::Reject(err) => PromptState::Rejected(err),
                    Step::Retry(notice) => {
                        retries += 1;
                        match config.max_retries {
                            Some(max) if retries > max => {
                                PromptState::Rejected(ConversationError::RetriesExhausted {
                                    attempts: retries,
                                })
                            }
                            _ => {
                                response.reply(&notice);
                                PromptState::Prompting
                            }
                        }
                    }
                }
            }

            PromptState::Resolved(value) => {
                teardown(session);
                debug!(retries, "Prompt resolved");
                return Ok(value);
            }

            PromptState::Rejected(err) => {
                teardown(session);
                debug!(retries, error = %err, "Prompt rejected");
                return Err(err);
            }
        };
    }
}

fn teardown<S: DialogSession>(session: &mut S) {
    session.reset_choices();
    session.emit(DialogEvent::Timeout);
}

// Drops a leading bot address from capture group 1 of an expected match.
fn strip_addressed_capture(mut choice: ChoiceMatch, bot_name: &str) -> ChoiceMatch {
    if bot_name.is_empty() {
        return choice;
    }

    if let Some(Some(first)) = choice.captures.first_mut() {
        if first.contains(bot_name) {
            let rest = first
                .split_once(' ')
                .map(|(_, rest)| rest.to_string())
                .unwrap_or_else(|| first.clone());
            *first = rest;
        }
    }

    choice
}

// The word that carries the user's intent: the second word of an addressed
// message, the first otherwise.
fn choice_token<'a>(text: &'a str, bot_name: &str) -> Option<&'a str> {
    let mut words = text.split_whitespace();
    if !bot_name.is_empty() && text.contains(bot_name) {
        words.nth(1)
    } else {
        words.next()
    }
}
