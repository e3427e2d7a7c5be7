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

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use botkit::{
    ConversationError,
    config::ConversationConfig,
    conversation::{
        BotIdentity, ChoiceKind, ChoiceMatch, ChoiceSet, DialogEvent, DialogSession, Responder,
        SwitchBoard, get_confirmed_response, get_expected_response, numbered_list_pattern,
    },
};
use regex::Regex;

#[derive(Default)]
struct ScriptedResponse {
    replies: Vec<String>,
}

impl Responder for ScriptedResponse {
    fn reply(&mut self, message: &str) {
        self.replies.push(message.to_string());
    }
}

#[derive(Debug, Default)]
struct SessionLog {
    dialogs: usize,
    resets: usize,
    events: Vec<DialogEvent>,
    timeout_notice: Option<String>,
}

// Feeds each session the scripted lines; running out of lines behaves like
// the session's deadline passing.
struct ScriptedBoard {
    inputs: VecDeque<String>,
    log: Rc<RefCell<SessionLog>>,
}

impl ScriptedBoard {
    fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|line| line.to_string()).collect(),
            log: Rc::new(RefCell::new(SessionLog::default())),
        }
    }
}

impl SwitchBoard<ScriptedResponse> for ScriptedBoard {
    type Session = ScriptedSession;

    fn start_dialog(&mut self, _response: &ScriptedResponse) -> ScriptedSession {
        self.log.borrow_mut().dialogs += 1;
        ScriptedSession {
            inputs: std::mem::take(&mut self.inputs),
            choices: ChoiceSet::new(),
            log: Rc::clone(&self.log),
        }
    }
}

struct ScriptedSession {
    inputs: VecDeque<String>,
    choices: ChoiceSet,
    log: Rc<RefCell<SessionLog>>,
}

impl DialogSession for ScriptedSession {
    fn add_choice(&mut self, kind: ChoiceKind, pattern: Regex) {
        self.choices.add(kind, pattern);
    }

    fn reset_choices(&mut self) {
        self.log.borrow_mut().resets += 1;
        self.choices.clear();
    }

    fn set_timeout_notice(&mut self, notice: &str) {
        self.log.borrow_mut().timeout_notice = Some(notice.to_string());
    }

    fn emit(&mut self, event: DialogEvent) {
        self.log.borrow_mut().events.push(event);
    }

    fn next_choice(&mut self) -> Option<ChoiceMatch> {
        while let Some(line) = self.inputs.pop_front() {
            if let Some(choice) = self.choices.resolve(&line) {
                return Some(choice);
            }
        }
        None
    }
}

fn robot() -> BotIdentity {
    BotIdentity::new("hubot", Some("shell"))
}

fn expect_y() -> Regex {
    Regex::new(r"(?i)(Y)").unwrap()
}

const PROMPT: &str = "Pick one";
const NEGATIVE: &str = "Fine, never mind.";

type Outcome<T> = (Result<T, ConversationError>, ScriptedResponse, ScriptedBoard);

fn expected(inputs: &[&str], config: &ConversationConfig) -> Outcome<ChoiceMatch> {
    let mut response = ScriptedResponse::default();
    let mut board = ScriptedBoard::new(inputs);
    let result = get_expected_response(
        &mut response,
        &robot(),
        &mut board,
        PROMPT,
        &expect_y(),
        config,
    );
    (result, response, board)
}

fn confirmed(inputs: &[&str], config: &ConversationConfig) -> Outcome<()> {
    let mut response = ScriptedResponse::default();
    let mut board = ScriptedBoard::new(inputs);
    let result = get_confirmed_response(&mut response, &mut board, PROMPT, NEGATIVE, config);
    (result, response, board)
}

#[test]
fn expected_response_on_first_attempt() {
    let config = ConversationConfig::default();
    let (result, response, board) = expected(&["hubot Y"], &config);

    let choice = result.unwrap();
    assert_eq!(choice.kind, ChoiceKind::Expected);
    assert_eq!(choice.capture(1), Some("Y"));
    assert_eq!(response.replies, vec![PROMPT]);

    let log = board.log.borrow();
    assert_eq!(log.dialogs, 1);
    assert_eq!(log.resets, 1);
    assert_eq!(log.events, vec![DialogEvent::Timeout]);
    assert_eq!(log.timeout_notice.as_deref(), Some(config.messages.timed_out.as_str()));
}

#[test]
fn expected_response_strips_an_addressed_capture() {
    let config = ConversationConfig::default();
    let mut response = ScriptedResponse::default();
    let mut board = ScriptedBoard::new(&["hubot deploy api"]);
    let pattern = Regex::new(r"(\w+ deploy \w+)").unwrap();

    let choice = get_expected_response(
        &mut response,
        &robot(),
        &mut board,
        PROMPT,
        &pattern,
        &config,
    )
    .unwrap();

    assert_eq!(choice.capture(1), Some("deploy api"));
}

#[test]
fn expected_response_retries_unexpected_input() {
    let config = ConversationConfig::default();
    let (result, response, board) = expected(&["hubot blah", "hubot Y"], &config);

    assert!(result.is_ok());
    assert_eq!(
        response.replies,
        vec![PROMPT, config.messages.try_again_or_exit.as_str(), PROMPT]
    );
    assert_eq!(board.log.borrow().resets, 1);
}

#[test]
fn expected_response_exits() {
    let config = ConversationConfig::default();

    for exit in ["exit", "hubot exit", "EXIT now"] {
        let (result, response, board) = expected(&[exit], &config);

        assert_eq!(result.unwrap_err(), ConversationError::Exited, "{}", exit);
        assert_eq!(response.replies, vec![PROMPT]);
        let log = board.log.borrow();
        assert_eq!(log.resets, 1);
        assert_eq!(log.events, vec![DialogEvent::Timeout]);
    }
}

#[test]
fn exit_must_be_the_choice_word() {
    let config = ConversationConfig::default();
    let (result, _, _) = expected(&["please exit", "Y"], &config);

    assert!(result.is_ok());
}

#[test]
fn custom_exit_token() {
    let config = ConversationConfig {
        exit_token: String::from("quit"),
        ..ConversationConfig::default()
    };
    let (result, _, _) = expected(&["exit", "quit"], &config);

    assert_eq!(result.unwrap_err(), ConversationError::Exited);
}

#[test]
fn expected_response_times_out_without_teardown() {
    let config = ConversationConfig::default();
    let (result, response, board) = expected(&["blah"], &config);

    assert_eq!(result.unwrap_err(), ConversationError::TimedOut);
    assert_eq!(response.replies.len(), 3);

    let log = board.log.borrow();
    assert_eq!(log.resets, 0);
    assert!(log.events.is_empty());
}

#[test]
fn retry_guard_gives_up() {
    let config = ConversationConfig {
        max_retries: Some(1),
        ..ConversationConfig::default()
    };
    let (result, response, board) = expected(&["a", "b", "Y"], &config);

    assert_eq!(
        result.unwrap_err(),
        ConversationError::RetriesExhausted { attempts: 2 }
    );
    assert_eq!(
        response.replies,
        vec![PROMPT, config.messages.try_again_or_exit.as_str(), PROMPT]
    );
    assert_eq!(board.log.borrow().resets, 1);
}

#[test]
fn long_runs_of_unexpected_input_do_not_grow_the_stack() {
    let config = ConversationConfig::default();
    let mut inputs = vec!["blah"; 50_000];
    inputs.push("Y");

    let (result, response, _) = expected(&inputs, &config);

    assert!(result.is_ok());
    assert_eq!(response.replies.len(), 100_001);
}

#[test]
fn confirmed_response_yes() {
    let config = ConversationConfig::default();
    let (result, response, board) = confirmed(&["hubot yes"], &config);

    assert_eq!(result, Ok(()));
    assert_eq!(response.replies, vec![PROMPT]);
    let log = board.log.borrow();
    assert_eq!(log.resets, 1);
    assert_eq!(log.events, vec![DialogEvent::Timeout]);
}

#[test]
fn confirmed_response_no() {
    let config = ConversationConfig::default();
    let (result, response, board) = confirmed(&["hubot no"], &config);

    assert_eq!(result, Err(ConversationError::Declined));
    assert_eq!(response.replies, vec![PROMPT, NEGATIVE]);
    assert_eq!(board.log.borrow().resets, 1);
}

#[test]
fn confirmed_response_retries_until_answered() {
    let config = ConversationConfig::default();
    let (result, response, _) = confirmed(&["hubot blah", "maybe", "Yep"], &config);

    assert_eq!(result, Ok(()));
    let retry = config.messages.try_again_yes_no.as_str();
    assert_eq!(response.replies, vec![PROMPT, retry, PROMPT, retry, PROMPT]);
}

#[test]
fn confirmed_response_times_out() {
    let config = ConversationConfig::default();
    let (result, _, board) = confirmed(&[], &config);

    assert_eq!(result, Err(ConversationError::TimedOut));
    assert_eq!(board.log.borrow().resets, 0);
}

#[test]
fn numbered_menu_through_the_expected_driver() {
    let config = ConversationConfig::default();
    let mut response = ScriptedResponse::default();
    let mut board = ScriptedBoard::new(&["@hubot 12", "@hubot 7"]);
    let pattern = numbered_list_pattern(9).unwrap();

    let choice = get_expected_response(
        &mut response,
        &robot(),
        &mut board,
        PROMPT,
        &pattern,
        &config,
    )
    .unwrap();

    assert_eq!(choice.capture(1), Some("7"));
    assert_eq!(response.replies.len(), 3);
}
