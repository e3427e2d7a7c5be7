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

//! A console implementation of the dialog traits.
//!
//! Lines typed on standard input are read by a background thread and handed
//! to the conversation over a channel, the same way a chat adapter would
//! deliver messages. Replies are written to any [`Write`] sink, coloured with
//! the palette.
//!
//! Everything except the reader thread runs on the caller's thread; the
//! output sink is shared between a response and the sessions opened for it
//! through an `Rc<RefCell<_>>`.

use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::{
    conversation::{
        ChoiceKind, ChoiceMatch, ChoiceSet, DialogEvent, DialogSession, Responder, SwitchBoard,
    },
    palette::StatusColor,
};

/// Spawns a thread that forwards each line of standard input to a channel.
///
/// The channel disconnects when standard input reaches end of file.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    line_rx
}

// Writes one line attributed to the bot, with the name in the status colour.
fn write_line<W: Write>(
    out: &mut W,
    bot_name: &str,
    status: StatusColor,
    message: &str,
) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(status.colour()),
        Print(format!("{}> ", bot_name)),
        ResetColor,
        Print(message),
        Print("\n")
    )?;
    out.flush()
}

/// The reply channel for one console command.
pub struct ConsoleResponse<W: Write> {
    bot_name: String,
    status: StatusColor,
    out: Rc<RefCell<W>>,
}

impl<W: Write> ConsoleResponse<W> {
    pub fn new(bot_name: impl Into<String>, out: Rc<RefCell<W>>) -> Self {
        Self {
            bot_name: bot_name.into(),
            status: StatusColor::Normal,
            out,
        }
    }

    /// Sets the colour used to attribute subsequent replies.
    pub fn set_status(&mut self, status: StatusColor) {
        self.status = status;
    }
}

impl<W: Write> Responder for ConsoleResponse<W> {
    fn reply(&mut self, message: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = write_line(&mut *out, &self.bot_name, self.status, message) {
            warn!(error = %e, "Failed to write reply");
        }
    }
}

/// Opens console sessions that read from a shared line channel.
pub struct ConsoleSwitchBoard {
    input: Rc<Receiver<String>>,
    timeout: Duration,
}

impl ConsoleSwitchBoard {
    /// Creates a switch board reading lines from `input`.
    ///
    /// # Arguments
    ///
    /// * `input` - Lines of user input, such as from [`spawn_stdin_reader`].
    /// * `timeout` - How long each session waits for a matching line.
    pub fn new(input: Receiver<String>, timeout: Duration) -> Self {
        Self {
            input: Rc::new(input),
            timeout,
        }
    }
}

impl<W: Write> SwitchBoard<ConsoleResponse<W>> for ConsoleSwitchBoard {
    type Session = ConsoleSession<W>;

    fn start_dialog(&mut self, response: &ConsoleResponse<W>) -> ConsoleSession<W> {
        debug!(bot = %response.bot_name, "Starting console dialog");
        ConsoleSession {
            input: Rc::clone(&self.input),
            choices: ChoiceSet::new(),
            timeout: self.timeout,
            timeout_notice: None,
            bot_name: response.bot_name.clone(),
            out: Rc::clone(&response.out),
            closed: false,
        }
    }
}

/// A dialog session over console input.
///
/// Each wait for input gets the full timeout. Lines that match no registered
/// choice are ignored.
pub struct ConsoleSession<W: Write> {
    input: Rc<Receiver<String>>,
    choices: ChoiceSet,
    timeout: Duration,
    timeout_notice: Option<String>,
    bot_name: String,
    out: Rc<RefCell<W>>,
    closed: bool,
}

impl<W: Write> ConsoleSession<W> {
    /// Whether the session has been torn down.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn time_out(&mut self) {
        if let Some(notice) = self.timeout_notice.take() {
            let mut out = self.out.borrow_mut();
            if let Err(e) = write_line(&mut *out, &self.bot_name, StatusColor::Negative, &notice) {
                warn!(error = %e, "Failed to write timeout notice");
            }
        }
        self.choices.clear();
        self.closed = true;
    }
}

impl<W: Write> DialogSession for ConsoleSession<W> {
    fn add_choice(&mut self, kind: ChoiceKind, pattern: Regex) {
        self.choices.add(kind, pattern);
    }

    fn reset_choices(&mut self) {
        self.choices.clear();
    }

    fn set_timeout_notice(&mut self, notice: &str) {
        self.timeout_notice = Some(notice.to_string());
    }

    fn emit(&mut self, event: DialogEvent) {
        match event {
            DialogEvent::Timeout => {
                debug!("Console dialog torn down");
                self.choices.clear();
                self.closed = true;
            }
        }
    }

    fn next_choice(&mut self) -> Option<ChoiceMatch> {
        if self.closed {
            return None;
        }

        let deadline = Instant::now() + self.timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.input.recv_timeout(remaining) {
                Ok(line) => {
                    trace!(line = %line, "Console input");
                    if let Some(choice) = self.choices.resolve(&line) {
                        return Some(choice);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    debug!(timeout = ?self.timeout, "Console dialog deadline passed");
                    self.time_out();
                    return None;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("Console input closed");
                    self.time_out();
                    return None;
                }
            }
        }
    }
}
