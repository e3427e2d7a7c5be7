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

//! # Console bot.
//!
//! Runs a short status conversation against the terminal: the bot offers a
//! numbered list of services, reports on the one picked, and asks whether to
//! restart it.
//!
//! Log output goes to stderr and is controlled with `RUST_LOG`.

use std::{cell::RefCell, io, rc::Rc};

use anyhow::{Context, Result};
use botkit::{
    ConversationError,
    config::{self, BotConfig},
    console::{self, ConsoleResponse, ConsoleSwitchBoard},
    conversation::{
        Responder, check_bot_addressed, get_confirmed_response, get_expected_response,
        numbered_list_pattern, strip_bot_name,
    },
    palette::{self, StatusColor},
    util::format::{bytes_to_size, format_memory},
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// A service the bot can report on.
struct Service {
    name: &'static str,
    status: StatusColor,
    disk_bytes: u64,
    memory_mb: f64,
}

static SERVICES: [Service; 4] = [
    Service {
        name: "api",
        status: StatusColor::Running,
        disk_bytes: 734_003_200,
        memory_mb: 512.0,
    },
    Service {
        name: "worker",
        status: StatusColor::Stopped,
        disk_bytes: 52_428_800,
        memory_mb: 2048.0,
    },
    Service {
        name: "search",
        status: StatusColor::Training,
        disk_bytes: 12_884_901_888,
        memory_mb: 16_384.0,
    },
    Service {
        name: "docs",
        status: StatusColor::Available,
        disk_bytes: 4096,
        memory_mb: 64.0,
    },
];

type Response = ConsoleResponse<io::Stdout>;

/// The entry point of the application.
///
/// Loads the configuration, installs logging, and runs one conversation over
/// stdin and stdout.
fn main() -> Result<()> {
    init_logging();

    let config = config::load_config();
    info!(bot = %config.bot.name, adapter = ?config.bot.adapter_name, "Starting console bot");

    let out = Rc::new(RefCell::new(io::stdout()));
    let mut response = ConsoleResponse::new(config.bot.name.clone(), out);
    let mut board = ConsoleSwitchBoard::new(
        console::spawn_stdin_reader(),
        config.conversation.dialog_timeout(),
    );

    run(&config, &mut response, &mut board).context("Conversation failed")
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(config: &BotConfig, response: &mut Response, board: &mut ConsoleSwitchBoard) -> Result<()> {
    let pattern = numbered_list_pattern(SERVICES.len() as i64)
        .context("Failed to build the service menu pattern")?;

    let menu: Vec<String> = SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| format!("{}. {}", i + 1, service.name))
        .collect();
    response.reply(&format!("I can check on these services:\n{}", menu.join("\n")));

    let choice = match get_expected_response(
        response,
        &config.bot,
        board,
        "Which one? Reply with its number.",
        &pattern,
        &config.conversation,
    ) {
        Ok(choice) => choice,
        Err(ConversationError::Exited) => {
            response.reply("Okay, maybe later.");
            return Ok(());
        }
        Err(ConversationError::TimedOut) => return Ok(()),
        Err(e) => return Err(e).context("Failed to read a service choice"),
    };

    debug!(
        answer = %strip_bot_name(&config.bot.name, &choice.text),
        addressed = check_bot_addressed(&config.bot.name, &choice.text, config.bot.is_slack()),
        "Service chosen"
    );

    let service = choice
        .capture(1)
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| SERVICES.get(n.wrapping_sub(1)))
        .context("Menu choice did not name a service")?;

    response.set_status(service.status);
    response.reply(&format!(
        "{} is {} ({}): {} on disk, {} of memory.",
        service.name,
        service.status.name(),
        service.status.hex(),
        bytes_to_size(service.disk_bytes),
        format_memory(service.memory_mb),
    ));
    response.set_status(StatusColor::Normal);

    match get_confirmed_response(
        response,
        board,
        &format!("Restart {}? (yes or no)", service.name),
        "Okay, leaving it alone.",
        &config.conversation,
    ) {
        Ok(()) => {
            response.set_status(StatusColor::Started);
            response.reply(&format!(
                "Restart of {} requested. Tagging it {}.",
                service.name,
                palette::random()
            ));
            Ok(())
        }
        Err(ConversationError::Declined | ConversationError::TimedOut) => Ok(()),
        Err(e) => Err(e).context("Failed to confirm the restart"),
    }
}
