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

//! Status colours used by the bot.
//!
//! This module defines the palette used to decorate status messages, where the
//! chat platform supports coloured attachments, and provides utilities for
//! converting colours to the CSS-style hexadecimal strings the platforms
//! expect.

use std::str::FromStr;

use crossterm::style::Color;

const NORMAL: (u8, u8, u8) = (0x55, 0x55, 0x55);
const POSITIVE: (u8, u8, u8) = (0x00, 0x85, 0x71);
const NEGATIVE: (u8, u8, u8) = (0xef, 0x4e, 0x38);
const INTERMEDIATE: (u8, u8, u8) = (0xda, 0xa0, 0x38);

/// A semantic status that maps onto a palette colour.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatusColor {
    Normal,
    Positive,
    Negative,
    Running,
    Started,
    Stopped,
    Available,
    Intermediate,
    Training,
}

impl StatusColor {
    /// Every status tag, in declaration order.
    pub const ALL: [StatusColor; 9] = [
        StatusColor::Normal,
        StatusColor::Positive,
        StatusColor::Negative,
        StatusColor::Running,
        StatusColor::Started,
        StatusColor::Stopped,
        StatusColor::Available,
        StatusColor::Intermediate,
        StatusColor::Training,
    ];

    // Aliases resolve here: running, started and available share the
    // positive colour, stopped shares the negative one.
    const fn rgb(self) -> (u8, u8, u8) {
        match self {
            StatusColor::Normal => NORMAL,
            StatusColor::Positive
            | StatusColor::Running
            | StatusColor::Started
            | StatusColor::Available => POSITIVE,
            StatusColor::Negative | StatusColor::Stopped => NEGATIVE,
            StatusColor::Intermediate | StatusColor::Training => INTERMEDIATE,
        }
    }

    /// The colour for this status, for styling terminal output.
    pub const fn colour(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb { r, g, b }
    }

    /// The colour for this status as a `#rrggbb` string.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        to_hex(r, g, b)
    }

    /// The lowercase tag name, as used in configuration and chat commands.
    pub const fn name(self) -> &'static str {
        match self {
            StatusColor::Normal => "normal",
            StatusColor::Positive => "positive",
            StatusColor::Negative => "negative",
            StatusColor::Running => "running",
            StatusColor::Started => "started",
            StatusColor::Stopped => "stopped",
            StatusColor::Available => "available",
            StatusColor::Intermediate => "intermediate",
            StatusColor::Training => "training",
        }
    }

    /// Looks up a status by its tag name.
    ///
    /// Returns `None` for a name outside the palette; an unknown tag has no
    /// colour rather than being an error.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.name() == name)
    }
}

impl FromStr for StatusColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(())
    }
}

/// Looks up the hex colour for a tag name, `None` if the tag is unknown.
pub fn lookup(name: &str) -> Option<String> {
    StatusColor::from_name(name).map(StatusColor::hex)
}

/// Generates a fresh random colour as a `#rrggbb` string.
///
/// Nothing is cached: every call makes three independent uniform draws, one
/// per channel, over the full byte range.
pub fn random() -> String {
    let [r, g, b]: [u8; 3] = rand::random();
    to_hex(r, g, b)
}

/// Converts RGB channels into a CSS-style lowercase hexadecimal string.
///
/// Each channel is rendered as exactly two digits, left-padded with `0`.
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
