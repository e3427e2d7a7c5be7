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

const SIZE_UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
const MEMORY_UNITS: [&str; 3] = ["MB", "GB", "TB"];

/// Significant digits used by [`bytes_to_size`].
pub const DEFAULT_SIZE_PRECISION: usize = 3;

/// Fractional digits used by [`format_memory`].
pub const DEFAULT_MEMORY_PRECISION: usize = 1;

/// Formats a byte count into a human-readable string with a unit suffix.
///
/// The unit is the largest power of 1024 not exceeding the value, and the
/// number is rendered to [`DEFAULT_SIZE_PRECISION`] significant digits.
///
/// # Examples
///
/// ```
/// use botkit::util::format::bytes_to_size;
///
/// assert_eq!(bytes_to_size(0), "0B");
/// assert_eq!(bytes_to_size(1536), "1.50K");
/// ```
pub fn bytes_to_size(bytes: u64) -> String {
    bytes_to_size_with_precision(bytes, DEFAULT_SIZE_PRECISION)
}

/// Formats a byte count to the given number of significant digits.
///
/// Zero is always `"0B"`. Values of a petabyte and above stay in terabytes.
///
/// # Arguments
///
/// * `bytes` - The byte count.
/// * `precision` - Significant digits for the numeric part, at least one.
pub fn bytes_to_size_with_precision(bytes: u64, precision: usize) -> String {
    if bytes == 0 {
        return String::from("0B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{}{}", to_precision(value, precision), SIZE_UNITS[unit])
}

/// Formats a megabyte quantity using [`DEFAULT_MEMORY_PRECISION`] decimal
/// places.
///
/// # Examples
///
/// ```
/// use botkit::util::format::format_memory;
///
/// assert_eq!(format_memory(0.0), "0MB");
/// assert_eq!(format_memory(2048.0), "2.0GB");
/// ```
pub fn format_memory(megabytes: f64) -> String {
    format_memory_with_precision(megabytes, DEFAULT_MEMORY_PRECISION)
}

/// Formats a megabyte quantity with the given number of decimal places.
///
/// The unit is the largest power of 1000 not exceeding the value, from `MB`
/// up to `TB`. Zero is always `"0MB"`, and fractions of a megabyte stay in
/// megabytes. A precision of zero falls back to one decimal place.
pub fn format_memory_with_precision(megabytes: f64, precision: usize) -> String {
    if megabytes == 0.0 {
        return String::from("0MB");
    }

    let mut value = megabytes;
    let mut unit = 0;
    while value >= 1000.0 && unit < MEMORY_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let precision = if precision == 0 { DEFAULT_MEMORY_PRECISION } else { precision };
    format!(
        "{:.*}{}",
        precision,
        round_half_up(value, precision as i32),
        MEMORY_UNITS[unit]
    )
}

// Renders a value to a number of significant digits, switching to
// exponential notation (`1.02e+3`) once the exponent reaches the precision.
fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1) as i32;

    // Exponent of the unrounded value, read from its shortest exact form.
    let exact_exponent = format!("{:e}", value)
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse::<i32>().ok())
        .unwrap_or(0);

    let rounded = round_half_up(value, precision - 1 - exact_exponent);
    // Rounding can carry into the next power of ten, so 999.6 counts as 1.00e3.
    let exponent = if rounded >= 10f64.powi(exact_exponent + 1) {
        exact_exponent + 1
    } else {
        exact_exponent
    };

    if exponent < -6 || exponent >= precision {
        let mantissa = rounded / 10f64.powi(exponent);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{:.*}e{}{}", (precision - 1) as usize, mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, rounded)
    }
}

// Rounds to `decimals` places with ties going up; a negative count rounds to
// tens, hundreds and so on. Formatting alone would round ties to even.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    if decimals >= 0 {
        let scale = 10f64.powi(decimals);
        (value * scale).round() / scale
    } else {
        let scale = 10f64.powi(-decimals);
        (value / scale).round() * scale
    }
}
