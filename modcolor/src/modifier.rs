use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Brightness,
    Red,
    Green,
    Blue,
}

/// Scale modifier amounts are expressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// 0-255 for RGB, 0-360 for hue, 0-100 for saturation and brightness.
    #[default]
    Natural,
    /// 0-1 for every channel.
    Normalized,
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Brightness => "brightness",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    pub fn natural_max(&self) -> f64 {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => 255.0,
            Channel::Hue => 360.0,
            Channel::Saturation | Channel::Brightness => 100.0,
        }
    }

    pub fn max(&self, scale: Scale) -> f64 {
        match scale {
            Scale::Natural => self.natural_max(),
            Scale::Normalized => 1.0,
        }
    }

    pub fn is_hsb(&self) -> bool {
        matches!(self, Channel::Hue | Channel::Saturation | Channel::Brightness)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s
            .strip_prefix("--")
            .or_else(|| s.strip_prefix('-'))
            .unwrap_or(s);
        match name {
            "h" | "hue" => Ok(Channel::Hue),
            "s" | "saturation" => Ok(Channel::Saturation),
            "b" | "brightness" => Ok(Channel::Brightness),
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            _ => Err(ColorError::InvalidModifier(format!("unknown channel '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Add(f64),
    AddPercent(f64),
    Sub(f64),
    SubPercent(f64),
    Set(f64),
    SetPercent(f64),
}

impl Operation {
    /// New value of a channel currently at `old`, both on a scale whose top is `max`.
    pub fn apply(&self, old: f64, max: f64) -> f64 {
        match *self {
            Operation::Add(d) => old + d,
            Operation::Sub(d) => old - d,
            Operation::AddPercent(p) => old * (1.0 + p / 100.0),
            Operation::SubPercent(p) => old * (1.0 - p / 100.0),
            Operation::Set(v) => v,
            Operation::SetPercent(p) => max * (p / 100.0),
        }
    }
}

/// Parses an amount token of the form `[+-]?[0-9.]+%?`.
///
/// A leading `+` adds, a leading `-` subtracts and no sign sets the
/// channel. A trailing `%` turns the amount into a percentage.
impl FromStr for Operation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidModifier(format!("bad amount '{}'", s));

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (Some('+'), &s[1..]),
            Some(b'-') => (Some('-'), &s[1..]),
            _ => (None, s),
        };
        let (percent, digits) = match rest.strip_suffix('%') {
            Some(d) => (true, d),
            None => (false, rest),
        };
        if digits.is_empty() || !digits.bytes().all(|c| matches!(c, b'.' | b'0'..=b'9')) {
            return Err(invalid());
        }
        let amount = digits
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(invalid)?;

        let op = match (sign, percent) {
            (Some('+'), false) => Operation::Add(amount),
            (Some('+'), true) => Operation::AddPercent(amount),
            (Some(_), false) => Operation::Sub(amount),
            (Some(_), true) => Operation::SubPercent(amount),
            (None, false) => Operation::Set(amount),
            (None, true) => Operation::SetPercent(amount),
        };
        Ok(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifier {
    pub channel: Channel,
    pub operation: Operation,
}

impl Modifier {
    pub fn new(channel: Channel, operation: Operation) -> Self {
        Modifier { channel, operation }
    }
}
