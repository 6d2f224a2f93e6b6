//! Translation between textual encodings and [`Color`].

use log::debug;

use crate::color::Color;
use crate::encoding::Encoding;
use crate::error::{ColorError, Result};

pub fn parse(text: &str, encoding: Encoding) -> Result<Color> {
    let text = text.trim();
    let color = match encoding {
        Encoding::Hex => parse_hex(text)?,
        Encoding::Rgb => {
            let [r, g, b] = parse_triple(text, encoding)?;
            Color::from_rgb(r / 255.0, g / 255.0, b / 255.0)
        }
        Encoding::Hsb => {
            let [h, s, v] = parse_triple(text, encoding)?;
            Color::from_hsb(h / 360.0, s / 100.0, v / 100.0)
        }
        Encoding::RgbFloat => {
            let [r, g, b] = parse_triple(text, encoding)?;
            Color::from_rgb(r, g, b)
        }
        Encoding::HsbFloat => {
            let [h, s, v] = parse_triple(text, encoding)?;
            Color::from_hsb(h, s, v)
        }
    };
    debug!("parsed {} '{}' as {:?}", encoding, text, color);
    Ok(color)
}

pub fn format(color: &Color, encoding: Encoding) -> String {
    match encoding {
        Encoding::Hex => {
            let (r, g, b) = color.rgb();
            format!("#{:02X}{:02X}{:02X}", to_byte(r), to_byte(g), to_byte(b))
        }
        Encoding::Rgb => {
            let (r, g, b) = color.rgb();
            format!("{},{},{}", to_byte(r), to_byte(g), to_byte(b))
        }
        Encoding::Hsb => {
            let (h, s, v) = color.hsb();
            let degrees = (h * 360.0).round() as u32 % 360;
            format!("{},{},{}", degrees, percent(s), percent(v))
        }
        Encoding::RgbFloat => {
            let (r, g, b) = color.rgb();
            format!("{:.2},{:.2},{:.2}", round2(r), round2(g), round2(b))
        }
        Encoding::HsbFloat => {
            let (h, s, v) = color.hsb();
            let h = round2(h);
            let h = if h >= 1.0 { 0.0 } else { h };
            format!("{:.2},{:.2},{:.2}", h, round2(s), round2(v))
        }
    }
}

/// Accepts `RRGGBB` with an optional leading `#`, in either case.
fn parse_hex(text: &str) -> Result<Color> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::parse(Encoding::Hex, text));
    }
    let channel = |i: usize| -> Result<f64> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f64 / 255.0)
            .map_err(|_| ColorError::parse(Encoding::Hex, text))
    };
    Ok(Color::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_triple(text: &str, encoding: Encoding) -> Result<[f64; 3]> {
    let tokens: Vec<&str> = text.split(',').map(|t| t.trim()).collect();
    if tokens.len() != 3 {
        return Err(ColorError::parse(encoding, text));
    }
    let mut values = [0.0; 3];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ColorError::parse(encoding, text))?;
    }
    Ok(values)
}

// f64::round rounds half away from zero.
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn percent(v: f64) -> u32 {
    (v * 100.0).round().clamp(0.0, 100.0) as u32
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
