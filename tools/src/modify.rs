use std::io::BufRead;

use log::info;

use modcolor::{codec, ColorError, Result};

use crate::cli::Options;

/// Runs one conversion and returns the line to print.
///
/// The color comes from the options, or from the first line of `stdin`
/// when no positional value was given.
pub fn command<R: BufRead>(options: Options, stdin: R) -> Result<String> {
    let text = match options.color.clone() {
        Some(c) => c,
        None => read_color(stdin)?,
    };
    let scale = options.scale();
    let mut color = codec::parse(&text, options.input)?;
    for modifier in options.modifiers.iter() {
        color.modify(modifier, scale);
    }
    info!(
        "{} {} -> {} with {} modifier(s)",
        options.input,
        text.trim(),
        options.output,
        options.modifiers.len()
    );
    Ok(codec::format(&color, options.output))
}

fn read_color<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| ColorError::Io {
        source: e,
        msg: "Failed read standard input".to_string(),
    })?;
    let line = line.trim();
    if line.is_empty() {
        return Err(ColorError::NoInput);
    }
    Ok(line.to_string())
}
