use std::error::Error as _;
use std::ffi::OsString;

use clap::error::{ContextKind, ErrorKind};
use clap::{ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use log::debug;

use modcolor::modifier::Scale;
use modcolor::{Channel, ColorError, Encoding, Modifier, Operation, Result};

const MODIFIER_IDS: [&str; 6] = ["hue", "saturation", "brightness", "red", "green", "blue"];

fn parse_encoding(s: &str) -> Result<Encoding> {
    s.parse()
}

// `-x` or `--word`; negative numbers and triples like `-4,0,0` don't count.
fn looks_like_flag(s: &str) -> bool {
    s.strip_prefix("--")
        .or_else(|| s.strip_prefix('-'))
        .is_some_and(|name| name.starts_with(|c: char| c.is_ascii_alphabetic()))
}

fn parse_color(s: &str) -> Result<String> {
    if looks_like_flag(s) {
        return Err(ColorError::UnknownFlag(s.to_string()));
    }
    Ok(s.to_string())
}

/// A flag in place of an amount means the amount itself was left out.
fn parse_amount(s: &str) -> Result<Operation> {
    if looks_like_flag(s) {
        return Err(ColorError::MissingValue(s.to_string()));
    }
    s.trim().parse()
}

/// Convert a color between encodings and modify its channels.
///
/// Modifier amounts: `+N` adds, `-N` subtracts, `N` sets. A trailing `%`
/// makes the amount a percentage of the current value, or of the
/// channel's maximum when setting (`--red 10%` sets red to 25.5).
#[derive(Parser, Debug)]
#[command(name = "modify-color", author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Color value, read from standard input when omitted
    #[arg(allow_hyphen_values = true, value_parser = parse_color)]
    pub color: Option<String>,

    /// Input encoding: hex, rgb, hsb, rgb_float, hsb_float
    #[arg(long = "in", value_name = "ENCODING", default_value = "hex", value_parser = parse_encoding)]
    pub input: Encoding,

    /// Output encoding: hex, rgb, hsb, rgb_float, hsb_float
    #[arg(long = "out", value_name = "ENCODING", default_value = "hex", value_parser = parse_encoding)]
    pub output: Encoding,

    /// Modify hue (0-360)
    #[arg(short = 'h', long, value_name = "AMOUNT", allow_hyphen_values = true, action = ArgAction::Append, value_parser = parse_amount)]
    pub hue: Vec<Operation>,

    /// Modify saturation (0-100)
    #[arg(short = 's', long, value_name = "AMOUNT", allow_hyphen_values = true, action = ArgAction::Append, value_parser = parse_amount)]
    pub saturation: Vec<Operation>,

    /// Modify brightness (0-100)
    #[arg(short = 'b', long, value_name = "AMOUNT", allow_hyphen_values = true, action = ArgAction::Append, value_parser = parse_amount)]
    pub brightness: Vec<Operation>,

    /// Modify red (0-255)
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true, action = ArgAction::Append, value_parser = parse_amount)]
    pub red: Vec<Operation>,

    /// Modify green (0-255)
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true, action = ArgAction::Append, value_parser = parse_amount)]
    pub green: Vec<Operation>,

    /// Modify blue (0-255)
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true, action = ArgAction::Append, value_parser = parse_amount)]
    pub blue: Vec<Operation>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Everything one invocation needs, scanned once from the argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub color: Option<String>,
    pub input: Encoding,
    pub output: Encoding,
    pub modifiers: Vec<Modifier>,
}

impl Options {
    /// Float input encodings take modifier amounts on the normalized scale.
    pub fn scale(&self) -> Scale {
        if self.input.is_float() {
            Scale::Normalized
        } else {
            Scale::Natural
        }
    }
}

#[derive(Debug)]
pub enum Invocation {
    /// Help or version text to print before exiting successfully.
    Print(String),
    Run(Options),
}

pub fn scan<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).is_some_and(|a| a == "help") {
        return Ok(Invocation::Print(Cli::command().render_help().to_string()));
    }

    let matches = match Cli::command().try_get_matches_from(args.iter()) {
        Ok(m) => m,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                return Ok(Invocation::Print(e.render().to_string()))
            }
            // a stray flag taken as the color is reported against whatever follows it
            ErrorKind::UnknownArgument => {
                return Err(first_unknown_flag(&args)
                    .map(ColorError::UnknownFlag)
                    .unwrap_or_else(|| from_clap(e)))
            }
            _ => return Err(from_clap(e)),
        },
    };
    let modifiers = ordered_modifiers(&matches)?;
    let cli = Cli::from_arg_matches(&matches).map_err(from_clap)?;
    let options = Options {
        color: cli.color,
        input: cli.input,
        output: cli.output,
        modifiers,
    };
    debug!("{:?}", options);
    Ok(Invocation::Run(options))
}

/// Collects modifiers from every channel flag in command-line order.
fn ordered_modifiers(matches: &ArgMatches) -> Result<Vec<Modifier>> {
    let mut found: Vec<(usize, Modifier)> = Vec::new();
    for id in MODIFIER_IDS {
        let channel: Channel = id.parse()?;
        if let (Some(indices), Some(values)) =
            (matches.indices_of(id), matches.get_many::<Operation>(id))
        {
            found.extend(indices.zip(values).map(|(i, op)| (i, Modifier::new(channel, *op))));
        }
    }
    found.sort_by_key(|(i, _)| *i);
    Ok(found.into_iter().map(|(_, m)| m).collect())
}

fn is_known_flag(cmd: &Command, token: &str) -> bool {
    if let Some(long) = token.strip_prefix("--") {
        let long = long.split('=').next().unwrap_or(long);
        cmd.get_arguments().any(|a| a.get_long() == Some(long))
    } else {
        token
            .chars()
            .nth(1)
            .is_some_and(|c| cmd.get_arguments().any(|a| a.get_short() == Some(c)))
    }
}

fn first_unknown_flag(args: &[OsString]) -> Option<String> {
    let mut cmd = Cli::command();
    cmd.build();
    args.iter()
        .skip(1)
        .filter_map(|a| a.to_str())
        .find(|a| looks_like_flag(a) && !is_known_flag(&cmd, a))
        .map(str::to_string)
}

fn from_clap(e: clap::Error) -> ColorError {
    let context = |kind| e.get(kind).map(|v| v.to_string()).unwrap_or_default();
    // errors raised by our own value parsers travel as the clap error's source
    if let Some(source) = e.source().and_then(|s| s.downcast_ref::<ColorError>()) {
        return match source {
            ColorError::MissingValue(_) => ColorError::MissingValue(context(ContextKind::InvalidArg)),
            ColorError::UnknownFlag(flag) => ColorError::UnknownFlag(flag.clone()),
            ColorError::InvalidModifier(msg) => ColorError::InvalidModifier(msg.clone()),
            ColorError::UnknownEncoding(name) => ColorError::UnknownEncoding(name.clone()),
            other => ColorError::UnknownFlag(other.to_string()),
        };
    }
    match e.kind() {
        ErrorKind::UnknownArgument => ColorError::UnknownFlag(context(ContextKind::InvalidArg)),
        ErrorKind::InvalidValue => ColorError::MissingValue(context(ContextKind::InvalidArg)),
        ErrorKind::ValueValidation => {
            ColorError::UnknownEncoding(context(ContextKind::InvalidValue))
        }
        _ => {
            let rendered = e.render().to_string();
            let line = rendered.lines().next().unwrap_or_default();
            ColorError::UnknownFlag(line.trim_start_matches("error: ").to_string())
        }
    }
}
