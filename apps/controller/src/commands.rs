//! Operator commands read from the interactive session.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCommand {
    SetAzimuth(i64),
    SetElevation(i64),
    Send,
    Refresh,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs a value in degrees")]
    MissingValue(&'static str),
    #[error("'{value}' is not a whole number of degrees")]
    InvalidValue { value: String },
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
    #[error("too many arguments in '{0}'")]
    TooManyArguments(String),
}

pub const HELP: &str = "\
commands:
  az <deg>   set pending azimuth
  el <deg>   set pending elevation
  send       send pending position and refresh
  refresh    fetch current position
  show       print current and pending position
  help       show this help
  quit       leave the session";

pub fn parse_command(line: &str) -> Result<ControllerCommand, ParseCommandError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(ParseCommandError::Empty);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(ParseCommandError::TooManyArguments(line.trim().to_string()));
    }

    match head.to_ascii_lowercase().as_str() {
        "az" | "azimuth" => degrees("az", arg).map(ControllerCommand::SetAzimuth),
        "el" | "elevation" => degrees("el", arg).map(ControllerCommand::SetElevation),
        "send" => bare("send", arg, ControllerCommand::Send),
        "refresh" => bare("refresh", arg, ControllerCommand::Refresh),
        "show" => bare("show", arg, ControllerCommand::Show),
        "help" | "?" => bare("help", arg, ControllerCommand::Help),
        "quit" | "exit" | "q" => bare("quit", arg, ControllerCommand::Quit),
        other => Err(ParseCommandError::Unknown(other.to_string())),
    }
}

fn degrees(name: &'static str, arg: Option<&str>) -> Result<i64, ParseCommandError> {
    let raw = arg.ok_or(ParseCommandError::MissingValue(name))?;
    raw.trim_end_matches('°')
        .parse::<i64>()
        .map_err(|_| ParseCommandError::InvalidValue {
            value: raw.to_string(),
        })
}

fn bare(
    name: &'static str,
    arg: Option<&str>,
    command: ControllerCommand,
) -> Result<ControllerCommand, ParseCommandError> {
    match arg {
        None => Ok(command),
        Some(_) => Err(ParseCommandError::UnexpectedArgument(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pending_edits() {
        assert_eq!(parse_command("az 270"), Ok(ControllerCommand::SetAzimuth(270)));
        assert_eq!(
            parse_command("  Elevation 45° "),
            Ok(ControllerCommand::SetElevation(45))
        );
        assert_eq!(parse_command("el -10"), Ok(ControllerCommand::SetElevation(-10)));
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("send"), Ok(ControllerCommand::Send));
        assert_eq!(parse_command("REFRESH"), Ok(ControllerCommand::Refresh));
        assert_eq!(parse_command("show"), Ok(ControllerCommand::Show));
        assert_eq!(parse_command("?"), Ok(ControllerCommand::Help));
        assert_eq!(parse_command("q"), Ok(ControllerCommand::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse_command("   "), Err(ParseCommandError::Empty));
        assert_eq!(
            parse_command("az"),
            Err(ParseCommandError::MissingValue("az"))
        );
        assert_eq!(
            parse_command("az north"),
            Err(ParseCommandError::InvalidValue {
                value: "north".to_string()
            })
        );
        assert_eq!(
            parse_command("send now"),
            Err(ParseCommandError::UnexpectedArgument("send"))
        );
        assert_eq!(
            parse_command("az 1 2"),
            Err(ParseCommandError::TooManyArguments("az 1 2".to_string()))
        );
        assert_eq!(
            parse_command("tilt 4"),
            Err(ParseCommandError::Unknown("tilt".to_string()))
        );
    }
}
