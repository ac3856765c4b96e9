//! Interactive command parsing.
//!
//! Each stdin line is one command; the first word selects the action.

use thiserror::Error;

use crate::engine::UserIntent;

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Forward to the engine
    Intent(UserIntent),
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
}

/// Errors for unparseable interactive commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command: {0} (type `help` for a list)")]
    Unknown(String),

    #[error("`{0}` needs a value")]
    MissingValue(&'static str),

    #[error("`set` expects two whole numbers, got: {0}")]
    InvalidNumber(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, InputError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "toggle" | "t" => SessionCommand::Intent(UserIntent::Toggle),
        "start" => SessionCommand::Intent(UserIntent::Start),
        "pause" | "p" => SessionCommand::Intent(UserIntent::Pause),
        "reset" | "r" => SessionCommand::Intent(UserIntent::Reset),
        "update" | "u" | "apply" => SessionCommand::Intent(UserIntent::ApplyConfiguredDuration),
        "min" | "m" => {
            let raw = words.next().ok_or(InputError::MissingValue("min"))?;
            SessionCommand::Intent(UserIntent::MinutesInput(raw.to_string()))
        }
        "sec" | "s" => {
            let raw = words.next().ok_or(InputError::MissingValue("sec"))?;
            SessionCommand::Intent(UserIntent::SecondsInput(raw.to_string()))
        }
        "set" => {
            let minutes = parse_number(words.next(), "set")?;
            let seconds = parse_number(words.next(), "set")?;
            SessionCommand::Intent(UserIntent::SetConfiguredDuration { minutes, seconds })
        }
        "help" | "h" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        _ => return Err(InputError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn parse_number(word: Option<&str>, command: &'static str) -> Result<u32, InputError> {
    let word = word.ok_or(InputError::MissingValue(command))?;
    word.parse()
        .map_err(|_| InputError::InvalidNumber(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(line: &str) -> UserIntent {
        match parse_command(line) {
            Ok(Some(SessionCommand::Intent(intent))) => intent,
            other => panic!("Expected intent for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_controls() {
        assert_eq!(intent("toggle"), UserIntent::Toggle);
        assert_eq!(intent("t"), UserIntent::Toggle);
        assert_eq!(intent("start"), UserIntent::Start);
        assert_eq!(intent("pause"), UserIntent::Pause);
        assert_eq!(intent("reset"), UserIntent::Reset);
        assert_eq!(intent("R"), UserIntent::Reset);
        assert_eq!(intent("update"), UserIntent::ApplyConfiguredDuration);
    }

    #[test]
    fn test_inputs_keep_raw_text() {
        assert_eq!(intent("min 5"), UserIntent::MinutesInput("5".to_string()));
        assert_eq!(intent("sec 60"), UserIntent::SecondsInput("60".to_string()));
        assert_eq!(intent("s abc"), UserIntent::SecondsInput("abc".to_string()));
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(parse_command("min"), Err(InputError::MissingValue("min")));
        assert_eq!(parse_command("sec"), Err(InputError::MissingValue("sec")));
    }

    #[test]
    fn test_set() {
        assert_eq!(
            intent("set 5 45"),
            UserIntent::SetConfiguredDuration {
                minutes: 5,
                seconds: 45
            }
        );
        assert_eq!(
            parse_command("set 5 x"),
            Err(InputError::InvalidNumber("x".to_string()))
        );
        assert_eq!(parse_command("set 5"), Err(InputError::MissingValue("set")));
    }

    #[test]
    fn test_help_and_quit() {
        assert_eq!(parse_command("help"), Ok(Some(SessionCommand::Help)));
        assert_eq!(parse_command("q"), Ok(Some(SessionCommand::Quit)));
    }

    #[test]
    fn test_unknown() {
        let err = parse_command("launch").unwrap_err();
        assert_eq!(err, InputError::Unknown("launch".to_string()));
        assert!(err.to_string().contains("help"));
    }
}
