//! Line-oriented command parsing.
use std::str::FromStr;
use std::time::Duration;

use game_core::UpgradeCategory;
use thiserror::Error;

/// Longest press-and-hold accepted from the prompt.
pub const MAX_HOLD: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Hatch,
    Hold(Duration),
    Buy(String),
    Shop(Option<UpgradeCategory>),
    Prestige,
    Status,
    News,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid duration `{0}`, expected milliseconds")]
    InvalidDuration(String),

    #[error("unknown shop `{0}`, expected habitat, transport or research")]
    UnknownCategory(String),
}

impl Command {
    /// Parses one input line; blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, InputError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();

        let command = match verb.to_ascii_lowercase().as_str() {
            "hatch" | "h" => Command::Hatch,
            "hold" => {
                let raw = argument.ok_or(InputError::MissingArgument("hold"))?;
                let millis: u64 = raw
                    .parse()
                    .map_err(|_| InputError::InvalidDuration(raw.to_string()))?;
                Command::Hold(Duration::from_millis(millis).min(MAX_HOLD))
            }
            "buy" | "b" => {
                let id = argument.ok_or(InputError::MissingArgument("buy"))?;
                Command::Buy(id.to_string())
            }
            "shop" => match argument {
                Some(raw) => Command::Shop(Some(
                    UpgradeCategory::from_str(raw)
                        .map_err(|_| InputError::UnknownCategory(raw.to_string()))?,
                )),
                None => Command::Shop(None),
            },
            "prestige" => Command::Prestige,
            "status" | "s" => Command::Status,
            "news" => Command::News,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(InputError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

pub const HELP: &str = "\
Commands:
  hatch              produce once (alias: h)
  hold <ms>          keep producing for <ms> milliseconds
  buy <id>           buy the next level of an upgrade (alias: b)
  shop [category]    list upgrades: habitat, transport, research
  prestige           advance to the next breed, resetting the ranch
  status             show money, herd and capacities (alias: s)
  news               show the latest headline
  help               show this help
  quit               leave the ranch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(Command::parse("hatch").unwrap(), Some(Command::Hatch));
        assert_eq!(Command::parse("  H ").unwrap(), Some(Command::Hatch));
        assert_eq!(
            Command::parse("buy small_barn").unwrap(),
            Some(Command::Buy("small_barn".into()))
        );
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("").unwrap(), None);
    }

    #[test]
    fn shop_category_is_case_insensitive() {
        assert_eq!(
            Command::parse("shop Transport").unwrap(),
            Some(Command::Shop(Some(UpgradeCategory::Transport)))
        );
        assert_eq!(Command::parse("shop").unwrap(), Some(Command::Shop(None)));
        assert_eq!(
            Command::parse("shop barn"),
            Err(InputError::UnknownCategory("barn".into()))
        );
    }

    #[test]
    fn hold_is_capped() {
        assert_eq!(
            Command::parse("hold 250").unwrap(),
            Some(Command::Hold(Duration::from_millis(250)))
        );
        assert_eq!(
            Command::parse("hold 999999").unwrap(),
            Some(Command::Hold(MAX_HOLD))
        );
        assert_eq!(
            Command::parse("hold soon"),
            Err(InputError::InvalidDuration("soon".into()))
        );
        assert_eq!(
            Command::parse("hold"),
            Err(InputError::MissingArgument("hold"))
        );
    }

    #[test]
    fn unknown_verb() {
        assert_eq!(
            Command::parse("moo"),
            Err(InputError::UnknownCommand("moo".into()))
        );
    }
}
