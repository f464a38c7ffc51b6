//! Line input to command mapping.
//!
//! One line is one command. Card and target numbers are 1-based on screen and
//! converted to the 0-based indices the combat core expects.

use std::str::FromStr;

use combat_core::CombatCommand;

/// High-level outcome of parsing one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserInput {
    /// Send a command to the combat controller.
    Dispatch(CombatCommand),
    /// Print a read-only view.
    Show(View),
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Hand,
    Enemy,
    Deck,
    Targets,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help')")]
    UnknownVerb(String),

    #[error("'{verb}' needs a number")]
    MissingNumber { verb: &'static str },

    #[error("'{0}' is not a number from 1 upwards")]
    BadNumber(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
enum Verb {
    #[strum(serialize = "play", serialize = "p")]
    Play,
    #[strum(serialize = "target", serialize = "t")]
    Target,
    #[strum(serialize = "cancel", serialize = "c")]
    Cancel,
    #[strum(serialize = "end", serialize = "e")]
    End,
    Start,
    #[strum(serialize = "pause", serialize = "overlay")]
    Pause,
    Resume,
    #[strum(serialize = "hand", serialize = "h")]
    Hand,
    #[strum(serialize = "enemy", serialize = "status", serialize = "s")]
    Enemy,
    #[strum(serialize = "deck", serialize = "d")]
    Deck,
    Targets,
    #[strum(serialize = "help", serialize = "?")]
    Help,
    #[strum(serialize = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<UserInput>, InputError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let verb = Verb::from_str(word).map_err(|_| InputError::UnknownVerb(word.to_owned()))?;

    let input = match verb {
        Verb::Play => UserInput::Dispatch(CombatCommand::PlayCard(number(verb, words.next())?)),
        Verb::Target => {
            UserInput::Dispatch(CombatCommand::ChooseTarget(number(verb, words.next())?))
        }
        Verb::Cancel => UserInput::Dispatch(CombatCommand::CancelTargetSelection),
        Verb::End => UserInput::Dispatch(CombatCommand::EndPlayerTurn),
        Verb::Start => UserInput::Dispatch(CombatCommand::StartCombat),
        Verb::Pause => UserInput::Dispatch(CombatCommand::OpenOverlay),
        Verb::Resume => UserInput::Dispatch(CombatCommand::CloseOverlay),
        Verb::Hand => UserInput::Show(View::Hand),
        Verb::Enemy => UserInput::Show(View::Enemy),
        Verb::Deck => UserInput::Show(View::Deck),
        Verb::Targets => UserInput::Show(View::Targets),
        Verb::Help => UserInput::Help,
        Verb::Quit => UserInput::Quit,
    };
    Ok(Some(input))
}

/// Reads a 1-based number and returns it 0-based.
fn number(verb: Verb, word: Option<&str>) -> Result<usize, InputError> {
    let word = word.ok_or(InputError::MissingNumber { verb: verb.into() })?;
    word.parse::<usize>()
        .ok()
        .and_then(|value| value.checked_sub(1))
        .ok_or_else(|| InputError::BadNumber(word.to_owned()))
}

pub const HELP: &str = "\
commands:
  play N    (p)  play card N from your hand
  target N  (t)  aim the pending attack at target N
  cancel    (c)  drop the pending attack
  end       (e)  end your turn
  hand      (h)  show your hand
  enemy     (s)  show enemy parts and intents
  deck      (d)  show card counts across the deck
  targets        show attackable parts
  pause / resume open or close the deck overlay
  start          start a new combat once this one is over
  quit      (q)  leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(
            parse_line("play 1").unwrap(),
            Some(UserInput::Dispatch(CombatCommand::PlayCard(0)))
        );
        assert_eq!(
            parse_line("  T 3 ").unwrap(),
            Some(UserInput::Dispatch(CombatCommand::ChooseTarget(2)))
        );
    }

    #[test]
    fn aliases_and_views() {
        assert_eq!(
            parse_line("e").unwrap(),
            Some(UserInput::Dispatch(CombatCommand::EndPlayerTurn))
        );
        assert_eq!(parse_line("status").unwrap(), Some(UserInput::Show(View::Enemy)));
        assert_eq!(parse_line("q").unwrap(), Some(UserInput::Quit));
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse_line("play").unwrap_err(),
            InputError::MissingNumber { verb: "play" }
        );
        assert_eq!(
            parse_line("play 0").unwrap_err(),
            InputError::BadNumber("0".into())
        );
        assert!(matches!(
            parse_line("fly").unwrap_err(),
            InputError::UnknownVerb(_)
        ));
    }
}
