use crate::game::error::Error;

/// one line of engine input, tokenized on whitespace into a structured
/// event. blank lines and unknown command words decode to Noop so that a
/// newer engine never kills the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Settings { key: String, value: String },
    Round(i64),
    Field(String),
    Action { millis: u64 },
    Noop,
}

impl std::str::FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            [] => Ok(Command::Noop),
            ["settings", key, value] => Ok(Command::Settings {
                key: key.to_string(),
                value: value.to_string(),
            }),
            ["update", _scope, "round", n] => n
                .parse::<i64>()
                .map(Command::Round)
                .map_err(|_| Error::MalformedField(format!("bad round number: {:?}", n))),
            ["update", _scope, "field", field] => Ok(Command::Field(field.to_string())),
            ["action", "move", millis] => millis
                .parse::<u64>()
                .map(|millis| Command::Action { millis })
                .map_err(|_| Error::MalformedField(format!("bad time budget: {:?}", millis))),
            ["settings", ..] | ["update", ..] | ["action", ..] => {
                Err(Error::MalformedField(format!("bad argument shape: {:?}", line)))
            }
            _ => Ok(Command::Noop),
        }
    }
}
