use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Unix socket a running `gyre` listens on.
pub const SOCKET_PATH: &str = "/tmp/gyre.sock";

/// One line of the control protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ControlCommand {
    Start,
    Stop,
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_command_parsing() {
        let cases = vec![
            ("start", ControlCommand::Start),
            ("STOP", ControlCommand::Stop),
            ("Toggle", ControlCommand::Toggle),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<ControlCommand>().unwrap(), expected);
        }
        assert!("restart".parse::<ControlCommand>().is_err());
    }

    #[test]
    fn test_commands_round_trip_through_display() {
        for command in ControlCommand::iter() {
            assert_eq!(command.to_string().parse::<ControlCommand>().unwrap(), command);
        }
    }
}
