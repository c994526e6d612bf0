// Driver - reads commands line by line and dispatches them to a Session
//
// All input parsing and display lives here; the command core assumes
// well-formed calls.

use crate::command::{Operation, Session};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const MENU: &str = "\
Enter a command:
  0 | quit         : Quit
  1                : accumulator plus one
  2                : accumulator multiply two
  3 | redo         : REDO
  4 | undo         : UNDO
  add <n> | + <n>  : accumulator plus n
  mul <n> | * <n>  : accumulator multiply n
  history          : show recorded operations
  history ron      : dump recorded operations as RON
  help             : show this menu";

/// Driver error types
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing operand for '{0}'")]
    MissingOperand(String),

    #[error("Invalid operand '{operand}': {source}")]
    InvalidOperand {
        operand: String,
        source: std::num::ParseIntError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),
}

/// One parsed line of driver input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    Apply(Operation),
    Redo,
    Undo,
    History,
    HistoryRon,
    Help,
    Quit,
}

impl FromStr for DriverCommand {
    type Err = DriverError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Err(DriverError::UnknownCommand(String::new()));
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "0" | "q" | "quit" | "exit" => DriverCommand::Quit,
            "1" => DriverCommand::Apply(Operation::Add(1)),
            "2" => DriverCommand::Apply(Operation::Multiply(2)),
            "3" | "redo" => DriverCommand::Redo,
            "4" | "undo" => DriverCommand::Undo,
            "history" | "h" => match tokens.next() {
                None => DriverCommand::History,
                Some(format) if format.eq_ignore_ascii_case("ron") => DriverCommand::HistoryRon,
                Some(_) => return Err(DriverError::UnknownCommand(line.trim().to_string())),
            },
            "help" | "?" => DriverCommand::Help,
            "add" | "+" => {
                DriverCommand::Apply(Operation::Add(parse_operand(head, tokens.next())?))
            }
            "mul" | "*" => {
                DriverCommand::Apply(Operation::Multiply(parse_operand(head, tokens.next())?))
            }
            _ => return Err(DriverError::UnknownCommand(line.trim().to_string())),
        };

        if tokens.next().is_some() {
            return Err(DriverError::UnknownCommand(line.trim().to_string()));
        }
        Ok(command)
    }
}

fn parse_operand(head: &str, token: Option<&str>) -> Result<i64, DriverError> {
    let token = token.ok_or_else(|| DriverError::MissingOperand(head.to_string()))?;
    token
        .parse::<i64>()
        .map_err(|source| DriverError::InvalidOperand {
            operand: token.to_string(),
            source,
        })
}

/// Run the read-dispatch-print loop until `quit` or end of input
///
/// Bad input, including bytes that are not UTF-8, is reported on `output`
/// and the loop continues; only IO errors end the loop early. The menu is
/// printed again after every command.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<(), DriverError> {
    writeln!(output, "{}", MENU)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<DriverCommand>() {
            Ok(DriverCommand::Quit) => break,
            Ok(command) => dispatch(session, command, &mut output)?,
            Err(e) => {
                log::debug!("Rejected input: {}", e);
                writeln!(output, "Wrong command ({}), try again", e)?;
            }
        }
        writeln!(output, "\n{}", MENU)?;
    }

    Ok(())
}

/// Execute one command against the session and report the result
pub fn dispatch<W: Write>(
    session: &mut Session,
    command: DriverCommand,
    output: &mut W,
) -> Result<(), DriverError> {
    match command {
        DriverCommand::Apply(operation) => match session.apply(operation) {
            Ok(value) => {
                writeln!(output, "{}: accumulator = {}", operation.description(), value)?
            }
            Err(e) => writeln!(output, "{}", e)?,
        },
        DriverCommand::Redo => match session.redo() {
            Ok(Some(value)) => writeln!(output, "Redo executed: accumulator = {}", value)?,
            Ok(None) => writeln!(output, "Can not execute redo, no command has been executed")?,
            Err(e) => writeln!(output, "{}", e)?,
        },
        DriverCommand::Undo => match session.undo() {
            Some(value) => writeln!(output, "Undo executed: accumulator = {}", value)?,
            None => writeln!(output, "Can not execute undo, no command has been executed")?,
        },
        DriverCommand::History => {
            let history = session.history();
            writeln!(
                output,
                "History ({}/{} entries), accumulator = {}",
                history.len(),
                history.capacity(),
                session.value()
            )?;
            for (index, entry) in history.entries().enumerate() {
                writeln!(
                    output,
                    "  {:>3}. {:<16} -> {:<12} [{}]",
                    index + 1,
                    entry.operation.description(),
                    entry.snapshot.value(),
                    entry.recorded_at.format("%H:%M:%S%.3f")
                )?;
            }
        }
        DriverCommand::HistoryRon => writeln!(output, "{}", session.history().to_ron()?)?,
        DriverCommand::Help => writeln!(output, "{}", MENU)?,
        DriverCommand::Quit => {}
    }
    Ok(())
}
