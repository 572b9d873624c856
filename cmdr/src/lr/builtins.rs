// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use r3bl_line_reader::HistoryRing;

/// Raw mode turns off output post processing, so `\n` alone doesn't return the
/// carriage.
pub const CRLF: &str = "\r\n";

/// What a submitted line asks the prompt to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin<'a> {
    /// Nothing but whitespace.
    Blank,
    History,
    Exit,
    Echo(&'a str),
}

/// Whether the prompt should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplAction {
    Continue,
    Exit,
}

impl<'a> Builtin<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Builtin::Blank,
            "history" => Builtin::History,
            "exit" | "quit" => Builtin::Exit,
            _ => Builtin::Echo(line),
        }
    }

    /// Run the builtin, writing its output to `term`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if writing to `term` fails.
    pub fn run<const H: usize, const C: usize>(
        self,
        history: &HistoryRing<H, C>,
        term: &mut dyn Write,
    ) -> io::Result<ReplAction> {
        match self {
            Builtin::Blank => {}
            Builtin::History => {
                for (logical_index, line) in history.iter() {
                    write!(term, "{logical_index:>4}  {}{CRLF}", line.as_str())?;
                }
            }
            Builtin::Exit => return Ok(ReplAction::Exit),
            Builtin::Echo(line) => write!(term, "you typed: {line}{CRLF}")?,
        }
        term.flush()?;
        Ok(ReplAction::Continue)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use r3bl_line_reader::StdoutMock;
    use test_case::test_case;

    use super::*;

    #[test_case("", Builtin::Blank)]
    #[test_case("   ", Builtin::Blank)]
    #[test_case("history", Builtin::History)]
    #[test_case(" history ", Builtin::History)]
    #[test_case("exit", Builtin::Exit)]
    #[test_case("quit", Builtin::Exit)]
    #[test_case("exit now", Builtin::Echo("exit now"))]
    #[test_case("ls -la", Builtin::Echo("ls -la"))]
    fn test_parse(line: &str, expected: Builtin<'_>) {
        assert_eq!(Builtin::parse(line), expected);
    }

    #[test]
    fn test_history_lists_retained_entries() {
        let mut history = HistoryRing::<2, 16>::new();
        for line in ["one", "two", "three"] {
            history.push(line.as_bytes());
        }
        let mut stdout_mock = StdoutMock::default();

        let action = Builtin::History.run(&history, &mut stdout_mock).unwrap();

        assert_eq!(action, ReplAction::Continue);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "   1  two\r\n   2  three\r\n"
        );
    }

    #[test]
    fn test_echo_and_exit() {
        let history = HistoryRing::<2, 16>::new();
        let mut stdout_mock = StdoutMock::default();

        assert_eq!(
            Builtin::Echo("hello").run(&history, &mut stdout_mock).unwrap(),
            ReplAction::Continue
        );
        assert_eq!(
            Builtin::Exit.run(&history, &mut stdout_mock).unwrap(),
            ReplAction::Exit
        );
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "you typed: hello\r\n");
    }
}
