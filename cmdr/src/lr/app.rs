// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use miette::IntoDiagnostic as _;
use r3bl_line_reader::{ByteSource, CommonResult, EditorSession, ReadlineEvent,
                       StdinByteSource, ok};

use crate::{Builtin, CLIArg, CRLF, ReplAction};

/// Read lines from `source` and run them as builtins, until the user exits or the input
/// ends.
///
/// # Errors
///
/// Returns an error if `source` can't be read, or `term` can't be written to.
pub fn run_repl<const C: usize, const H: usize>(
    session: &mut EditorSession<C, H>,
    prompt: &str,
    source: &mut dyn ByteSource,
    term: &mut dyn Write,
) -> CommonResult<()> {
    loop {
        match session.read_line(prompt, source, term)? {
            ReadlineEvent::Line(line) => {
                // The editor echoed `\n` on submit, go back to column 0.
                term.write_all(b"\r").into_diagnostic()?;
                let action = Builtin::parse(&line)
                    .run(session.history(), term)
                    .into_diagnostic()?;
                if action == ReplAction::Exit {
                    tracing::debug!(message = "exit requested", line = %line);
                    break;
                }
            }
            ReadlineEvent::Eof => {
                term.write_all(CRLF.as_bytes()).into_diagnostic()?;
                break;
            }
        }
    }
    term.flush().into_diagnostic()?;
    ok!()
}

/// Run the interactive prompt on the process' terminal.
///
/// # Errors
///
/// Returns an error if logging can't be set up, the terminal can't be put in raw mode,
/// or terminal I/O fails.
pub fn run_app(cli_arg: &CLIArg) -> CommonResult<()> {
    if let Some(tracing_config) = cli_arg.tracing_config() {
        tracing_config.install_global()?;
    }
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start lr...", cli_arg = ?cli_arg);

    let mut session: EditorSession = EditorSession::new();
    let mut source = StdinByteSource::try_new_raw()?;
    let mut stdout = io::stdout().lock();

    let result = run_repl(&mut session, &cli_arg.prompt, &mut source, &mut stdout);

    // Restore cooked mode on every exit path, not just Ctrl+D.
    source.detach();
    tracing::debug!(
        message = "Stop lr...",
        commit_count = session.history().commit_count()
    );

    result
}
