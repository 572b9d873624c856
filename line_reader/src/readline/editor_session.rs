// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use thiserror::Error;

use crate::{BACKSPACE, ByteSource, CARRIAGE_RETURN, DELETE, DecodedInput,
            END_OF_TRANSMISSION, EscapeSequenceDecoder, EscapeState, HISTORY_COUNT_MAX,
            HistoryRing, LINE_FEED, LINE_LENGTH_MAX, LineBuffer, PRINTABLE_ASCII_RANGE,
            SUBMIT_ECHO};

/// Error returned from [`EditorSession::read_line()`]. Editing itself never fails, so
/// these are always problems with the devices on either side of the editor.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ReadlineError {
    /// The byte source or the console sink failed.
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_reader::io))]
    IO(#[from] io::Error),
}

/// Events emitted by [`EditorSession::read_line()`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ReadlineEvent {
    /// The user submitted a line of text. It may be empty.
    Line(String),

    /// The user pressed `Ctrl+D` on an empty line, or the byte source closed.
    Eof,
}

/// Tracks whether the last byte applied was a `CR`, so that the `LF` of a `CR LF` pair
/// doesn't submit a second (empty) line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NewlineState {
    #[default]
    Reading,
    SawCarriageReturn,
}

/// Everything one console needs to edit lines: the line being edited, the history, the
/// prompt, and the decoder and newline state carried from byte to byte.
///
/// Keep one session per console for as long as the console is in use. State such as
/// history, a pending `CR`, or a half received escape sequence carries over from one
/// [`EditorSession::read_line()`] call to the next.
#[derive(Debug, Clone)]
pub struct EditorSession<const C: usize = LINE_LENGTH_MAX, const H: usize = HISTORY_COUNT_MAX> {
    line_buffer: LineBuffer<C>,
    history: HistoryRing<H, C>,
    prompt: String,
    decoder: EscapeSequenceDecoder,
    newline_state: NewlineState,
}

impl<const C: usize, const H: usize> Default for EditorSession<C, H> {
    fn default() -> Self { Self::new() }
}

impl<const C: usize, const H: usize> EditorSession<C, H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_buffer: LineBuffer::new(),
            history: HistoryRing::new(),
            prompt: String::new(),
            decoder: EscapeSequenceDecoder::new(),
            newline_state: NewlineState::default(),
        }
    }

    /// The line currently being edited.
    #[must_use]
    pub const fn line_buffer(&self) -> &LineBuffer<C> { &self.line_buffer }

    #[must_use]
    pub const fn history(&self) -> &HistoryRing<H, C> { &self.history }

    /// Prompt passed to the most recent [`EditorSession::read_line()`] call.
    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    #[must_use]
    pub fn escape_state(&self) -> EscapeState { self.decoder.state() }

    #[must_use]
    pub const fn newline_state(&self) -> NewlineState { self.newline_state }

    /// Write `prompt`, then read and apply bytes from `source` until the user submits a
    /// line or the input ends. Every edit is echoed to `term` and flushed before the
    /// next byte is read.
    ///
    /// When the input ends (`Ctrl+D` on an empty line, or `source` closes),
    /// [`ByteSource::detach()`] is called and [`ReadlineEvent::Eof`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::IO`] if reading from `source` or writing to `term`
    /// fails.
    pub fn read_line(
        &mut self,
        prompt: &str,
        source: &mut dyn ByteSource,
        term: &mut dyn Write,
    ) -> Result<ReadlineEvent, ReadlineError> {
        prompt.clone_into(&mut self.prompt);
        term.write_all(self.prompt.as_bytes())?;
        term.flush()?;

        loop {
            let Some(byte) = source.read_byte()? else {
                tracing::debug!(
                    message = "byte source closed",
                    discarded = %self.line_buffer.as_str()
                );
                self.line_buffer.clear();
                source.detach();
                return Ok(ReadlineEvent::Eof);
            };

            match self.apply_byte_and_render(byte, term)? {
                Some(ReadlineEvent::Eof) => {
                    tracing::debug!(message = "end of input");
                    source.detach();
                    return Ok(ReadlineEvent::Eof);
                }
                Some(event) => return Ok(event),
                None => {}
            }
        }
    }

    /// Decode one byte, apply it to the line or the history, echo the result, and flush.
    /// Returns the event if this byte ended the line.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if writing to `term` fails.
    pub fn apply_byte_and_render(
        &mut self,
        byte: u8,
        term: &mut dyn Write,
    ) -> io::Result<Option<ReadlineEvent>> {
        let decoded = self.decoder.decode(byte);
        tracing::trace!(message = "decoded input", byte, ?decoded);

        // Only a CR sets this again, every other byte clears it.
        let just_saw_cr = self.newline_state == NewlineState::SawCarriageReturn;
        self.newline_state = NewlineState::Reading;

        let maybe_event = if let Some(byte) = decoded.as_byte() {
            self.handle_byte(byte, just_saw_cr, term)?
        } else {
            self.handle_navigation(decoded, term)?;
            None
        };

        term.flush()?;
        Ok(maybe_event)
    }

    fn handle_navigation(
        &mut self,
        decoded: DecodedInput,
        term: &mut dyn Write,
    ) -> io::Result<()> {
        match decoded {
            DecodedInput::ArrowUp => {
                self.history
                    .browse_up(&mut self.line_buffer, &self.prompt, term)?;
            }
            DecodedInput::ArrowDown => {
                self.history
                    .browse_down(&mut self.line_buffer, &self.prompt, term)?;
            }
            DecodedInput::ArrowLeft => self.line_buffer.move_left(term)?,
            DecodedInput::ArrowRight => self.line_buffer.move_right(term)?,
            DecodedInput::Consumed
            | DecodedInput::PlainChar(_)
            | DecodedInput::PassThrough(_) => {}
        }
        Ok(())
    }

    fn handle_byte(
        &mut self,
        byte: u8,
        just_saw_cr: bool,
        term: &mut dyn Write,
    ) -> io::Result<Option<ReadlineEvent>> {
        match byte {
            CARRIAGE_RETURN => {
                let line = self.line_buffer.commit(&mut self.history);
                term.write_all(SUBMIT_ECHO)?;
                self.newline_state = NewlineState::SawCarriageReturn;
                Ok(Some(ReadlineEvent::Line(line)))
            }
            // Second half of CR LF.
            LINE_FEED if just_saw_cr => Ok(None),
            LINE_FEED => Ok(Some(ReadlineEvent::Line(
                self.line_buffer.commit(&mut self.history),
            ))),
            END_OF_TRANSMISSION if self.line_buffer.is_empty() => Ok(Some(ReadlineEvent::Eof)),
            BACKSPACE | DELETE => {
                self.line_buffer.delete_before_cursor(term)?;
                Ok(None)
            }
            _ if PRINTABLE_ASCII_RANGE.contains(&byte) => {
                self.line_buffer.insert(byte, term)?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}
