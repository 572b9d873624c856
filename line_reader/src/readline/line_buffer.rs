// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          fmt::{Debug, Formatter},
          io::{self, Write}};

use crate::{BACKSPACE, EchoBuffer, HistoryRing, LINE_LENGTH_MAX, PRINTABLE_ASCII_RANGE,
            SPACE};

/// A single line being edited, stored in a fixed array of `C` bytes.
///
/// - `length` is the number of valid bytes in `content`.
/// - `cursor` is where the next insert or delete happens, and is always in
///   `0..=length`.
/// - Bytes past `length` are stale and never read.
///
/// Every mutating method takes the console sink and echoes the change before it
/// returns, so what is on the screen always matches `as_bytes()` with the terminal
/// cursor sitting at `cursor()`. Calls at a boundary (full buffer, cursor at either end)
/// are silent no-ops that echo nothing.
#[derive(Copy, Clone)]
pub struct LineBuffer<const C: usize = LINE_LENGTH_MAX> {
    content: [u8; C],
    length: usize,
    cursor: usize,
}

impl<const C: usize> Default for LineBuffer<C> {
    fn default() -> Self { Self::new() }
}

impl<const C: usize> Debug for LineBuffer<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("content", &self.as_str())
            .field("length", &self.length)
            .field("cursor", &self.cursor)
            .field("capacity", &C)
            .finish()
    }
}

/// Only the valid bytes and the cursor take part in equality, stale bytes don't.
impl<const C: usize> PartialEq for LineBuffer<C> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes() && self.cursor == other.cursor
    }
}

impl<const C: usize> Eq for LineBuffer<C> {}

impl<const C: usize> LineBuffer<C> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: [0; C],
            length: 0,
            cursor: 0,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.content[..self.length] }

    /// Content only ever holds printable ASCII, so this borrows. Anything else would be
    /// shown as `U+FFFD` rather than dropped.
    #[must_use]
    pub fn as_str(&self) -> Cow<'_, str> { String::from_utf8_lossy(self.as_bytes()) }

    #[must_use]
    pub const fn len(&self) -> usize { self.length }

    #[must_use]
    pub const fn is_empty(&self) -> bool { self.length == 0 }

    #[must_use]
    pub const fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub const fn capacity(&self) -> usize { C }

    #[must_use]
    pub const fn is_full(&self) -> bool { self.length == C }

    /// Overwrite the content with the printable bytes of `bytes` (truncated to `C`) and
    /// park the cursor at the end. Nothing is echoed, the caller is responsible for the
    /// redraw.
    pub fn replace_with(&mut self, bytes: &[u8]) {
        let printable = bytes
            .iter()
            .filter(|byte| PRINTABLE_ASCII_RANGE.contains(byte))
            .take(C);
        let mut count = 0;
        for (slot, byte) in self.content.iter_mut().zip(printable) {
            *slot = *byte;
            count += 1;
        }
        self.length = count;
        self.cursor = count;
    }

    /// Reset to an empty line, without echo.
    pub fn clear(&mut self) {
        self.length = 0;
        self.cursor = 0;
    }

    /// Insert `ch` at the cursor, shifting the tail right. Bytes outside printable ASCII
    /// are rejected, as is any insert into a full buffer.
    ///
    /// Echo: the inserted byte and everything after it, then one backspace per tail
    /// byte so the terminal cursor ends up right after `ch`.
    ///
    /// ```text
    /// before: a b│c d        echo: X c d ⌫ ⌫
    /// after:  a b X│c d
    /// ```
    pub fn insert(&mut self, ch: u8, term: &mut dyn Write) -> io::Result<()> {
        if !PRINTABLE_ASCII_RANGE.contains(&ch) {
            tracing::debug!(message = "non printable byte, insert rejected", ch);
            return Ok(());
        }
        if self.is_full() {
            tracing::debug!(message = "line buffer full, insert rejected", ch, capacity = C);
            return Ok(());
        }

        let insert_at = self.cursor;
        self.content.copy_within(insert_at..self.length, insert_at + 1);
        self.content[insert_at] = ch;
        self.length += 1;
        self.cursor += 1;

        let mut echo = EchoBuffer::new();
        echo.extend_from_slice(&self.content[insert_at..self.length]);
        echo.extend(std::iter::repeat_n(BACKSPACE, self.length - self.cursor));
        term.write_all(&echo)
    }

    /// Backspace: remove the byte before the cursor, shifting the tail left.
    ///
    /// Echo: step back one column, reprint the tail, blank out the now stale last
    /// column, then walk the terminal cursor back to the edit point. When the cursor was
    /// at the end of the line the tail is empty, and this reduces to `⌫ ␠ ⌫`.
    ///
    /// ```text
    /// before: a b│c d        echo: ⌫ c d ␠ ⌫ ⌫ ⌫
    /// after:  a│c d
    /// ```
    pub fn delete_before_cursor(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }

        self.content.copy_within(self.cursor..self.length, self.cursor - 1);
        self.length -= 1;
        self.cursor -= 1;

        let mut echo = EchoBuffer::new();
        echo.push(BACKSPACE);
        echo.extend_from_slice(&self.content[self.cursor..self.length]);
        echo.push(SPACE);
        echo.push(BACKSPACE);
        echo.extend(std::iter::repeat_n(BACKSPACE, self.length - self.cursor));
        term.write_all(&echo)
    }

    pub fn move_left(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        term.write_all(&[BACKSPACE])
    }

    /// Reprints the byte the cursor steps over, since there is no portable single byte
    /// "cursor forward" control.
    pub fn move_right(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == self.length {
            return Ok(());
        }
        let stepped_over = self.content[self.cursor];
        self.cursor += 1;
        term.write_all(&[stepped_over])
    }

    /// Finish the line: push it into `history` (empty lines are not stored), reset this
    /// buffer for the next line, and return what was typed.
    pub fn commit<const H: usize>(&mut self, history: &mut HistoryRing<H, C>) -> String {
        let line = self.as_str().into_owned();
        history.push(self.as_bytes());
        tracing::debug!(
            message = "line committed",
            line = %line,
            commit_count = history.commit_count()
        );
        self.clear();
        line
    }
}
