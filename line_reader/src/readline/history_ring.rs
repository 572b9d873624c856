// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use crate::{CARRIAGE_RETURN, EL_ERASE_TO_END_OF_LINE, EchoBuffer, HISTORY_COUNT_MAX,
            LINE_LENGTH_MAX, LineBuffer, PRINTABLE_ASCII_RANGE};

/// Bounded history of committed lines.
///
/// Lines are addressed by their *logical* index, which is the order they were committed
/// in (0 for the first line ever committed). Logical index `i` lives in slot `i % H`,
/// so once more than `H` lines have been committed the oldest ones are overwritten and
/// only logical indices `commit_count - H .. commit_count` are retained.
///
/// `browse_cursor` tracks which entry the up / down arrow keys last recalled. It sits at
/// `commit_count` ("past the newest entry") whenever the user isn't browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRing<const H: usize = HISTORY_COUNT_MAX, const C: usize = LINE_LENGTH_MAX> {
    slots: [LineBuffer<C>; H],
    commit_count: usize,
    browse_cursor: usize,
}

impl<const H: usize, const C: usize> Default for HistoryRing<H, C> {
    fn default() -> Self { Self::new() }
}

impl<const H: usize, const C: usize> HistoryRing<H, C> {
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(H > 0, "history must have at least one slot") };
        Self {
            slots: [LineBuffer::new(); H],
            commit_count: 0,
            browse_cursor: 0,
        }
    }

    /// Total number of non-empty lines ever committed. Keeps counting after the ring
    /// wraps.
    #[must_use]
    pub const fn commit_count(&self) -> usize { self.commit_count }

    #[must_use]
    pub const fn browse_cursor(&self) -> usize { self.browse_cursor }

    /// Number of retained entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.commit_count < H { self.commit_count } else { H }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool { self.commit_count == 0 }

    const fn oldest_retained_index(&self) -> usize { self.commit_count - self.len() }

    /// The entry with the given logical index, or [None] if it was never committed or
    /// has already been overwritten.
    #[must_use]
    pub fn get(&self, logical_index: usize) -> Option<&LineBuffer<C>> {
        let is_retained = logical_index >= self.oldest_retained_index()
            && logical_index < self.commit_count;
        is_retained.then(|| &self.slots[logical_index % H])
    }

    /// Retained entries, oldest first, with their logical indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &LineBuffer<C>)> {
        (self.oldest_retained_index()..self.commit_count)
            .map(|logical_index| (logical_index, &self.slots[logical_index % H]))
    }

    /// Store the printable bytes of `line` as the newest entry and stop browsing. A line
    /// with no printable bytes is ignored.
    pub fn push(&mut self, line: &[u8]) {
        if !line.iter().any(|byte| PRINTABLE_ASCII_RANGE.contains(byte)) {
            return;
        }
        self.slots[self.commit_count % H].replace_with(line);
        self.commit_count += 1;
        self.browse_cursor = self.commit_count;
    }

    /// Copy the entry at `logical_index` into `line` and redraw the whole line,
    /// including the prompt:
    ///
    /// ```text
    /// \r <prompt> <recalled text> ESC [ K
    /// ```
    ///
    /// The trailing erase clears whatever was left over from a longer previous line.
    pub fn recall(
        &self,
        logical_index: usize,
        line: &mut LineBuffer<C>,
        prompt: &str,
        term: &mut dyn Write,
    ) -> io::Result<()> {
        let slot = &self.slots[logical_index % H];
        line.replace_with(slot.as_bytes());
        tracing::debug!(message = "history recall", logical_index, line = %line.as_str());

        let mut echo = EchoBuffer::new();
        echo.push(CARRIAGE_RETURN);
        echo.extend_from_slice(prompt.as_bytes());
        echo.extend_from_slice(line.as_bytes());
        echo.extend_from_slice(EL_ERASE_TO_END_OF_LINE);
        term.write_all(&echo)
    }

    /// Recall the next older entry. Returns `false` (and does nothing) when there is no
    /// older retained entry.
    pub fn browse_up(
        &mut self,
        line: &mut LineBuffer<C>,
        prompt: &str,
        term: &mut dyn Write,
    ) -> io::Result<bool> {
        let has_older = self.browse_cursor > 0 && self.browse_cursor + H > self.commit_count;
        if !has_older {
            return Ok(false);
        }
        self.browse_cursor -= 1;
        self.recall(self.browse_cursor, line, prompt, term)?;
        Ok(true)
    }

    /// Recall the next newer entry. Returns `false` (and does nothing) when already at
    /// the newest entry. Browsing down never returns to an empty line.
    pub fn browse_down(
        &mut self,
        line: &mut LineBuffer<C>,
        prompt: &str,
        term: &mut dyn Write,
    ) -> io::Result<bool> {
        if self.browse_cursor + 1 >= self.commit_count {
            return Ok(false);
        }
        self.browse_cursor += 1;
        self.recall(self.browse_cursor, line, prompt, term)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::StdoutMock;

    fn history_with<const H: usize>(lines: &[&str]) -> HistoryRing<H, 64> {
        let mut history = HistoryRing::<H, 64>::new();
        for line in lines {
            history.push(line.as_bytes());
        }
        history
    }

    #[test]
    fn test_push_and_get() {
        let history = history_with::<8>(&["hi", "yo"]);
        assert_eq!(history.commit_count(), 2);
        assert_eq!(history.browse_cursor(), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().as_str(), "hi");
        assert_eq!(history.get(1).unwrap().as_str(), "yo");
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn test_push_empty_is_ignored() {
        let mut history = history_with::<8>(&["hi"]);
        history.push(b"");
        assert_eq!(history.commit_count(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_keeps_only_printable_bytes() {
        let mut stdout_mock = StdoutMock::default();
        let mut history = history_with::<8>(&["hi"]);
        let mut line = LineBuffer::<64>::new();

        history.push(b"caf\xc3");
        history.push(b"\x01\x02\x1b");

        assert_eq!(history.commit_count(), 2);
        assert_eq!(history.get(1).unwrap().as_bytes(), b"caf");
        assert!(history.browse_up(&mut line, "> ", &mut stdout_mock).unwrap());
        assert_eq!(line.as_str(), "caf");
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"\r> caf\x1b[K");
    }

    #[test]
    fn test_browse_empty_history_is_noop() {
        let mut stdout_mock = StdoutMock::default();
        let mut history = HistoryRing::<8, 64>::new();
        let mut line = LineBuffer::<64>::new();

        assert!(!history.browse_up(&mut line, "> ", &mut stdout_mock).unwrap());
        assert!(!history.browse_down(&mut line, "> ", &mut stdout_mock).unwrap());
        assert!(line.is_empty());
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }

    #[test]
    fn test_up_up_down() {
        let mut stdout_mock = StdoutMock::default();
        let mut history = history_with::<8>(&["hi", "yo"]);
        let mut line = LineBuffer::<64>::new();

        assert!(history.browse_up(&mut line, "> ", &mut stdout_mock).unwrap());
        assert_eq!(line.as_str(), "yo");
        assert!(history.browse_up(&mut line, "> ", &mut stdout_mock).unwrap());
        assert_eq!(line.as_str(), "hi");
        assert_eq!(history.browse_cursor(), 0);

        // Already at the oldest entry.
        assert!(!history.browse_up(&mut line, "> ", &mut stdout_mock).unwrap());
        assert_eq!(line.as_str(), "hi");

        assert!(history.browse_down(&mut line, "> ", &mut stdout_mock).unwrap());
        assert_eq!(line.as_str(), "yo");
        assert_eq!(line.cursor(), 2);

        // Already at the newest entry.
        assert!(!history.browse_down(&mut line, "> ", &mut stdout_mock).unwrap());
        assert_eq!(line.as_str(), "yo");
    }

    #[test]
    fn test_recall_redraw_bytes() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_with::<8>(&["hi"]);
        let mut line = LineBuffer::<64>::new();
        line.replace_with(b"longer text");

        history.recall(0, &mut line, "$ ", &mut stdout_mock).unwrap();

        assert_eq!(line.as_str(), "hi");
        assert_eq!(line.cursor(), 2);
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"\r$ hi\x1b[K");
    }

    #[test]
    fn test_overwrite_keeps_last_h_entries() {
        let mut stdout_mock = StdoutMock::default();
        let mut history =
            history_with::<4>(&["line0", "line1", "line2", "line3", "line4"]);
        let mut line = LineBuffer::<64>::new();

        assert_eq!(history.commit_count(), 5);
        assert_eq!(history.len(), 4);
        assert_eq!(history.get(0), None);

        let mut recalled = vec![];
        for _ in 0..4 {
            assert!(history.browse_up(&mut line, "", &mut stdout_mock).unwrap());
            recalled.push(line.as_str().into_owned());
        }
        assert_eq!(recalled, vec!["line4", "line3", "line2", "line1"]);

        // `line0` was overwritten, browsing stops at `line1`.
        assert!(!history.browse_up(&mut line, "", &mut stdout_mock).unwrap());
        assert_eq!(line.as_str(), "line1");
    }

    #[test]
    fn test_iter_oldest_first_after_wrap() {
        let history = history_with::<3>(&["a", "b", "c", "d", "e"]);
        let entries = history
            .iter()
            .map(|(index, line)| (index, line.as_str().into_owned()))
            .collect::<Vec<_>>();
        assert_eq!(
            entries,
            vec![(2, "c".to_owned()), (3, "d".to_owned()), (4, "e".to_owned())]
        );
    }

    #[test]
    fn test_push_resets_browse_cursor() {
        let mut stdout_mock = StdoutMock::default();
        let mut history = history_with::<8>(&["a", "b"]);
        let mut line = LineBuffer::<64>::new();

        history.browse_up(&mut line, "", &mut stdout_mock).unwrap();
        history.browse_up(&mut line, "", &mut stdout_mock).unwrap();
        assert_eq!(history.browse_cursor(), 0);

        history.push(b"c");
        assert_eq!(history.browse_cursor(), 3);
    }
}
