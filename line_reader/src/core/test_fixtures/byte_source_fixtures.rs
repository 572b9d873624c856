// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ByteSource;
use std::{collections::VecDeque, io};

/// A [`ByteSource`] that replays a fixed sequence of bytes, one per
/// [`ByteSource::read_byte()`] call. Once the bytes run out it reports the source as
/// closed, which the editor turns into [`crate::ReadlineEvent::Eof`].
#[derive(Debug, Clone, Default)]
pub struct VecByteSource {
    pub bytes: VecDeque<u8>,
    /// Number of times [`ByteSource::detach()`] was called.
    pub detach_count: usize,
}

impl VecByteSource {
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            detach_count: 0,
        }
    }

    /// Queue more bytes, eg: between two calls to
    /// [`crate::EditorSession::read_line()`].
    pub fn push_bytes(&mut self, bytes: &[u8]) { self.bytes.extend(bytes); }

    /// Bytes that have not been read yet.
    #[must_use]
    pub fn remaining(&self) -> usize { self.bytes.len() }
}

impl ByteSource for VecByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> { Ok(self.bytes.pop_front()) }

    fn detach(&mut self) { self.detach_count += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_byte_source_replays_then_closes() {
        let mut source = VecByteSource::new(b"ab");
        assert_eq!(source.read_byte().unwrap(), Some(b'a'));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.read_byte().unwrap(), Some(b'b'));
        assert_eq!(source.read_byte().unwrap(), None);

        source.push_bytes(b"c");
        assert_eq!(source.read_byte().unwrap(), Some(b'c'));
    }
}
