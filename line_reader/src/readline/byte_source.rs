// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Read};

use tokio::sync::mpsc::{Receiver, Sender};

use crate::RawModeGuard;

/// Where the editor gets its input from, one byte at a time.
///
/// [`ByteSource::read_byte()`] is the only place where
/// [`crate::EditorSession::read_line()`] blocks.
pub trait ByteSource {
    /// Block until the next byte is available. `Ok(None)` means the source is closed and
    /// no more bytes will ever arrive.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the device can't be read.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Release the device. Called once end of input is reached (`Ctrl+D` on an empty
    /// line, or the source closed).
    fn detach(&mut self) {}
}

/// Reads from the process' stdin. When created with [`StdinByteSource::try_new_raw()`]
/// it also holds the terminal in raw mode until [`ByteSource::detach()`] is called or it
/// is dropped.
#[derive(Debug, Default)]
pub struct StdinByteSource {
    maybe_raw_mode_guard: Option<RawModeGuard>,
}

impl StdinByteSource {
    /// Read stdin as is, eg: when it is a pipe or the caller manages raw mode itself.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Put the terminal in raw mode and read from it.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a terminal, or raw mode can't be enabled.
    pub fn try_new_raw() -> miette::Result<Self> {
        Ok(Self {
            maybe_raw_mode_guard: Some(RawModeGuard::new()?),
        })
    }

    #[must_use]
    pub fn is_raw(&self) -> bool { self.maybe_raw_mode_guard.is_some() }
}

impl ByteSource for StdinByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0_u8; 1];
        loop {
            match io::stdin().lock().read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    fn detach(&mut self) {
        if self.maybe_raw_mode_guard.take().is_some() {
            tracing::debug!(message = "stdin detached, raw mode disabled");
        }
    }
}

/// Receives bytes sent by some other task or thread, eg: a serial port reader or a test.
/// The source is closed once every [`Sender`] has been dropped.
///
/// Reads use [`Receiver::blocking_recv()`], so don't call
/// [`crate::EditorSession::read_line()`] with this source from inside an async context.
/// Run it on a plain thread or in [`tokio::task::spawn_blocking()`] instead.
#[derive(Debug)]
pub struct ChannelByteSource {
    pub receiver: Receiver<u8>,
}

impl ChannelByteSource {
    #[must_use]
    pub fn new(receiver: Receiver<u8>) -> Self { Self { receiver } }

    /// Create a bounded channel and wrap its receiving half.
    #[must_use]
    pub fn channel(buffer: usize) -> (Sender<u8>, Self) {
        let (sender, receiver) = tokio::sync::mpsc::channel(buffer);
        (sender, Self::new(receiver))
    }
}

impl ByteSource for ChannelByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> { Ok(self.receiver.blocking_recv()) }

    /// Stop accepting bytes. Senders see their next send fail.
    fn detach(&mut self) { self.receiver.close(); }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_channel_byte_source_reads_until_senders_dropped() {
        let (sender, mut source) = ChannelByteSource::channel(4);
        let producer = std::thread::spawn(move || {
            for byte in b"ok" {
                sender.blocking_send(*byte).unwrap();
            }
        });

        assert_eq!(source.read_byte().unwrap(), Some(b'o'));
        assert_eq!(source.read_byte().unwrap(), Some(b'k'));
        producer.join().unwrap();
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_channel_byte_source_detach_closes_channel() {
        let (sender, mut source) = ChannelByteSource::channel(4);
        source.detach();
        assert!(sender.blocking_send(b'x').is_err());
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_stdin_byte_source_new_is_not_raw() {
        let mut source = StdinByteSource::new();
        assert!(!source.is_raw());
        source.detach();
        assert!(!source.is_raw());
    }
}
