// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, CSI_ARROW_DOWN_FINAL, CSI_ARROW_LEFT_FINAL,
            CSI_ARROW_RIGHT_FINAL, CSI_ARROW_UP_FINAL, PRINTABLE_ASCII_RANGE};

/// Where the decoder is inside an `ESC [ x` sequence.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum EscapeState {
    /// Not inside an escape sequence.
    #[default]
    Idle,
    /// Saw `ESC`, waiting for `[`.
    SawEscape,
    /// Saw `ESC [`, waiting for the final byte.
    SawBracket,
}

/// What a single input byte turned into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodedInput {
    /// A printable byte that arrived outside of an escape sequence.
    PlainChar(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// The byte was absorbed into an escape sequence, there is nothing to apply.
    Consumed,
    /// Apply this byte as a normal control or printable byte. This is what a control
    /// byte outside an escape sequence turns into, and it is also how the byte after a
    /// lone `ESC` (not followed by `[`) gets replayed.
    PassThrough(u8),
}

impl DecodedInput {
    /// The byte to apply to the line, if this isn't an arrow key or an absorbed byte.
    #[must_use]
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            DecodedInput::PlainChar(byte) | DecodedInput::PassThrough(byte) => Some(*byte),
            _ => None,
        }
    }
}

/// Recognizes `ESC [ A/B/C/D` one byte at a time, with no lookahead.
///
/// ```text
///              ESC                  [
///   ┌──────┐ ───────▶ ┌───────────┐ ───▶ ┌────────────┐
///   │ Idle │          │ SawEscape │      │ SawBracket │
///   └──────┘ ◀─────── └───────────┘      └────────────┘
///      ▲     other byte (replayed)             │
///      └───────────────────────────────────────┘
///        A/B/C/D → arrow key, other byte → swallowed
/// ```
///
/// An `ESC` in any state starts a new sequence, so `ESC ESC [ A` (Esc then Up, or
/// Alt+Up on some terminals) is still an up arrow.
///
/// The two ways a sequence can go wrong are handled differently, on purpose:
/// - `ESC` followed by anything but `[` replays that byte, so no typed character is lost.
/// - `ESC [` followed by anything but `A..=D` drops the byte, since it has no sensible
///   character meaning.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EscapeSequenceDecoder {
    state: EscapeState,
}

impl EscapeSequenceDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> EscapeState { self.state }

    /// Feed the next byte, get back what it means.
    pub fn decode(&mut self, byte: u8) -> DecodedInput {
        let (next_state, decoded) = match (self.state, byte) {
            (_, ANSI_ESC) => (EscapeState::SawEscape, DecodedInput::Consumed),
            (EscapeState::Idle, _) if PRINTABLE_ASCII_RANGE.contains(&byte) => {
                (EscapeState::Idle, DecodedInput::PlainChar(byte))
            }
            (EscapeState::Idle, _) => (EscapeState::Idle, DecodedInput::PassThrough(byte)),
            (EscapeState::SawEscape, ANSI_CSI_BRACKET) => {
                (EscapeState::SawBracket, DecodedInput::Consumed)
            }
            (EscapeState::SawEscape, _) => {
                (EscapeState::Idle, DecodedInput::PassThrough(byte))
            }
            (EscapeState::SawBracket, _) => {
                (EscapeState::Idle, decode_csi_final_byte(byte))
            }
        };
        self.state = next_state;
        decoded
    }
}

fn decode_csi_final_byte(final_byte: u8) -> DecodedInput {
    match final_byte {
        CSI_ARROW_UP_FINAL => DecodedInput::ArrowUp,
        CSI_ARROW_DOWN_FINAL => DecodedInput::ArrowDown,
        CSI_ARROW_RIGHT_FINAL => DecodedInput::ArrowRight,
        CSI_ARROW_LEFT_FINAL => DecodedInput::ArrowLeft,
        _ => DecodedInput::Consumed,
    }
}
