// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for KEYWHEEL.

use thiserror::Error;

/// Errors surfaced by the theory and progression layers.
///
/// The core APIs are total over their documented domains; these cover
/// the few validated mutation points and settings parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywheelError {
    /// Chord duration outside the allowed set
    #[error("invalid chord duration: {0} beats (allowed: 1, 2, 4, 8, 16)")]
    InvalidDuration(u32),

    /// Unparseable note name in settings
    #[error("unknown note name: {0:?}")]
    UnknownNote(String),

    /// Unparseable mode name in settings
    #[error("unknown mode: {0:?} (expected \"major\" or \"minor\")")]
    UnknownMode(String),

    /// Unparseable subdivision name in settings
    #[error("unknown subdivision: {0:?} (expected \"whole\", \"quarter\" or \"eighth\")")]
    UnknownSubdivision(String),
}
