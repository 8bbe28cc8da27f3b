// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine for KEYWHEEL.
//!
//! This module provides the chromatic pitch model, scale derivation with
//! enharmonic spelling, and the diatonic chord catalog with Roman numeral
//! analysis.

pub mod chord;
pub mod pitch;
pub mod scale;

pub use chord::{ChordShape, ChordType, SelectedChord};
pub use pitch::{MidiNumber, Note, PianoKey};
pub use scale::Mode;
