// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! KEYWHEEL - interactive music theory engine.
//!
//! This crate implements the core of a virtual-piano exploration tool:
//! - Pitch space: MIDI/frequency/note-name conversions and 88-key generation
//! - Scale engine: major/minor derivation and enharmonic spelling
//! - Chord theory: diatonic chord catalog and Roman numeral analysis
//! - Progression store: an ordered, mutable chord sequence
//! - Playback: a beat-clock scheduler that triggers chords on subdivisions
//!
//! Rendering, input handling, and sample playback live outside this crate;
//! audio output goes through the [`audio::ToneGenerator`] trait.

pub mod audio;
pub mod config;
pub mod error;
pub mod music;
pub mod playback;
pub mod progression;
pub mod state;

pub use error::KeywheelError;
pub use music::{Mode, Note, PianoKey};
pub use playback::{ProgressionPlayer, Subdivision};
pub use progression::ProgressionStore;
pub use state::MusicState;
