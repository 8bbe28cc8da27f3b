// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale derivation and enharmonic spelling.
//!
//! Covers the two supported modes (major and natural minor), scale-degree
//! lookup, and the note-label policy: diatonic tones are spelled from
//! hand-authored per-key tables, chromatic tones fall back to a sharp or
//! flat name chosen by key-signature bias.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::Note;

/// Major scale intervals (semitones from tonic)
pub const MAJOR_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Natural minor scale intervals
pub const MINOR_INTERVALS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// The two supported modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Get the scale intervals for this mode
    pub fn intervals(self) -> &'static [u8; 7] {
        match self {
            Mode::Major => &MAJOR_INTERVALS,
            Mode::Minor => &MINOR_INTERVALS,
        }
    }

    /// Parse mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Some(Mode::Major),
            "minor" => Some(Mode::Minor),
            _ => None,
        }
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The 7 pitch classes of a key, in degree order.
///
/// Degree-to-pitch-class mapping is `(tonic + interval[degree]) % 12` and
/// is a bijection over the 7 degrees for both modes.
pub fn scale_notes(tonic: Note, mode: Mode) -> [Note; 7] {
    let mut notes = [tonic; 7];
    for (i, &interval) in mode.intervals().iter().enumerate() {
        notes[i] = tonic.transpose(interval as i8);
    }
    notes
}

/// Scale degree (0-6) of a pitch class within a key, or `None` when the
/// pitch class is chromatic. First match wins; the scale tables contain
/// no duplicates, so first equals only.
pub fn scale_degree_of(note: Note, tonic: Note, mode: Mode) -> Option<usize> {
    scale_notes(tonic, mode).iter().position(|&n| n == note)
}

// Diatonic spellings for each major key, indexed by tonic pitch class.
// Each row is a permutation of the letters C,D,E,F,G,A,B with the
// accidentals of that key signature.
const MAJOR_SPELLINGS: [[&str; 7]; 12] = [
    ["C", "D", "E", "F", "G", "A", "B"],
    ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"],
    ["D", "E", "F#", "G", "A", "B", "C#"],
    ["Eb", "F", "G", "Ab", "Bb", "C", "D"],
    ["E", "F#", "G#", "A", "B", "C#", "D#"],
    ["F", "G", "A", "Bb", "C", "D", "E"],
    ["F#", "G#", "A#", "B", "C#", "D#", "E#"],
    ["G", "A", "B", "C", "D", "E", "F#"],
    ["Ab", "Bb", "C", "Db", "Eb", "F", "G"],
    ["A", "B", "C#", "D", "E", "F#", "G#"],
    ["Bb", "C", "D", "Eb", "F", "G", "A"],
    ["B", "C#", "D#", "E", "F#", "G#", "A#"],
];

// Diatonic spellings for each natural minor key.
const MINOR_SPELLINGS: [[&str; 7]; 12] = [
    ["C", "D", "Eb", "F", "G", "Ab", "Bb"],
    ["C#", "D#", "E", "F#", "G#", "A", "B"],
    ["D", "E", "F", "G", "A", "Bb", "C"],
    ["Eb", "F", "Gb", "Ab", "Bb", "Cb", "Db"],
    ["E", "F#", "G", "A", "B", "C", "D"],
    ["F", "G", "Ab", "Bb", "C", "Db", "Eb"],
    ["F#", "G#", "A", "B", "C#", "D", "E"],
    ["G", "A", "Bb", "C", "D", "Eb", "F"],
    ["G#", "A#", "B", "C#", "D#", "E", "F#"],
    ["A", "B", "C", "D", "E", "F", "G"],
    ["Bb", "C", "Db", "Eb", "F", "Gb", "Ab"],
    ["B", "C#", "D", "E", "F#", "G", "A"],
];

// Enharmonic names for chromatic (out-of-scale) tones.
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Whether a key spells its chromatic tones with flats.
///
/// Flat-side keys of the circle of fifths; everything else (tonic C
/// included) biases sharp.
fn is_flat_key(tonic: Note, mode: Mode) -> bool {
    match mode {
        Mode::Major => matches!(tonic, Note::Cs | Note::Ds | Note::F | Note::Gs | Note::As),
        Mode::Minor => matches!(
            tonic,
            Note::C | Note::D | Note::Ds | Note::F | Note::G | Note::As
        ),
    }
}

/// Spell a pitch class in the context of a key.
///
/// Scale members come from the per-key diatonic tables; chromatic tones
/// get the sharp or flat enharmonic name matching the key's bias.
pub fn spell(note: Note, tonic: Note, mode: Mode) -> &'static str {
    if let Some(degree) = scale_degree_of(note, tonic, mode) {
        return spelling_table(mode)[tonic.pitch_class() as usize][degree];
    }
    if is_flat_key(tonic, mode) {
        FLAT_NAMES[note.pitch_class() as usize]
    } else {
        SHARP_NAMES[note.pitch_class() as usize]
    }
}

/// Diatonic spelling for a scale degree of a key
pub fn spell_degree(tonic: Note, mode: Mode, degree: usize) -> &'static str {
    spelling_table(mode)[tonic.pitch_class() as usize][degree]
}

fn spelling_table(mode: Mode) -> &'static [[&'static str; 7]; 12] {
    match mode {
        Mode::Major => &MAJOR_SPELLINGS,
        Mode::Minor => &MINOR_SPELLINGS,
    }
}
