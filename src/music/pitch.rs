// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chromatic pitch space and the 88-key piano table.
//!
//! Provides the 12-tone pitch class model, equal-temperament frequency
//! mapping (A4 = 440 Hz = MIDI 69), and generation of the full 88-key
//! keyboard (MIDI 21-108).

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIDI note number type; the piano catalog covers 21-108
pub type MidiNumber = u8;

/// Semitone offset type
pub type Semitones = i8;

/// Lowest key on an 88-key piano (A0)
pub const MIDI_LOW: MidiNumber = 21;

/// Highest key on an 88-key piano (C8)
pub const MIDI_HIGH: MidiNumber = 108;

/// Number of keys on a full piano
pub const KEY_COUNT: usize = 88;

/// Reference pitch: A4 = MIDI 69 = 440 Hz
pub const A4_MIDI: MidiNumber = 69;
pub const A4_HZ: f64 = 440.0;

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> u8 {
        match self {
            Note::C => 0,
            Note::Cs => 1,
            Note::D => 2,
            Note::Ds => 3,
            Note::E => 4,
            Note::F => 5,
            Note::Fs => 6,
            Note::G => 7,
            Note::Gs => 8,
            Note::A => 9,
            Note::As => 10,
            Note::B => 11,
        }
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Parse note from string (e.g., "C", "C#", "Db", "F#")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" => Some(Note::C),
            "C#" | "CS" | "DB" => Some(Note::Cs),
            "D" => Some(Note::D),
            "D#" | "DS" | "EB" => Some(Note::Ds),
            "E" | "FB" => Some(Note::E),
            "F" | "E#" | "ES" => Some(Note::F),
            "F#" | "FS" | "GB" => Some(Note::Fs),
            "G" => Some(Note::G),
            "G#" | "GS" | "AB" => Some(Note::Gs),
            "A" => Some(Note::A),
            "A#" | "AS" | "BB" => Some(Note::As),
            "B" | "CB" => Some(Note::B),
            _ => None,
        }
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as i8 + semitones).rem_euclid(12) as u8;
        Note::from_pitch_class(new_pc)
    }

    /// Whether this pitch class is a black key on a piano
    pub fn is_black(self) -> bool {
        matches!(self, Note::Cs | Note::Ds | Note::Fs | Note::Gs | Note::As)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::C => write!(f, "C"),
            Note::Cs => write!(f, "C#"),
            Note::D => write!(f, "D"),
            Note::Ds => write!(f, "D#"),
            Note::E => write!(f, "E"),
            Note::F => write!(f, "F"),
            Note::Fs => write!(f, "F#"),
            Note::G => write!(f, "G"),
            Note::Gs => write!(f, "G#"),
            Note::A => write!(f, "A"),
            Note::As => write!(f, "A#"),
            Note::B => write!(f, "B"),
        }
    }
}

/// One key of the piano table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PianoKey {
    /// MIDI note number (21-108)
    pub midi: MidiNumber,
    /// Pitch class
    pub note: Note,
    /// Octave number (A0 = octave 0, C4 = middle C)
    pub octave: i8,
    /// Whether this is a black key
    pub is_black: bool,
    /// Equal temperament frequency
    pub frequency_hz: f64,
}

/// Equal temperament frequency for a MIDI note number
pub fn frequency_for_midi(midi: MidiNumber) -> f64 {
    A4_HZ * 2f64.powf((midi as f64 - A4_MIDI as f64) / 12.0)
}

/// Pitch class and octave for a MIDI note number.
///
/// Octave numbering follows the MIDI convention where 21 = A0,
/// 60 = C4, and 108 = C8. Callers must clamp to the piano range
/// before calling; out-of-catalog numbers are a caller error.
pub fn note_for_midi(midi: MidiNumber) -> (Note, i8) {
    debug_assert!((MIDI_LOW..=MIDI_HIGH).contains(&midi));
    let note = Note::from_pitch_class((midi - 12) % 12);
    let octave = ((midi - 12) / 12) as i8;
    (note, octave)
}

/// MIDI note number for a pitch class in a given octave (C4 = 60)
pub fn midi_for(note: Note, octave: i8) -> MidiNumber {
    ((octave as i16 + 1) * 12 + note.pitch_class() as i16) as MidiNumber
}

/// Generate the full 88-key piano table, MIDI 21 through 108.
///
/// Pure and deterministic: identical calls always yield an identical
/// table, so callers may generate once and cache.
pub fn generate_keyboard() -> Vec<PianoKey> {
    (MIDI_LOW..=MIDI_HIGH)
        .map(|midi| {
            let (note, octave) = note_for_midi(midi);
            PianoKey {
                midi,
                note,
                octave,
                is_black: note.is_black(),
                frequency_hz: frequency_for_midi(midi),
            }
        })
        .collect()
}

/// Filter the keyboard to an inclusive MIDI range.
///
/// Returns an empty slice when `start > end`; there is no wraparound.
pub fn key_range(keys: &[PianoKey], start: MidiNumber, end: MidiNumber) -> &[PianoKey] {
    if start > end {
        return &[];
    }
    let lo = keys.partition_point(|k| k.midi < start);
    let hi = keys.partition_point(|k| k.midi <= end);
    &keys[lo..hi]
}
