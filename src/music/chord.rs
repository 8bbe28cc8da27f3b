// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic chord catalog and Roman numeral analysis.
//!
//! The catalog is static authored data: 7 triads and 7 sevenths per mode,
//! indexed by scale degree. Roman numeral inference for an arbitrary
//! (root, intervals) pair runs a fixed fallback chain: out-of-scale roots
//! label as "?", unmatched catalog shapes fall back to a bare numeral for
//! the scale degree.

use serde::{Deserialize, Serialize};

use super::pitch::Note;
use super::scale::{scale_degree_of, Mode};

/// Chord qualities in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordType {
    Maj,
    Min,
    Dim,
    Maj7,
    Min7,
    Dom7,
    HalfDim7,
}

impl ChordType {
    /// Chord symbol suffix appended to the root spelling
    pub fn suffix(self) -> &'static str {
        match self {
            ChordType::Maj => "",
            ChordType::Min => "m",
            ChordType::Dim => "\u{00b0}",
            ChordType::Maj7 => "maj7",
            ChordType::Min7 => "m7",
            ChordType::Dom7 => "7",
            ChordType::HalfDim7 => "\u{00f8}7",
        }
    }
}

/// One entry of the diatonic chord catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordShape {
    /// Roman numeral label (e.g., "V", "ii\u{00b0}", "IVmaj7")
    pub numeral: &'static str,
    /// Chord quality
    pub chord_type: ChordType,
    /// Semitone offsets from the chord root
    pub intervals: &'static [u8],
}

const fn shape(numeral: &'static str, chord_type: ChordType, intervals: &'static [u8]) -> ChordShape {
    ChordShape {
        numeral,
        chord_type,
        intervals,
    }
}

/// Major key triads, indexed by scale degree
pub const MAJOR_TRIADS: [ChordShape; 7] = [
    shape("I", ChordType::Maj, &[0, 4, 7]),
    shape("ii", ChordType::Min, &[0, 3, 7]),
    shape("iii", ChordType::Min, &[0, 3, 7]),
    shape("IV", ChordType::Maj, &[0, 4, 7]),
    shape("V", ChordType::Maj, &[0, 4, 7]),
    shape("vi", ChordType::Min, &[0, 3, 7]),
    shape("vii\u{00b0}", ChordType::Dim, &[0, 3, 6]),
];

/// Major key seventh chords, indexed by scale degree
pub const MAJOR_SEVENTHS: [ChordShape; 7] = [
    shape("Imaj7", ChordType::Maj7, &[0, 4, 7, 11]),
    shape("ii7", ChordType::Min7, &[0, 3, 7, 10]),
    shape("iii7", ChordType::Min7, &[0, 3, 7, 10]),
    shape("IVmaj7", ChordType::Maj7, &[0, 4, 7, 11]),
    shape("V7", ChordType::Dom7, &[0, 4, 7, 10]),
    shape("vi7", ChordType::Min7, &[0, 3, 7, 10]),
    shape("vii\u{00f8}7", ChordType::HalfDim7, &[0, 3, 6, 10]),
];

/// Natural minor key triads, indexed by scale degree
pub const MINOR_TRIADS: [ChordShape; 7] = [
    shape("i", ChordType::Min, &[0, 3, 7]),
    shape("ii\u{00b0}", ChordType::Dim, &[0, 3, 6]),
    shape("III", ChordType::Maj, &[0, 4, 7]),
    shape("iv", ChordType::Min, &[0, 3, 7]),
    shape("v", ChordType::Min, &[0, 3, 7]),
    shape("VI", ChordType::Maj, &[0, 4, 7]),
    shape("VII", ChordType::Maj, &[0, 4, 7]),
];

/// Natural minor key seventh chords, indexed by scale degree
pub const MINOR_SEVENTHS: [ChordShape; 7] = [
    shape("i7", ChordType::Min7, &[0, 3, 7, 10]),
    shape("ii\u{00f8}7", ChordType::HalfDim7, &[0, 3, 6, 10]),
    shape("IIImaj7", ChordType::Maj7, &[0, 4, 7, 11]),
    shape("iv7", ChordType::Min7, &[0, 3, 7, 10]),
    shape("v7", ChordType::Min7, &[0, 3, 7, 10]),
    shape("VImaj7", ChordType::Maj7, &[0, 4, 7, 11]),
    shape("VII7", ChordType::Dom7, &[0, 4, 7, 10]),
];

const BARE_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Triad catalog for a mode
pub fn triads(mode: Mode) -> &'static [ChordShape; 7] {
    match mode {
        Mode::Major => &MAJOR_TRIADS,
        Mode::Minor => &MINOR_TRIADS,
    }
}

/// Seventh chord catalog for a mode
pub fn sevenths(mode: Mode) -> &'static [ChordShape; 7] {
    match mode {
        Mode::Major => &MAJOR_SEVENTHS,
        Mode::Minor => &MINOR_SEVENTHS,
    }
}

/// Root pitch class of the diatonic chord at a scale degree
pub fn chord_root(tonic: Note, mode: Mode, degree: usize) -> Note {
    tonic.transpose(mode.intervals()[degree] as i8)
}

/// Classify an interval signature into a chord quality.
///
/// Exact match over the 7 catalog signatures. Anything else classifies
/// as major; this is the documented never-crash fallback and is not
/// extended to infer other qualities.
pub fn classify_intervals(intervals: &[u8]) -> ChordType {
    match intervals {
        [0, 4, 7] => ChordType::Maj,
        [0, 3, 7] => ChordType::Min,
        [0, 3, 6] => ChordType::Dim,
        [0, 4, 7, 11] => ChordType::Maj7,
        [0, 3, 7, 10] => ChordType::Min7,
        [0, 4, 7, 10] => ChordType::Dom7,
        [0, 3, 6, 10] => ChordType::HalfDim7,
        _ => ChordType::Maj,
    }
}

/// Chord symbol for a spelled root and quality (e.g., "Dm7", "G7")
pub fn chord_symbol(root_spelling: &str, chord_type: ChordType) -> String {
    format!("{}{}", root_spelling, chord_type.suffix())
}

/// Full chord name for a spelled root and interval signature
pub fn full_chord_name(root_spelling: &str, intervals: &[u8]) -> String {
    chord_symbol(root_spelling, classify_intervals(intervals))
}

/// Roman numeral for an arbitrary chord against a key.
///
/// Fallback chain, in order:
/// 1. Root not in the key's scale: the literal sentinel `"?"`.
/// 2. A catalog entry (triads first, then sevenths) whose derived root
///    and quality both match: that entry's numeral.
/// 3. Otherwise a bare numeral (I..VII) for the root's scale degree,
///    ignoring quality.
pub fn roman_numeral_for(
    chord_root_note: Note,
    chord_intervals: &[u8],
    tonic: Note,
    mode: Mode,
) -> String {
    let Some(degree) = scale_degree_of(chord_root_note, tonic, mode) else {
        return "?".to_string();
    };

    let chord_type = classify_intervals(chord_intervals);

    for (i, entry) in triads(mode).iter().enumerate() {
        if chord_root(tonic, mode, i) == chord_root_note && entry.chord_type == chord_type {
            return entry.numeral.to_string();
        }
    }
    for (i, entry) in sevenths(mode).iter().enumerate() {
        if chord_root(tonic, mode, i) == chord_root_note && entry.chord_type == chord_type {
            return entry.numeral.to_string();
        }
    }

    BARE_NUMERALS[degree].to_string()
}

/// Scale-degree numeral for a bare note: the triad numeral of the degree
/// the note sits on, or `None` for chromatic tones.
pub fn scale_degree_numeral(note: Note, tonic: Note, mode: Mode) -> Option<&'static str> {
    scale_degree_of(note, tonic, mode).map(|degree| triads(mode)[degree].numeral)
}

/// A chord the user currently has highlighted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedChord {
    /// Chord root pitch class
    pub root: Note,
    /// Semitone offsets from the root
    pub intervals: Vec<u8>,
    /// Roman numeral at selection time; always recomputed on key change
    pub numeral: String,
}

impl SelectedChord {
    pub fn new(root: Note, intervals: Vec<u8>, numeral: impl Into<String>) -> Self {
        Self {
            root,
            intervals,
            numeral: numeral.into(),
        }
    }

    /// Pitch classes sounded by this chord
    pub fn pitch_classes(&self) -> Vec<Note> {
        self.intervals
            .iter()
            .map(|&i| self.root.transpose(i as i8))
            .collect()
    }
}
