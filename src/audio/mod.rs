// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tone generator interface.
//!
//! Sample playback lives outside this crate. The theory and playback
//! layers talk to it through [`ToneGenerator`]: fire-and-forget note and
//! chord triggers, with a readiness gate for backends that load samples
//! asynchronously. Triggers issued before the backend is ready are
//! silently dropped; there is no queueing or retry.

use tracing::trace;

use crate::music::pitch::{frequency_for_midi, midi_for, Note};
use crate::music::SelectedChord;
use crate::progression::ChordInProgression;

/// Seconds a triggered note sounds
pub const NOTE_DURATION_SECS: f64 = 0.8;

/// External sample-playback backend.
///
/// Calls are fire-and-forget; nothing is awaited. Notes of one chord are
/// issued synchronously in the same tick with no ordering guarantee
/// between them - they are simultaneous musical onsets.
pub trait ToneGenerator {
    /// Whether the backend has finished loading. Defaults to ready.
    fn is_ready(&self) -> bool {
        true
    }

    /// Trigger a single note
    fn play_note(&mut self, frequency_hz: f64, duration_secs: f64);

    /// Trigger several simultaneous notes
    fn play_chord(&mut self, frequencies: &[f64], duration_secs: f64) {
        for &frequency in frequencies {
            self.play_note(frequency, duration_secs);
        }
    }
}

/// Tone generator that discards everything; useful before a real
/// backend is wired up and in tests
#[derive(Debug, Default)]
pub struct NullToneGenerator;

impl ToneGenerator for NullToneGenerator {
    fn play_note(&mut self, _frequency_hz: f64, _duration_secs: f64) {}
}

/// Frequencies for auditioning a chord on selection.
///
/// All pitch classes sound in octave 4, with no octave bump when an
/// interval wraps past B. This matches the original highlight-audition
/// behavior and intentionally differs from progression voicing.
pub fn audition_frequencies(root: Note, intervals: &[u8]) -> Vec<f64> {
    intervals
        .iter()
        .map(|&interval| {
            let note = root.transpose(interval as i8);
            frequency_for_midi(midi_for(note, 4))
        })
        .collect()
}

/// Octave-qualified notes for a progression chord.
///
/// The octave heuristic compares pitch classes numerically: a chord root
/// below the key tonic's pitch class starts in octave 5, otherwise 4,
/// and any interval that wraps past pitch class 12 moves up one octave.
/// Reproduced as specified; musical proximity is not the goal.
pub fn voice_chord(key_tonic: Note, chord_root: Note, intervals: &[u8]) -> Vec<(Note, i8)> {
    let root_pc = chord_root.pitch_class();
    let base_octave: i8 = if root_pc < key_tonic.pitch_class() { 5 } else { 4 };

    intervals
        .iter()
        .map(|&interval| {
            let note = chord_root.transpose(interval as i8);
            let octave = if root_pc as u16 + interval as u16 >= 12 {
                base_octave + 1
            } else {
                base_octave
            };
            (note, octave)
        })
        .collect()
}

/// Audition a selected chord, if the backend is ready
pub fn audition_chord(tone: &mut dyn ToneGenerator, chord: &SelectedChord) {
    if !tone.is_ready() {
        trace!("tone generator not ready, dropping audition");
        return;
    }
    let frequencies = audition_frequencies(chord.root, &chord.intervals);
    tone.play_chord(&frequencies, NOTE_DURATION_SECS);
}

/// Trigger a progression chord with its playback voicing, if the
/// backend is ready
pub fn play_progression_chord(
    tone: &mut dyn ToneGenerator,
    key_tonic: Note,
    entry: &ChordInProgression,
) {
    if !tone.is_ready() {
        trace!("tone generator not ready, dropping trigger");
        return;
    }
    let frequencies: Vec<f64> = voice_chord(key_tonic, entry.chord.root, &entry.chord.intervals)
        .into_iter()
        .map(|(note, octave)| frequency_for_midi(midi_for(note, octave)))
        .collect();
    tone.play_chord(&frequencies, NOTE_DURATION_SECS);
}
