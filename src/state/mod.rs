// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Application state holders.
//!
//! [`MusicState`] owns the key context, chord selection, progression,
//! and visible piano range, and exposes narrow action methods instead of
//! raw field mutation. UI consumers read derived display data through
//! the query methods; everything is recomputed against the current key
//! context, never cached across a key change.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::music::chord::{roman_numeral_for, scale_degree_numeral};
use crate::music::pitch::{MidiNumber, PianoKey, MIDI_HIGH, MIDI_LOW};
use crate::music::scale::{scale_notes, spell};
use crate::music::{Mode, Note, SelectedChord};
use crate::progression::{ChordId, ProgressionStore, DEFAULT_DURATION_BEATS};
use crate::KeywheelError;

/// How chord interaction behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordDisplayMode {
    /// Clicking a chord replaces the current selection
    Select,
    /// Clicking a chord appends it to the progression (and selects it
    /// for highlighting)
    Build,
}

/// Visible slice of the 88-key keyboard, inclusive MIDI bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PianoRange {
    pub start_midi: MidiNumber,
    pub end_midi: MidiNumber,
}

impl Default for PianoRange {
    fn default() -> Self {
        Self {
            start_midi: MIDI_LOW,
            end_midi: MIDI_HIGH,
        }
    }
}

/// Derived display data for one piano key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDisplay {
    /// Context-dependent note label
    pub spelling: &'static str,
    /// Triad numeral of the key's scale degree, if diatonic
    pub degree_numeral: Option<&'static str>,
    /// Whether the key's pitch class is in the current scale
    pub in_scale: bool,
    /// Whether the key's pitch class sounds in the selected chord
    pub highlighted: bool,
}

/// Top-level music state with reducer-style action methods
#[derive(Debug, Clone)]
pub struct MusicState {
    selected_key: Note,
    mode: Mode,
    selected_chord: Option<SelectedChord>,
    chord_display_mode: ChordDisplayMode,
    progression: ProgressionStore,
    piano_range: PianoRange,
}

impl Default for MusicState {
    fn default() -> Self {
        Self {
            selected_key: Note::C,
            mode: Mode::Major,
            selected_chord: None,
            chord_display_mode: ChordDisplayMode::Select,
            progression: ProgressionStore::new(),
            piano_range: PianoRange::default(),
        }
    }
}

impl MusicState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_key(&self) -> Note {
        self.selected_key
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_chord(&self) -> Option<&SelectedChord> {
        self.selected_chord.as_ref()
    }

    pub fn chord_display_mode(&self) -> ChordDisplayMode {
        self.chord_display_mode
    }

    pub fn progression(&self) -> &ProgressionStore {
        &self.progression
    }

    pub fn piano_range(&self) -> PianoRange {
        self.piano_range
    }

    /// Select the key; derived spellings and numerals pick up the new
    /// context on their next query
    pub fn select_key(&mut self, key: Note) {
        debug!(%key, "key selected");
        self.selected_key = key;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        debug!(%mode, "mode selected");
        self.mode = mode;
    }

    pub fn set_chord_display_mode(&mut self, mode: ChordDisplayMode) {
        self.chord_display_mode = mode;
    }

    /// Handle a chord interaction according to the display mode.
    ///
    /// Select mode replaces the selection. Build mode appends the chord
    /// to the progression with the default 4-beat duration and also
    /// selects it for highlighting. Returns the new progression id when
    /// one was created.
    pub fn select_chord(
        &mut self,
        root: Note,
        intervals: Vec<u8>,
        numeral: impl Into<String>,
    ) -> Option<ChordId> {
        let chord = SelectedChord::new(root, intervals, numeral);
        let id = match self.chord_display_mode {
            ChordDisplayMode::Select => None,
            ChordDisplayMode::Build => {
                Some(self.progression.append(chord.clone(), DEFAULT_DURATION_BEATS))
            }
        };
        self.selected_chord = Some(chord);
        id
    }

    pub fn deselect_chords(&mut self) {
        self.selected_chord = None;
    }

    pub fn remove_from_progression(&mut self, id: ChordId) {
        self.progression.remove(id);
    }

    pub fn clear_progression(&mut self) {
        self.progression.clear();
    }

    pub fn set_chord_duration(&mut self, id: ChordId, beats: u32) -> Result<(), KeywheelError> {
        self.progression.set_duration(id, beats)
    }

    /// Set the visible key range, clamping both bounds into the piano's
    /// 21-108 catalog before they reach the pitch layer. An inverted
    /// range is rejected and the previous range kept.
    pub fn set_piano_range(&mut self, start_midi: MidiNumber, end_midi: MidiNumber) {
        let start = start_midi.clamp(MIDI_LOW, MIDI_HIGH);
        let end = end_midi.clamp(MIDI_LOW, MIDI_HIGH);
        if start > end {
            warn!(start, end, "ignoring inverted piano range");
            return;
        }
        self.piano_range = PianoRange {
            start_midi: start,
            end_midi: end,
        };
    }

    /// The 7 pitch classes of the current key
    pub fn scale_notes(&self) -> [Note; 7] {
        scale_notes(self.selected_key, self.mode)
    }

    /// Spell a pitch class in the current key context
    pub fn spell(&self, note: Note) -> &'static str {
        spell(note, self.selected_key, self.mode)
    }

    /// Roman numeral for an arbitrary chord against the current key
    pub fn roman_numeral(&self, chord_root: Note, intervals: &[u8]) -> String {
        roman_numeral_for(chord_root, intervals, self.selected_key, self.mode)
    }

    /// Derived display data for one key of the keyboard
    pub fn key_display(&self, key: &PianoKey) -> KeyDisplay {
        let highlighted = self
            .selected_chord
            .as_ref()
            .is_some_and(|chord| chord.pitch_classes().contains(&key.note));
        KeyDisplay {
            spelling: self.spell(key.note),
            degree_numeral: scale_degree_numeral(key.note, self.selected_key, self.mode),
            in_scale: self.scale_notes().contains(&key.note),
            highlighted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::pitch::generate_keyboard;

    #[test]
    fn test_defaults() {
        let state = MusicState::new();
        assert_eq!(state.selected_key(), Note::C);
        assert_eq!(state.mode(), Mode::Major);
        assert!(state.selected_chord().is_none());
        assert_eq!(state.chord_display_mode(), ChordDisplayMode::Select);
        assert!(state.progression().is_empty());
    }

    #[test]
    fn test_select_mode_replaces_selection() {
        let mut state = MusicState::new();
        assert!(state.select_chord(Note::C, vec![0, 4, 7], "I").is_none());
        assert!(state.select_chord(Note::G, vec![0, 4, 7], "V").is_none());

        assert_eq!(state.selected_chord().unwrap().root, Note::G);
        assert!(state.progression().is_empty());

        state.deselect_chords();
        assert!(state.selected_chord().is_none());
    }

    #[test]
    fn test_build_mode_appends_and_selects() {
        let mut state = MusicState::new();
        state.set_chord_display_mode(ChordDisplayMode::Build);

        let id = state.select_chord(Note::F, vec![0, 4, 7], "IV").unwrap();
        assert_eq!(state.progression().len(), 1);
        let entry = state.progression().get(id).unwrap();
        assert_eq!(entry.duration_beats, DEFAULT_DURATION_BEATS);
        assert_eq!(entry.chord.root, Note::F);
        assert_eq!(state.selected_chord().unwrap().root, Note::F);
    }

    #[test]
    fn test_piano_range_clamped_at_boundary() {
        let mut state = MusicState::new();
        state.set_piano_range(0, 200);
        assert_eq!(state.piano_range().start_midi, MIDI_LOW);
        assert_eq!(state.piano_range().end_midi, MIDI_HIGH);

        state.set_piano_range(60, 72);
        state.set_piano_range(90, 40); // inverted: kept as-is
        assert_eq!(state.piano_range().start_midi, 60);
        assert_eq!(state.piano_range().end_midi, 72);
    }

    #[test]
    fn test_key_display_in_c_major() {
        let state = MusicState::new();
        let keys = generate_keyboard();
        let c4 = keys.iter().find(|k| k.midi == 60).unwrap();
        let fs4 = keys.iter().find(|k| k.midi == 66).unwrap();

        let display = state.key_display(c4);
        assert_eq!(display.spelling, "C");
        assert_eq!(display.degree_numeral, Some("I"));
        assert!(display.in_scale);
        assert!(!display.highlighted);

        let display = state.key_display(fs4);
        assert_eq!(display.spelling, "F#");
        assert_eq!(display.degree_numeral, None);
        assert!(!display.in_scale);
    }

    #[test]
    fn test_key_display_highlight_tracks_selection() {
        let mut state = MusicState::new();
        state.select_chord(Note::G, vec![0, 4, 7], "V");

        let keys = generate_keyboard();
        let g4 = keys.iter().find(|k| k.midi == 67).unwrap();
        let b4 = keys.iter().find(|k| k.midi == 71).unwrap();
        let c4 = keys.iter().find(|k| k.midi == 60).unwrap();

        assert!(state.key_display(g4).highlighted);
        assert!(state.key_display(b4).highlighted);
        assert!(!state.key_display(c4).highlighted);
    }

    #[test]
    fn test_numerals_follow_key_change() {
        let mut state = MusicState::new();
        assert_eq!(state.roman_numeral(Note::G, &[0, 4, 7]), "V");

        state.select_key(Note::G);
        assert_eq!(state.roman_numeral(Note::G, &[0, 4, 7]), "I");

        state.set_mode(Mode::Minor);
        assert_eq!(state.roman_numeral(Note::G, &[0, 3, 7]), "i");
        assert_eq!(state.roman_numeral(Note::Gs, &[0, 4, 7]), "?");
    }
}
