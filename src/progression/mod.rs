// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord progression store.
//!
//! An ordered sequence of chords with per-chord beat durations and stable
//! ids. Order is musically meaningful (performance order); no reordering
//! operation is exposed. The store also answers the playback scheduler's
//! beat-position lookups.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::KeywheelError;
use crate::music::SelectedChord;

/// Stable identifier of a progression entry
pub type ChordId = u64;

/// Beat durations a chord may take
pub const ALLOWED_DURATIONS: [u32; 5] = [1, 2, 4, 8, 16];

/// Duration assigned to chords added in build mode
pub const DEFAULT_DURATION_BEATS: u32 = 4;

/// A chord placed on the progression timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordInProgression {
    /// Stable id, unique for the store's lifetime
    pub id: ChordId,
    /// The chord itself
    pub chord: SelectedChord,
    /// Length in beats
    pub duration_beats: u32,
}

/// Ordered, mutable chord sequence with stable ids
#[derive(Debug, Clone, Default)]
pub struct ProgressionStore {
    entries: Vec<ChordInProgression>,
    next_id: ChordId,
}

impl ProgressionStore {
    /// Create an empty progression
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chord to the end of the progression.
    ///
    /// Ids come from a monotonic counter and are never reused, so an id
    /// stays valid across every mutation except removal of that entry.
    pub fn append(&mut self, chord: SelectedChord, duration_beats: u32) -> ChordId {
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, numeral = %chord.numeral, duration_beats, "appending chord to progression");
        self.entries.push(ChordInProgression {
            id,
            chord,
            duration_beats,
        });
        id
    }

    /// Remove the entry with the given id; no-op when absent
    pub fn remove(&mut self, id: ChordId) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change an entry's duration in place, preserving its position.
    ///
    /// Durations are restricted to {1, 2, 4, 8, 16} beats. An absent id
    /// is a no-op.
    pub fn set_duration(&mut self, id: ChordId, beats: u32) -> Result<(), KeywheelError> {
        if !ALLOWED_DURATIONS.contains(&beats) {
            return Err(KeywheelError::InvalidDuration(beats));
        }
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.duration_beats = beats;
        }
        Ok(())
    }

    /// Entries in performance order
    pub fn entries(&self) -> &[ChordInProgression] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: ChordId) -> Option<&ChordInProgression> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total length of the progression in beats
    pub fn total_beats(&self) -> u32 {
        self.entries.iter().map(|entry| entry.duration_beats).sum()
    }

    /// The entry sounding at a fractional beat position.
    ///
    /// Scans half-open `[start, start + duration)` intervals against
    /// `floor(beat)`; a beat exactly on a boundary belongs to the next
    /// chord. Out-of-range positions (including past the end) return
    /// `None`.
    pub fn chord_at(&self, beat: f64) -> Option<(usize, &ChordInProgression)> {
        if beat < 0.0 {
            return None;
        }
        let target = beat.floor() as u32;
        let mut start = 0u32;
        for (index, entry) in self.entries.iter().enumerate() {
            if target >= start && target < start + entry.duration_beats {
                return Some((index, entry));
            }
            start += entry.duration_beats;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Note;

    fn chord(numeral: &str) -> SelectedChord {
        SelectedChord::new(Note::C, vec![0, 4, 7], numeral)
    }

    #[test]
    fn test_append_and_order() {
        let mut store = ProgressionStore::new();
        let a = store.append(chord("I"), 4);
        let b = store.append(chord("IV"), 2);
        let c = store.append(chord("V"), 4);

        assert_eq!(store.len(), 3);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(store.entries()[0].id, a);
        assert_eq!(store.entries()[2].id, c);
        assert_eq!(store.total_beats(), 10);
    }

    #[test]
    fn test_ids_stable_across_removal() {
        let mut store = ProgressionStore::new();
        let a = store.append(chord("I"), 4);
        let b = store.append(chord("IV"), 4);
        let c = store.append(chord("V"), 4);

        store.remove(b);
        assert_eq!(store.len(), 2);
        assert!(store.get(a).is_some());
        assert!(store.get(b).is_none());
        assert!(store.get(c).is_some());

        // Fresh ids never collide with removed ones
        let d = store.append(chord("vi"), 4);
        assert_ne!(d, b);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = ProgressionStore::new();
        let a = store.append(chord("I"), 4);
        store.remove(9999);
        assert_eq!(store.len(), 1);
        assert!(store.get(a).is_some());
    }

    #[test]
    fn test_clear() {
        let mut store = ProgressionStore::new();
        store.append(chord("I"), 4);
        store.append(chord("V"), 4);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.total_beats(), 0);
    }

    #[test]
    fn test_set_duration() {
        let mut store = ProgressionStore::new();
        let id = store.append(chord("I"), 4);

        store.set_duration(id, 8).unwrap();
        assert_eq!(store.get(id).unwrap().duration_beats, 8);

        // Idempotent: applying the same duration twice changes nothing
        store.set_duration(id, 4).unwrap();
        let snapshot = store.entries().to_vec();
        store.set_duration(id, 4).unwrap();
        assert_eq!(store.entries(), &snapshot[..]);
    }

    #[test]
    fn test_set_duration_rejects_invalid() {
        let mut store = ProgressionStore::new();
        let id = store.append(chord("I"), 4);

        assert_eq!(
            store.set_duration(id, 3),
            Err(KeywheelError::InvalidDuration(3))
        );
        assert_eq!(
            store.set_duration(id, 0),
            Err(KeywheelError::InvalidDuration(0))
        );
        assert_eq!(store.get(id).unwrap().duration_beats, 4);
    }

    #[test]
    fn test_chord_at_boundaries() {
        let mut store = ProgressionStore::new();
        store.append(chord("I"), 4);
        store.append(chord("V"), 2);

        assert_eq!(store.chord_at(0.0).unwrap().0, 0);
        assert_eq!(store.chord_at(3.9).unwrap().0, 0);
        assert_eq!(store.chord_at(4.0).unwrap().0, 1);
        assert_eq!(store.chord_at(5.9).unwrap().0, 1);
        assert!(store.chord_at(6.0).is_none());
        assert!(store.chord_at(-0.5).is_none());
    }

    #[test]
    fn test_chord_at_empty() {
        let store = ProgressionStore::new();
        assert!(store.chord_at(0.0).is_none());
    }
}
