// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Beat-clock scheduler for chord progressions.
//!
//! The host drives [`ProgressionPlayer::tick`] from its frame callback
//! (animation frame, redraw timer, or equivalent). Each tick converts
//! elapsed wall-clock time into a fractional beat position and reports
//! the chord to trigger, at most once per subdivision index. All state
//! transitions happen synchronously in the caller's context; dropping
//! the frame callback on pause/stop is the host's side of cancellation,
//! clearing the time origin here is ours.

use std::time::Instant;

use tracing::{debug, trace};

use crate::playback::{PlaybackState, Subdivision, MAX_TEMPO, MIN_TEMPO};
use crate::progression::{ChordInProgression, ProgressionStore};

/// Anchor point relating an instant to a beat position.
///
/// Captured lazily on the first tick after entering playback or after a
/// tempo change, and re-captured on loop wraparound - never on ordinary
/// ticks, so already-elapsed position stays continuous while periodic
/// re-anchoring keeps drift from accumulating.
#[derive(Debug, Clone, Copy)]
struct TimeOrigin {
    at: Instant,
    beat: f64,
}

/// Progression playback scheduler
#[derive(Debug, Default)]
pub struct ProgressionPlayer {
    state: PlaybackState,
    origin: Option<TimeOrigin>,
    /// Subdivision index that last triggered; `None` allows the next
    /// boundary to trigger even if its index was already seen.
    last_subdivision: Option<u64>,
}

impl ProgressionPlayer {
    /// Create a stopped player with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playback state snapshot
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn current_beat(&self) -> f64 {
        self.state.current_beat
    }

    pub fn tempo_bpm(&self) -> u32 {
        self.state.tempo_bpm
    }

    pub fn subdivision(&self) -> Subdivision {
        self.state.subdivision
    }

    pub fn looping(&self) -> bool {
        self.state.looping
    }

    /// Set the tempo, clamped to 40-240 BPM.
    ///
    /// Takes effect on the next tick. Invalidates the time origin so the
    /// new tempo applies from the current position without a jump in
    /// already-elapsed beats.
    pub fn set_tempo(&mut self, bpm: u32) {
        self.state.tempo_bpm = bpm.clamp(MIN_TEMPO, MAX_TEMPO);
        self.origin = None;
    }

    /// Change the re-trigger subdivision; read fresh on the next tick
    pub fn set_subdivision(&mut self, subdivision: Subdivision) {
        self.state.subdivision = subdivision;
    }

    /// Toggle loop-at-end behavior; read fresh on the next tick
    pub fn set_looping(&mut self, looping: bool) {
        self.state.looping = looping;
    }

    /// Start playback from the retained beat position.
    ///
    /// No-op when the progression is empty or playback is already
    /// running; the state machine, not a lock, guards double starts.
    pub fn play(&mut self, progression: &ProgressionStore) {
        if self.state.is_playing || progression.is_empty() {
            return;
        }
        debug!(beat = self.state.current_beat, tempo = self.state.tempo_bpm, "playback started");
        self.state.is_playing = true;
        self.origin = None;
        self.last_subdivision = None;
    }

    /// Stop advancing but retain the current beat position
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        debug!(beat = self.state.current_beat, "playback paused");
        self.state.is_playing = false;
        self.origin = None;
        self.last_subdivision = None;
    }

    /// Stop and rewind to beat 0
    pub fn stop(&mut self) {
        debug!("playback stopped");
        self.state.is_playing = false;
        self.state.current_beat = 0.0;
        self.origin = None;
        self.last_subdivision = None;
    }

    /// Dispatch to play or pause based on the current state
    pub fn toggle(&mut self, progression: &ProgressionStore) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play(progression);
        }
    }

    /// Advance the beat clock to `now` and return the chord to trigger,
    /// if this tick crossed a subdivision boundary.
    ///
    /// Tempo, subdivision, and loop flag are read from state here, so
    /// mid-playback changes take effect without a stop/restart. A tick
    /// arriving after pause/stop is a no-op.
    pub fn tick<'a>(
        &mut self,
        now: Instant,
        progression: &'a ProgressionStore,
    ) -> Option<&'a ChordInProgression> {
        if !self.state.is_playing {
            return None;
        }

        let total_beats = progression.total_beats() as f64;
        if total_beats <= 0.0 {
            // Progression cleared mid-playback
            self.stop();
            return None;
        }

        let origin = *self.origin.get_or_insert(TimeOrigin {
            at: now,
            beat: self.state.current_beat,
        });

        let seconds_per_beat = 60.0 / self.state.tempo_bpm as f64;
        let elapsed_beats = now.duration_since(origin.at).as_secs_f64() / seconds_per_beat;
        let mut beat = origin.beat + elapsed_beats;

        if beat >= total_beats {
            if self.state.looping {
                beat %= total_beats;
                self.origin = Some(TimeOrigin { at: now, beat });
                // Allow the first subdivision of the replay to trigger
                // even though its index was already seen.
                self.last_subdivision = None;
                trace!(beat, "loop wraparound");
            } else {
                debug!("progression complete");
                self.state.is_playing = false;
                self.state.current_beat = 0.0;
                self.origin = None;
                self.last_subdivision = None;
                return None;
            }
        }

        self.state.current_beat = beat;

        let subdivision_beats = self.state.subdivision.beats();
        let subdivision_index = (beat / subdivision_beats).floor() as u64;
        if self.last_subdivision != Some(subdivision_index) && beat < total_beats {
            if let Some((index, entry)) = progression.chord_at(beat) {
                self.last_subdivision = Some(subdivision_index);
                trace!(beat, index, numeral = %entry.chord.numeral, "triggering chord");
                return Some(entry);
            }
        }

        None
    }
}
