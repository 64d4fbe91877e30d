//! Value timelines driven by the host animation clock
//!
//! A timeline owns a set of value tracks (sheet translation plus backdrop
//! opacity, for example) that progress together. Widgets follow a strict
//! "stop previous, then start next" discipline: a timeline must be stopped
//! (or cleared) before new targets are started, so two runs never drive the
//! same value.

use slotmap::{new_key_type, SlotMap};

use crate::easing::Easing;

new_key_type! {
    /// Key for a value track within a timeline
    pub struct TrackId;
}

struct Track {
    offset_ms: f32,
    duration_ms: f32,
    from: f32,
    to: f32,
    easing: Easing,
}

/// A set of value tracks progressing on one clock
pub struct Timeline {
    tracks: SlotMap<TrackId, Track>,
    elapsed_ms: f32,
    duration_ms: f32,
    playing: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            tracks: SlotMap::with_key(),
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            playing: false,
        }
    }

    /// Add a value track starting at `offset_ms` from timeline start
    pub fn add(
        &mut self,
        offset_ms: f32,
        duration_ms: f32,
        from: f32,
        to: f32,
        easing: Easing,
    ) -> TrackId {
        let id = self.tracks.insert(Track {
            offset_ms,
            duration_ms,
            from,
            to,
            easing,
        });
        self.duration_ms = self.duration_ms.max(offset_ms.max(0.0) + duration_ms);
        id
    }

    /// Add a track running from timeline start
    pub fn track(&mut self, duration_ms: f32, from: f32, to: f32, easing: Easing) -> TrackId {
        self.add(0.0, duration_ms, from, to, easing)
    }

    pub fn start(&mut self) {
        tracing::trace!(
            tracks = self.tracks.len(),
            duration_ms = self.duration_ms,
            "timeline start"
        );
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Remove every track and reset the clock. The previous run's values
    /// stop existing; callers re-add tracks for the next run.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.elapsed_ms = 0.0;
        self.duration_ms = 0.0;
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the timeline ran to the end of its duration
    pub fn is_finished(&self) -> bool {
        !self.playing && self.duration_ms > 0.0 && self.elapsed_ms >= self.duration_ms
    }

    /// Advance the clock; returns true while still playing
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.playing = false;
        }
        self.playing
    }

    /// Current value of a track
    pub fn value(&self, id: TrackId) -> Option<f32> {
        let track = self.tracks.get(id)?;
        let local = self.elapsed_ms - track.offset_ms;

        if local <= 0.0 {
            return Some(track.from);
        }
        if local >= track.duration_ms {
            return Some(track.to);
        }

        let progress = track.easing.apply(local / track.duration_ms);
        Some(track.from + (track.to - track.from) * progress)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
