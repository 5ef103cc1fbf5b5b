use super::constants::BGM_DEFAULT_VOLUME;
use super::store::{load_json, save_json, KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};

/// Persisted background-music playback state. Missing fields fall back to
/// "paused at the start, default volume"; a record of the wrong shape is
/// still discarded whole.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BgmState {
    #[serde(default)]
    pub playing: bool,
    /// Whole seconds into the track.
    #[serde(default)]
    pub current_time: u64,
    /// Rounded to two decimals.
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_volume() -> f64 {
    BGM_DEFAULT_VOLUME
}

impl BgmState {
    /// Snapshot an audio element's observable state.
    pub fn capture(paused: bool, ended: bool, current_time: f64, volume: f64) -> Self {
        let t = if current_time.is_finite() {
            current_time.max(0.0).floor() as u64
        } else {
            0
        };
        Self {
            playing: !paused && !ended,
            current_time: t,
            volume: round2(volume.clamp(0.0, 1.0)),
        }
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Self> {
        load_json(store, key)
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> Result<(), StoreError> {
        save_json(store, key, self)
    }
}

/// What to do with an audio element at page load given whatever was saved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestorePlan {
    pub seek_to: Option<f64>,
    pub volume: Option<f64>,
    pub autoplay: bool,
}

impl RestorePlan {
    /// `duration` is the element's reported duration; NaN or zero means
    /// "not known yet" and the saved time is used unclamped.
    pub fn from_saved(saved: Option<&BgmState>, duration: f64) -> Self {
        let Some(st) = saved else {
            return Self {
                seek_to: None,
                volume: None,
                autoplay: true,
            };
        };
        let t = st.current_time as f64;
        let limit = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            t
        };
        Self {
            seek_to: Some(t.min(limit).max(0.0)),
            volume: Some(st.volume.clamp(0.0, 1.0)),
            autoplay: st.playing,
        }
    }
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
